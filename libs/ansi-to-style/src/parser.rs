use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;
use serde::Serialize;

use crate::{
    color::ColorTag,
    style::{ParserState, StyleDescriptor},
};

/// A run of visible text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSpan {
    text: String,
    style: StyleDescriptor,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: StyleDescriptor) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn fallback(chunk: &str) -> Self {
        Self::new(chunk, StyleDescriptor::fallback())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> StyleDescriptor {
        self.style
    }

    pub fn is_fallback(&self) -> bool {
        self.style.color == ColorTag::LogText
    }
}

fn sgr_regex() -> &'static Regex {
    static SGR: OnceLock<Regex> = OnceLock::new();
    SGR.get_or_init(|| Regex::new(r"\x1b\[([0-9;]*)m").expect("sgr pattern"))
}

fn push_text(spans: &mut Vec<StyledSpan>, text: &str, style: StyleDescriptor) {
    if !text.is_empty() {
        spans.push(StyledSpan::new(text, style));
    }
}

/// Splits `chunk` into styled spans, starting from `state`.
///
/// Returns the spans and the state to hand to the next chunk of the same
/// stream. A chunk that yields no visible text comes back as a single
/// [`ColorTag::LogText`] span holding the untouched chunk, while the
/// returned state still reflects every sequence in it.
pub fn parse(chunk: &str, state: ParserState) -> (Vec<StyledSpan>, ParserState) {
    let (mut spans, offset, state) = sgr_regex().captures_iter(chunk).fold(
        (Vec::new(), 0, state),
        |(mut spans, offset, state), caps| {
            let Some(sequence) = caps.get(0) else {
                return (spans, offset, state);
            };
            push_text(&mut spans, &chunk[offset..sequence.start()], state.style());
            let params = caps.get(1).map_or("", |params| params.as_str());
            let state = params
                .split(';')
                .filter(|code| !code.is_empty())
                .fold(state, ParserState::apply_code);
            (spans, sequence.end(), state)
        },
    );
    push_text(&mut spans, &chunk[offset..], state.style());
    if spans.is_empty() {
        spans.push(StyledSpan::fallback(chunk));
    }
    (spans, state)
}

/// Same as [`parse`] for raw stream bytes; invalid UTF-8 is replaced.
pub fn parse_bytes(chunk: &[u8], state: ParserState) -> (Vec<StyledSpan>, ParserState) {
    parse(&String::from_utf8_lossy(chunk), state)
}

/// The visible text of `chunk`: every SGR sequence removed, nothing else.
pub fn strip_sgr(chunk: &str) -> Cow<'_, str> {
    sgr_regex().replace_all(chunk, "")
}

/// Owns the style state of one console stream.
#[derive(Debug, Clone, Default)]
pub struct AnsiStreamParser {
    state: ParserState,
}

impl AnsiStreamParser {
    pub fn new(default_color: ColorTag) -> Self {
        Self {
            state: ParserState::new(default_color),
        }
    }

    pub fn feed(&mut self, chunk: &str) -> Vec<StyledSpan> {
        let (spans, state) = parse(chunk, self.state);
        self.state = state;
        spans
    }

    pub fn feed_bytes(&mut self, chunk: &[u8]) -> Vec<StyledSpan> {
        self.feed(&String::from_utf8_lossy(chunk))
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, color: ColorTag, bold: bool) -> StyledSpan {
        StyledSpan::new(text, StyleDescriptor::new(color).with_bold(bold))
    }

    #[test]
    fn plain_text_keeps_incoming_style() {
        let state = ParserState::default().apply_code("1").apply_code("36");
        let (spans, next) = parse("no escapes here", state);
        assert_eq!(spans, vec![span("no escapes here", ColorTag::Cyan, true)]);
        assert_eq!(next, state);
    }

    #[test]
    fn text_before_sequence_uses_previous_style() {
        let (spans, state) = parse("a\x1b[31mb\x1b[1mc", ParserState::default());
        assert_eq!(
            spans,
            vec![
                span("a", ColorTag::White, false),
                span("b", ColorTag::Red, false),
                span("c", ColorTag::Red, true),
            ]
        );
        assert_eq!(state.style(), StyleDescriptor::new(ColorTag::Red).with_bold(true));
    }

    #[test]
    fn empty_params_and_trailing_separator() {
        let (spans, state) = parse("\x1b[mx\x1b[33;y\x1b[;33;m", ParserState::default());
        assert_eq!(spans, vec![span("x\x1b[33;y", ColorTag::White, false)]);
        assert_eq!(state.style().color, ColorTag::Yellow);
    }

    #[test]
    fn adjacent_sequences_do_not_emit_empty_spans() {
        let (spans, _) = parse("\x1b[31m\x1b[1m\x1b[0mok", ParserState::default());
        assert_eq!(spans, vec![span("ok", ColorTag::White, false)]);
    }

    #[test]
    fn stream_parser_carries_state() {
        let mut parser = AnsiStreamParser::new(ColorTag::Green);
        assert!(parser.feed("\x1b[1;35m")[0].is_fallback());
        assert_eq!(parser.feed("x"), vec![span("x", ColorTag::Magenta, true)]);
        parser.reset();
        assert_eq!(parser.state(), ParserState::new(ColorTag::Green));
        assert_eq!(parser.feed_bytes(b"y"), vec![span("y", ColorTag::Green, false)]);
    }
}
