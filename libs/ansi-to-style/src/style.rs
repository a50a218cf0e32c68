use std::fmt;

use log::trace;
use serde::{Serialize, Serializer};

use crate::color::{color_for_code, ColorTag, SgrColor};

pub const BOLD_CLASS: &str = "font-bold";

/// The active foreground colour plus the bold flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleDescriptor {
    pub color: ColorTag,
    pub bold: bool,
}

impl StyleDescriptor {
    pub const fn new(color: ColorTag) -> Self {
        Self { color, bold: false }
    }

    pub const fn fallback() -> Self {
        Self::new(ColorTag::LogText)
    }

    pub const fn with_color(self, color: ColorTag) -> Self {
        Self { color, ..self }
    }

    pub const fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    /// Class tokens joined by a space, colour first.
    pub fn class_name(&self) -> String {
        if self.bold {
            format!("{} {}", self.color.as_ref(), BOLD_CLASS)
        } else {
            self.color.as_ref().to_string()
        }
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color.as_ref())?;
        if self.bold {
            write!(f, " {BOLD_CLASS}")?;
        }
        Ok(())
    }
}

impl Serialize for StyleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Style carried from one chunk of a console stream to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState {
    default_color: ColorTag,
    style: StyleDescriptor,
}

impl ParserState {
    /// `default_color` must not be [`ColorTag::LogText`], which is reserved
    /// for fallback spans.
    pub const fn new(default_color: ColorTag) -> Self {
        debug_assert!(!matches!(default_color, ColorTag::LogText));
        Self {
            default_color,
            style: StyleDescriptor::new(default_color),
        }
    }

    pub const fn default_color(&self) -> ColorTag {
        self.default_color
    }

    pub const fn style(&self) -> StyleDescriptor {
        self.style
    }

    pub const fn reset(self) -> Self {
        Self::new(self.default_color)
    }

    /// Applies one SGR parameter. Unknown codes leave the state untouched.
    pub fn apply_code(self, code: &str) -> Self {
        let style = match code {
            "0" => return self.reset(),
            "1" => self.style.with_bold(true),
            _ => match color_for_code(code) {
                Some(SgrColor::Tag(color)) => self.style.with_color(color),
                Some(SgrColor::Default) => self.style.with_color(self.default_color),
                None => {
                    trace!("ignore sgr code {code:?}");
                    return self;
                }
            },
        };
        Self { style, ..self }
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new(ColorTag::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_joins_color_and_bold() {
        let style = StyleDescriptor::new(ColorTag::Yellow);
        assert_eq!(style.class_name(), "text-yellow-400");
        assert_eq!(style.with_bold(true).class_name(), "text-yellow-400 font-bold");
        assert_eq!(style.with_bold(true).to_string(), style.with_bold(true).class_name());
    }

    #[test]
    fn reset_clears_bold_and_color() {
        let state = ParserState::default()
            .apply_code("1")
            .apply_code("35")
            .apply_code("0");
        assert_eq!(state, ParserState::default());
        assert_eq!(state.style(), StyleDescriptor::new(ColorTag::White));
    }

    #[test]
    fn bold_is_idempotent_and_keeps_color() {
        let state = ParserState::default().apply_code("32");
        let once = state.apply_code("1");
        let twice = once.apply_code("1");
        assert_eq!(once, twice);
        assert_eq!(twice.style().color, ColorTag::Green);
        assert!(twice.style().bold);
    }

    #[test]
    fn color_replaces_color_and_keeps_bold() {
        let state = ParserState::default()
            .apply_code("1")
            .apply_code("31")
            .apply_code("94");
        assert_eq!(
            state.style(),
            StyleDescriptor::new(ColorTag::BrightBlue).with_bold(true)
        );
    }

    #[test]
    fn default_foreground_uses_session_default() {
        let state = ParserState::new(ColorTag::Cyan)
            .apply_code("1")
            .apply_code("31")
            .apply_code("39");
        assert_eq!(state.style(), StyleDescriptor::new(ColorTag::Cyan).with_bold(true));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fallback_color_is_not_a_default() {
        let _ = ParserState::new(ColorTag::LogText);
    }

    #[test]
    fn unknown_codes_are_ignored() {
        let state = ParserState::default().apply_code("33");
        for code in ["99", "4", "38", "00", "01", "107"] {
            assert_eq!(state.apply_code(code), state);
        }
    }
}
