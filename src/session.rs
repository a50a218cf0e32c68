use ansi_to_style::{AnsiStreamParser, ParserState, StyledSpan};
use log::debug;
use serde::Serialize;

use crate::config::ConsoleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Stdout,
    Stderr,
}

/// Styled output of one chunk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleFrame {
    pub session: SessionId,
    pub seq: u64,
    pub source: Source,
    pub spans: Vec<StyledSpan>,
}

impl ConsoleFrame {
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(StyledSpan::text).collect()
    }
}

/// One console connection. Chunks must be fed in delivery order.
#[derive(Debug, Clone)]
pub struct ConsoleSession {
    id: SessionId,
    parser: AnsiStreamParser,
    seq: u64,
}

impl ConsoleSession {
    pub fn new(id: SessionId, config: &ConsoleConfig) -> Self {
        Self {
            id,
            parser: AnsiStreamParser::new(config.default_color),
            seq: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> ParserState {
        self.parser.state()
    }

    pub fn feed(&mut self, source: Source, chunk: &str) -> ConsoleFrame {
        let spans = self.parser.feed(chunk);
        self.frame(source, spans)
    }

    pub fn feed_bytes(&mut self, source: Source, chunk: &[u8]) -> ConsoleFrame {
        let spans = self.parser.feed_bytes(chunk);
        self.frame(source, spans)
    }

    /// The console view reopened: styles start over, sequence numbers do not.
    pub fn reconnect(&mut self) {
        debug!("session {:?} reconnect", self.id);
        self.parser.reset();
    }

    fn frame(&mut self, source: Source, spans: Vec<StyledSpan>) -> ConsoleFrame {
        self.seq += 1;
        debug!(
            "session {:?} frame {} {:?}: {} spans",
            self.id,
            self.seq,
            source,
            spans.len()
        );
        ConsoleFrame {
            session: self.id,
            seq: self.seq,
            source,
            spans,
        }
    }
}
