//! Turns console output carrying ANSI SGR colour codes into styled spans.
//!
//! Only `ESC [ <params> m` is understood, and of its parameters only reset
//! (0), bold (1) and the 16 foreground colours plus 39. Anything else is
//! left in place or silently ignored.

mod color;
mod parser;
mod style;

pub use color::{color_for_code, ColorTag, SgrColor, COLOR_TABLE};
pub use parser::{parse, parse_bytes, strip_sgr, AnsiStreamParser, StyledSpan};
pub use style::{ParserState, StyleDescriptor, BOLD_CLASS};
