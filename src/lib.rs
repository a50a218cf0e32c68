pub mod channel;
pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use ansi_to_style;
pub use channel::ConsoleLog;
pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use session::{ConsoleFrame, ConsoleSession, SessionId, Source};
