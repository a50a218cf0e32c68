use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid console config: {0}")]
    Config(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("console channel closed")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
