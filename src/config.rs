use std::path::Path;

use ansi_to_style::ColorTag;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Foreground a session starts with and returns to on reset.
    pub default_color: ColorTag,
    /// Frames kept by a [`crate::channel::ConsoleLog`].
    pub scrollback: usize,
    pub channel_capacity: usize,
    /// Size of a single read from a console stream, in bytes.
    pub read_buffer: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_color: ColorTag::White,
            scrollback: 1000,
            channel_capacity: 100,
            read_buffer: 4096,
        }
    }
}

impl ConsoleConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_color == ColorTag::LogText {
            return Err(ConsoleError::Config(format!(
                "default_color cannot be `{}`, it marks fallback spans",
                ColorTag::LogText
            )));
        }
        if self.scrollback == 0 {
            return Err(ConsoleError::Config("scrollback must be positive".to_string()));
        }
        if self.channel_capacity == 0 {
            return Err(ConsoleError::Config(
                "channel_capacity must be positive".to_string(),
            ));
        }
        if self.read_buffer == 0 {
            return Err(ConsoleError::Config("read_buffer must be positive".to_string()));
        }
        Ok(())
    }
}
