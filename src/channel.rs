use std::{collections::VecDeque, sync::Arc};

use parking_lot::Mutex;

use crate::{config::ConsoleConfig, error::Result, session::ConsoleFrame};

/// Shared scrollback of console frames, oldest first.
#[derive(Debug, Clone)]
pub struct ConsoleLog {
    capacity: usize,
    frames: Arc<Mutex<VecDeque<ConsoleFrame>>>,
}

impl ConsoleLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            frames: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.scrollback)
    }

    pub fn push(&self, frame: ConsoleFrame) {
        let mut frames = self.frames.lock();
        while frames.len() >= self.capacity {
            frames.pop_front();
        }
        frames.push_back(frame);
    }

    pub fn snapshot(&self) -> Vec<ConsoleFrame> {
        self.frames.lock().iter().cloned().collect()
    }

    pub fn drain(&self) -> Vec<ConsoleFrame> {
        self.frames.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }

    pub fn plain_text(&self) -> String {
        self.frames
            .lock()
            .iter()
            .map(ConsoleFrame::plain_text)
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        let frames = self.frames.lock();
        Ok(serde_json::to_string(&*frames)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ConsoleSession, SessionId, Source};

    #[test]
    fn evicts_oldest_frames() {
        let log = ConsoleLog::new(2);
        let mut session = ConsoleSession::new(SessionId(1), &ConsoleConfig::default());
        for line in ["one\n", "two\n", "three\n"] {
            log.push(session.feed(Source::Stdout, line));
        }
        let frames = log.snapshot();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].seq, 2);
        assert_eq!(log.plain_text(), "two\nthree\n");
        assert_eq!(log.drain().len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn json_shape() {
        let log = ConsoleLog::new(10);
        let mut session = ConsoleSession::new(SessionId(3), &ConsoleConfig::default());
        log.push(session.feed(Source::Stderr, "\x1b[31mfail"));
        let json: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "session": 3,
                "seq": 1,
                "source": "stderr",
                "spans": [{"text": "fail", "style": "text-red-400"}]
            }])
        );
    }
}
