// Console tab state.
// Activity messages shown to the user, with an unread badge for problems.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Error, message)
    }

    fn new(level: ConsoleLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Message history for the Console tab.
#[derive(Debug, Default)]
pub struct ConsoleState {
    pub messages: Vec<ConsoleMessage>,
    pub list_state: ListState,
    /// Warnings and errors not yet seen on the Console tab.
    pub unread: usize,
}

impl ConsoleState {
    const MAX_MESSAGES: usize = 500;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ConsoleMessage) {
        if message.level != ConsoleLevel::Info {
            self.unread += 1;
        }
        self.messages.push(message);
        if self.messages.len() > Self::MAX_MESSAGES {
            let excess = self.messages.len() - Self::MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_problems_count_as_unread() {
        let mut console = ConsoleState::new();

        console.push(ConsoleMessage::info("Loaded bundled catalog"));
        console.push(ConsoleMessage::warn("Remote catalog unavailable"));
        console.push(ConsoleMessage::error("boom"));

        assert_eq!(console.messages.len(), 3);
        assert_eq!(console.unread, 2);

        console.mark_read();
        assert_eq!(console.unread, 0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut console = ConsoleState::new();
        for i in 0..(ConsoleState::MAX_MESSAGES + 10) {
            console.push(ConsoleMessage::info(format!("message {i}")));
        }

        assert_eq!(console.messages.len(), ConsoleState::MAX_MESSAGES);
        assert_eq!(console.messages[0].message, "message 10");
    }
}
