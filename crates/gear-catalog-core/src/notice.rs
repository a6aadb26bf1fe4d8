//! User Notices
//!
//! Transient feedback produced by state transitions and shown as toasts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Text rendered in a read-only field so it can be selected by hand
    pub selectable: Option<String>,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            selectable: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn with_selectable(mut self, text: impl Into<String>) -> Self {
        self.selectable = Some(text.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}
