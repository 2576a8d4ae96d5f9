//! Transient notices ("toasts").
//!
//! One notice is visible at a time. A newer notice replaces the current one,
//! and a dismissal only applies to the notice it was scheduled for.

/// Visual category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier class
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
    pub kind: NoticeKind,
}

/// Holds the visible notice and hands out ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    next_id: u64,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing any current one. Returns its id.
    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice {
            id,
            text: text.into(),
            kind,
        });
        id
    }

    /// Dismiss the notice with `id` if it is still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
