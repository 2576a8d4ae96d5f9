//! Shared app context: settings and the notice host.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(browser::load_settings);
//! use_context_provider(|| Notifier::new(settings.notice_ms));
//!
//! // In child components
//! let settings = use_settings();
//! let notifier = use_notifier();
//! notifier.notify("Image cleared.", NoticeKind::Success);
//! ```

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use wishcard_core::{Notice, NoticeBoard, NoticeKind, Settings};

/// Hook to access the active settings.
pub fn use_settings() -> Settings {
    use_context::<Settings>()
}

/// Handle for showing transient notices.
///
/// Showing a notice replaces the current one and restarts the dismissal
/// timer. The timer runs in the root scope so it survives view changes
/// (the "Redirecting..." notice outlives the creation form).
#[derive(Clone, Copy)]
pub struct Notifier {
    board: Signal<NoticeBoard>,
    timer: Signal<Option<Task>>,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            board: Signal::new(NoticeBoard::new()),
            timer: Signal::new(None),
            duration_ms: u32::try_from(duration_ms).unwrap_or(u32::MAX),
        }
    }

    pub fn notify(&self, text: impl Into<String>, kind: NoticeKind) {
        let mut board = self.board;
        let mut timer = self.timer;

        let id = board.write().show(text, kind);
        if let Some(previous) = timer.write().take() {
            previous.cancel();
        }

        let wait = self.duration_ms;
        let task = spawn_forever(async move {
            TimeoutFuture::new(wait).await;
            board.write().dismiss(id);
        });
        timer.set(task);
    }

    /// Current notice, subscribing the caller to changes.
    pub fn current(&self) -> Option<Notice> {
        self.board.read().current().cloned()
    }
}

/// Hook to access the notice host from context.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}
