//! Wishcard Core Library
//!
//! Platform-free logic for a countdown greeting card that lives entirely in
//! the browser.
//!
//! ## Overview
//!
//! A card (recipient, sender, target instant, message, optional image and
//! song link) is created from a form, stored under a random identifier and
//! later opened by URL. Until the target instant the card shows a countdown;
//! afterwards it reveals its content.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wishcard_core::{CardComposer, CardDraft, CardId, CardStore, MemoryBackend, Settings};
//!
//! let settings = Settings::default();
//! let store = CardStore::new(MemoryBackend::new(), &settings.storage_prefix);
//! let draft = CardDraft {
//!     recipient_name: "Ada".into(),
//!     sender_name: "Grace".into(),
//!     target: "2026-12-24T18:30".into(),
//!     ..Default::default()
//! };
//!
//! let composer = CardComposer::new(&store, &settings);
//! let card = composer
//!     .compose(&draft, None::<&NoImage>, CardId::random()?, &chrono::Utc)
//!     .await?;
//! assert_eq!(store.find(&card.id), Some(card));
//! ```

pub mod compose;
pub mod config;
pub mod countdown;
pub mod effects;
pub mod error;
pub mod navigation;
pub mod notice;
pub mod storage;
pub mod types;

// Re-exports
pub use compose::{CardComposer, CardDraft, ImageSource, NoImage, ValidDraft};
pub use config::Settings;
pub use countdown::{Clock, Countdown, CountdownTracker, ManualClock, Remaining, SystemClock, Tick};
pub use effects::{
    ConfettiBurst, ConfettiPiece, FramePacer, Particle, ParticleField, CONFETTI_COLORS,
    PARTICLE_CORE, PARTICLE_GLOW,
};
pub use error::{CardError, CardResult};
pub use navigation::{AppView, NavEvent, UrlChange};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use storage::{CardStore, KeyValueBackend, MemoryBackend};
pub use types::*;
