//! End-to-end tests for creating, storing and revealing a card
//!
//! These walk the same path the app takes: form draft -> composer -> store
//! -> navigation -> countdown ticks -> reveal.

use std::cell::Cell;

use chrono::{Duration, Timelike, Utc};
use wishcard_core::navigation::{card_id_from_query, path_with_card, resolve_initial};
use wishcard_core::{
    AppView, CardComposer, CardDraft, CardError, CardId, CardResult, CardStore, Clock,
    CountdownTracker, ImageSource, KeyValueBackend, ManualClock, MemoryBackend, NavEvent, NoImage,
    Settings, MESSAGE_PLACEHOLDER,
};

// ============================================================================
// Test doubles
// ============================================================================

/// Image file that records how often it was read
struct FakeImage {
    bytes: Vec<u8>,
    reported_size: u64,
    reads: Cell<usize>,
    fail: bool,
}

impl FakeImage {
    fn png(len: usize) -> Self {
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.resize(len.max(8), 0);
        Self {
            reported_size: bytes.len() as u64,
            bytes,
            reads: Cell::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::png(16)
        }
    }
}

impl ImageSource for FakeImage {
    fn name(&self) -> &str {
        "photo.png"
    }

    fn size(&self) -> u64 {
        self.reported_size
    }

    async fn read(&self) -> CardResult<Vec<u8>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail {
            return Err(CardError::ImageRead("reader aborted".to_string()));
        }
        Ok(self.bytes.clone())
    }
}

/// Backend that refuses every write, like a full local storage
struct FullBackend;

impl KeyValueBackend for FullBackend {
    fn get(&self, _key: &str) -> CardResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> CardResult<()> {
        Err(CardError::StorageWrite("QuotaExceededError".to_string()))
    }
}

fn local_input(at: chrono::DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn draft_for(target: chrono::DateTime<Utc>) -> CardDraft {
    CardDraft {
        recipient_name: "Ada".to_string(),
        sender_name: "Grace".to_string(),
        target: local_input(target),
        ..Default::default()
    }
}

// ============================================================================
// Creation
// ============================================================================

/// Ada/Grace card two seconds out: countdown, then placeholder and attribution
#[tokio::test]
async fn test_two_second_card_reveals_placeholder_and_attribution() {
    let _ = tracing_subscriber::fmt::try_init();
    let settings = Settings::default();
    let store = CardStore::new(MemoryBackend::new(), &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);

    // whole seconds, matching the precision of the form input
    let start = Utc::now().with_nanosecond(0).unwrap();
    let clock = ManualClock::new(start);
    let draft = draft_for(start + Duration::seconds(2));

    let card = composer
        .compose(&draft, None::<&NoImage>, CardId::random().unwrap(), &Utc)
        .await
        .unwrap();

    let (view, _) = AppView::Creation.apply(NavEvent::CardCreated(card.clone()));
    let shown = view.card().expect("celebration view").clone();

    let mut tracker = CountdownTracker::new(shown.target_date_time);
    let first = tracker.tick_with(&clock);
    assert!(!first.countdown.is_expired());
    assert_eq!(first.countdown.remaining().seconds, 2);

    clock.advance(Duration::seconds(1));
    assert!(!tracker.tick_with(&clock).countdown.is_expired());

    clock.advance(Duration::seconds(1));
    let expired = tracker.tick_with(&clock);
    assert!(expired.just_expired);

    assert_eq!(shown.message_or_placeholder(), MESSAGE_PLACEHOLDER);
    assert_eq!(shown.attribution(), "— With love, Grace");
    assert!(shown.image_data.is_none());
    assert!(shown.song_embed(&settings.embed_base).is_none());
}

#[tokio::test]
async fn test_card_with_image_and_song_is_persisted() {
    let settings = Settings::default();
    let store = CardStore::new(MemoryBackend::new(), &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);
    let image = FakeImage::png(1024);

    let mut draft = draft_for(Utc::now() + Duration::days(3));
    draft.message = "x".repeat(400);
    draft.song_link = "https://open.example.com/track/abc123".to_string();

    let card = composer
        .compose(&draft, Some(&image), CardId::random().unwrap(), &Utc)
        .await
        .unwrap();

    assert_eq!(image.reads.get(), 1);
    assert_eq!(card.message.chars().count(), 300);
    let embed = card.song_embed(&settings.embed_base).unwrap();
    assert!(embed.url.contains("track/abc123"));
    assert!(embed.autoplay_disabled());

    let loaded = store.load(&card.id).unwrap();
    assert_eq!(loaded, card);
    assert_eq!(
        loaded.image_data.as_ref().and_then(|i| i.mime_type()),
        Some("image/png")
    );
}

#[tokio::test]
async fn test_missing_fields_write_nothing() {
    let settings = Settings::default();
    let backend = MemoryBackend::new();
    let store = CardStore::new(&backend, &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);
    let image = FakeImage::png(64);

    let mut draft = draft_for(Utc::now());
    draft.sender_name = String::new();

    let err = composer
        .compose(&draft, Some(&image), CardId::random().unwrap(), &Utc)
        .await
        .unwrap_err();

    assert!(matches!(err, CardError::Validation(_)));
    assert_eq!(image.reads.get(), 0);
    assert!(backend.is_empty());
}

/// Oversized images are rejected from the reported size, before any read
#[tokio::test]
async fn test_oversized_image_rejected_before_read_or_write() {
    let settings = Settings::default();
    let backend = MemoryBackend::new();
    let store = CardStore::new(&backend, &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);

    let mut image = FakeImage::png(16);
    image.reported_size = settings.max_image_bytes + 1;

    let err = composer
        .compose(&draft_for(Utc::now()), Some(&image), CardId::random().unwrap(), &Utc)
        .await
        .unwrap_err();

    assert!(matches!(err, CardError::ImageTooLarge { .. }));
    assert_eq!(image.reads.get(), 0);
    assert!(backend.is_empty());
}

/// A file that grows past the limit between selection and read is still rejected
#[tokio::test]
async fn test_image_larger_than_reported_is_rejected() {
    let settings = Settings {
        max_image_bytes: 1024,
        ..Settings::default()
    };
    let backend = MemoryBackend::new();
    let store = CardStore::new(&backend, &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);

    let mut image = FakeImage::png(2048);
    image.reported_size = 10;

    let err = composer
        .compose(&draft_for(Utc::now()), Some(&image), CardId::random().unwrap(), &Utc)
        .await
        .unwrap_err();
    assert!(matches!(err, CardError::ImageTooLarge { .. }));
    assert!(backend.is_empty());
}

#[tokio::test]
async fn test_image_read_failure_aborts() {
    let settings = Settings::default();
    let backend = MemoryBackend::new();
    let store = CardStore::new(&backend, &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);
    let image = FakeImage::failing();

    let err = composer
        .compose(&draft_for(Utc::now()), Some(&image), CardId::random().unwrap(), &Utc)
        .await
        .unwrap_err();

    assert!(matches!(err, CardError::ImageRead(_)));
    assert!(backend.is_empty());
}

/// Storage failure surfaces as an error, so no navigation happens
#[tokio::test]
async fn test_storage_failure_blocks_navigation() {
    let _ = tracing_subscriber::fmt::try_init();
    let settings = Settings::default();
    let store = CardStore::new(FullBackend, &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);

    let result = composer
        .compose(&draft_for(Utc::now()), None::<&NoImage>, CardId::random().unwrap(), &Utc)
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, CardError::StorageWrite(_)));
    assert_eq!(
        err.user_message(),
        "Could not save the celebration. Browser storage may be full."
    );
}

// ============================================================================
// Reload by URL
// ============================================================================

#[tokio::test]
async fn test_created_card_resolves_from_its_url() {
    let settings = Settings::default();
    let store = CardStore::new(MemoryBackend::new(), &settings.storage_prefix);
    let composer = CardComposer::new(&store, &settings);

    let card = composer
        .compose(
            &draft_for(Utc::now() + Duration::hours(1)),
            None::<&NoImage>,
            CardId::random().unwrap(),
            &Utc,
        )
        .await
        .unwrap();

    let path = path_with_card("/", &card.id, &settings.query_param);
    let search = path.trim_start_matches('/');
    assert_eq!(
        card_id_from_query(search, &settings.query_param),
        Some(card.id.clone())
    );

    let event = resolve_initial(search, &settings.query_param, &store);
    let (view, _) = AppView::Loading.apply(event);
    assert_eq!(view, AppView::Celebration(card));
}

/// Past-due card opened from a link fires its expiry once on the first tick
#[test]
fn test_past_due_card_fires_once_on_open() {
    let clock = ManualClock::new(Utc::now());
    let mut tracker = CountdownTracker::new(clock.now() - Duration::days(1));

    let fired: usize = (0..10)
        .map(|_| {
            clock.advance(Duration::seconds(1));
            tracker.tick_with(&clock).just_expired as usize
        })
        .sum();
    assert_eq!(fired, 1);
}
