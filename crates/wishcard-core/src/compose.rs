//! Card creation pipeline.
//!
//! Validate the form, encode the optional image, assign an id, persist.
//! Each step must succeed before the next runs; the caller navigates only
//! when [`CardComposer::compose`] returns `Ok`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::config::Settings;
use crate::error::{CardError, CardResult};
use crate::storage::{CardStore, KeyValueBackend};
use crate::types::{Card, CardId, ImageData};

/// Accepted shapes of an `<input type="datetime-local">` value.
const LOCAL_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub recipient_name: String,
    pub sender_name: String,
    /// Local wall-clock date and time, `YYYY-MM-DDTHH:MM`
    pub target: String,
    pub message: String,
    pub song_link: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub recipient_name: String,
    pub sender_name: String,
    pub target_date_time: DateTime<Utc>,
    pub message: String,
    pub song_link: Option<String>,
}

impl CardDraft {
    /// Labels of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.recipient_name.trim().is_empty() {
            missing.push("recipient name");
        }
        if self.sender_name.trim().is_empty() {
            missing.push("sender name");
        }
        if self.target.trim().is_empty() {
            missing.push("date/time");
        }
        missing
    }

    pub fn validate<Tz: TimeZone>(
        &self,
        tz: &Tz,
        max_message_chars: usize,
    ) -> CardResult<ValidDraft> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CardError::Validation(format!("missing {}", missing.join(", "))));
        }

        let song_link = self.song_link.trim();
        Ok(ValidDraft {
            recipient_name: self.recipient_name.trim().to_string(),
            sender_name: self.sender_name.trim().to_string(),
            target_date_time: parse_local_datetime(&self.target, tz)?,
            message: truncate_message(&self.message, max_message_chars),
            song_link: (!song_link.is_empty()).then(|| song_link.to_string()),
        })
    }
}

/// Keep at most `max` characters.
pub fn truncate_message(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Resolve a local `datetime-local` value to an absolute instant in `tz`.
pub fn parse_local_datetime<Tz: TimeZone>(raw: &str, tz: &Tz) -> CardResult<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| CardError::InvalidDateTime(format!("unreadable: {}", raw)))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            CardError::InvalidDateTime(format!("{} does not exist in the local time zone", raw))
        })
}

/// An image file picked by the user.
#[allow(async_fn_in_trait)]
pub trait ImageSource {
    fn name(&self) -> &str;

    /// File size as reported before reading.
    fn size(&self) -> u64;

    async fn read(&self) -> CardResult<Vec<u8>>;
}

/// Placeholder source type for `compose(.., None::<&NoImage>, ..)`.
#[derive(Debug)]
pub enum NoImage {}

impl ImageSource for NoImage {
    fn name(&self) -> &str {
        match *self {}
    }

    fn size(&self) -> u64 {
        match *self {}
    }

    async fn read(&self) -> CardResult<Vec<u8>> {
        match *self {}
    }
}

/// Runs the creation pipeline against a store.
pub struct CardComposer<'a, B> {
    store: &'a CardStore<B>,
    settings: &'a Settings,
}

impl<'a, B: KeyValueBackend> CardComposer<'a, B> {
    pub fn new(store: &'a CardStore<B>, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Encode an attached image, checking its size before reading it.
    pub async fn encode_image<I: ImageSource>(&self, image: &I) -> CardResult<ImageData> {
        let limit = self.settings.max_image_bytes;
        ImageData::check_size(image.size(), limit)?;

        let bytes = image.read().await.map_err(|e| match e {
            CardError::ImageRead(_) => e,
            other => CardError::ImageRead(other.to_string()),
        })?;
        tracing::debug!(name = image.name(), bytes = bytes.len(), "image read");
        ImageData::encode(&bytes, limit)
    }

    /// Build and persist a new card from the draft.
    pub async fn compose<I, Tz>(
        &self,
        draft: &CardDraft,
        image: Option<&I>,
        id: CardId,
        tz: &Tz,
    ) -> CardResult<Card>
    where
        I: ImageSource,
        Tz: TimeZone,
    {
        let valid = draft.validate(tz, self.settings.max_message_chars)?;

        let image_data = match image {
            Some(image) => Some(self.encode_image(image).await?),
            None => None,
        };

        let card = Card {
            id,
            recipient_name: valid.recipient_name,
            sender_name: valid.sender_name,
            target_date_time: valid.target_date_time,
            message: valid.message,
            song_link: valid.song_link,
            image_data,
        };

        self.store.save(&card)?;
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn draft() -> CardDraft {
        CardDraft {
            recipient_name: " Ada ".to_string(),
            sender_name: "Grace".to_string(),
            target: "2026-12-24T18:30".to_string(),
            message: String::new(),
            song_link: "   ".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let valid = draft().validate(&Utc, 300).unwrap();
        assert_eq!(valid.recipient_name, "Ada");
        assert_eq!(valid.song_link, None);
        assert_eq!(
            valid.target_date_time,
            Utc.with_ymd_and_hms(2026, 12, 24, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_fields_reported() {
        let empty = CardDraft::default();
        assert_eq!(
            empty.missing_fields(),
            vec!["recipient name", "sender name", "date/time"]
        );
        assert!(matches!(empty.validate(&Utc, 300), Err(CardError::Validation(_))));
    }

    #[test]
    fn test_local_time_resolved_against_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = parse_local_datetime("2026-03-01T10:00", &plus_two).unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_seconds_precision_accepted() {
        assert!(parse_local_datetime("2026-03-01T10:00:30", &Utc).is_ok());
        assert!(parse_local_datetime("2026-03-01T10:00:30.250", &Utc).is_ok());
        assert!(matches!(
            parse_local_datetime("tomorrow", &Utc),
            Err(CardError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn test_filled_but_unusable_date_is_not_a_missing_field() {
        let draft = CardDraft {
            target: "2026-13-45T99:99".to_string(),
            ..draft()
        };
        let err = draft.validate(&Utc, 300).unwrap_err();
        assert!(matches!(err, CardError::InvalidDateTime(_)));
        assert_ne!(
            err.user_message(),
            CardError::Validation(String::new()).user_message()
        );
    }

    #[test]
    fn test_message_truncated_by_chars() {
        let long = "é".repeat(350);
        assert_eq!(truncate_message(&long, 300).chars().count(), 300);
        assert_eq!(truncate_message("short", 300), "short");
    }
}
