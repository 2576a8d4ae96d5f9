//! Card - the persisted celebration record.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{ImageData, SongEmbed};
use crate::error::{CardError, CardResult};

/// Shown in place of an empty message once the card is revealed.
pub const MESSAGE_PLACEHOLDER: &str = "A personal message goes here...";

const MAX_ID_LEN: usize = 64;

/// Unique identifier for a card.
///
/// Generated from 128 random bits and rendered as lowercase hex. Used both as
/// the storage key suffix and as the URL query value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Create a new random CardId from the platform entropy source
    pub fn random() -> CardResult<Self> {
        let mut bytes = [0u8; 16];
        getrandom::getrandom(&mut bytes).map_err(|e| CardError::Entropy(e.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Create a CardId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Parse an identifier taken from a URL or storage.
    ///
    /// Accepts 1-64 ASCII alphanumerics, `-` or `_`.
    pub fn parse(raw: &str) -> CardResult<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(CardError::InvalidCardId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CardId {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A celebration card.
///
/// Never mutated after it is saved; creating again produces a new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub recipient_name: String,
    pub sender_name: String,
    pub target_date_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<ImageData>,
}

impl Card {
    /// Serialize to the JSON form kept in storage.
    pub fn encode(&self) -> CardResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored record.
    ///
    /// Fails with `RecordParse` on malformed JSON or blank names.
    pub fn decode(raw: &str) -> CardResult<Self> {
        let card: Card =
            serde_json::from_str(raw).map_err(|e| CardError::RecordParse(e.to_string()))?;
        if card.recipient_name.trim().is_empty() || card.sender_name.trim().is_empty() {
            return Err(CardError::RecordParse(format!(
                "card {} is missing a name",
                card.id
            )));
        }
        Ok(card)
    }

    pub fn message_or_placeholder(&self) -> &str {
        if self.message.trim().is_empty() {
            MESSAGE_PLACEHOLDER
        } else {
            &self.message
        }
    }

    /// Closing line naming the sender.
    pub fn attribution(&self) -> String {
        format!("— With love, {}", self.sender_name)
    }

    /// Song embed for the card's link, if the link has an embeddable shape.
    pub fn song_embed(&self, embed_base: &str) -> Option<SongEmbed> {
        self.song_link
            .as_deref()
            .and_then(|link| SongEmbed::from_link(link, embed_base))
    }

    /// Human-readable target in the given time zone, e.g. `October 14, 2026, 05:30 PM`.
    pub fn target_display<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.target_date_time
            .with_timezone(tz)
            .format("%B %-d, %Y, %I:%M %p")
            .to_string()
    }
}
