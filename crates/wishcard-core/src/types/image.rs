//! Card Image - self-contained image payload for cards
//!
//! Images are stored inline as base64 data URIs so a card is a single string
//! in local storage.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Base64 data URI holding the card image.
/// Format: "data:image/png;base64,..."
///
/// Deserializing goes through [`ImageData::from_data_uri`], so a stored
/// record can only carry an image data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageData(String);

impl ImageData {
    /// Reject files over `limit` bytes before any read or encode happens.
    pub fn check_size(size: u64, limit: u64) -> CardResult<()> {
        if size > limit {
            return Err(CardError::ImageTooLarge { size, limit });
        }
        Ok(())
    }

    /// Encode raw image file bytes as a data URI.
    ///
    /// The MIME type is sniffed from the file's magic bytes; anything that is
    /// not a recognizable image is an `ImageRead` error.
    pub fn encode(bytes: &[u8], limit: u64) -> CardResult<Self> {
        Self::check_size(bytes.len() as u64, limit)?;

        let format = image::guess_format(bytes)
            .map_err(|e| CardError::ImageRead(format!("unrecognized image: {}", e)))?;
        let mime = format.to_mime_type();
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);

        Ok(Self(format!("data:{};base64,{}", mime, payload)))
    }

    /// Wrap an existing data URI.
    ///
    /// Requires `data:image/<subtype>;base64,<payload>` with a token subtype
    /// and a base64 payload.
    pub fn from_data_uri(uri: String) -> CardResult<Self> {
        let valid = uri
            .strip_prefix("data:image/")
            .and_then(|rest| rest.split_once(";base64,"))
            .is_some_and(|(subtype, payload)| {
                !subtype.is_empty()
                    && subtype
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
                    && payload
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
            });
        if valid {
            Ok(Self(uri))
        } else {
            Err(CardError::ImageRead("not an image data URI".to_string()))
        }
    }

    /// The data URI, usable directly as an `img` src
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
    }

    /// Decode the payload back into file bytes.
    pub fn decode_bytes(&self) -> CardResult<Vec<u8>> {
        let (_, payload) = self
            .0
            .split_once(";base64,")
            .ok_or_else(|| CardError::ImageRead("missing base64 payload".to_string()))?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| CardError::ImageRead(e.to_string()))
    }
}

impl TryFrom<String> for ImageData {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_data_uri(value)
    }
}

impl From<ImageData> for String {
    fn from(image: ImageData) -> Self {
        image.0
    }
}
