//! Error types for Wishcard

use thiserror::Error;

/// Main error type for Wishcard operations
#[derive(Error, Debug)]
pub enum CardError {
    /// A required form field is missing or unusable
    #[error("Validation error: {0}")]
    Validation(String),

    /// Date/time is filled in but unreadable or absent from the local zone
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Selected image exceeds the size limit
    #[error("Image too large: {size} bytes (limit {limit})")]
    ImageTooLarge { size: u64, limit: u64 },

    /// Selected image could not be read or is not an image
    #[error("Image read error: {0}")]
    ImageRead(String),

    /// The storage backend rejected a write (quota, privacy mode, ...)
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// No record is stored under the identifier
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A stored record exists but does not decode to a card
    #[error("Record parse error: {0}")]
    RecordParse(String),

    /// Clipboard access failed or was denied
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Identifier string is not a valid card id
    #[error("Invalid card id: {0}")]
    InvalidCardId(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Random source unavailable while generating an identifier
    #[error("Entropy error: {0}")]
    Entropy(String),
}

impl CardError {
    /// Text shown to the user in a transient notice.
    pub fn user_message(&self) -> String {
        match self {
            CardError::Validation(_) => {
                "Please fill in Recipient Name, Sender Name, and Date/Time.".to_string()
            }
            CardError::InvalidDateTime(_) => {
                "Please enter a valid Date/Time that exists in your time zone.".to_string()
            }
            CardError::ImageTooLarge { .. } => "Image size must be less than 2MB.".to_string(),
            CardError::ImageRead(_) => "Error reading image file.".to_string(),
            CardError::StorageWrite(_) => {
                "Could not save the celebration. Browser storage may be full.".to_string()
            }
            CardError::RecordNotFound(_) | CardError::RecordParse(_) => {
                "That celebration could not be found.".to_string()
            }
            CardError::Clipboard(_) => "Copy failed. Browser blocked clipboard access.".to_string(),
            CardError::InvalidCardId(_) | CardError::Serialization(_) | CardError::Entropy(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    /// Whether this error means "fall back to the creation view".
    pub fn is_missing_record(&self) -> bool {
        matches!(
            self,
            CardError::RecordNotFound(_) | CardError::RecordParse(_) | CardError::InvalidCardId(_)
        )
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
