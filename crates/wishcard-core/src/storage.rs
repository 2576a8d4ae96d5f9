//! Card persistence over a string key-value backend.
//!
//! The browser build plugs in `window.localStorage`; tests and native tools
//! use [`MemoryBackend`]. Records are JSON strings keyed by
//! `<prefix><card id>`.

use crate::error::{CardError, CardResult};
use crate::types::{Card, CardId};

mod memory;

pub use memory::MemoryBackend;

/// A string key-value store such as `window.localStorage`.
pub trait KeyValueBackend {
    /// Read the value under `key`, `Ok(None)` if absent.
    fn get(&self, key: &str) -> CardResult<Option<String>>;

    /// Write `value` under `key`. Quota or access failures are `StorageWrite`.
    fn set(&self, key: &str, value: &str) -> CardResult<()>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for &B {
    fn get(&self, key: &str) -> CardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CardResult<()> {
        (**self).set(key, value)
    }
}

/// Card store bound to a backend and a key prefix.
#[derive(Debug, Clone)]
pub struct CardStore<B> {
    backend: B,
    prefix: String,
}

impl<B: KeyValueBackend> CardStore<B> {
    pub fn new(backend: B, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    /// Storage key for a card id
    pub fn key_for(&self, id: &CardId) -> String {
        format!("{}{}", self.prefix, id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Save a card under its id.
    ///
    /// Cards are immutable, so an existing key is simply overwritten with the
    /// same content.
    pub fn save(&self, card: &Card) -> CardResult<()> {
        let key = self.key_for(&card.id);
        let encoded = card.encode()?;
        self.backend.set(&key, &encoded).map_err(|e| {
            tracing::warn!(%key, bytes = encoded.len(), "card write rejected: {}", e);
            match e {
                CardError::StorageWrite(_) => e,
                other => CardError::StorageWrite(other.to_string()),
            }
        })?;
        tracing::info!(card_id = %card.id, bytes = encoded.len(), "card saved");
        Ok(())
    }

    /// Load a card by id.
    ///
    /// `RecordNotFound` if the key is absent, `RecordParse` if the payload is
    /// malformed or belongs to a different id.
    pub fn load(&self, id: &CardId) -> CardResult<Card> {
        let key = self.key_for(id);
        let raw = self
            .backend
            .get(&key)?
            .ok_or_else(|| CardError::RecordNotFound(id.to_string()))?;

        let card = Card::decode(&raw)?;
        if &card.id != id {
            return Err(CardError::RecordParse(format!(
                "record under {} carries id {}",
                key, card.id
            )));
        }
        Ok(card)
    }

    /// Load a card, treating every failure as "not found".
    pub fn find(&self, id: &CardId) -> Option<Card> {
        match self.load(id) {
            Ok(card) => Some(card),
            Err(CardError::RecordNotFound(_)) => {
                tracing::debug!(card_id = %id, "no stored card");
                None
            }
            Err(e) => {
                tracing::warn!(card_id = %id, "ignoring unreadable card: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn card(byte: u8) -> Card {
        Card {
            id: CardId::from_bytes([byte; 16]),
            recipient_name: "Ada".to_string(),
            sender_name: "Grace".to_string(),
            target_date_time: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            message: "Cheers".to_string(),
            song_link: None,
            image_data: None,
        }
    }

    #[test]
    fn test_save_and_load() {
        let store = CardStore::new(MemoryBackend::new(), "card-");
        let original = card(1);
        store.save(&original).unwrap();

        assert_eq!(store.load(&original.id).unwrap(), original);
        assert_eq!(store.find(&original.id), Some(original));
    }

    #[test]
    fn test_key_uses_prefix() {
        let store = CardStore::new(MemoryBackend::new(), "card-");
        let c = card(2);
        store.save(&c).unwrap();
        let key = format!("card-{}", c.id);
        assert_eq!(store.key_for(&c.id), key);
        assert!(store.backend().get(&key).unwrap().is_some());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = CardStore::new(MemoryBackend::new(), "card-");
        let id = CardId::from_bytes([9; 16]);
        assert!(matches!(store.load(&id), Err(CardError::RecordNotFound(_))));
        assert_eq!(store.find(&id), None);
    }

    #[test]
    fn test_malformed_record_is_parse_error() {
        let backend = MemoryBackend::new();
        let id = CardId::from_bytes([3; 16]);
        backend.set(&format!("card-{}", id), "{not json").unwrap();

        let store = CardStore::new(&backend, "card-");
        assert!(matches!(store.load(&id), Err(CardError::RecordParse(_))));
        assert_eq!(store.find(&id), None);
    }

    #[test]
    fn test_record_under_wrong_key_is_parse_error() {
        let backend = MemoryBackend::new();
        let stored = card(4);
        let other = CardId::from_bytes([5; 16]);
        backend
            .set(&format!("card-{}", other), &stored.encode().unwrap())
            .unwrap();

        let store = CardStore::new(&backend, "card-");
        assert!(matches!(store.load(&other), Err(CardError::RecordParse(_))));
    }

    #[test]
    fn test_quota_failure_is_storage_write() {
        let store = CardStore::new(MemoryBackend::with_quota(16), "card-");
        let err = store.save(&card(6)).unwrap_err();
        assert!(matches!(err, CardError::StorageWrite(_)));
    }
}
