//! View state machine and URL handling.
//!
//! ## States
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Loading` | Initial, before the URL has been inspected |
//! | `Creation` | The card form |
//! | `Celebration(card)` | Countdown and reveal for one card |
//!
//! ## Transitions
//!
//! | From | Event | To |
//! |------|-------|----|
//! | `Loading` | `Resolved(Some(card))` | `Celebration(card)` |
//! | `Loading` | `Resolved(None)` | `Creation` |
//! | `Creation` | `CardCreated(card)` | `Celebration(card)` |
//! | `Celebration` | `ReturnRequested` | `Creation` |
//!
//! Any other pair leaves the state unchanged.

use url::Url;

use crate::storage::{CardStore, KeyValueBackend};
use crate::types::{Card, CardId};

/// Which view the app shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Loading,
    Creation,
    Celebration(Card),
}

/// Something that moves the app between views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Initial URL lookup finished
    Resolved(Option<Card>),
    /// The form produced and saved a card
    CardCreated(Card),
    /// The user asked to make another card
    ReturnRequested,
}

/// URL change requested alongside a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlChange {
    /// Put this card id in the query
    ShowCard(CardId),
    /// Drop the card id from the query
    Clear,
}

impl AppView {
    pub fn name(&self) -> &'static str {
        match self {
            AppView::Loading => "loading",
            AppView::Creation => "creation",
            AppView::Celebration(_) => "celebration",
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            AppView::Celebration(card) => Some(card),
            _ => None,
        }
    }

    /// Apply an event, returning the next state and any URL change to make.
    pub fn apply(self, event: NavEvent) -> (AppView, Option<UrlChange>) {
        match (self, event) {
            (AppView::Loading, NavEvent::Resolved(Some(card))) => {
                (AppView::Celebration(card), None)
            }
            (AppView::Loading, NavEvent::Resolved(None)) => (AppView::Creation, None),
            (AppView::Creation, NavEvent::CardCreated(card)) => {
                let change = UrlChange::ShowCard(card.id.clone());
                (AppView::Celebration(card), Some(change))
            }
            (AppView::Celebration(_), NavEvent::ReturnRequested) => {
                (AppView::Creation, Some(UrlChange::Clear))
            }
            (state, event) => {
                tracing::debug!(state = state.name(), ?event, "ignoring navigation event");
                (state, None)
            }
        }
    }
}

/// Resolve the initial view from a `location.search` string.
pub fn resolve_initial<B: KeyValueBackend>(
    search: &str,
    param: &str,
    store: &CardStore<B>,
) -> NavEvent {
    let card = card_id_from_query(search, param).and_then(|id| store.find(&id));
    NavEvent::Resolved(card)
}

/// Extract a card id from a query string (with or without the leading `?`).
pub fn card_id_from_query(search: &str, param: &str) -> Option<CardId> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == param)
        .and_then(|(_, value)| match CardId::parse(&value) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!("ignoring card reference: {}", e);
                None
            }
        })
}

/// Relative URL of a path with the card id query, for `history.pushState`.
pub fn path_with_card(pathname: &str, id: &CardId, param: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(param, id.as_str())
        .finish();
    format!("{}?{}", pathname, query)
}

/// Absolute shareable link for a card, based on the current page URL.
///
/// Any existing query and fragment are dropped. Falls back to plain string
/// handling if `href` does not parse.
pub fn share_url(href: &str, id: &CardId, param: &str) -> String {
    match Url::parse(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.set_query(None);
            url.query_pairs_mut().append_pair(param, id.as_str());
            url.to_string()
        }
        Err(_) => {
            let base = href.split(['?', '#']).next().unwrap_or(href);
            path_with_card(base, id, param)
        }
    }
}
