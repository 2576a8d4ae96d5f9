use dioxus::prelude::*;
use wishcard_core::navigation::{path_with_card, resolve_initial};
use wishcard_core::{AppView, NavEvent, Settings, UrlChange};
use wishcard_ui::Toast;

use crate::browser;
use crate::context::Notifier;
use crate::pages::{CelebrationView, CreationView, LoadingView};
use crate::theme::GLOBAL_STYLES;

/// Apply a navigation event to the view signal and mirror it in the URL.
fn dispatch(mut view: Signal<AppView>, event: NavEvent, settings: &Settings) {
    let current = std::mem::take(&mut *view.write());
    let from = current.name();
    let (next, change) = current.apply(event);
    tracing::info!(from, to = next.name(), "view transition");
    view.set(next);

    match change {
        Some(UrlChange::ShowCard(id)) => {
            let path = path_with_card(&browser::current_pathname(), &id, &settings.query_param);
            browser::push_url(&path);
        }
        Some(UrlChange::Clear) => browser::push_url(&browser::current_pathname()),
        None => {}
    }
}

/// Root application component.
///
/// Provides global styles, settings and notice contexts, and switches
/// between the loading, creation and celebration views.
#[component]
pub fn App() -> Element {
    let settings = use_context_provider(browser::load_settings);
    let notice_ms = settings.notice_ms;
    let notifier = use_context_provider(|| Notifier::new(notice_ms));
    let view: Signal<AppView> = use_signal(AppView::default);

    // Resolve the initial view from the URL on mount
    let startup = settings.clone();
    use_effect(move || {
        let store = browser::card_store(&startup);
        let event = resolve_initial(&browser::current_search(), &startup.query_param, &store);
        dispatch(view, event, &startup);
    });

    let body = match view() {
        AppView::Loading => rsx! { LoadingView {} },
        AppView::Creation => {
            let settings = settings.clone();
            rsx! {
                CreationView {
                    on_created: move |card| dispatch(view, NavEvent::CardCreated(card), &settings),
                }
            }
        }
        AppView::Celebration(card) => {
            let settings = settings.clone();
            rsx! {
                CelebrationView {
                    key: "{card.id}",
                    card: card,
                    on_return: move |_| dispatch(view, NavEvent::ReturnRequested, &settings),
                }
            }
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {body}
        Toast { notice: notifier.current() }
    }
}
