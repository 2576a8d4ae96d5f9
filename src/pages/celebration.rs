//! Celebration view - countdown, then the reveal.

use std::time::Duration;

use chrono::{Local, Utc};
use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use wishcard_core::effects::effect_rng;
use wishcard_core::navigation::share_url;
use wishcard_core::{
    Card, ConfettiBurst, ConfettiPiece, Countdown, CountdownTracker, NoticeKind, SystemClock,
};
use wishcard_ui::{Button, ButtonVariant, CountdownRow};

use crate::browser;
use crate::components::{ConfettiLayer, ParticleBackground};
use crate::context::{use_notifier, use_settings};

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Headline above the countdown or reveal.
pub fn headline(recipient: &str, expired: bool) -> String {
    if expired {
        format!("HAPPY BIRTHDAY {}!", recipient.to_uppercase())
    } else {
        "COUNTDOWN STARTED!".to_string()
    }
}

/// Countdown and reveal for one card.
///
/// The tick loop and the confetti clear timer are tasks of this component,
/// so leaving the view stops them.
#[component]
pub fn CelebrationView(card: Card, on_return: EventHandler<()>) -> Element {
    let settings = use_settings();
    let notifier = use_notifier();

    let mut countdown: Signal<Option<Countdown>> = use_signal(|| None);
    let mut burst = use_signal(|| ConfettiBurst::new(settings.confetti_duration()));
    let mut pieces: Signal<Vec<ConfettiPiece>> = use_signal(Vec::new);

    let target = card.target_date_time;
    let tick_ms = millis(settings.tick());
    let piece_count = settings.confetti_pieces;

    use_future(move || async move {
        let mut tracker = CountdownTracker::new(target);
        loop {
            let tick = tracker.tick_with(&SystemClock);
            countdown.set(Some(tick.countdown));

            if tick.just_expired {
                let now = Utc::now();
                tracing::info!(target_at = %tracker.target(), "Revealing card");
                if burst.write().trigger(now) {
                    let mut rng = effect_rng(now.timestamp_millis().unsigned_abs());
                    pieces.set(ConfettiPiece::scatter(piece_count, &mut rng));
                    let confetti_ms = millis(burst.read().duration());
                    spawn(async move {
                        TimeoutFuture::new(confetti_ms).await;
                        burst.write().clear();
                        pieces.set(Vec::new());
                    });
                }
            }

            // Expiry is latched, nothing left to recompute
            if tracker.is_expired() {
                break;
            }
            TimeoutFuture::new(tick_ms).await;
        }
    });

    let share_id = card.id.clone();
    let query_param = settings.query_param.clone();
    let on_share = move |_: ()| {
        let url = share_url(&browser::current_href(), &share_id, &query_param);
        spawn(async move {
            match browser::copy_to_clipboard(&url).await {
                Ok(()) => notifier.notify(
                    "🔗 Shareable Link Copied! (Recipient needs this app's storage)",
                    NoticeKind::Success,
                ),
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    notifier.notify(e.user_message(), NoticeKind::Error);
                }
            }
        });
    };

    let state = countdown();
    let expired = state.is_some_and(|c| c.is_expired());
    let title = headline(&card.recipient_name, expired);
    let remaining = state.filter(|c| !c.is_expired()).map(|c| c.remaining());
    let target_text = card.target_display(&Local);
    let embed = card.song_embed(&settings.embed_base);

    rsx! {
        ParticleBackground {}
        ConfettiLayer { pieces: pieces() }
        div { class: "card-shell",
            div { class: "card-panel celebration-card",
                h1 { class: "card-title celebration-headline", "{title}" }
                p { class: "greeting", "Dear {card.recipient_name}," }

                if expired {
                    div { class: "reveal",
                        if let Some(image) = &card.image_data {
                            img {
                                class: "reveal-image",
                                src: "{image.as_str()}",
                                alt: "Celebration photo",
                            }
                        }
                        p { class: "reveal-message", "{card.message_or_placeholder()}" }
                        p { class: "reveal-attribution", "{card.attribution()}" }
                        if let Some(embed) = embed {
                            iframe {
                                class: "song-embed",
                                title: "Celebration song",
                                src: "{embed.url}",
                                width: "100%",
                                height: "152",
                                "allow": "encrypted-media; fullscreen; picture-in-picture",
                                "loading": "lazy",
                            }
                        }
                    }
                } else {
                    CountdownRow { remaining: remaining }
                    p { class: "countdown-target", "Opens {target_text}" }
                }

                div { class: "celebration-actions",
                    Button {
                        variant: ButtonVariant::Share,
                        onclick: on_share,
                        "🔗 Copy Shareable Link"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_return.call(()),
                        "✨ Create New"
                    }
                }
            }
        }
    }
}
