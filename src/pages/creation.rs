//! Creation view - the card form.

use chrono::Local;
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use wishcard_core::{
    Card, CardComposer, CardDraft, CardError, CardId, ImageData, ImageSource, NoticeKind,
};
use wishcard_ui::{Button, ButtonVariant, Input, TextArea};

use crate::browser::{self, BrowserImage};
use crate::components::ParticleBackground;
use crate::context::{use_notifier, use_settings};

const IMAGE_INPUT_ID: &str = "card-image";

/// Form that builds, stores and hands back a new card.
///
/// `on_created` fires only after the card has been saved.
#[component]
pub fn CreationView(on_created: EventHandler<Card>) -> Element {
    let settings = use_settings();
    let notifier = use_notifier();

    let mut recipient = use_signal(String::new);
    let mut sender = use_signal(String::new);
    let mut target = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut song_link = use_signal(String::new);
    let mut image: Signal<Option<BrowserImage>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let max_chars = settings.max_message_chars;
    let image_limit = settings.max_image_bytes;

    let on_image_change = move |evt: FormEvent| {
        spawn(async move {
            let picked = match evt.files() {
                Some(engine) => BrowserImage::first_of(engine).await,
                None => None,
            };

            let Some(picked) = picked else {
                image.set(None);
                notifier.notify("Image cleared.", NoticeKind::Success);
                return;
            };

            match ImageData::check_size(picked.size(), image_limit) {
                Ok(()) => {
                    let text = format!("Image selected: {}", picked.name());
                    notifier.notify(text, NoticeKind::Success);
                    image.set(Some(picked));
                }
                Err(e) => {
                    tracing::warn!("Rejected image selection: {}", e);
                    image.set(None);
                    browser::clear_file_input(IMAGE_INPUT_ID);
                    notifier.notify(e.user_message(), NoticeKind::Error);
                }
            }
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let draft = CardDraft {
            recipient_name: recipient(),
            sender_name: sender(),
            target: target(),
            message: message(),
            song_link: song_link(),
        };
        let picked = image();
        let settings = settings.clone();
        submitting.set(true);

        spawn(async move {
            let store = browser::card_store(&settings);
            let composer = CardComposer::new(&store, &settings);

            let result = match CardId::random() {
                Ok(id) => composer.compose(&draft, picked.as_ref(), id, &Local).await,
                Err(e) => Err(e),
            };
            submitting.set(false);

            match result {
                Ok(card) => {
                    tracing::info!(id = %card.id, "Card created");
                    notifier.notify("✅ Celebration created! Redirecting...", NoticeKind::Success);
                    on_created.call(card);
                }
                Err(e) => {
                    tracing::warn!("Card creation failed: {}", e);
                    if matches!(e, CardError::ImageTooLarge { .. } | CardError::ImageRead(_)) {
                        image.set(None);
                        browser::clear_file_input(IMAGE_INPUT_ID);
                    }
                    notifier.notify(e.user_message(), NoticeKind::Error);
                }
            }
        });
    };

    let busy = submitting();
    let submit_label = if busy { "Creating..." } else { "🎉 Create Celebration" };

    rsx! {
        ParticleBackground {}
        div { class: "card-shell",
            div { class: "card-panel creation-card",
                h1 { class: "card-title", "Create a Celebration" }
                p { class: "card-subtitle",
                    "A countdown gift that opens at the moment you choose."
                }

                form { class: "creation-form", onsubmit: on_submit,
                    Input {
                        id: "recipient-name".to_string(),
                        label: "Recipient Name".to_string(),
                        value: recipient(),
                        oninput: move |v| recipient.set(v),
                        placeholder: "Who is celebrating?".to_string(),
                        required: true,
                        disabled: busy,
                    }
                    Input {
                        id: "sender-name".to_string(),
                        label: "Sender Name".to_string(),
                        value: sender(),
                        oninput: move |v| sender.set(v),
                        placeholder: "Your name".to_string(),
                        required: true,
                        disabled: busy,
                    }
                    Input {
                        id: "target-date-time".to_string(),
                        label: "Date/Time".to_string(),
                        input_type: "datetime-local".to_string(),
                        value: target(),
                        oninput: move |v| target.set(v),
                        required: true,
                        disabled: busy,
                    }
                    TextArea {
                        id: "message".to_string(),
                        value: message(),
                        oninput: move |v| message.set(v),
                        placeholder: "Write a personal message (optional)".to_string(),
                        max_chars: max_chars,
                        disabled: busy,
                    }
                    Input {
                        id: "song-link".to_string(),
                        label: "Song Link".to_string(),
                        input_type: "url".to_string(),
                        value: song_link(),
                        oninput: move |v| song_link.set(v),
                        placeholder: "https://open.spotify.com/track/...".to_string(),
                        disabled: busy,
                    }

                    div { class: "form-field",
                        label { class: "input-label", r#for: IMAGE_INPUT_ID, "Photo (max 2MB)" }
                        input {
                            id: IMAGE_INPUT_ID,
                            class: "file-input",
                            r#type: "file",
                            accept: "image/*",
                            disabled: busy,
                            onchange: on_image_change,
                        }
                    }

                    Button {
                        variant: ButtonVariant::Gold,
                        button_type: "submit".to_string(),
                        disabled: busy,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
