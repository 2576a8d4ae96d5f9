//! Input Field Components
//!
//! Text inputs and textareas for the creation form.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Label shown above the field
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, datetime-local, url, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Element id, also used for label association
    pub id: String,
}

/// Single-line form field
///
/// # Example
///
/// ```rust,ignore
/// let mut recipient = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "recipient".to_string(),
///         value: recipient(),
///         oninput: move |s| recipient.set(s),
///         placeholder: "Recipient Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes; receives the capped value
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Character cap applied to input
    pub max_chars: usize,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
    pub id: String,
}

/// `used/max` counter text
pub fn char_counter(value: &str, max: usize) -> String {
    format!("{}/{}", value.chars().count(), max)
}

/// Multi-line input that never holds more than `max_chars` characters
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let counter = char_counter(&props.value, props.max_chars);
    let max = props.max_chars;

    rsx! {
        div { class: "form-field",
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                maxlength: "{max}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| {
                    props.oninput.call(wishcard_core::compose::truncate_message(&e.value(), max))
                },
            }
            span { class: "input-counter", "{counter}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_counts_characters_not_bytes() {
        assert_eq!(char_counter("héllo", 300), "5/300");
        assert_eq!(char_counter("", 300), "0/300");
    }
}
