//! Button Components
//!
//! Button styles used across the two views:
//! - Gold: full-width form submission
//! - Share: rounded green pill for the share action
//! - Ghost: muted secondary action ("Create New")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary form action - gold fill
    #[default]
    Gold,
    /// Share action - green pill
    Share,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gold => "btn-gold",
            ButtonVariant::Share => "btn-share",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
}

/// Full class list, with a busy modifier while disabled.
pub fn button_class(variant: ButtonVariant, disabled: bool) -> String {
    if disabled {
        format!("{} btn--busy", variant.class())
    } else {
        variant.class().to_string()
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Share,
///         onclick: move |_| share(),
///         "🔗 Shareable Link"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.disabled);

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Gold.class(), "btn-gold");
        assert_eq!(ButtonVariant::Share.class(), "btn-share");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Gold);
    }

    #[test]
    fn busy_modifier_only_when_disabled() {
        assert_eq!(button_class(ButtonVariant::Gold, false), "btn-gold");
        assert_eq!(button_class(ButtonVariant::Gold, true), "btn-gold btn--busy");
    }
}
