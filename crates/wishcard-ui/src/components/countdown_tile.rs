//! Countdown tiles - one boxed number per time unit.

use dioxus::prelude::*;
use wishcard_core::Remaining;

/// Zero-padded to two digits; `--` before the first tick.
pub fn tile_value(value: Option<i64>) -> String {
    match value {
        Some(v) => format!("{:02}", v),
        None => "--".to_string(),
    }
}

#[component]
pub fn CountdownTile(label: &'static str, value: Option<i64>) -> Element {
    let shown = tile_value(value);
    rsx! {
        div { class: "countdown-tile",
            p { class: "countdown-value", "{shown}" }
            p { class: "countdown-label", "{label}" }
        }
    }
}

/// Days, hours, minutes and seconds in a row.
#[component]
pub fn CountdownRow(remaining: Option<Remaining>) -> Element {
    let units = remaining.unwrap_or_default().units();

    rsx! {
        div { class: "countdown-row",
            for (label, value) in units {
                CountdownTile {
                    key: "{label}",
                    label: label,
                    value: remaining.map(|_| value),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_values_are_padded() {
        assert_eq!(tile_value(Some(0)), "00");
        assert_eq!(tile_value(Some(7)), "07");
        assert_eq!(tile_value(Some(123)), "123");
        assert_eq!(tile_value(None), "--");
    }
}
