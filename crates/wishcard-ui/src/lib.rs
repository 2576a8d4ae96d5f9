//! Wishcard UI Components
//!
//! Dioxus presentation components for the gold-on-ivory card theme:
//! - **Gold (#C49A6E)**: titles, primary actions, countdown digits
//! - **Green (#38A169)**: the share action
//! - **Ivory / white**: card surfaces
//!
//! Components here hold no application state; views pass values and
//! handlers in as props.

pub mod components;

pub use components::*;
