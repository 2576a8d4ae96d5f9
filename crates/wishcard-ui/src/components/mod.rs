//! Reusable UI components
//!
//! All components use the card theme classes defined by the app's global
//! stylesheet.

mod button;
mod countdown_tile;
mod input;
mod toast;

pub use button::*;
pub use countdown_tile::*;
pub use input::*;
pub use toast::*;
