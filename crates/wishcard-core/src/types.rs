//! Core types for Wishcard

mod card;
mod embed;
mod image;

pub use card::{Card, CardId, MESSAGE_PLACEHOLDER};
pub use embed::SongEmbed;
pub use image::ImageData;
