//! Page components for Wishcard.

mod celebration;
mod creation;
mod loading;

pub use celebration::CelebrationView;
pub use creation::CreationView;
pub use loading::LoadingView;
