#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use tracing::Level;

fn main() {
    // Fails only when a subscriber is already installed.
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        tracing::warn!("Logger already initialized: {}", e);
    }

    tracing::info!("Starting wishcard");

    dioxus::LaunchBuilder::web().launch(app::App);
}
