//! Browser bindings: localStorage, location/history, clipboard, files, canvas.
//!
//! Everything here touches the DOM and only works inside a browser; the
//! logic it feeds lives in `wishcard_core`.

use std::sync::Arc;

use dioxus::document;
use dioxus::html::FileEngine;
use futures::channel::oneshot;
use gloo::render::request_animation_frame;
use gloo::utils::{document as dom, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, Storage};
use wishcard_core::{CardError, CardResult, CardStore, ImageSource, KeyValueBackend, Settings};

/// Element id of the optional JSON settings block in index.html.
const SETTINGS_ELEMENT_ID: &str = "wishcard-settings";

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// localStorage can be missing or throw on access in privacy modes.
fn local_storage() -> Result<Storage, String> {
    window()
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// `window.localStorage` as a card backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl KeyValueBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> CardResult<Option<String>> {
        local_storage()
            .and_then(|storage| storage.get_item(key).map_err(js_error))
            .map_err(CardError::RecordNotFound)
    }

    fn set(&self, key: &str, value: &str) -> CardResult<()> {
        local_storage()
            .and_then(|storage| storage.set_item(key, value).map_err(js_error))
            .map_err(CardError::StorageWrite)
    }
}

/// Card store over localStorage with the configured key prefix.
pub fn card_store(settings: &Settings) -> CardStore<LocalStorageBackend> {
    CardStore::new(LocalStorageBackend, settings.storage_prefix.as_str())
}

/// Read deployment overrides from `<script id="wishcard-settings">`.
///
/// Falls back to defaults when the element is absent or malformed.
pub fn load_settings() -> Settings {
    let Some(raw) = dom()
        .get_element_by_id(SETTINGS_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Settings::default();
    };

    match Settings::from_json(&raw) {
        Ok(settings) => {
            tracing::info!("Loaded settings overrides");
            settings
        }
        Err(e) => {
            tracing::warn!("Ignoring malformed settings block: {}", e);
            Settings::default()
        }
    }
}

/// `location.search`, including the leading `?` if present.
pub fn current_search() -> String {
    window().location().search().unwrap_or_default()
}

pub fn current_pathname() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

pub fn current_href() -> String {
    window().location().href().unwrap_or_default()
}

/// Push a new history entry without reloading.
pub fn push_url(url: &str) {
    let result = window()
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(url)));

    if let Err(e) = result {
        tracing::warn!("Failed to update URL: {}", js_error(e));
    }
}

/// Write text to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> CardResult<()> {
    let mut eval = document::eval(
        r#"
        const text = await dioxus.recv();
        try {
            await navigator.clipboard.writeText(text);
            dioxus.send(true);
        } catch (e) {
            dioxus.send(false);
        }
        "#,
    );

    eval.send(text.to_string())
        .map_err(|e| CardError::Clipboard(format!("{:?}", e)))?;

    match eval.recv::<bool>().await {
        Ok(true) => Ok(()),
        Ok(false) => Err(CardError::Clipboard("write rejected".to_string())),
        Err(e) => Err(CardError::Clipboard(format!("{:?}", e))),
    }
}

/// A file chosen through `<input type="file">`.
#[derive(Clone)]
pub struct BrowserImage {
    engine: Arc<dyn FileEngine>,
    name: String,
    size: u64,
}

impl BrowserImage {
    /// First selected file, if any. Size is 0 when the engine cannot report it.
    pub async fn first_of(engine: Arc<dyn FileEngine>) -> Option<Self> {
        let name = engine.files().into_iter().next()?;
        let size = engine.file_size(&name).await.unwrap_or(0);
        Some(Self { engine, name, size })
    }
}

impl ImageSource for BrowserImage {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read(&self) -> CardResult<Vec<u8>> {
        self.engine
            .read_file(&self.name)
            .await
            .ok_or_else(|| CardError::ImageRead(self.name.clone()))
    }
}

/// Reset a file input so the rejected selection is gone.
pub fn clear_file_input(id: &str) {
    if let Some(input) = dom()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

/// Canvas element and its 2D context.
pub fn canvas_2d(id: &str) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = dom()
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, ctx))
}

/// Inner window size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let window = window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (width, height)
}

/// Wait for the next animation frame. Resolves to its timestamp in ms.
///
/// Dropping the future cancels the pending frame.
pub async fn next_frame() -> f64 {
    let (tx, rx) = oneshot::channel();
    let _frame = request_animation_frame(move |timestamp| {
        let _ = tx.send(timestamp);
    });
    rx.await.unwrap_or_default()
}
