//! Browser chat widget for the portfolio site
//!
//! The transcript state machine ([`state`]) and the turn driver ([`chat`])
//! are plain Rust and run anywhere. The DOM binding and the `fetch`
//! transport only exist when compiled for `wasm32`.

pub mod chat;
pub mod knowledge;
pub mod state;
pub mod transport;

#[cfg(target_arch = "wasm32")]
mod chat_ui;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use chat::send_message;
pub use state::WidgetState;
pub use transport::{ChatTransport, TransportError};

#[cfg(target_arch = "wasm32")]
pub use transport::HttpTransport;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
/// This sets up panic hooks and logging
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Portfolio chat widget initialized");
}

/// Mount the chat widget on the current page.
///
/// `api_url` overrides the relay endpoint baked in at build time.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount_chat_widget(api_url: Option<String>) -> Result<(), JsValue> {
    let url = api_url.unwrap_or_else(|| knowledge::CHAT_API_URL.to_string());
    log::info!("Mounting chat widget against {}", url);

    chat_ui::ChatWidgetApp::mount(HttpTransport::new(url))?;
    Ok(())
}
