//! WASM entry point of the Billed employee front-end
//!
//! Pages are rendered and driven from Rust; the host page only provides a
//! `#root` element and calls `startApp`.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { startApp } from './pkg/billed_wasm.js';
//!
//! await init();
//! const app = startApp(JSON.stringify({ apiBaseUrl: "http://localhost:5678" }));
//! app.onNavigate(window.location.hash);
//! ```

pub mod config;
pub mod http_store;
pub mod logging;
pub mod router;
pub mod session;
pub mod view_model;

use std::rc::Rc;

use billed_core::{BillStore, MockStore, Route};
use wasm_bindgen::prelude::*;

pub use config::AppConfig;
pub use http_store::HttpStore;
use router::Router;
use session::SessionStore;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check a justificatory file name before reading the file
/// Returns Ok(()) if accepted, Err with the message to display if not
#[wasm_bindgen(js_name = validateJustificatory)]
pub fn validate_justificatory(file_name: &str) -> Result<(), JsValue> {
    billed_core::validate_file_name(file_name)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Running application
#[wasm_bindgen]
pub struct BilledApp {
    router: Rc<Router>,
}

#[wasm_bindgen]
impl BilledApp {
    /// Mount the page for `path` and return the route actually shown
    #[wasm_bindgen(js_name = onNavigate)]
    pub fn on_navigate(&self, path: &str) -> String {
        self.router.on_navigate(path).path().to_string()
    }

    /// Go to a page and push it onto history
    #[wasm_bindgen(js_name = navigate)]
    pub fn navigate(&self, path: &str) {
        match Route::from_path(path) {
            Some(route) => self.router.navigate(route),
            None => self.router.navigate(Route::Login),
        }
    }

    /// Signed-in user, or `null`
    #[wasm_bindgen(js_name = currentUser)]
    pub fn current_user(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.router.user())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

/// Start the application with an optional JSON configuration
#[wasm_bindgen(js_name = startApp)]
pub fn start_app(config_json: Option<String>) -> Result<BilledApp, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => {
            AppConfig::from_json(json).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?
        }
        None => AppConfig::default(),
    };
    if let Some(level) = config.level() {
        logging::init(level);
    }

    let session = SessionStore::open(&config.session_key, &config.token_key)?;
    let store: Rc<dyn BillStore> = if config.demo {
        tracing::info!("demo mode: serving bundled bills");
        Rc::new(MockStore::with_fixtures())
    } else {
        Rc::new(HttpStore::new(config.api_base(), session.token()))
    };

    let router = Router::new(config, store, session)?;
    router.listen_history()?;
    Ok(BilledApp { router })
}
