//! Browser entry points for the sticky header.
//!
//! Call `install()` once the page has loaded. The header gains `scrolled`
//! and the first entry's title gains `hidden` whenever the title is out of
//! view; both are cleared when it scrolls back in.

pub mod dom;
pub mod page;
pub mod watchers;

pub use dom::{DocumentLookup, DomElement};
pub use page::{install_page, is_installed, uninstall_page, PageToggler};
pub use watchers::{IntersectionWatcher, PageWatcher, ScrollPollWatcher};

use gloo_utils::format::JsValueSerdeExt;
use stickyheader_core::{ToggleConfig, ToggleStart};
use wasm_bindgen::prelude::*;

fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Start with the default selectors and flags. Returns whether the title is
/// being watched; `false` means the page lacks the title or the header.
#[wasm_bindgen]
pub fn install() -> Result<bool, JsValue> {
    init_logging();
    start(ToggleConfig::default())
}

/// Start with a config object, e.g. `{ headerFlag: "compact" }`. Omitted
/// fields take their defaults; `undefined` or `null` means all defaults.
#[wasm_bindgen]
pub fn install_with_config(config: JsValue) -> Result<bool, JsValue> {
    init_logging();
    let config = if config.is_undefined() || config.is_null() {
        ToggleConfig::default()
    } else {
        config
            .into_serde::<ToggleConfig>()
            .map_err(|e| JsValue::from_str(&format!("Invalid sticky header config: {e}")))?
    };
    start(config)
}

/// Stop watching and detach the unload listener.
#[wasm_bindgen]
pub fn uninstall() {
    uninstall_page();
}

fn start(config: ToggleConfig) -> Result<bool, JsValue> {
    match install_page(config) {
        Ok(outcome) => Ok(outcome == ToggleStart::Observing),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}
