#![allow(
    clippy::allow_attributes,
    reason = "allow attributes are needed for wasm"
)]

use wasm_bindgen::prelude::JsValue;
use web_sys::console;

// Bevy must be started from main, so the browser side just loads the
// module and lets this run.
pub(crate) fn main_wasm() -> Result<(), JsValue> {
    console::log_1(&"Starting noomalooma".into());
    noomalooma::run();
    Ok(())
}
