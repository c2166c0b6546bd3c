//! Browser console output.

use wasm_bindgen::JsValue;

pub fn info(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// A DOM or history call failed and was skipped.
pub fn warn(msg: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(msg), err);
}
