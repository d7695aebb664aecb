pub mod futures;
pub mod time;

use wasm_bindgen::JsValue;

/// Best-effort description of a value thrown by a DOM API.
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Logs an error and its chain of sources.
pub fn log_error(error: &dyn std::error::Error) {
    let mut error = error;

    tracing::error!(%error);

    while let Some(source) = error.source() {
        tracing::error!(%source);
        error = source;
    }
}
