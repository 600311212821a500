//! Shared helpers for WASM API operations
//!
//! Console logging, JS value conversion and session access used by every
//! JS-facing function.

use super::session::SongSession;
use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

// WASM-owned song storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<SongSession> = Mutex::new(SongSession::new());
}

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Conversion Helpers
// ============================================================================

/// Deserialize a value from JavaScript, logging failures
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(error_context, e))
}

/// Serialize a value to JavaScript, logging failures
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(error_context, e))
}

/// Log an error and turn it into the string handed back to JS
pub fn js_error(context: &str, e: impl Display) -> JsValue {
    let msg = format!("{}: {}", context, e);
    log_error(&msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Session Access
// ============================================================================

/// Lock the session for one call
///
/// A panic in an earlier call poisons the lock; that is reported to JS
/// instead of panicking again.
pub fn session() -> Result<MutexGuard<'static, SongSession>, JsValue> {
    SESSION
        .lock()
        .map_err(|_| js_error("Session unavailable", "lock poisoned by an earlier failure"))
}
