//! Script-tag libraries (annyang, Chart.js, simple-slider).
//!
//! Each one is looked up on the JS global object when it is used, so a page
//! that failed to load a library degrades to an error message instead of a trap.

pub mod annyang;
pub mod chart_js;
pub mod simple_slider;

use crate::domain::errors::{AppError, AppResult};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Global `key`, if it is defined and not null
pub fn read_global(key: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub(crate) fn require_global(key: &str) -> AppResult<JsValue> {
    read_global(key).ok_or_else(|| AppError::LibraryUnavailable(key.to_string()))
}

pub(crate) fn method(target: &JsValue, name: &str) -> AppResult<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_failure)?
        .dyn_into::<Function>()
        .map_err(|_| AppError::LibraryUnavailable(format!("{name} is not a function")))
}

pub(crate) fn set(target: &JsValue, key: &str, value: &JsValue) -> AppResult<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_failure)
}

/// A thrown JS value as a rendering error
pub(crate) fn js_failure(thrown: JsValue) -> AppError {
    AppError::Rendering(describe(&thrown))
}

pub fn describe(thrown: &JsValue) -> String {
    thrown
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| thrown.as_string())
        .unwrap_or_else(|| format!("{thrown:?}"))
}
