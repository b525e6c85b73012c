use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding to the browser. Callers log these and degrade;
/// none of them is allowed to reach the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("browser rejected call: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
