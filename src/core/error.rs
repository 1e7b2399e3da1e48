//! Errors raised by browser bindings
//!
//! None of these ever reach the visitor: callers log them and carry on as if
//! the affected feature were absent from the page.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("JavaScript call failed: {0}")]
    Js(String),

    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

pub type EnhanceResult<T> = Result<T, EnhanceError>;

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EnhanceError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[cfg(feature = "hydrate")]
impl From<serde_wasm_bindgen::Error> for EnhanceError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        EnhanceError::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(EnhanceError::NoWindow.to_string(), "no global window");
        assert_eq!(
            EnhanceError::MissingElement("#paket".into()).to_string(),
            "element not found: #paket"
        );
        assert_eq!(
            EnhanceError::Js("TypeError".into()).to_string(),
            "JavaScript call failed: TypeError"
        );
    }
}
