use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid page-fx config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        FxError::Dom(message)
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
