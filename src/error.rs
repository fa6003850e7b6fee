use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("window is not available")]
    MissingWindow,

    #[error("document is not available")]
    MissingDocument,

    #[error("invalid SMS program catalog: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("invalid SMS program catalog value: {0}")]
    CatalogValue(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        EnhanceError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for EnhanceError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        EnhanceError::CatalogValue(err.to_string())
    }
}

impl From<gloo_net::Error> for EnhanceError {
    fn from(err: gloo_net::Error) -> Self {
        EnhanceError::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
