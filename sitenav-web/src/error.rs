use sitenav_core::ConfigError;
use wasm_bindgen::JsValue;

use crate::element::DomError;

#[derive(Debug, thiserror::Error)]
pub enum NavMenuError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("element #{id} not found in document")]
    MissingElement { id: String },
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("invalid navigation menu config: {0}")]
    Config(#[from] ConfigError),
    #[error("config conversion error: {0}")]
    Conversion(#[from] serde_wasm_bindgen::Error),
}

impl NavMenuError {
    #[must_use]
    pub const fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}

impl From<NavMenuError> for JsValue {
    fn from(err: NavMenuError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
