use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    /// Builds a mapper for `map_err` that keeps the JS exception text.
    pub fn js(context: &'static str) -> impl FnOnce(JsValue) -> DomError {
        move |value| DomError::Js {
            context,
            message: value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}
