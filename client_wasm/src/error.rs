use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the game into the page
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d drawing context unavailable")]
    NoContext,
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
