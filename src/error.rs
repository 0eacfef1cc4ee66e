use std::io;

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum CupError {
    #[error("Waypoint name must not be empty")]
    EmptyWaypointName,

    #[error("Invalid latitude: {0}")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0}")]
    InvalidLongitude(f64),

    #[error("Waypoint \"{0}\" was not found")]
    UnknownWaypoint(String),

    #[error("Waypoints must be written before any tasks")]
    WaypointAfterTask,

    #[error("Task options have to be written in task section")]
    OptionsOutsideTaskSection,

    #[error("Output error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CUP output is not valid UTF-8")]
    NonUtf8Output,
}

/// Broad category of a [`CupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is empty.
    Validation,
    /// A coordinate lies outside its valid bounds.
    Range,
    /// A task names a waypoint that was never written.
    Reference,
    /// Records were written in the wrong order.
    State,
    /// The sink rejected a write.
    Io,
    /// The input document could not be decoded.
    Input,
}

impl CupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyWaypointName => ErrorKind::Validation,
            Self::InvalidLatitude(_) | Self::InvalidLongitude(_) => ErrorKind::Range,
            Self::UnknownWaypoint(_) => ErrorKind::Reference,
            Self::WaypointAfterTask | Self::OptionsOutsideTaskSection => ErrorKind::State,
            Self::Io(_) => ErrorKind::Io,
            Self::Json(_) | Self::NonUtf8Output => ErrorKind::Input,
        }
    }
}

impl From<CupError> for JsValue {
    fn from(e: CupError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, CupError>;
