use crate::parser::error::MalformedReportError;
use crate::tabular::error::TabularError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetarTafError {
    #[error(transparent)]
    MalformedReport(#[from] MalformedReportError),

    #[error(transparent)]
    Tabular(#[from] TabularError),

    #[error("Failed to convert report to or from JSON")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode report")]
    Encode(#[source] Box<bincode::error::EncodeError>),

    #[error("Failed to decode report")]
    Decode(#[source] Box<bincode::error::DecodeError>),
}
