//! Errors for typed OCPP 1.6 payload handling

use ocpp16_core::{CiStringError, EnvelopeError, MessageTypeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcppError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("JSON payload error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("expected a CALL frame, got {0}")]
    NotACall(MessageTypeId),

    #[error("{message} validation failed: {source}")]
    Validation {
        message: &'static str,
        #[source]
        source: CiStringError,
    },
}

impl OcppError {
    pub(crate) fn validation(message: &'static str) -> impl FnOnce(CiStringError) -> Self {
        move |source| OcppError::Validation { message, source }
    }
}
