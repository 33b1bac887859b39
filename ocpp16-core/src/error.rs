//! Error types for envelope decoding and CiString validation
//!
//! The `Display` text of these errors is matched on by message handlers
//! upstream, so wording changes are breaking changes.

use std::fmt;
use thiserror::Error;

use crate::envelope::MessageTypeId;

/// Bounded string invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CiStringError {
    #[error("value exceeds maximum length of {max}")]
    LengthExceeded { max: usize, actual: usize },

    #[error("value contains non-printable ASCII characters")]
    InvalidCharacter { position: usize },

    #[error("value must not be empty")]
    EmptyValue,
}

/// Envelope element that failed its JSON type check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MessageTypeId,
    UniqueId,
    Action,
    ErrorCode,
    ErrorDescription,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::MessageTypeId => "message type ID",
            Field::UniqueId => "uniqueId",
            Field::Action => "action",
            Field::ErrorCode => "errorCode",
            Field::ErrorDescription => "errorDescription",
        };
        f.write_str(name)
    }
}

/// Coarse classification of envelope failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedJson,
    StructuralArity,
    FieldType,
    UnsupportedDiscriminator,
    FrameLimit,
}

/// Errors produced while decoding an OCPP-J frame
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("invalid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("invalid OCPP message: expected a JSON array")]
    NotAnArray,

    #[error("invalid OCPP message: must have at least 3 elements")]
    TooFewElements { actual: usize },

    #[error("invalid {field}")]
    FieldType { field: Field },

    #[error("{}", arity_message(.type_id, .actual))]
    Arity { type_id: MessageTypeId, actual: usize },

    #[error("unsupported message type ID: {0}")]
    UnsupportedMessageType(serde_json::Number),

    #[error("OCPP frame of {len} bytes exceeds limit of {max} bytes")]
    FrameTooLarge { len: usize, max: usize },
}

impl EnvelopeError {
    /// `FrameTooLarge` is a configured size limit, so it gets its own kind
    /// rather than counting as a structural failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvelopeError::MalformedJson(_) => ErrorKind::MalformedJson,
            EnvelopeError::NotAnArray
            | EnvelopeError::TooFewElements { .. }
            | EnvelopeError::Arity { .. } => ErrorKind::StructuralArity,
            EnvelopeError::FrameTooLarge { .. } => ErrorKind::FrameLimit,
            EnvelopeError::FieldType { .. } => ErrorKind::FieldType,
            EnvelopeError::UnsupportedMessageType(_) => ErrorKind::UnsupportedDiscriminator,
        }
    }

    pub(crate) fn field(field: Field) -> Self {
        EnvelopeError::FieldType { field }
    }
}

/// CALLERROR code text outside the OCPP 1.6 enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown OCPP error code: {0}")]
pub struct UnknownErrorCode(pub String);

// CALL and CALLRESULT keep the short legacy wording; CALLERROR reports counts.
fn arity_message(type_id: &MessageTypeId, actual: &usize) -> String {
    let expected = type_id.element_count();
    match type_id {
        MessageTypeId::Call => format!("CALL message must have {} elements", expected),
        MessageTypeId::CallResult => format!("CALLRESULT message must have {} elements", expected),
        MessageTypeId::CallError if *actual < expected => format!(
            "CALLERROR message too short: expected {} elements, got {}",
            expected, actual
        ),
        MessageTypeId::CallError => format!(
            "CALLERROR message too long: expected {} elements, got {}",
            expected, actual
        ),
    }
}
