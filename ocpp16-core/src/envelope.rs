//! OCPP 1.6-J RPC framing
//!
//! Every OCPP-J frame is a JSON array whose first element selects the shape:
//! - CALL: [2, uniqueId, action, payload]
//! - CALLRESULT: [3, uniqueId, payload]
//! - CALLERROR: [4, uniqueId, errorCode, errorDescription, errorDetails]
//!
//! Payloads and error details are kept as raw JSON text. The decoder only
//! checks that they are present and syntactically valid; interpreting them
//! is up to the handler for the action.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::{to_raw_value, RawValue};
use serde_json::Value;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::config::DecoderConfig;
use crate::error::{EnvelopeError, Field, UnknownErrorCode};

/// OCPP-J message type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageTypeId {
    Call = 2,
    CallResult = 3,
    CallError = 4,
}

impl MessageTypeId {
    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Exact number of array elements a frame of this type carries
    pub fn element_count(self) -> usize {
        match self {
            MessageTypeId::Call => 4,
            MessageTypeId::CallResult => 3,
            MessageTypeId::CallError => 5,
        }
    }
}

impl TryFrom<i64> for MessageTypeId {
    type Error = EnvelopeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(MessageTypeId::Call),
            3 => Ok(MessageTypeId::CallResult),
            4 => Ok(MessageTypeId::CallError),
            other => Err(EnvelopeError::UnsupportedMessageType(other.into())),
        }
    }
}

impl fmt::Display for MessageTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageTypeId::Call => write!(f, "CALL"),
            MessageTypeId::CallResult => write!(f, "CALLRESULT"),
            MessageTypeId::CallError => write!(f, "CALLERROR"),
        }
    }
}

/// OCPP 1.6 CALLERROR codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallErrorCode {
    NotImplemented,
    NotSupported,
    InternalError,
    ProtocolError,
    SecurityError,
    FormationViolation,
    PropertyConstraintViolation,
    // Spelled as in the OCPP 1.6 specification
    OccurenceConstraintViolation,
    TypeConstraintViolation,
    GenericError,
}

impl fmt::Display for CallErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for CallErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotImplemented" => Ok(CallErrorCode::NotImplemented),
            "NotSupported" => Ok(CallErrorCode::NotSupported),
            "InternalError" => Ok(CallErrorCode::InternalError),
            "ProtocolError" => Ok(CallErrorCode::ProtocolError),
            "SecurityError" => Ok(CallErrorCode::SecurityError),
            "FormationViolation" => Ok(CallErrorCode::FormationViolation),
            "PropertyConstraintViolation" => Ok(CallErrorCode::PropertyConstraintViolation),
            "OccurenceConstraintViolation" => Ok(CallErrorCode::OccurenceConstraintViolation),
            "TypeConstraintViolation" => Ok(CallErrorCode::TypeConstraintViolation),
            "GenericError" => Ok(CallErrorCode::GenericError),
            _ => Err(UnknownErrorCode(s.to_string())),
        }
    }
}

/// OCPP CALL message (request)
#[derive(Debug, Clone)]
pub struct Call {
    pub unique_id: String,
    pub action: String,
    pub payload: Box<RawValue>,
}

impl Call {
    /// Create a new CALL message with auto-generated ID
    pub fn new(action: impl Into<String>, payload: impl Serialize) -> serde_json::Result<Self> {
        Ok(Self {
            unique_id: Uuid::new_v4().to_string(),
            action: action.into(),
            payload: to_raw_value(&payload)?,
        })
    }

    /// Parse the payload as a specific request type
    pub fn parse_payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.payload.get())
    }

    pub fn payload_value(&self) -> serde_json::Result<Value> {
        self.parse_payload()
    }

    /// Serialize to OCPP wire format: [2, uniqueId, action, payload]
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&(
            MessageTypeId::Call.as_i64(),
            &self.unique_id,
            &self.action,
            &self.payload,
        ))
    }
}

/// OCPP CALLRESULT message (success response)
#[derive(Debug, Clone)]
pub struct CallResult {
    pub unique_id: String,
    pub payload: Box<RawValue>,
}

impl CallResult {
    pub fn new(unique_id: impl Into<String>, payload: impl Serialize) -> serde_json::Result<Self> {
        Ok(Self {
            unique_id: unique_id.into(),
            payload: to_raw_value(&payload)?,
        })
    }

    /// Parse the payload as a specific response type
    pub fn parse_payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.payload.get())
    }

    pub fn payload_value(&self) -> serde_json::Result<Value> {
        self.parse_payload()
    }

    /// Serialize to OCPP wire format: [3, uniqueId, payload]
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&(
            MessageTypeId::CallResult.as_i64(),
            &self.unique_id,
            &self.payload,
        ))
    }
}

/// OCPP CALLERROR message (error response)
///
/// `error_code` keeps the text as received. Use [`CallError::code`] to map
/// it onto the known OCPP 1.6 codes.
#[derive(Debug, Clone)]
pub struct CallError {
    pub unique_id: String,
    pub error_code: String,
    pub error_description: String,
    pub error_details: Box<RawValue>,
}

impl CallError {
    /// Create a new CALLERROR message with empty `{}` details
    pub fn new(
        unique_id: impl Into<String>,
        error_code: CallErrorCode,
        error_description: impl Into<String>,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            unique_id: unique_id.into(),
            error_code: error_code.to_string(),
            error_description: error_description.into(),
            error_details: to_raw_value(&serde_json::Map::new())?,
        })
    }

    pub fn with_details(mut self, details: impl Serialize) -> serde_json::Result<Self> {
        self.error_details = to_raw_value(&details)?;
        Ok(self)
    }

    pub fn code(&self) -> Option<CallErrorCode> {
        self.error_code.parse().ok()
    }

    pub fn details_value(&self) -> serde_json::Result<Value> {
        serde_json::from_str(self.error_details.get())
    }

    /// Serialize to OCPP wire format: [4, uniqueId, errorCode, errorDescription, errorDetails]
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&(
            MessageTypeId::CallError.as_i64(),
            &self.unique_id,
            &self.error_code,
            &self.error_description,
            &self.error_details,
        ))
    }
}

/// Decoded OCPP-J frame (any type)
#[derive(Debug, Clone)]
pub enum Message {
    Call(Call),
    CallResult(CallResult),
    CallError(CallError),
}

impl Message {
    pub fn type_id(&self) -> MessageTypeId {
        match self {
            Message::Call(_) => MessageTypeId::Call,
            Message::CallResult(_) => MessageTypeId::CallResult,
            Message::CallError(_) => MessageTypeId::CallError,
        }
    }

    pub fn unique_id(&self) -> &str {
        match self {
            Message::Call(c) => &c.unique_id,
            Message::CallResult(r) => &r.unique_id,
            Message::CallError(e) => &e.unique_id,
        }
    }

    /// Action name, for CALL frames only
    pub fn action(&self) -> Option<&str> {
        match self {
            Message::Call(c) => Some(&c.action),
            _ => None,
        }
    }

    /// Raw payload of a CALL or CALLRESULT
    pub fn payload(&self) -> Option<&RawValue> {
        match self {
            Message::Call(c) => Some(&c.payload),
            Message::CallResult(r) => Some(&r.payload),
            Message::CallError(_) => None,
        }
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        match self {
            Message::Call(c) => c.to_bytes(),
            Message::CallResult(r) => r.to_bytes(),
            Message::CallError(e) => e.to_bytes(),
        }
    }
}

/// Envelope decoder with configurable limits
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one OCPP-J frame
    pub fn decode(&self, raw: &[u8]) -> Result<Message, EnvelopeError> {
        if let Some(max) = self.config.max_frame_len {
            if raw.len() > max {
                debug!("Rejected OCPP frame of {} bytes (limit {})", raw.len(), max);
                return Err(EnvelopeError::FrameTooLarge { len: raw.len(), max });
            }
        }

        match parse_frame(raw) {
            Ok(message) => {
                trace!("Decoded {} frame {}", message.type_id(), message.unique_id());
                Ok(message)
            }
            Err(e) => {
                debug!("Rejected OCPP frame: {}", e);
                Err(e)
            }
        }
    }
}

/// Decode one OCPP-J frame with the default configuration
pub fn decode(raw: &[u8]) -> Result<Message, EnvelopeError> {
    Decoder::default().decode(raw)
}

fn parse_frame(raw: &[u8]) -> Result<Message, EnvelopeError> {
    // Syntax is checked over the whole document before the shape is looked at
    let document: Box<RawValue> =
        serde_json::from_slice(raw).map_err(EnvelopeError::MalformedJson)?;
    let elements: Vec<Box<RawValue>> =
        serde_json::from_str(document.get()).map_err(|_| EnvelopeError::NotAnArray)?;

    if elements.len() < 3 {
        return Err(EnvelopeError::TooFewElements { actual: elements.len() });
    }

    let type_id = match element(&elements[0])? {
        Value::Number(n) => match n.as_i64() {
            Some(id) => id,
            // Integers past i64::MAX are integers all the same
            None if n.is_u64() => return Err(EnvelopeError::UnsupportedMessageType(n)),
            None => return Err(EnvelopeError::field(Field::MessageTypeId)),
        },
        _ => return Err(EnvelopeError::field(Field::MessageTypeId)),
    };

    match MessageTypeId::try_from(type_id)? {
        MessageTypeId::Call => {
            let [_, unique_id, action, payload] = take::<4>(elements, MessageTypeId::Call)?;

            Ok(Message::Call(Call {
                unique_id: string_field(&unique_id, Field::UniqueId)?,
                action: string_field(&action, Field::Action)?,
                payload,
            }))
        }
        MessageTypeId::CallResult => {
            let [_, unique_id, payload] = take::<3>(elements, MessageTypeId::CallResult)?;

            Ok(Message::CallResult(CallResult {
                unique_id: string_field(&unique_id, Field::UniqueId)?,
                payload,
            }))
        }
        MessageTypeId::CallError => {
            let [_, unique_id, code, description, details] =
                take::<5>(elements, MessageTypeId::CallError)?;

            Ok(Message::CallError(CallError {
                unique_id: string_field(&unique_id, Field::UniqueId)?,
                error_code: string_field(&code, Field::ErrorCode)?,
                error_description: string_field(&description, Field::ErrorDescription)?,
                error_details: details,
            }))
        }
    }
}

fn take<const N: usize>(
    elements: Vec<Box<RawValue>>,
    type_id: MessageTypeId,
) -> Result<[Box<RawValue>; N], EnvelopeError> {
    <[Box<RawValue>; N]>::try_from(elements).map_err(|rest| EnvelopeError::Arity {
        type_id,
        actual: rest.len(),
    })
}

fn element(raw: &RawValue) -> Result<Value, EnvelopeError> {
    serde_json::from_str(raw.get()).map_err(EnvelopeError::MalformedJson)
}

fn string_field(raw: &RawValue, field: Field) -> Result<String, EnvelopeError> {
    match element(raw)? {
        Value::String(s) => Ok(s),
        _ => Err(EnvelopeError::field(field)),
    }
}
