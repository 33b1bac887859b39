//! Action dispatch for incoming CALL frames

use ocpp16_core::{decode, Call, CallResult, Message};
use serde::Serialize;
use tracing::debug;

use crate::authorize::AuthorizeRequest;
use crate::boot_notification::BootNotificationRequest;
use crate::error::OcppError;

/// OCPP 1.6 action names handled by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Authorize,
    BootNotification,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::str::FromStr for Action {
    type Err = OcppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Authorize" => Ok(Action::Authorize),
            "BootNotification" => Ok(Action::BootNotification),
            _ => Err(OcppError::UnknownAction(s.to_string())),
        }
    }
}

/// Typed request payload
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Authorize(AuthorizeRequest),
    BootNotification(BootNotificationRequest),
}

impl Request {
    pub fn action(&self) -> Action {
        match self {
            Request::Authorize(_) => Action::Authorize,
            Request::BootNotification(_) => Action::BootNotification,
        }
    }

    /// Wrap in a CALL frame with a fresh unique id
    pub fn into_call(self) -> Result<Call, OcppError> {
        let action = self.action().to_string();
        let call = match self {
            Request::Authorize(req) => Call::new(action, req)?,
            Request::BootNotification(req) => Call::new(action, req)?,
        };
        Ok(call)
    }
}

/// CALL frame decoded down to its typed payload
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub unique_id: String,
    pub request: Request,
}

impl IncomingRequest {
    /// Build the CALLRESULT that answers this request
    pub fn respond(&self, payload: impl Serialize) -> Result<CallResult, OcppError> {
        Ok(CallResult::new(self.unique_id.clone(), payload)?)
    }
}

/// Decode a raw frame that must be a CALL for a known action
pub fn decode_call(raw: &[u8]) -> Result<IncomingRequest, OcppError> {
    let call = match decode(raw)? {
        Message::Call(call) => call,
        other => return Err(OcppError::NotACall(other.type_id())),
    };

    let action: Action = call.action.parse().map_err(|e| {
        debug!("No handler for action {} ({})", call.action, call.unique_id);
        e
    })?;

    let request = match action {
        Action::Authorize => Request::Authorize(call.parse_payload()?),
        Action::BootNotification => Request::BootNotification(call.parse_payload()?),
    };

    Ok(IncomingRequest {
        unique_id: call.unique_id,
        request,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!("Authorize".parse::<Action>().unwrap(), Action::Authorize);
        assert_eq!(Action::BootNotification.to_string(), "BootNotification");
        assert!(matches!(
            "Heartbeat".parse::<Action>(),
            Err(OcppError::UnknownAction(name)) if name == "Heartbeat"
        ));
    }

    #[test]
    fn test_decode_authorize_call() {
        let incoming = decode_call(br#"[2, "12345", "Authorize", {"idTag": "ABC123"}]"#).unwrap();

        assert_eq!(incoming.unique_id, "12345");
        match incoming.request {
            Request::Authorize(req) => assert_eq!(req.id_tag.as_str(), "ABC123"),
            _ => panic!("Expected Authorize"),
        }
    }

    #[test]
    fn test_decode_call_rejects_result() {
        let err = decode_call(br#"[3, "1", {}]"#).unwrap_err();
        assert_eq!(err.to_string(), "expected a CALL frame, got CALLRESULT");
    }

    #[test]
    fn test_envelope_error_text_preserved() {
        let err = decode_call(br#"[99, "uid", "x", {}]"#).unwrap_err();
        assert_eq!(err.to_string(), "unsupported message type ID: 99");
    }
}
