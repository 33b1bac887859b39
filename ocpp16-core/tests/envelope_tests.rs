//! Envelope decoding tests

use ocpp16_core::{decode, EnvelopeError, ErrorKind, Field, Message, MessageTypeId};
use serde_json::{json, Value};

fn payload_json(msg: &Message) -> Value {
    serde_json::from_str(msg.payload().expect("payload").get()).unwrap()
}

fn error_text(raw: &str) -> String {
    decode(raw.as_bytes()).unwrap_err().to_string()
}

#[test]
fn test_valid_call() {
    let msg = decode(br#"[2, "12345", "Authorize", {"idTag": "ABC123"}]"#).unwrap();

    assert_eq!(msg.type_id(), MessageTypeId::Call);
    assert_eq!(msg.unique_id(), "12345");
    assert_eq!(msg.action(), Some("Authorize"));
    assert_eq!(payload_json(&msg), json!({"idTag": "ABC123"}));
}

#[test]
fn test_valid_call_result() {
    let msg = decode(br#"[3, "67890", {"status": "Accepted"}]"#).unwrap();

    assert_eq!(msg.type_id(), MessageTypeId::CallResult);
    assert_eq!(msg.unique_id(), "67890");
    assert_eq!(msg.action(), None);
    assert_eq!(payload_json(&msg), json!({"status": "Accepted"}));
}

#[test]
fn test_valid_call_error() {
    let raw = br#"[4, "99999", "InternalError", "Something went wrong", {"reason": "crash"}]"#;
    let msg = decode(raw).unwrap();

    assert_eq!(msg.type_id(), MessageTypeId::CallError);
    match msg {
        Message::CallError(error) => {
            assert_eq!(error.unique_id, "99999");
            assert_eq!(error.error_code, "InternalError");
            assert_eq!(error.error_description, "Something went wrong");
            assert_eq!(error.details_value().unwrap(), json!({"reason": "crash"}));
        }
        _ => panic!("Expected CallError"),
    }
}

#[test]
fn test_invalid_json() {
    let err = decode(b"not valid").unwrap_err();
    assert!(matches!(err, EnvelopeError::MalformedJson(_)));
    assert_eq!(err.kind(), ErrorKind::MalformedJson);

    assert!(matches!(decode(b"").unwrap_err(), EnvelopeError::MalformedJson(_)));
    assert!(matches!(decode(b"{oops").unwrap_err(), EnvelopeError::MalformedJson(_)));
    assert!(matches!(decode(b"[2, \"1\", \"A\", {}] x").unwrap_err(), EnvelopeError::MalformedJson(_)));
}

#[test]
fn test_too_few_elements() {
    let err = decode(b"[2]").unwrap_err();
    assert!(matches!(err, EnvelopeError::TooFewElements { actual: 1 }));
    assert_eq!(err.kind(), ErrorKind::StructuralArity);

    assert_eq!(error_text(r#"[2, "123"]"#), "invalid OCPP message: must have at least 3 elements");
    assert_eq!(error_text(r#"[3, "123"]"#), "invalid OCPP message: must have at least 3 elements");
    assert_eq!(error_text("[]"), "invalid OCPP message: must have at least 3 elements");
}

#[test]
fn test_invalid_type_id() {
    let err = decode(br#"["abc", "123", "Action", {}]"#).unwrap_err();
    assert!(matches!(err, EnvelopeError::FieldType { field: Field::MessageTypeId }));
    assert_eq!(err.to_string(), "invalid message type ID");

    assert!(decode(br#"[null, "123", "Action", {}]"#).is_err());
}

#[test]
fn test_invalid_unique_id() {
    let err = decode(br#"[2, {}, "Action", {}]"#).unwrap_err();
    assert!(matches!(err, EnvelopeError::FieldType { field: Field::UniqueId }));
    assert_eq!(err.kind(), ErrorKind::FieldType);

    assert_eq!(error_text(r#"[3, 42, {}]"#), "invalid uniqueId");
    assert_eq!(error_text(r#"[4, null, "code", "desc", {}]"#), "invalid uniqueId");
}

#[test]
fn test_call_invalid_action() {
    let err = decode(br#"[2, "123", {}, {}]"#).unwrap_err();
    assert!(matches!(err, EnvelopeError::FieldType { field: Field::Action }));
    assert_eq!(err.to_string(), "invalid action");
}

#[test]
fn test_call_wrong_number_of_elements() {
    assert_eq!(error_text(r#"[2, "123", "Authorize"]"#), "CALL message must have 4 elements");
    assert_eq!(
        error_text(r#"[2, "123", "Authorize", {}, {}]"#),
        "CALL message must have 4 elements"
    );

    let err = decode(br#"[2, "123", "Authorize"]"#).unwrap_err();
    assert!(matches!(
        err,
        EnvelopeError::Arity { type_id: MessageTypeId::Call, actual: 3 }
    ));
}

#[test]
fn test_call_result_too_many_elements() {
    assert_eq!(
        error_text(r#"[3, "123", {"status": "Accepted"}, "extra"]"#),
        "CALLRESULT message must have 3 elements"
    );
}

#[test]
fn test_call_error_arity() {
    let err = decode(br#"[4, "id", "code", "desc"]"#).unwrap_err();
    assert!(matches!(
        err,
        EnvelopeError::Arity { type_id: MessageTypeId::CallError, actual: 4 }
    ));
    assert_eq!(err.to_string(), "CALLERROR message too short: expected 5 elements, got 4");

    assert_eq!(
        error_text(r#"[4, "id", "code", "desc", {}, {}]"#),
        "CALLERROR message too long: expected 5 elements, got 6"
    );
}

#[test]
fn test_call_error_invalid_code() {
    assert_eq!(error_text(r#"[4, "id", 123, "desc", {}]"#), "invalid errorCode");
}

#[test]
fn test_call_error_invalid_description() {
    assert_eq!(error_text(r#"[4, "id", "code", 123, {}]"#), "invalid errorDescription");
}

#[test]
fn test_call_error_object_description_rejected() {
    assert_eq!(
        error_text(r#"[4, "id", "code", {"unexpected": "object"}, {}]"#),
        "invalid errorDescription"
    );
}

#[test]
fn test_unsupported_message_type() {
    let result = decode(br#"[99, "uid", "x", {}]"#);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "unsupported message type ID: 99");
    assert_eq!(err.kind(), ErrorKind::UnsupportedDiscriminator);

    assert_eq!(error_text(r#"[-1, "uid", {}]"#), "unsupported message type ID: -1");
    assert_eq!(
        error_text(r#"[18446744073709551615, "uid", {}]"#),
        "unsupported message type ID: 18446744073709551615"
    );
}

#[test]
fn test_arity_checked_before_fields() {
    // Wrong arity wins over a bad uniqueId
    assert_eq!(error_text(r#"[2, 5, "Authorize"]"#), "CALL message must have 4 elements");
}

#[test]
fn test_empty_unique_id_accepted() {
    let msg = decode(br#"[3, "", {}]"#).unwrap();
    assert_eq!(msg.unique_id(), "");
}

#[test]
fn test_encode_then_decode_call() {
    let call = ocpp16_core::Call::new("BootNotification", json!({"chargePointVendor": "EK"})).unwrap();
    let bytes = Message::Call(call.clone()).to_bytes().unwrap();

    let decoded = decode(&bytes).unwrap();
    assert_eq!(decoded.unique_id(), call.unique_id);
    assert_eq!(decoded.action(), Some("BootNotification"));
    assert_eq!(payload_json(&decoded), json!({"chargePointVendor": "EK"}));
}
