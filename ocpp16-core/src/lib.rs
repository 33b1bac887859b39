//! # OCPP 1.6 Core
//!
//! Validated primitives for OCPP 1.6-J message handling.
//!
//! - [`envelope`]: decoding and encoding of the CALL / CALLRESULT / CALLERROR
//!   JSON arrays exchanged over the OCPP WebSocket
//! - [`ci_string`]: `CiString20Type` .. `CiString500Type`, printable ASCII
//!   with a maximum length
//! - [`id_tag`]: non-empty `CiString20` used for authorization tokens
//!
//! Decoding is a pure function of the input bytes; there is no I/O and no
//! shared state.
//!
//! ## Usage
//!
//! ```
//! use ocpp16_core::{decode, Message};
//!
//! let msg = decode(br#"[2, "12345", "Authorize", {"idTag": "ABC123"}]"#).unwrap();
//! assert_eq!(msg.unique_id(), "12345");
//! assert_eq!(msg.action(), Some("Authorize"));
//! assert!(matches!(msg, Message::Call(_)));
//! ```

pub mod ci_string;
pub mod config;
pub mod envelope;
pub mod error;
pub mod id_tag;

pub use ci_string::{
    is_printable_ascii, CiString, CiString20, CiString25, CiString255, CiString50, CiString500,
};
pub use config::DecoderConfig;
pub use envelope::{
    decode, Call, CallError, CallErrorCode, CallResult, Decoder, Message, MessageTypeId,
};
pub use error::{CiStringError, EnvelopeError, ErrorKind, Field, UnknownErrorCode};
pub use id_tag::IdTag;
