//! # OCPP 1.6 Messages
//!
//! Payload shapes for the OCPP 1.6 actions used during charge point start-up
//! and authorization. Field types come from `ocpp16-core`, so a payload that
//! deserializes successfully already satisfies the CiString and IdTag bounds.
//!
//! | Action | Request | Response |
//! |--------|---------|----------|
//! | Authorize | [`AuthorizeRequest`] | [`AuthorizeResponse`] |
//! | BootNotification | [`BootNotificationRequest`] | [`BootNotificationResponse`] |
//!
//! ## Usage
//!
//! ```
//! use ocpp16_messages::{decode_call, Request};
//!
//! let incoming = decode_call(br#"[2, "42", "Authorize", {"idTag": "RFID-0001"}]"#).unwrap();
//! assert!(matches!(incoming.request, Request::Authorize(_)));
//! ```

pub mod action;
pub mod authorize;
pub mod boot_notification;
pub mod error;
pub mod types;

pub use action::{decode_call, Action, IncomingRequest, Request};
pub use authorize::{AuthorizeRequest, AuthorizeResponse};
pub use boot_notification::{BootNotificationRequest, BootNotificationResponse};
pub use error::OcppError;
pub use types::{AuthorizationStatus, IdTagInfo, RegistrationStatus};
