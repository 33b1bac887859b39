//! Authorize (CP -> Central System)

use std::fmt;

use ocpp16_core::IdTag;
use serde::{Deserialize, Serialize};

use crate::error::OcppError;
use crate::types::IdTagInfo;

/// Authorize.req
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    pub id_tag: IdTag,
}

impl AuthorizeRequest {
    pub fn new(id_tag: &str) -> Result<Self, OcppError> {
        let id_tag = IdTag::new(id_tag).map_err(OcppError::validation("AuthorizeRequest"))?;
        Ok(Self { id_tag })
    }

    pub fn validate(&self) -> Result<(), OcppError> {
        self.id_tag
            .validate()
            .map_err(OcppError::validation("AuthorizeRequest"))
    }
}

impl fmt::Display for AuthorizeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{idTag={}}}", self.id_tag)
    }
}

/// Authorize.conf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    pub id_tag_info: IdTagInfo,
}

impl AuthorizeResponse {
    pub fn validate(&self) -> Result<(), OcppError> {
        self.id_tag_info
            .validate()
            .map_err(OcppError::validation("AuthorizeResponse"))
    }
}
