//! BootNotification (CP -> Central System)

use chrono::{DateTime, Utc};
use ocpp16_core::{CiString20, CiString25, CiString50, CiStringError};
use serde::{Deserialize, Serialize};

use crate::error::OcppError;
use crate::types::RegistrationStatus;

/// BootNotification.req
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootNotificationRequest {
    pub charge_point_model: CiString20,
    pub charge_point_vendor: CiString20,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_box_serial_number: Option<CiString25>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_point_serial_number: Option<CiString25>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<CiString50>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iccid: Option<CiString20>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imsi: Option<CiString20>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_serial_number: Option<CiString25>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_type: Option<CiString25>,
}

impl BootNotificationRequest {
    pub fn new(vendor: &str, model: &str) -> Result<Self, OcppError> {
        let charge_point_vendor =
            CiString20::new(vendor).map_err(OcppError::validation("BootNotificationRequest"))?;
        let charge_point_model =
            CiString20::new(model).map_err(OcppError::validation("BootNotificationRequest"))?;

        Ok(Self {
            charge_point_model,
            charge_point_vendor,
            charge_box_serial_number: None,
            charge_point_serial_number: None,
            firmware_version: None,
            iccid: None,
            imsi: None,
            meter_serial_number: None,
            meter_type: None,
        })
    }

    pub fn with_charge_point_serial(mut self, serial: CiString25) -> Self {
        self.charge_point_serial_number = Some(serial);
        self
    }

    pub fn with_charge_box_serial(mut self, serial: CiString25) -> Self {
        self.charge_box_serial_number = Some(serial);
        self
    }

    pub fn with_firmware(mut self, version: CiString50) -> Self {
        self.firmware_version = Some(version);
        self
    }

    pub fn with_modem(mut self, iccid: CiString20, imsi: CiString20) -> Self {
        self.iccid = Some(iccid);
        self.imsi = Some(imsi);
        self
    }

    pub fn with_meter(mut self, serial: CiString25, meter_type: CiString25) -> Self {
        self.meter_serial_number = Some(serial);
        self.meter_type = Some(meter_type);
        self
    }

    pub fn validate(&self) -> Result<(), OcppError> {
        self.validate_fields()
            .map_err(OcppError::validation("BootNotificationRequest"))
    }

    fn validate_fields(&self) -> Result<(), CiStringError> {
        self.charge_point_model.validate()?;
        self.charge_point_vendor.validate()?;

        for s in [&self.iccid, &self.imsi].into_iter().flatten() {
            s.validate()?;
        }
        for s in [
            &self.charge_box_serial_number,
            &self.charge_point_serial_number,
            &self.meter_serial_number,
            &self.meter_type,
        ]
        .into_iter()
        .flatten()
        {
            s.validate()?;
        }
        if let Some(fw) = &self.firmware_version {
            fw.validate()?;
        }

        Ok(())
    }
}

/// BootNotification.conf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootNotificationResponse {
    pub current_time: DateTime<Utc>,
    /// Heartbeat interval in seconds
    pub interval: i32,
    pub status: RegistrationStatus,
}
