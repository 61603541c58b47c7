use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DeviceStatus {
    Active,
    Emergency,
}

impl Default for DeviceStatus {
    fn default() -> Self {
        DeviceStatus::Active
    }
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Active => "active",
            DeviceStatus::Emergency => "emergency",
        }
    }
}

/// Coarse battery banding used by the device list display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BatteryLevel {
    High,
    Medium,
    Low,
}

/// A wearable unit in the field.
///
/// Devices are created once from seed data and live for the whole session;
/// the subject device (the one the wearable view tracks) is the only one the
/// simulation mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub user: String,
    pub location: GeoPoint,
    pub status: DeviceStatus,
    pub battery: f64,
    pub heart_rate: f64,
    pub stress_level: f64,
    pub last_update: DateTime<Utc>,
}

impl Device {
    pub fn is_emergency(&self) -> bool {
        self.status == DeviceStatus::Emergency
    }

    pub fn battery_level(&self) -> BatteryLevel {
        if self.battery > 60.0 {
            BatteryLevel::High
        } else if self.battery > 30.0 {
            BatteryLevel::Medium
        } else {
            BatteryLevel::Low
        }
    }
}
