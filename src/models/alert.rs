use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::LatLon;

/// Alert categories. The set is open-ended: detectors added later report
/// through `Other` without a model change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    AiDetected,
    GeofenceExit,
    ManualSos,
    #[serde(untagged)]
    Other(String),
}

impl AlertKind {
    pub fn as_str(&self) -> &str {
        match self {
            AlertKind::AiDetected => "AI_DETECTED",
            AlertKind::GeofenceExit => "GEOFENCE_EXIT",
            AlertKind::ManualSos => "MANUAL_SOS",
            AlertKind::Other(kind) => kind,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
}

/// A single alert raised against a device.
///
/// Alerts are append-only for the lifetime of a session: acknowledging one
/// flips its status, nothing ever removes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub device_id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub location: LatLon,
    pub status: AlertStatus,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}
