//! Fixed session seed data.
//!
//! Everything here is hardcoded and fictional. The simulation reinitializes
//! from these values on every start; nothing is read from disk or the
//! network.

use chrono::{NaiveDate, TimeZone, Utc};

use super::{
    Alert, AlertKind, AlertStatus, AiModel, Device, DeviceStatus, GeoPoint, LatLon, ResponseTeam,
    Severity, TeamStatus,
};

/// Model key the wearable display reads its confidence figure from.
pub const SPEECH_MODEL_KEY: &str = "speech_emotion";

pub fn devices() -> Vec<Device> {
    vec![
        Device {
            id: "BOTX-001".into(),
            user: "Officer Sarah Chen".into(),
            location: GeoPoint::new(28.6139, 77.2090, "Patrol Zone Alpha"),
            status: DeviceStatus::Active,
            battery: 78.0,
            heart_rate: 72.0,
            stress_level: 15.0,
            last_update: Utc.with_ymd_and_hms(2025, 1, 13, 11, 5, 0).unwrap(),
        },
        Device {
            id: "BOTX-002".into(),
            user: "Lt. Priya Sharma".into(),
            location: GeoPoint::new(28.6169, 77.2120, "Border Checkpoint"),
            status: DeviceStatus::Active,
            battery: 65.0,
            heart_rate: 68.0,
            stress_level: 8.0,
            last_update: Utc.with_ymd_and_hms(2025, 1, 13, 11, 4, 30).unwrap(),
        },
        Device {
            id: "BOTX-003".into(),
            user: "Sgt. Meera Patel".into(),
            location: GeoPoint::new(28.6089, 77.2050, "Command Post"),
            status: DeviceStatus::Emergency,
            battery: 45.0,
            heart_rate: 110.0,
            stress_level: 85.0,
            last_update: Utc.with_ymd_and_hms(2025, 1, 13, 11, 3, 15).unwrap(),
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "ALERT-001".into(),
            device_id: "BOTX-003".into(),
            kind: AlertKind::AiDetected,
            severity: Severity::High,
            timestamp: Utc.with_ymd_and_hms(2025, 1, 13, 11, 3, 15).unwrap(),
            description: "Voice stress and elevated heart rate detected".into(),
            location: LatLon::new(28.6089, 77.2050),
            status: AlertStatus::Active,
        },
        Alert {
            id: "ALERT-002".into(),
            device_id: "BOTX-001".into(),
            kind: AlertKind::GeofenceExit,
            severity: Severity::Medium,
            timestamp: Utc.with_ymd_and_hms(2025, 1, 13, 10, 45, 22).unwrap(),
            description: "Device left designated patrol zone".into(),
            location: LatLon::new(28.6139, 77.2090),
            status: AlertStatus::Acknowledged,
        },
    ]
}

pub fn ai_models() -> Vec<AiModel> {
    vec![
        AiModel {
            key: SPEECH_MODEL_KEY.into(),
            name: "Voice Stress Recognition".into(),
            accuracy: 94.2,
            status: "active".into(),
            last_trained: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        },
        AiModel {
            key: "gesture_detection".into(),
            name: "Emergency Gesture AI".into(),
            accuracy: 91.8,
            status: "active".into(),
            last_trained: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
        },
        AiModel {
            key: "sensor_fusion".into(),
            name: "Location Estimation".into(),
            accuracy: 96.5,
            status: "active".into(),
            last_trained: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
        },
    ]
}

pub fn response_teams() -> Vec<ResponseTeam> {
    vec![
        ResponseTeam {
            id: "TEAM-01".into(),
            name: "Quick Response Alpha".into(),
            status: TeamStatus::Available,
            location: LatLon::new(28.6100, 77.2080),
            eta: "3-5 minutes".into(),
        },
        ResponseTeam {
            id: "TEAM-02".into(),
            name: "Medical Support".into(),
            status: TeamStatus::EnRoute,
            location: LatLon::new(28.6120, 77.2095),
            eta: "8 minutes".into(),
        },
    ]
}
