use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    seed, AiModel, Alert, AlertKind, AlertStatus, CommLog, Device, DeviceStatus, LogEntry,
    ResponseTeam, Severity, TeamStatus,
};

use super::generators;

/// Origin tag for log entries issued by the command center rather than a
/// field device.
pub const COMMAND_SOURCE: &str = "COMMAND";

// Vitals forced by the emergency transition and restored by reset. Battery is
// deliberately left out of reset; it only recovers with a process restart.
const EMERGENCY_HEART_RATE: f64 = 95.0;
const EMERGENCY_STRESS_LEVEL: f64 = 75.0;
const BASELINE_HEART_RATE: f64 = 72.0;
const BASELINE_STRESS_LEVEL: f64 = 15.0;

/// The panel the operator is currently looking at. Two of the generators
/// gate on this: sensor drift only runs on the wearable panel, chart refresh
/// only on the AI panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Wearable,
    Dashboard,
    AiPanel,
    Emergency,
}

impl Default for View {
    fn default() -> Self {
        View::Wearable
    }
}

/// Everything the wearable panel displays about the subject device.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WearableSnapshot {
    pub heart_rate: f64,
    pub stress_level: f64,
    pub battery: f64,
    pub location_name: String,
    pub ai_confidence: f64,
    pub emergency: bool,
}

/// Headline figures for the command-center dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_devices: usize,
    pub active_alerts: usize,
    pub response_teams: usize,
}

/// The whole mutable world of the simulation: devices, alerts, model cards,
/// response teams, the communication ring, and the mode flags.
///
/// This is a plain state object with no scheduling of its own; the
/// controller drives it from timer tasks and action entry points. The first
/// device is the subject of the simulation, the only one the generators
/// touch, and `emergency_mode` mirrors its status at all times.
#[derive(Debug, Clone)]
pub struct SimState {
    devices: Vec<Device>,
    alerts: Vec<Alert>,
    ai_models: Vec<AiModel>,
    response_teams: Vec<ResponseTeam>,
    comm_log: CommLog,
    emergency_mode: bool,
    demo_mode: bool,
    active_view: View,
}

impl SimState {
    /// Fresh state from the fixed seed data.
    pub fn new(demo_mode: bool) -> Self {
        let devices = seed::devices();
        let emergency_mode = devices[0].is_emergency();
        Self {
            devices,
            alerts: seed::alerts(),
            ai_models: seed::ai_models(),
            response_teams: seed::response_teams(),
            comm_log: CommLog::new(),
            emergency_mode,
            demo_mode,
            active_view: View::default(),
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn ai_models(&self) -> &[AiModel] {
        &self.ai_models
    }

    pub fn response_teams(&self) -> &[ResponseTeam] {
        &self.response_teams
    }

    pub fn comm_log(&self) -> &CommLog {
        &self.comm_log
    }

    /// The device the wearable view tracks and the generators mutate.
    pub fn subject(&self) -> &Device {
        &self.devices[0]
    }

    pub fn is_emergency_mode(&self) -> bool {
        self.emergency_mode
    }

    pub fn is_demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn set_active_view(&mut self, view: View) {
        self.active_view = view;
    }

    /// Flip demo mode, returning the new value. Generators that are already
    /// running consult the flag each tick.
    pub fn toggle_demo_mode(&mut self) -> bool {
        self.demo_mode = !self.demo_mode;
        self.demo_mode
    }

    pub fn wearable_snapshot(&self) -> WearableSnapshot {
        let device = self.subject();
        WearableSnapshot {
            heart_rate: device.heart_rate,
            stress_level: device.stress_level,
            battery: device.battery,
            location_name: device.location.name.clone(),
            ai_confidence: self
                .ai_models
                .iter()
                .find(|m| m.key == seed::SPEECH_MODEL_KEY)
                .map(|m| m.accuracy)
                .unwrap_or_default(),
            emergency: self.emergency_mode,
        }
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            active_devices: self
                .devices
                .iter()
                .filter(|d| d.status == DeviceStatus::Active)
                .count(),
            active_alerts: self.alerts.iter().filter(|a| a.is_active()).count(),
            response_teams: self.response_teams.len(),
        }
    }

    /// Append to the communication ring, returning the accepted entry so the
    /// caller can forward it to the log sink.
    pub fn push_comm(
        &mut self,
        message: impl Into<String>,
        device_id: impl Into<String>,
        is_emergency: bool,
        now: DateTime<Utc>,
    ) -> LogEntry {
        let entry = LogEntry::new(message, device_id, is_emergency, now);
        self.comm_log.push(entry.clone());
        entry
    }

    /// Emergency transition. Forces the subject's vitals to the distress
    /// profile, appends a HIGH manual-SOS alert, and logs the dispatch.
    ///
    /// A no-op when already in emergency: repeated triggers (held SOS plus a
    /// simulated emergency, say) must not stack duplicate alerts.
    pub fn trigger_manual_sos(&mut self, now: DateTime<Utc>) -> Option<(Alert, LogEntry)> {
        if self.emergency_mode {
            return None;
        }

        let device = &mut self.devices[0];
        device.status = DeviceStatus::Emergency;
        device.heart_rate = EMERGENCY_HEART_RATE;
        device.stress_level = EMERGENCY_STRESS_LEVEL;
        device.last_update = now;

        let alert = Alert {
            id: format!("ALERT-{}", Uuid::new_v4()),
            device_id: device.id.clone(),
            kind: AlertKind::ManualSos,
            severity: Severity::High,
            timestamp: now,
            description: "Manual SOS activation".into(),
            location: device.location.coords(),
            status: AlertStatus::Active,
        };
        let device_id = device.id.clone();

        self.alerts.push(alert.clone());
        self.sync_emergency_flag();

        let entry = self.push_comm("Emergency alert sent - Manual SOS", device_id, true, now);
        Some((alert, entry))
    }

    /// Return the subject to normal operation. Restores the baseline vitals
    /// but leaves battery and the alert list untouched.
    pub fn reset_to_normal(&mut self) -> WearableSnapshot {
        let device = &mut self.devices[0];
        device.status = DeviceStatus::Active;
        device.heart_rate = BASELINE_HEART_RATE;
        device.stress_level = BASELINE_STRESS_LEVEL;
        self.sync_emergency_flag();
        self.wearable_snapshot()
    }

    /// Mark an alert acknowledged. Alerts are never removed, only flipped.
    pub fn acknowledge_alert(&mut self, alert_id: &str, now: DateTime<Utc>) -> Result<LogEntry> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| anyhow!("no alert with id {alert_id}"))?;
        alert.status = AlertStatus::Acknowledged;
        Ok(self.push_comm(
            "Alert acknowledged by command center",
            COMMAND_SOURCE,
            false,
            now,
        ))
    }

    /// Dispatch the first response team and jump the operator to the
    /// emergency panel. The view change is announced to the render sink by
    /// the controller, not performed here.
    pub fn deploy_response(&mut self, now: DateTime<Utc>) -> Result<LogEntry> {
        let team = self
            .response_teams
            .first_mut()
            .ok_or_else(|| anyhow!("no response teams configured"))?;
        team.status = TeamStatus::EnRoute;
        self.active_view = View::Emergency;
        Ok(self.push_comm(
            "Response teams deployed to location",
            COMMAND_SOURCE,
            true,
            now,
        ))
    }

    /// One sensor-drift tick. Applies only while demo mode is on and the
    /// wearable panel is in front; returns the refreshed display snapshot
    /// when it did.
    pub fn sensor_tick(
        &mut self,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> Option<WearableSnapshot> {
        if !self.demo_mode || self.active_view != View::Wearable {
            return None;
        }
        let emergency = self.emergency_mode;
        let device = &mut self.devices[0];
        generators::apply_drift(device, emergency, rng);
        device.last_update = now;
        Some(self.wearable_snapshot())
    }

    /// One radio-chatter tick: a random device reports a random canned
    /// status line.
    pub fn push_chatter(&mut self, rng: &mut impl Rng, now: DateTime<Utc>) -> LogEntry {
        let device_id = self.devices[rng.gen_range(0..self.devices.len())].id.clone();
        let message = generators::RADIO_MESSAGES[rng.gen_range(0..generators::RADIO_MESSAGES.len())];
        self.push_comm(message, device_id, false, now)
    }

    fn sync_emergency_flag(&mut self) {
        self.emergency_mode = self.devices[0].is_emergency();
    }
}
