//! Presentation boundary.
//!
//! The core never renders anything; it hands values to whatever sinks are
//! attached. All sinks default to no-ops so the core runs headless (tests,
//! the demo binary before wiring, embedding hosts without a UI).

pub mod console;

use serde::Serialize;

use crate::models::LogEntry;
use crate::sim::View;

pub use console::ConsoleSink;

/// Named display fields the core writes through [`RenderSink::render_field`].
pub mod fields {
    pub const HEART_RATE: &str = "heart-rate";
    pub const STRESS_LEVEL: &str = "stress-level";
    pub const LOCATION: &str = "location";
    pub const BATTERY: &str = "battery";
    pub const AI_CONFIDENCE: &str = "ai-confidence";
    pub const EMERGENCY_STATUS: &str = "emergency-status";
    pub const CURRENT_TIME: &str = "current-time";
}

/// Named charts the core feeds through [`ChartSink::replace_series`].
pub mod chart_ids {
    pub const VOICE_WAVEFORM: &str = "voice-waveform";
    pub const ACCELEROMETER_X: &str = "accelerometer-x";
    pub const ACCELEROMETER_Y: &str = "accelerometer-y";
    pub const ACCELEROMETER_Z: &str = "accelerometer-z";
    pub const LOCATION_PRECISION: &str = "location-precision";
}

/// Full replacement for one chart's series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesUpdate {
    pub labels: Vec<String>,
    pub samples: Vec<f64>,
    /// Style hint: render in the emergency palette.
    pub emergency: bool,
}

/// Classifier readouts shown beside the waveform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSnapshot {
    pub voice_stress_pct: u32,
    pub voice_confidence_pct: u32,
    pub gesture_pattern: String,
    pub gesture_confidence_pct: u32,
}

/// Receives named display values. No formatting contract beyond
/// human-readable text.
pub trait RenderSink: Send + Sync {
    fn render_field(&self, field: &str, value: &str);

    /// The core requests a view change (deploying a response jumps the
    /// operator to the emergency panel).
    fn view_changed(&self, view: View) {
        let _ = view;
    }
}

/// Receives chart data; the core supplies series, never draws.
pub trait ChartSink: Send + Sync {
    fn replace_series(&self, chart: &str, update: SeriesUpdate);
    fn update_classification(&self, snapshot: ClassificationSnapshot);
}

/// Receives communication log entries the bounded ring accepted.
pub trait LogSink: Send + Sync {
    fn append(&self, entry: &LogEntry);
}

pub struct NullRenderSink;

impl RenderSink for NullRenderSink {
    fn render_field(&self, _field: &str, _value: &str) {}
}

pub struct NullChartSink;

impl ChartSink for NullChartSink {
    fn replace_series(&self, _chart: &str, _update: SeriesUpdate) {}
    fn update_classification(&self, _snapshot: ClassificationSnapshot) {}
}

pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn append(&self, _entry: &LogEntry) {}
}
