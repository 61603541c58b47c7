use log::info;

use crate::models::LogEntry;
use crate::sim::View;

use super::{ChartSink, ClassificationSnapshot, LogSink, RenderSink, SeriesUpdate};

/// Sink that prints everything through the `log` facade. Used by the demo
/// binary so a headless run still shows what a frontend would display.
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_field(&self, field: &str, value: &str) {
        info!("[display] {field} = {value}");
    }

    fn view_changed(&self, view: View) {
        info!("[display] switching to {view:?} view");
    }
}

impl ChartSink for ConsoleSink {
    fn replace_series(&self, chart: &str, update: SeriesUpdate) {
        let min = update.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = update
            .samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        info!(
            "[chart] {chart}: {} samples, range [{min:.2}, {max:.2}]{}",
            update.samples.len(),
            if update.emergency { " (emergency)" } else { "" }
        );
    }

    fn update_classification(&self, snapshot: ClassificationSnapshot) {
        info!(
            "[chart] voice stress {}% (confidence {}%), gesture: {} ({}%)",
            snapshot.voice_stress_pct,
            snapshot.voice_confidence_pct,
            snapshot.gesture_pattern,
            snapshot.gesture_confidence_pct
        );
    }
}

impl LogSink for ConsoleSink {
    fn append(&self, entry: &LogEntry) {
        info!(
            "[comm] {} {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.device_id,
            entry.message
        );
    }
}
