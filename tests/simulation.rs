//! End-to-end tests for the simulation controller: scheduling, the SOS hold
//! path, and teardown. Time is virtual (`start_paused`), so multi-minute
//! scenarios run instantly and tick counts are deterministic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;

use botx_sim::config::SimConfig;
use botx_sim::models::{AlertKind, DeviceStatus, LogEntry, TeamStatus};
use botx_sim::sim::{Generator, SimController, View};
use botx_sim::sinks::{
    ChartSink, ClassificationSnapshot, LogSink, RenderSink, SeriesUpdate,
};

#[derive(Default)]
struct RecordingRender {
    fields: Mutex<HashMap<String, String>>,
    views: Mutex<Vec<View>>,
}

impl RenderSink for RecordingRender {
    fn render_field(&self, field: &str, value: &str) {
        self.fields
            .lock()
            .unwrap()
            .insert(field.to_string(), value.to_string());
    }

    fn view_changed(&self, view: View) {
        self.views.lock().unwrap().push(view);
    }
}

#[derive(Default)]
struct RecordingCharts {
    frames: Mutex<Vec<SeriesUpdate>>,
    classifications: Mutex<Vec<ClassificationSnapshot>>,
}

impl ChartSink for RecordingCharts {
    fn replace_series(&self, _chart: &str, update: SeriesUpdate) {
        self.frames.lock().unwrap().push(update);
    }

    fn update_classification(&self, snapshot: ClassificationSnapshot) {
        self.classifications.lock().unwrap().push(snapshot);
    }
}

#[derive(Default)]
struct RecordingLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl LogSink for RecordingLog {
    fn append(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn recording_controller() -> (
    SimController,
    Arc<RecordingRender>,
    Arc<RecordingCharts>,
    Arc<RecordingLog>,
) {
    let render = Arc::new(RecordingRender::default());
    let charts = Arc::new(RecordingCharts::default());
    let log = Arc::new(RecordingLog::default());
    let controller = SimController::new(
        SimConfig::default(),
        render.clone(),
        charts.clone(),
        log.clone(),
    );
    (controller, render, charts, log)
}

#[tokio::test(start_paused = true)]
async fn sos_full_hold_raises_emergency() {
    let controller = SimController::headless(SimConfig::default());

    controller.start_sos_hold().await;
    sleep(Duration::from_millis(3050)).await;

    assert!(controller.is_emergency_mode().await);
    let subject = controller.subject_device().await;
    assert_eq!(subject.status, DeviceStatus::Emergency);
    assert_eq!(subject.heart_rate, 95.0);

    controller.stop_sos_hold().await;
    controller.destroy().await;
}

#[tokio::test(start_paused = true)]
async fn sos_released_early_never_fires() {
    let controller = SimController::headless(SimConfig::default());

    controller.start_sos_hold().await;
    sleep(Duration::from_millis(2950)).await;
    controller.stop_sos_hold().await;
    sleep(Duration::from_millis(2000)).await;

    assert!(!controller.is_emergency_mode().await);
    controller.destroy().await;
}

#[tokio::test(start_paused = true)]
async fn a_new_press_restarts_the_hold_count() {
    let controller = SimController::headless(SimConfig::default());

    controller.start_sos_hold().await;
    sleep(Duration::from_millis(2000)).await;
    controller.start_sos_hold().await;
    sleep(Duration::from_millis(1500)).await;
    assert!(!controller.is_emergency_mode().await);

    sleep(Duration::from_millis(1600)).await;
    assert!(controller.is_emergency_mode().await);

    controller.destroy().await;
}

#[tokio::test]
async fn manual_sos_updates_device_alerts_and_sinks() {
    let (controller, render, _charts, log) = recording_controller();

    let alerts_before = controller.alerts().await.len();
    assert!(controller.trigger_manual_sos().await);

    let subject = controller.subject_device().await;
    assert_eq!(subject.status, DeviceStatus::Emergency);
    assert_eq!(subject.heart_rate, 95.0);
    assert_eq!(subject.stress_level, 75.0);
    assert!(controller.is_emergency_mode().await);

    let alerts = controller.alerts().await;
    assert_eq!(alerts.len(), alerts_before + 1);
    let newest = alerts.last().unwrap();
    assert_eq!(newest.kind, AlertKind::ManualSos);
    assert_eq!(newest.device_id, "BOTX-001");

    let entries = log.entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "Emergency alert sent - Manual SOS");
    assert!(entries[0].is_emergency);

    let fields = render.fields.lock().unwrap();
    assert_eq!(fields.get("heart-rate").map(String::as_str), Some("95"));
    assert_eq!(
        fields.get("emergency-status").map(String::as_str),
        Some("EMERGENCY DETECTED")
    );
}

#[tokio::test]
async fn triggering_while_in_emergency_is_a_noop() {
    let controller = SimController::headless(SimConfig::default());

    assert!(controller.trigger_manual_sos().await);
    let alerts_after_first = controller.alerts().await.len();

    assert!(!controller.trigger_manual_sos().await);
    assert!(!controller.simulate_emergency().await);
    assert_eq!(controller.alerts().await.len(), alerts_after_first);
}

#[tokio::test]
async fn reset_returns_to_baseline_without_touching_alerts() {
    let controller = SimController::headless(SimConfig::default());

    controller.trigger_manual_sos().await;
    let alerts_in_emergency = controller.alerts().await.len();
    controller.reset_to_normal().await;

    let subject = controller.subject_device().await;
    assert_eq!(subject.status, DeviceStatus::Active);
    assert_eq!(subject.heart_rate, 72.0);
    assert_eq!(subject.stress_level, 15.0);
    assert!(!controller.is_emergency_mode().await);
    assert_eq!(controller.alerts().await.len(), alerts_in_emergency);
}

#[tokio::test]
async fn deploy_response_dispatches_and_switches_view() {
    let (controller, render, _charts, log) = recording_controller();

    controller.deploy_response().await.unwrap();

    let teams = controller.response_teams().await;
    assert_eq!(teams[0].id, "TEAM-01");
    assert_eq!(teams[0].status, TeamStatus::EnRoute);
    assert_eq!(teams[1].id, "TEAM-02");
    assert_eq!(teams[1].eta, "8 minutes");

    assert_eq!(controller.active_view().await, View::Emergency);
    assert_eq!(render.views.lock().unwrap().as_slice(), &[View::Emergency]);

    let entries = log.entries.lock().unwrap();
    assert_eq!(entries[0].message, "Response teams deployed to location");
    assert!(entries[0].is_emergency);
}

#[tokio::test]
async fn acknowledging_unknown_alert_errors() {
    let controller = SimController::headless(SimConfig::default());
    assert!(controller.acknowledge_alert("ALERT-999").await.is_err());
    assert!(controller.acknowledge_alert("ALERT-002").await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn drift_respects_envelopes_and_comm_ring_stays_bounded() {
    let controller = SimController::headless(SimConfig::default());
    controller.start_simulation().await.unwrap();

    // 15 virtual minutes: 450 sensor ticks, 90 chatter messages.
    sleep(Duration::from_secs(900)).await;

    let subject = controller.subject_device().await;
    assert!((60.0..=85.0).contains(&subject.heart_rate));
    assert!((5.0..=25.0).contains(&subject.stress_level));
    assert_eq!(subject.battery, 40.0);

    assert_eq!(controller.comm_log().await.len(), 10);

    controller.destroy().await;
}

#[tokio::test(start_paused = true)]
async fn chart_refresh_runs_only_on_the_ai_panel() {
    let (controller, _render, charts, _log) = recording_controller();
    controller.start_simulation().await.unwrap();

    sleep(Duration::from_secs(5)).await;
    assert!(charts.frames.lock().unwrap().is_empty());

    controller.set_active_view(View::AiPanel).await;
    sleep(Duration::from_secs(5)).await;
    let frames_on_panel = {
        let frames = charts.frames.lock().unwrap();
        assert!(!frames.is_empty());
        for frame in frames.iter() {
            assert_eq!(frame.samples.len(), 100);
            assert_eq!(frame.labels.len(), 100);
            assert!(!frame.emergency);
        }
        frames.len()
    };
    assert!(!charts.classifications.lock().unwrap().is_empty());

    controller.set_active_view(View::Dashboard).await;
    sleep(Duration::from_secs(5)).await;
    assert_eq!(charts.frames.lock().unwrap().len(), frames_on_panel);

    controller.destroy().await;
}

#[tokio::test(start_paused = true)]
async fn destroy_stops_every_timer() {
    let (controller, render, charts, log) = recording_controller();
    controller.start_simulation().await.unwrap();

    // Let the sensor generator drain some battery, then collect a few chart
    // frames on the AI panel before tearing down.
    sleep(Duration::from_secs(10)).await;
    assert!(render.fields.lock().unwrap().contains_key("current-time"));
    assert!(controller.subject_device().await.battery < 78.0);

    controller.set_active_view(View::AiPanel).await;
    sleep(Duration::from_secs(5)).await;

    controller.destroy().await;

    // Back on the wearable panel a leaked sensor loop would keep draining.
    controller.set_active_view(View::Wearable).await;
    let battery = controller.subject_device().await.battery;
    let frames = charts.frames.lock().unwrap().len();
    let entries = log.entries.lock().unwrap().len();

    sleep(Duration::from_secs(60)).await;

    assert_eq!(controller.subject_device().await.battery, battery);
    assert_eq!(charts.frames.lock().unwrap().len(), frames);
    assert_eq!(log.entries.lock().unwrap().len(), entries);

    // A second teardown is harmless.
    controller.destroy().await;
}

#[tokio::test(start_paused = true)]
async fn generators_are_individually_cancellable() {
    let controller = SimController::headless(SimConfig::default());
    controller.start_simulation().await.unwrap();

    sleep(Duration::from_secs(30)).await;
    assert!(!controller.comm_log().await.is_empty());

    assert!(controller.stop_generator(Generator::Chatter).await);
    assert!(!controller.stop_generator(Generator::Chatter).await);

    let entries = controller.comm_log().await.len();
    let battery = controller.subject_device().await.battery;

    sleep(Duration::from_secs(60)).await;

    // Chatter is silent, the other generators keep going.
    assert_eq!(controller.comm_log().await.len(), entries);
    assert!(controller.subject_device().await.battery < battery);

    controller.destroy().await;
}

#[tokio::test]
async fn priming_charts_supplies_the_static_series() {
    let (controller, _render, charts, _log) = recording_controller();

    controller.prime_charts().await;

    let frames = charts.frames.lock().unwrap();
    let lengths: Vec<_> = frames.iter().map(|f| f.samples.len()).collect();
    assert_eq!(lengths, vec![50, 50, 50, 20]);
    let precision = frames.last().unwrap();
    assert_eq!(precision.labels.first().map(String::as_str), Some("T-19"));
    assert_eq!(precision.labels.last().map(String::as_str), Some("T-0"));
}

#[tokio::test(start_paused = true)]
async fn start_simulation_twice_is_rejected() {
    let controller = SimController::headless(SimConfig::default());
    controller.start_simulation().await.unwrap();
    assert!(controller.start_simulation().await.is_err());
    controller.destroy().await;
}

#[tokio::test(start_paused = true)]
async fn generators_do_not_start_outside_demo_mode() {
    let config = SimConfig {
        demo_mode: false,
        ..SimConfig::default()
    };
    let controller = SimController::headless(config);
    controller.start_simulation().await.unwrap();

    sleep(Duration::from_secs(30)).await;

    assert_eq!(controller.subject_device().await.battery, 78.0);
    assert!(controller.comm_log().await.is_empty());

    controller.destroy().await;
}
