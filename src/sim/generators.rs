use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, Utc};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::models::Device;
use crate::sinks::{chart_ids, fields, ChartSink, LogSink, RenderSink, SeriesUpdate};

use super::charts;
use super::controller::emit_wearable;
use super::state::{SimState, View};

// Normal-operation envelopes for the subject device's simulated vitals.
const HEART_RATE_MIN: f64 = 60.0;
const HEART_RATE_MAX: f64 = 85.0;
const HEART_RATE_JITTER: f64 = 3.0;
const STRESS_MIN: f64 = 5.0;
const STRESS_MAX: f64 = 25.0;
const STRESS_JITTER: f64 = 5.0;

// Battery drains every tick regardless of emergency state and bottoms out at
// the floor; nothing in a session recharges it.
const BATTERY_DRAIN: f64 = 0.1;
const BATTERY_FLOOR: f64 = 40.0;

/// Canned status lines for the radio chatter generator.
pub const RADIO_MESSAGES: [&str; 5] = [
    "Status update - All systems normal",
    "Patrol checkpoint reached",
    "Communication test successful",
    "Battery level nominal",
    "Position report - On route",
];

/// One drift step for the subject device. Vitals random-walk inside their
/// normal envelopes unless an emergency pins them; battery drains either way.
pub(crate) fn apply_drift(device: &mut Device, in_emergency: bool, rng: &mut impl Rng) {
    if !in_emergency {
        device.heart_rate = (device.heart_rate
            + rng.gen_range(-HEART_RATE_JITTER..HEART_RATE_JITTER))
        .clamp(HEART_RATE_MIN, HEART_RATE_MAX);
        device.stress_level = (device.stress_level
            + rng.gen_range(-STRESS_JITTER..STRESS_JITTER))
        .clamp(STRESS_MIN, STRESS_MAX);
    }
    device.battery = (device.battery - BATTERY_DRAIN).max(BATTERY_FLOOR);
}

fn ticker(period: Duration) -> tokio::time::Interval {
    // First tick after one full period, matching the cadence of a repeating
    // timer rather than an immediate fire.
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Sensor drift task: random-walks the subject's vitals and re-emits the
/// wearable display.
pub(crate) async fn sensor_loop(
    state: Arc<Mutex<SimState>>,
    render: Arc<dyn RenderSink>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = ticker(period);
    let mut rng = StdRng::from_entropy();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = {
                    let mut state = state.lock().await;
                    state.sensor_tick(&mut rng, Utc::now())
                };
                if let Some(snapshot) = snapshot {
                    emit_wearable(render.as_ref(), &snapshot);
                }
            }
            _ = cancel.cancelled() => {
                info!("sensor loop shutting down");
                break;
            }
        }
    }
}

/// Clock task: keeps the displayed wall-clock time fresh.
pub(crate) async fn clock_loop(
    render: Arc<dyn RenderSink>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = ticker(period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Local::now().format("%I:%M %p").to_string();
                render.render_field(fields::CURRENT_TIME, &now);
            }
            _ = cancel.cancelled() => {
                info!("clock loop shutting down");
                break;
            }
        }
    }
}

/// Radio chatter task: a random device reports a random canned line.
pub(crate) async fn chatter_loop(
    state: Arc<Mutex<SimState>>,
    log_sink: Arc<dyn LogSink>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = ticker(period);
    let mut rng = StdRng::from_entropy();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let entry = {
                    let mut state = state.lock().await;
                    state.push_chatter(&mut rng, Utc::now())
                };
                log_sink.append(&entry);
            }
            _ = cancel.cancelled() => {
                info!("chatter loop shutting down");
                break;
            }
        }
    }
}

/// Chart refresh task: regenerates the voice waveform and classifier
/// readouts while the AI panel is in front. Stateless per tick: each frame
/// is built from scratch.
pub(crate) async fn chart_loop(
    state: Arc<Mutex<SimState>>,
    charts_sink: Arc<dyn ChartSink>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = ticker(period);
    let mut rng = StdRng::from_entropy();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let emergency = {
                    let state = state.lock().await;
                    if state.active_view() != View::AiPanel {
                        continue;
                    }
                    state.is_emergency_mode()
                };

                let samples = charts::voice_waveform(
                    emergency,
                    Utc::now().timestamp_millis(),
                    &mut rng,
                );
                let labels = (0..samples.len()).map(|i| i.to_string()).collect();
                charts_sink.replace_series(
                    chart_ids::VOICE_WAVEFORM,
                    SeriesUpdate { labels, samples, emergency },
                );
                charts_sink.update_classification(charts::classification(emergency, &mut rng));
            }
            _ = cancel.cancelled() => {
                info!("chart loop shutting down");
                break;
            }
        }
    }
}
