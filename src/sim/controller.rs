use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::Utc;
use log::{error, info};
use tokio::{sync::Mutex, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::models::{AiModel, Alert, Device, LogEntry, ResponseTeam};
use crate::sinks::{
    chart_ids, fields, ChartSink, LogSink, NullChartSink, NullLogSink, NullRenderSink, RenderSink,
    SeriesUpdate,
};

use super::charts;
use super::generators;
use super::sos::SosHold;
use super::state::{DashboardStats, SimState, View, WearableSnapshot};

/// The four periodic simulation tasks, addressable for individual shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    Sensors,
    Clock,
    Chatter,
    Charts,
}

struct GeneratorTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct GeneratorSet {
    tasks: HashMap<Generator, GeneratorTask>,
}

/// Cloneable handle over the simulation: owns the state, the attached sinks,
/// and every scheduled task. Actions arrive from the input layer; snapshots
/// go out to whatever is rendering.
#[derive(Clone)]
pub struct SimController {
    state: Arc<Mutex<SimState>>,
    config: SimConfig,
    render: Arc<dyn RenderSink>,
    charts: Arc<dyn ChartSink>,
    log_sink: Arc<dyn LogSink>,
    generators: Arc<Mutex<GeneratorSet>>,
    sos_ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SimController {
    pub fn new(
        config: SimConfig,
        render: Arc<dyn RenderSink>,
        charts: Arc<dyn ChartSink>,
        log_sink: Arc<dyn LogSink>,
    ) -> Self {
        let state = SimState::new(config.demo_mode);
        Self {
            state: Arc::new(Mutex::new(state)),
            config,
            render,
            charts,
            log_sink,
            generators: Arc::new(Mutex::new(GeneratorSet::default())),
            sos_ticker: Arc::new(Mutex::new(None)),
        }
    }

    /// Controller with no presentation attached. Every emission is a no-op;
    /// the action surface and state behave identically.
    pub fn headless(config: SimConfig) -> Self {
        Self::new(
            config,
            Arc::new(NullRenderSink),
            Arc::new(NullChartSink),
            Arc::new(NullLogSink),
        )
    }

    /// Spawn the four periodic generators. Does nothing when demo mode is
    /// off; errors when the simulation is already running.
    pub async fn start_simulation(&self) -> Result<()> {
        if !self.state.lock().await.is_demo_mode() {
            info!("demo mode off; generators not started");
            return Ok(());
        }

        let mut set = self.generators.lock().await;
        if !set.tasks.is_empty() {
            bail!("simulation already running");
        }

        let mut spawn = |kind: Generator, cancel: CancellationToken, handle: JoinHandle<()>| {
            set.tasks.insert(kind, GeneratorTask { cancel, handle });
        };

        let cancel = CancellationToken::new();
        spawn(
            Generator::Sensors,
            cancel.clone(),
            tokio::spawn(generators::sensor_loop(
                self.state.clone(),
                self.render.clone(),
                self.config.sensor_interval,
                cancel,
            )),
        );
        let cancel = CancellationToken::new();
        spawn(
            Generator::Clock,
            cancel.clone(),
            tokio::spawn(generators::clock_loop(
                self.render.clone(),
                self.config.clock_interval,
                cancel,
            )),
        );
        let cancel = CancellationToken::new();
        spawn(
            Generator::Chatter,
            cancel.clone(),
            tokio::spawn(generators::chatter_loop(
                self.state.clone(),
                self.log_sink.clone(),
                self.config.chatter_interval,
                cancel,
            )),
        );
        let cancel = CancellationToken::new();
        spawn(
            Generator::Charts,
            cancel.clone(),
            tokio::spawn(generators::chart_loop(
                self.state.clone(),
                self.charts.clone(),
                self.config.chart_interval,
                cancel,
            )),
        );

        info!("simulation started ({} generators)", set.tasks.len());
        Ok(())
    }

    /// Cancel a single generator and wait for it to finish. Returns whether
    /// it was running.
    pub async fn stop_generator(&self, kind: Generator) -> bool {
        let task = self.generators.lock().await.tasks.remove(&kind);
        match task {
            Some(task) => {
                task.cancel.cancel();
                if let Err(err) = task.handle.await {
                    error!("{kind:?} generator failed to join: {err}");
                }
                true
            }
            None => false,
        }
    }

    /// Tear everything down: SOS ticker, then every generator. Waits for
    /// each task to actually finish; nothing may keep ticking afterwards.
    pub async fn destroy(&self) {
        self.stop_sos_hold().await;

        let tasks = std::mem::take(&mut self.generators.lock().await.tasks);
        for (kind, task) in tasks {
            task.cancel.cancel();
            if let Err(err) = task.handle.await {
                error!("{kind:?} generator failed to join: {err}");
            }
        }
    }

    /// Press-start on the SOS control. Spawns the 100 ms hold ticker; a
    /// press while one is already accumulating starts the count over.
    pub async fn start_sos_hold(&self) {
        let mut slot = self.sos_ticker.lock().await;
        if let Some(handle) = slot.take() {
            handle.abort();
        }

        let controller = self.clone();
        let tick = self.config.sos_tick;
        let threshold = self.config.sos_hold_threshold;

        let handle = tokio::spawn(async move {
            let mut hold = SosHold::new(tick, threshold);
            hold.press();
            let mut ticker = time::interval_at(time::Instant::now() + tick, tick);
            ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if hold.tick() {
                    controller.trigger_manual_sos().await;
                    break;
                }
            }
        });

        *slot = Some(handle);
    }

    /// Press-end (or pointer-leave) on the SOS control. Any accumulated hold
    /// short of the threshold is discarded.
    pub async fn stop_sos_hold(&self) {
        if let Some(handle) = self.sos_ticker.lock().await.take() {
            handle.abort();
            let _ = handle.await;
        }
    }

    /// Raise the emergency. Returns whether the transition happened (false
    /// when already in emergency).
    pub async fn trigger_manual_sos(&self) -> bool {
        let outcome = {
            let mut state = self.state.lock().await;
            state
                .trigger_manual_sos(Utc::now())
                .map(|(alert, entry)| (alert, entry, state.wearable_snapshot()))
        };

        match outcome {
            Some((alert, entry, snapshot)) => {
                self.log_sink.append(&entry);
                emit_wearable(self.render.as_ref(), &snapshot);
                info!("emergency raised for {} ({})", alert.device_id, alert.id);
                true
            }
            None => false,
        }
    }

    /// Scripted emergency (demo scenarios, drills). Same transition as the
    /// held SOS control.
    pub async fn simulate_emergency(&self) -> bool {
        self.trigger_manual_sos().await
    }

    pub async fn reset_to_normal(&self) {
        let snapshot = self.state.lock().await.reset_to_normal();
        emit_wearable(self.render.as_ref(), &snapshot);
        info!("device reset to normal operation");
    }

    pub async fn acknowledge_alert(&self, alert_id: &str) -> Result<()> {
        let entry = self
            .state
            .lock()
            .await
            .acknowledge_alert(alert_id, Utc::now())?;
        self.log_sink.append(&entry);
        Ok(())
    }

    pub async fn deploy_response(&self) -> Result<()> {
        let entry = self.state.lock().await.deploy_response(Utc::now())?;
        self.log_sink.append(&entry);
        self.render.view_changed(View::Emergency);
        info!("response team dispatched");
        Ok(())
    }

    pub async fn set_active_view(&self, view: View) {
        self.state.lock().await.set_active_view(view);
    }

    pub async fn toggle_demo_mode(&self) -> bool {
        self.state.lock().await.toggle_demo_mode()
    }

    /// Emit the current wearable display once, e.g. right after startup
    /// before any generator has ticked.
    pub async fn prime_display(&self) {
        let snapshot = self.state.lock().await.wearable_snapshot();
        emit_wearable(self.render.as_ref(), &snapshot);
    }

    /// Supply the one-shot chart series the AI panel shows alongside the
    /// live waveform. Called when the panel is first opened; only the
    /// waveform refreshes after that.
    pub async fn prime_charts(&self) {
        let emergency = self.state.lock().await.is_emergency_mode();
        let mut rng = StdRng::from_entropy();

        let [x, y, z] = charts::accelerometer_series(&mut rng);
        for (chart, samples) in [
            (chart_ids::ACCELEROMETER_X, x),
            (chart_ids::ACCELEROMETER_Y, y),
            (chart_ids::ACCELEROMETER_Z, z),
        ] {
            let labels = (0..samples.len()).map(|i| i.to_string()).collect();
            self.charts.replace_series(
                chart,
                SeriesUpdate {
                    labels,
                    samples,
                    emergency,
                },
            );
        }

        let samples = charts::location_precision_series(&mut rng);
        let labels = (0..samples.len()).rev().map(|i| format!("T-{i}")).collect();
        self.charts.replace_series(
            chart_ids::LOCATION_PRECISION,
            SeriesUpdate {
                labels,
                samples,
                emergency,
            },
        );
    }

    pub async fn is_emergency_mode(&self) -> bool {
        self.state.lock().await.is_emergency_mode()
    }

    pub async fn is_demo_mode(&self) -> bool {
        self.state.lock().await.is_demo_mode()
    }

    pub async fn active_view(&self) -> View {
        self.state.lock().await.active_view()
    }

    pub async fn subject_device(&self) -> Device {
        self.state.lock().await.subject().clone()
    }

    pub async fn devices(&self) -> Vec<Device> {
        self.state.lock().await.devices().to_vec()
    }

    pub async fn alerts(&self) -> Vec<Alert> {
        self.state.lock().await.alerts().to_vec()
    }

    pub async fn response_teams(&self) -> Vec<ResponseTeam> {
        self.state.lock().await.response_teams().to_vec()
    }

    pub async fn ai_models(&self) -> Vec<AiModel> {
        self.state.lock().await.ai_models().to_vec()
    }

    pub async fn comm_log(&self) -> Vec<LogEntry> {
        self.state.lock().await.comm_log().snapshot()
    }

    pub async fn dashboard_stats(&self) -> DashboardStats {
        self.state.lock().await.dashboard_stats()
    }

    pub async fn wearable_snapshot(&self) -> WearableSnapshot {
        self.state.lock().await.wearable_snapshot()
    }
}

pub(crate) fn emit_wearable(render: &dyn RenderSink, snapshot: &WearableSnapshot) {
    render.render_field(fields::HEART_RATE, &format!("{:.0}", snapshot.heart_rate));
    render.render_field(fields::STRESS_LEVEL, &format!("{:.0}", snapshot.stress_level));
    render.render_field(fields::LOCATION, &snapshot.location_name);
    render.render_field(fields::BATTERY, &format!("{:.0}%", snapshot.battery));
    render.render_field(
        fields::AI_CONFIDENCE,
        &format!("{:.0}", snapshot.ai_confidence),
    );
    render.render_field(
        fields::EMERGENCY_STATUS,
        if snapshot.emergency {
            "EMERGENCY DETECTED"
        } else {
            "Normal Operation"
        },
    );
}
