use std::time::Duration;

/// Timing and mode knobs for the simulation.
///
/// Defaults match the production cadence. `BOTX_SIM_DEBUG=1` compresses every
/// interval so a full demo cycle plays out in a few seconds of wall clock.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Gates whether the periodic generators run at all.
    pub demo_mode: bool,
    /// Sensor drift cadence for the subject device.
    pub sensor_interval: Duration,
    /// Wall-clock readout cadence.
    pub clock_interval: Duration,
    /// Random radio chatter cadence.
    pub chatter_interval: Duration,
    /// Chart/waveform refresh cadence.
    pub chart_interval: Duration,
    /// Resolution of the SOS hold accumulator.
    pub sos_tick: Duration,
    /// Continuous hold required before the SOS control fires.
    pub sos_hold_threshold: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            demo_mode: true,
            sensor_interval: Duration::from_millis(2000),
            clock_interval: Duration::from_millis(1000),
            chatter_interval: Duration::from_millis(10_000),
            chart_interval: Duration::from_millis(1500),
            sos_tick: Duration::from_millis(100),
            sos_hold_threshold: Duration::from_millis(3000),
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        let debug_mode = std::env::var("BOTX_SIM_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if debug_mode {
            Self {
                sensor_interval: Duration::from_millis(200),
                clock_interval: Duration::from_millis(200),
                chatter_interval: Duration::from_millis(1000),
                chart_interval: Duration::from_millis(300),
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }
}
