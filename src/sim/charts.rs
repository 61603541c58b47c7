use rand::Rng;

use crate::sinks::ClassificationSnapshot;

pub const WAVEFORM_SAMPLES: usize = 100;
pub const ACCEL_SAMPLES: usize = 50;
pub const LOCATION_SAMPLES: usize = 20;

// Noise amplitude added on top of the carrier; distress audio is much
// rougher than routine traffic.
const NOISE_EMERGENCY: f64 = 0.8;
const NOISE_NORMAL: f64 = 0.3;

/// Simulated voice amplitude frame: a slow sine carrier phased off the clock
/// plus per-sample noise. Each frame is built from scratch; nothing carries
/// over between refreshes.
pub fn voice_waveform(emergency: bool, phase_ms: i64, rng: &mut impl Rng) -> Vec<f64> {
    let noise = if emergency { NOISE_EMERGENCY } else { NOISE_NORMAL };
    let phase = phase_ms as f64 * 0.001;
    (0..WAVEFORM_SAMPLES)
        .map(|i| (i as f64 * 0.1 + phase).sin() * 0.5 + rng.gen::<f64>() * noise)
        .collect()
}

/// Classifier readouts for the AI panel. Emergency readings are pinned to
/// the distress profile; normal operation jitters inside routine ranges.
pub fn classification(emergency: bool, rng: &mut impl Rng) -> ClassificationSnapshot {
    if emergency {
        ClassificationSnapshot {
            voice_stress_pct: 85,
            voice_confidence_pct: 96,
            gesture_pattern: "Distress Detected".into(),
            gesture_confidence_pct: 89,
        }
    } else {
        ClassificationSnapshot {
            voice_stress_pct: rng.gen_range(10..30),
            voice_confidence_pct: rng.gen_range(90..100),
            gesture_pattern: "Normal Movement".into(),
            gesture_confidence_pct: rng.gen_range(85..95),
        }
    }
}

/// Static accelerometer series (X, Y, Z) for panel initialization, each
/// sample in ±1 g.
pub fn accelerometer_series(rng: &mut impl Rng) -> [Vec<f64>; 3] {
    let mut axis = || -> Vec<f64> {
        (0..ACCEL_SAMPLES)
            .map(|_| (rng.gen::<f64>() - 0.5) * 2.0)
            .collect()
    };
    [axis(), axis(), axis()]
}

/// Static location-precision series for panel initialization, in meters.
pub fn location_precision_series(rng: &mut impl Rng) -> Vec<f64> {
    (0..LOCATION_SAMPLES)
        .map(|_| rng.gen::<f64>() * 5.0 + 1.0)
        .collect()
}
