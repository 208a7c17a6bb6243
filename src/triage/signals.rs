use rand::Rng;

use crate::models::{Mood, SensorSnapshot};

/// Sensor inputs as the classifier sees them. `None` means "no signal" and
/// disables the matching rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSignals {
    pub mood: Option<Mood>,
    pub heart_rate: Option<u32>,
}

/// Pass snapshot values through unchanged; an absent snapshot is "no signal".
pub fn normalize(snapshot: Option<&SensorSnapshot>) -> NormalizedSignals {
    match snapshot {
        Some(s) => NormalizedSignals {
            mood: s.mood.clone(),
            heart_rate: s.heart_rate,
        },
        None => NormalizedSignals::default(),
    }
}

/// Lowest simulated heart rate (inclusive, bpm).
pub const SIMULATED_HEART_RATE_MIN: u32 = 80;
/// Highest simulated heart rate (exclusive, bpm).
pub const SIMULATED_HEART_RATE_MAX: u32 = 120;

/// Demo sensor feed: reports a `low` mood and a heart rate drawn uniformly
/// from `80..120` bpm. Only used when a caller asks for it explicitly.
pub struct SensorSimulator<R: Rng> {
    rng: R,
}

impl<R: Rng> SensorSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn sample(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            mood: Some(Mood::Low),
            heart_rate: Some(
                self.rng
                    .gen_range(SIMULATED_HEART_RATE_MIN..SIMULATED_HEART_RATE_MAX),
            ),
        }
    }
}
