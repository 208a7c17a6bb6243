use super::signals::NormalizedSignals;
use super::types::{ExplainabilityFactor, ExplainabilityReport, TriageSignal};
use crate::config::ELEVATED_HEART_RATE_BPM;
use crate::models::{Impact, Mood};

const TEXT_ANALYSIS_WEIGHT: f32 = 0.4;
const RED_FLAG_WEIGHT: f32 = 0.3;
const HEART_RATE_WEIGHT: f32 = 0.2;
const MOOD_WEIGHT: f32 = 0.1;

fn impact_if(fired: bool) -> Impact {
    if fired {
        Impact::Positive
    } else {
        Impact::Neutral
    }
}

/// Fixed-weight factor breakdown for the explainability panel.
pub fn factors(signal: &TriageSignal, signals: &NormalizedSignals) -> Vec<ExplainabilityFactor> {
    let heart_rate_elevated = signals
        .heart_rate
        .is_some_and(|hr| hr > ELEVATED_HEART_RATE_BPM);
    let mood_low = signals.mood.as_ref() == Some(&Mood::Low);

    vec![
        ExplainabilityFactor {
            name: "Text analysis".into(),
            weight: TEXT_ANALYSIS_WEIGHT,
            impact: impact_if(!signal.is_general_concern()),
        },
        ExplainabilityFactor {
            name: "Red flag detection".into(),
            weight: RED_FLAG_WEIGHT,
            impact: impact_if(!signal.red_flags.is_empty()),
        },
        ExplainabilityFactor {
            name: "Sensor data (HR)".into(),
            weight: HEART_RATE_WEIGHT,
            impact: impact_if(heart_rate_elevated),
        },
        ExplainabilityFactor {
            name: "Mood indicators".into(),
            weight: MOOD_WEIGHT,
            impact: impact_if(mood_low),
        },
    ]
}

pub fn report(
    signal: &TriageSignal,
    signals: &NormalizedSignals,
    reasoning: String,
) -> ExplainabilityReport {
    ExplainabilityReport {
        factors: factors(signal, signals),
        reasoning,
    }
}
