use super::types::{PriorityAssessment, TriageSignal};
use crate::config::DISPLAY_CONFIDENCE;
use crate::models::{PriorityLevel, RedFlag};

/// Flags that make a turn critical on their own.
const CRITICAL_FLAGS: &[RedFlag] = &[RedFlag::ImmediateSelfHarm, RedFlag::ViolenceRisk];

/// Flags that make a turn high priority on their own.
const HIGH_FLAGS: &[RedFlag] = &[RedFlag::SuicidalIdeation, RedFlag::SevereDistress];

pub const CRITICAL_RECOMMENDATION: &str =
    "IMMEDIATE ATTENTION REQUIRED: Contact emergency services or crisis hotline immediately.";
pub const HIGH_RECOMMENDATION: &str =
    "Recommend urgent mental health evaluation within 24 hours. Consider crisis intervention resources.";
pub const ROUTINE_RECOMMENDATION: &str =
    "Recommend scheduling mental health consultation within 1-2 weeks. Monitor symptoms closely.";

/// Ordered decision list; first matching rule wins.
pub fn priority_level(signal: &TriageSignal) -> PriorityLevel {
    if signal.has_any_flag(CRITICAL_FLAGS) {
        PriorityLevel::Critical
    } else if signal.has_any_flag(HIGH_FLAGS) || !signal.red_flags.is_empty() {
        PriorityLevel::High
    } else if !signal.is_general_concern() {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    }
}

pub fn recommendation_for(level: PriorityLevel) -> &'static str {
    match level {
        PriorityLevel::Critical => CRITICAL_RECOMMENDATION,
        PriorityLevel::High => HIGH_RECOMMENDATION,
        PriorityLevel::Medium | PriorityLevel::Low => ROUTINE_RECOMMENDATION,
    }
}

/// Priority level with its fixed recommendation and display confidence.
pub fn priority_for(signal: &TriageSignal) -> PriorityAssessment {
    let level = priority_level(signal);
    PriorityAssessment {
        level,
        confidence: DISPLAY_CONFIDENCE,
        recommendation: recommendation_for(level).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrimarySymptom;

    fn signal(symptom: PrimarySymptom, flags: &[RedFlag]) -> TriageSignal {
        TriageSignal::new(symptom, flags.iter().copied())
    }

    #[test]
    fn no_symptom_no_flags_is_low() {
        let p = priority_for(&TriageSignal::default());
        assert_eq!(p.level, PriorityLevel::Low);
        assert_eq!(p.recommendation, ROUTINE_RECOMMENDATION);
    }

    #[test]
    fn symptom_without_flags_is_medium() {
        let p = priority_for(&signal(PrimarySymptom::Anxiety, &[]));
        assert_eq!(p.level, PriorityLevel::Medium);
        assert_eq!(p.recommendation, ROUTINE_RECOMMENDATION);
    }

    #[test]
    fn suicidal_ideation_is_high() {
        let p = priority_for(&signal(PrimarySymptom::Depression, &[RedFlag::SuicidalIdeation]));
        assert_eq!(p.level, PriorityLevel::High);
        assert_eq!(p.recommendation, HIGH_RECOMMENDATION);
    }

    #[test]
    fn severe_distress_is_high() {
        let p = priority_level(&signal(PrimarySymptom::Anxiety, &[RedFlag::SevereDistress]));
        assert_eq!(p, PriorityLevel::High);
    }

    #[test]
    fn any_other_flag_is_high() {
        for flag in [
            RedFlag::PanicAttack,
            RedFlag::TraumaResponse,
            RedFlag::SubstanceUseConcern,
            RedFlag::MoodInstability,
        ] {
            assert_eq!(
                priority_level(&signal(PrimarySymptom::GeneralConcern, &[flag])),
                PriorityLevel::High,
                "flag {flag}"
            );
        }
    }

    #[test]
    fn self_harm_is_critical_regardless_of_others() {
        let s = signal(
            PrimarySymptom::SubstanceAbuse,
            &[
                RedFlag::SuicidalIdeation,
                RedFlag::SevereDistress,
                RedFlag::ImmediateSelfHarm,
            ],
        );
        let p = priority_for(&s);
        assert_eq!(p.level, PriorityLevel::Critical);
        assert_eq!(p.recommendation, CRITICAL_RECOMMENDATION);
    }

    #[test]
    fn violence_is_critical() {
        let p = priority_level(&signal(PrimarySymptom::GeneralConcern, &[RedFlag::ViolenceRisk]));
        assert_eq!(p, PriorityLevel::Critical);
    }

    #[test]
    fn confidence_is_fixed() {
        for s in [
            TriageSignal::default(),
            signal(PrimarySymptom::Ptsd, &[RedFlag::TraumaResponse]),
            signal(PrimarySymptom::GeneralConcern, &[RedFlag::ViolenceRisk]),
        ] {
            assert_eq!(priority_for(&s).confidence, DISPLAY_CONFIDENCE);
        }
    }
}
