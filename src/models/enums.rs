use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to map a wire/display label back onto one of the closed enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: '{value}'")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Variant order is declaration order, so `Ord` follows the listing.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(
    /// Best-fit clinical category for one utterance + sensor snapshot.
    PrimarySymptom {
        GeneralConcern => "general_concern",
        Depression => "depression",
        Anxiety => "anxiety",
        MixedAnxietyDepression => "mixed_anxiety_depression",
        Ptsd => "ptsd",
        SubstanceAbuse => "substance_abuse",
        BipolarConcern => "bipolar_concern",
    }
);

impl Default for PrimarySymptom {
    fn default() -> Self {
        Self::GeneralConcern
    }
}

impl PrimarySymptom {
    /// Display label: every underscore becomes a space ("mixed anxiety depression").
    /// Replacing only the first one would give "mixed anxiety_depression".
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

str_enum!(
    /// Safety-relevant tag raised by the classifier. Declared in rule order.
    RedFlag {
        SuicidalIdeation => "suicidal ideation",
        PanicAttack => "panic attack",
        TraumaResponse => "trauma response",
        SubstanceUseConcern => "substance use concern",
        SevereDistress => "severe physiological distress",
        MoodInstability => "mood instability",
        ImmediateSelfHarm => "immediate self-harm risk",
        ViolenceRisk => "violence risk",
    }
);

str_enum!(
    /// Urgency tier, ordered `Low < Medium < High < Critical`.
    PriorityLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
);

str_enum!(
    /// Direction an explainability factor pushed the assessment.
    Impact {
        Positive => "positive",
        Negative => "negative",
        Neutral => "neutral",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn primary_symptom_round_trip() {
        for (variant, s) in [
            (PrimarySymptom::GeneralConcern, "general_concern"),
            (PrimarySymptom::Depression, "depression"),
            (PrimarySymptom::Anxiety, "anxiety"),
            (PrimarySymptom::MixedAnxietyDepression, "mixed_anxiety_depression"),
            (PrimarySymptom::Ptsd, "ptsd"),
            (PrimarySymptom::SubstanceAbuse, "substance_abuse"),
            (PrimarySymptom::BipolarConcern, "bipolar_concern"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(PrimarySymptom::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn primary_symptom_defaults_to_general_concern() {
        assert_eq!(PrimarySymptom::default(), PrimarySymptom::GeneralConcern);
    }

    #[test]
    fn label_replaces_every_underscore() {
        assert_eq!(
            PrimarySymptom::MixedAnxietyDepression.label(),
            "mixed anxiety depression"
        );
        assert_eq!(PrimarySymptom::Ptsd.label(), "ptsd");
    }

    #[test]
    fn red_flag_tags_contain_spaces() {
        assert_eq!(RedFlag::ImmediateSelfHarm.as_str(), "immediate self-harm risk");
        assert_eq!(
            RedFlag::from_str("severe physiological distress").unwrap(),
            RedFlag::SevereDistress
        );
    }

    #[test]
    fn priority_levels_are_ordered() {
        assert!(PriorityLevel::Low < PriorityLevel::Medium);
        assert!(PriorityLevel::Medium < PriorityLevel::High);
        assert!(PriorityLevel::High < PriorityLevel::Critical);
    }

    #[test]
    fn unknown_value_reports_field() {
        let err = PriorityLevel::from_str("urgent").unwrap_err();
        assert_eq!(err.field, "PriorityLevel");
        assert_eq!(err.value, "urgent");
        assert!(err.to_string().contains("urgent"));
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&RedFlag::PanicAttack).unwrap();
        assert_eq!(json, "\"panic attack\"");
        let parsed: PrimarySymptom = serde_json::from_str("\"bipolar_concern\"").unwrap();
        assert_eq!(parsed, PrimarySymptom::BipolarConcern);
        let impact = serde_json::to_string(&Impact::Neutral).unwrap();
        assert_eq!(impact, "\"neutral\"");
    }
}
