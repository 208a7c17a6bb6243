use serde::{Deserialize, Serialize};

/// Mood label reported by the wearable / check-in widget.
///
/// The set is open: labels outside the known ones are kept verbatim in
/// `Other` and never match a mood rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Low,
    VeryLow,
    Agitated,
    Manic,
    Normal,
    Other(String),
}

impl Mood {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::VeryLow => "very_low",
            Self::Agitated => "agitated",
            Self::Manic => "manic",
            Self::Normal => "normal",
            Self::Other(label) => label,
        }
    }

    /// `low` or `very_low`.
    pub fn is_depressed(&self) -> bool {
        matches!(self, Self::Low | Self::VeryLow)
    }

    /// `agitated` or `manic`.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Agitated | Self::Manic)
    }
}

impl From<&str> for Mood {
    fn from(label: &str) -> Self {
        match label {
            "low" => Self::Low,
            "very_low" => Self::VeryLow,
            "agitated" => Self::Agitated,
            "manic" => Self::Manic,
            "normal" => Self::Normal,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Mood {
    fn from(label: String) -> Self {
        Mood::from(label.as_str())
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        mood.as_str().to_string()
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physiological / mood reading sampled for a single turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSnapshot {
    pub mood: Option<Mood>,
    /// Beats per minute.
    pub heart_rate: Option<u32>,
}

impl SensorSnapshot {
    pub fn new(mood: Option<Mood>, heart_rate: Option<u32>) -> Self {
        Self { mood, heart_rate }
    }

    pub fn with_heart_rate(heart_rate: u32) -> Self {
        Self {
            mood: None,
            heart_rate: Some(heart_rate),
        }
    }

    pub fn with_mood(mood: Mood) -> Self {
        Self {
            mood: Some(mood),
            heart_rate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_parse() {
        assert_eq!(Mood::from("very_low"), Mood::VeryLow);
        assert_eq!(Mood::from("manic"), Mood::Manic);
        assert_eq!(Mood::from("normal"), Mood::Normal);
    }

    #[test]
    fn unknown_label_is_kept_verbatim() {
        let mood = Mood::from("euphoric");
        assert_eq!(mood, Mood::Other("euphoric".into()));
        assert_eq!(mood.as_str(), "euphoric");
        assert!(!mood.is_depressed());
        assert!(!mood.is_elevated());
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(Mood::from("Low"), Mood::Other("Low".into()));
    }

    #[test]
    fn mood_groups() {
        assert!(Mood::Low.is_depressed());
        assert!(Mood::VeryLow.is_depressed());
        assert!(Mood::Agitated.is_elevated());
        assert!(Mood::Manic.is_elevated());
        assert!(!Mood::Normal.is_depressed());
        assert!(!Mood::Normal.is_elevated());
    }

    #[test]
    fn snapshot_deserializes_camel_case() {
        let snapshot: SensorSnapshot =
            serde_json::from_str(r#"{"mood":"agitated","heartRate":112}"#).unwrap();
        assert_eq!(snapshot.mood, Some(Mood::Agitated));
        assert_eq!(snapshot.heart_rate, Some(112));
    }

    #[test]
    fn snapshot_fields_are_optional() {
        let snapshot: SensorSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, SensorSnapshot::default());
    }

    #[test]
    fn snapshot_serializes_mood_as_label() {
        let json = serde_json::to_string(&SensorSnapshot::with_mood(Mood::VeryLow)).unwrap();
        assert!(json.contains("\"mood\":\"very_low\""));
    }
}
