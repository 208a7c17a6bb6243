use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Impact, KnowledgeBaseEntry, PrimarySymptom, PriorityLevel, RedFlag};

/// Classifier output for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSignal {
    pub primary_symptom: PrimarySymptom,
    /// Set semantics: each flag at most once, iteration in declaration order.
    pub red_flags: BTreeSet<RedFlag>,
}

impl TriageSignal {
    pub fn new(primary_symptom: PrimarySymptom, red_flags: impl IntoIterator<Item = RedFlag>) -> Self {
        Self {
            primary_symptom,
            red_flags: red_flags.into_iter().collect(),
        }
    }

    pub fn has_flag(&self, flag: RedFlag) -> bool {
        self.red_flags.contains(&flag)
    }

    pub fn has_any_flag(&self, flags: &[RedFlag]) -> bool {
        flags.iter().any(|f| self.red_flags.contains(f))
    }

    pub fn is_general_concern(&self) -> bool {
        self.primary_symptom == PrimarySymptom::GeneralConcern
    }
}

/// Priority tier plus the fixed display values attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAssessment {
    pub level: PriorityLevel,
    /// Display-only, in percent. Not a statistical estimate.
    pub confidence: u8,
    pub recommendation: String,
}

/// Up to `MAX_RESOURCES` knowledge-base entries, unique by id, in
/// composition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSet {
    entries: Vec<KnowledgeBaseEntry>,
}

impl ResourceSet {
    pub(crate) fn from_composed(entries: Vec<KnowledgeBaseEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[KnowledgeBaseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnowledgeBaseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_type(&self, kind: &str) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a KnowledgeBaseEntry;
    type IntoIter = std::slice::Iter<'a, KnowledgeBaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One weighted input shown in the explainability panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainabilityFactor {
    pub name: String,
    /// Relative emphasis in [0, 1]; factors need not sum to 1.
    pub weight: f32,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainabilityReport {
    pub factors: Vec<ExplainabilityFactor>,
    pub reasoning: String,
}

/// Everything the chat layer needs to render one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageAssessment {
    pub turn_id: Uuid,
    pub assessed_at: NaiveDateTime,
    pub signal: TriageSignal,
    pub priority: PriorityAssessment,
    /// e.g. "Mental Health - MIXED ANXIETY DEPRESSION".
    pub category: String,
    pub resources: ResourceSet,
    pub explainability: ExplainabilityReport,
    /// Assistant chat message for this turn.
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_signal_is_general_concern_without_flags() {
        let signal = TriageSignal::default();
        assert!(signal.is_general_concern());
        assert!(signal.red_flags.is_empty());
    }

    #[test]
    fn duplicate_flags_collapse() {
        let signal = TriageSignal::new(
            PrimarySymptom::Anxiety,
            [RedFlag::PanicAttack, RedFlag::PanicAttack, RedFlag::SevereDistress],
        );
        assert_eq!(signal.red_flags.len(), 2);
        assert!(signal.has_flag(RedFlag::PanicAttack));
        assert!(signal.has_any_flag(&[RedFlag::ViolenceRisk, RedFlag::SevereDistress]));
        assert!(!signal.has_any_flag(&[RedFlag::ViolenceRisk]));
    }

    #[test]
    fn signal_serializes_flags_as_tags() {
        let signal = TriageSignal::new(PrimarySymptom::Depression, [RedFlag::SuicidalIdeation]);
        let json = serde_json::to_string(&signal).unwrap();
        assert_eq!(
            json,
            r#"{"primarySymptom":"depression","redFlags":["suicidal ideation"]}"#
        );
    }

    #[test]
    fn resource_set_serializes_as_array() {
        let set = ResourceSet::from_composed(vec![KnowledgeBaseEntry::new(
            "a",
            "CBT technique",
            "Breathe.",
        )]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));
        assert!(set.contains_type("CBT technique"));
        assert_eq!(set.ids(), vec!["a"]);
    }
}
