use serde::{Deserialize, Serialize};

/// Resource type for crisis lines and emergency contacts.
pub const CRISIS_RESOURCE: &str = "crisis resource";
/// Resource type for cognitive-behavioural coping techniques.
pub const CBT_TECHNIQUE: &str = "CBT technique";
/// Resource type for clinical pattern descriptions.
pub const DIAGNOSTIC_CRITERIA: &str = "diagnostic criteria";
/// Resource type for everyday self-care tips.
pub const SELF_CARE_STRATEGY: &str = "self-care strategy";

/// One typed resource snippet from the static knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl KnowledgeBaseEntry {
    pub fn new(id: &str, kind: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: kind.to_string(),
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_uses_dataset_name() {
        let entry = KnowledgeBaseEntry::new("cr-1", CRISIS_RESOURCE, "Call 988.");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"crisis resource\""));
        assert!(!json.contains("kind"));
    }
}
