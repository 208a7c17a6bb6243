use std::sync::Arc;

use uuid::Uuid;

use super::classify::classify_with_signals;
use super::explain::explain;
use super::explainability;
use super::priority::priority_for;
use super::reply::{assistant_reply, category_label};
use super::resources::compose_resources;
use super::signals::normalize;
use super::types::TriageAssessment;
use crate::knowledge::KnowledgeBase;
use crate::models::{PriorityLevel, SensorSnapshot};

/// Runs the full per-turn pipeline against a shared, read-only knowledge base.
///
/// Holds no per-session state: every `assess` call is independent and the
/// engine can be cloned or shared across threads freely.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    kb: Arc<KnowledgeBase>,
}

impl TriageEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Assess one utterance with an optional sensor snapshot.
    pub fn assess(&self, text: &str, snapshot: Option<&SensorSnapshot>) -> TriageAssessment {
        let signals = normalize(snapshot);
        let signal = classify_with_signals(text, &signals);
        let priority = priority_for(&signal);
        let resources = compose_resources(&self.kb, text, &signal);
        let reasoning = explain(text, &signal, &resources);
        let explainability = explainability::report(&signal, &signals, reasoning);
        let reply = assistant_reply(&signal, &resources);
        let turn_id = Uuid::new_v4();

        // No utterance text in logs.
        if priority.level == PriorityLevel::Critical {
            tracing::warn!(
                turn_id = %turn_id,
                symptom = signal.primary_symptom.as_str(),
                red_flags = signal.red_flags.len(),
                "Critical triage priority"
            );
        }
        tracing::info!(
            turn_id = %turn_id,
            symptom = signal.primary_symptom.as_str(),
            priority = priority.level.as_str(),
            red_flags = signal.red_flags.len(),
            resources = resources.len(),
            has_sensor_data = snapshot.is_some(),
            "Triage turn assessed"
        );

        TriageAssessment {
            turn_id,
            assessed_at: chrono::Local::now().naive_local(),
            category: category_label(signal.primary_symptom),
            signal,
            priority,
            resources,
            explainability,
            reply,
        }
    }
}
