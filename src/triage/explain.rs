//! Template-based explanation of a triage decision.
//!
//! Output is a pure function of `(text, signal, resources)`; no randomness,
//! no clock, no I/O.

use super::types::{ResourceSet, TriageSignal};
use crate::models::knowledge::{
    CBT_TECHNIQUE, CRISIS_RESOURCE, DIAGNOSTIC_CRITERIA, SELF_CARE_STRATEGY,
};
use crate::models::{PrimarySymptom, RedFlag};

/// Lexical triggers named in the opening sentence, in reporting order.
static TRIGGERS: &[(&[&str], &str)] = &[
    (&["hopeless", "no point"], "feeling hopeless"),
    (&["anxious", "worried"], "anxiety"),
    (&["panic", "can't breathe"], "panic symptoms"),
    (&["sad", "depressed"], "sadness"),
    (&["trauma", "flashback"], "trauma-related concerns"),
];

/// One sentence per resource type, in the order they are appended.
static RESOURCE_SENTENCES: &[(&str, &str)] = &[
    (
        CRISIS_RESOURCE,
        "I'm recommending crisis resources like the 988 Suicide & Crisis Lifeline because immediate professional support can be crucial in these situations. ",
    ),
    (
        CBT_TECHNIQUE,
        "I've included some coping techniques that have been shown to help manage these feelings in the moment. ",
    ),
    (
        DIAGNOSTIC_CRITERIA,
        "The symptoms you've described align with established clinical patterns, which helps me provide more targeted support. ",
    ),
    (
        SELF_CARE_STRATEGY,
        "I've also included some self-care strategies that many people find helpful. ",
    ),
];

const SAFETY_SENTENCE: &str = "I'm particularly concerned about your safety right now. ";
const PANIC_SENTENCE: &str = "I notice signs that you may be experiencing panic symptoms. ";
const CLOSING: &str =
    "Please remember that you're not alone, and seeking help is a sign of strength.";

/// Trigger phrases found in `text`, in fixed order.
pub fn triggers(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    TRIGGERS
        .iter()
        .filter(|(cues, _)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(_, label)| *label)
        .collect()
}

fn symptom_sentence(symptom: PrimarySymptom) -> &'static str {
    match symptom {
        PrimarySymptom::Depression => {
            "I identified signs that suggest you may be experiencing depression. "
        }
        PrimarySymptom::Anxiety => "I identified signs of anxiety. ",
        PrimarySymptom::MixedAnxietyDepression => {
            "I identified signs of both anxiety and depression. "
        }
        PrimarySymptom::Ptsd => "I identified signs that may be related to trauma or PTSD. ",
        PrimarySymptom::SubstanceAbuse => "I identified concerns related to substance use. ",
        PrimarySymptom::BipolarConcern => "I identified signs of mood instability. ",
        PrimarySymptom::GeneralConcern => "I want to provide you with appropriate support. ",
    }
}

fn red_flag_sentence(signal: &TriageSignal) -> Option<&'static str> {
    if signal.has_any_flag(&[RedFlag::SuicidalIdeation, RedFlag::ImmediateSelfHarm]) {
        Some(SAFETY_SENTENCE)
    } else if signal.has_flag(RedFlag::PanicAttack) {
        Some(PANIC_SENTENCE)
    } else {
        None
    }
}

/// Build the explanation shown with a triage decision.
pub fn explain(text: &str, signal: &TriageSignal, resources: &ResourceSet) -> String {
    let mut explanation = String::new();

    let found = triggers(text);
    if found.is_empty() {
        explanation.push_str("Based on your message, ");
    } else {
        explanation.push_str("Based on your mention of ");
        explanation.push_str(&found.join(" and "));
        explanation.push_str(", ");
    }

    explanation.push_str(symptom_sentence(signal.primary_symptom));

    if let Some(sentence) = red_flag_sentence(signal) {
        explanation.push_str(sentence);
    }

    for (kind, sentence) in RESOURCE_SENTENCES {
        if resources.contains_type(kind) {
            explanation.push_str(sentence);
        }
    }

    explanation.push_str(CLOSING);
    explanation
}
