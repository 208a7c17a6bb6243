//! Symptom & red-flag classifier.
//!
//! A single ordered rule list is folded twice: once for the primary symptom
//! (each firing rule may overwrite it, so the last one wins) and once for red
//! flags (every firing rule contributes, collected into a set). The two folds
//! must stay separate; multi-category utterances depend on it.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::signals::{normalize, NormalizedSignals};
use super::types::TriageSignal;
use crate::config::{ELEVATED_HEART_RATE_BPM, SEVERE_HEART_RATE_BPM};
use crate::models::{PrimarySymptom, RedFlag, SensorSnapshot};

// ── Keyword sets ────────────────────────────────────────────

static DEPRESSION_CUES: &[&str] = &[
    "hopeless", "no point", "worthless", "empty", "sad", "depressed",
];

/// Only consulted once a depression cue has matched.
static SUICIDAL_CUES: &[&str] = &[
    "hopeless", "no point", "end it all", "kill myself", "suicide", "die",
];

static ANXIETY_CUES: &[&str] = &[
    "anxious", "worried", "panic", "nervous", "scared", "fear",
];

/// Only consulted once an anxiety cue has matched.
static PANIC_CUES: &[&str] = &["panic", "can't breathe", "heart racing"];

static TRAUMA_CUES: &[&str] = &[
    "flashback", "nightmare", "trauma", "triggered", "reliving",
];

static SUBSTANCE_CUES: &[&str] = &["drinking", "drugs", "high", "drunk", "addiction"];

static SELF_HARM_CUES: &[&str] = &["hurt myself", "harm myself", "kill myself", "suicide"];

static VIOLENCE_CUES: &[&str] = &["hurt others", "harm others", "violence", "kill them"];

// ── Rule model ──────────────────────────────────────────────

/// What one rule looks at.
struct RuleInput<'a> {
    /// Lower-cased utterance.
    text: &'a str,
    signals: &'a NormalizedSignals,
}

enum RuleCondition {
    TextAny(&'static [&'static str]),
    HeartRateAbove(u32),
    MoodDepressed,
    MoodElevated,
}

/// How a firing rule changes the primary symptom.
enum SymptomEffect {
    Unchanged,
    Overwrite(PrimarySymptom),
    /// Only replaces `GeneralConcern`.
    FillIfGeneral(PrimarySymptom),
    /// `Depression` becomes `MixedAnxietyDepression`, anything else `Anxiety`.
    CombineWithDepression,
}

/// A flag a firing rule raises, optionally gated on a narrower cue set.
struct FlagEffect {
    flag: RedFlag,
    also_requires: Option<&'static [&'static str]>,
}

struct ClassificationRule {
    /// Stable identifier for debug logs.
    id: &'static str,
    condition: RuleCondition,
    symptom: SymptomEffect,
    flags: Vec<FlagEffect>,
}

fn flag(flag: RedFlag) -> FlagEffect {
    FlagEffect {
        flag,
        also_requires: None,
    }
}

fn gated_flag(flag: RedFlag, cues: &'static [&'static str]) -> FlagEffect {
    FlagEffect {
        flag,
        also_requires: Some(cues),
    }
}

// ── Rule registry ───────────────────────────────────────────

/// Evaluation order matters for the symptom fold and must not be re-sorted.
static RULES: LazyLock<Vec<ClassificationRule>> = LazyLock::new(|| {
    vec![
        ClassificationRule {
            id: "SYM-001",
            condition: RuleCondition::TextAny(DEPRESSION_CUES),
            symptom: SymptomEffect::Overwrite(PrimarySymptom::Depression),
            flags: vec![gated_flag(RedFlag::SuicidalIdeation, SUICIDAL_CUES)],
        },
        ClassificationRule {
            id: "SYM-002",
            condition: RuleCondition::TextAny(ANXIETY_CUES),
            symptom: SymptomEffect::CombineWithDepression,
            flags: vec![gated_flag(RedFlag::PanicAttack, PANIC_CUES)],
        },
        ClassificationRule {
            id: "SYM-003",
            condition: RuleCondition::TextAny(TRAUMA_CUES),
            symptom: SymptomEffect::Overwrite(PrimarySymptom::Ptsd),
            flags: vec![flag(RedFlag::TraumaResponse)],
        },
        ClassificationRule {
            id: "SYM-004",
            condition: RuleCondition::TextAny(SUBSTANCE_CUES),
            symptom: SymptomEffect::Overwrite(PrimarySymptom::SubstanceAbuse),
            flags: vec![flag(RedFlag::SubstanceUseConcern)],
        },
        ClassificationRule {
            id: "SIG-001",
            condition: RuleCondition::HeartRateAbove(ELEVATED_HEART_RATE_BPM),
            symptom: SymptomEffect::FillIfGeneral(PrimarySymptom::Anxiety),
            flags: vec![flag(RedFlag::PanicAttack)],
        },
        ClassificationRule {
            id: "SIG-002",
            condition: RuleCondition::HeartRateAbove(SEVERE_HEART_RATE_BPM),
            symptom: SymptomEffect::Unchanged,
            flags: vec![flag(RedFlag::SevereDistress)],
        },
        ClassificationRule {
            id: "SIG-003",
            condition: RuleCondition::MoodDepressed,
            symptom: SymptomEffect::FillIfGeneral(PrimarySymptom::Depression),
            flags: vec![],
        },
        ClassificationRule {
            id: "SIG-004",
            condition: RuleCondition::MoodElevated,
            symptom: SymptomEffect::Overwrite(PrimarySymptom::BipolarConcern),
            flags: vec![flag(RedFlag::MoodInstability)],
        },
        ClassificationRule {
            id: "DNG-001",
            condition: RuleCondition::TextAny(SELF_HARM_CUES),
            symptom: SymptomEffect::Unchanged,
            flags: vec![flag(RedFlag::ImmediateSelfHarm)],
        },
        ClassificationRule {
            id: "DNG-002",
            condition: RuleCondition::TextAny(VIOLENCE_CUES),
            symptom: SymptomEffect::Unchanged,
            flags: vec![flag(RedFlag::ViolenceRisk)],
        },
    ]
});

// ── Matching logic ──────────────────────────────────────────

fn contains_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}

impl RuleCondition {
    fn matches(&self, input: &RuleInput<'_>) -> bool {
        match self {
            Self::TextAny(cues) => contains_any(input.text, cues),
            Self::HeartRateAbove(bpm) => input.signals.heart_rate.is_some_and(|hr| hr > *bpm),
            Self::MoodDepressed => input.signals.mood.as_ref().is_some_and(|m| m.is_depressed()),
            Self::MoodElevated => input.signals.mood.as_ref().is_some_and(|m| m.is_elevated()),
        }
    }
}

impl SymptomEffect {
    fn apply(&self, current: PrimarySymptom) -> PrimarySymptom {
        match self {
            Self::Unchanged => current,
            Self::Overwrite(symptom) => *symptom,
            Self::FillIfGeneral(symptom) if current == PrimarySymptom::GeneralConcern => *symptom,
            Self::FillIfGeneral(_) => current,
            Self::CombineWithDepression if current == PrimarySymptom::Depression => {
                PrimarySymptom::MixedAnxietyDepression
            }
            Self::CombineWithDepression => PrimarySymptom::Anxiety,
        }
    }
}

impl FlagEffect {
    fn raised(&self, input: &RuleInput<'_>) -> bool {
        self.also_requires
            .map_or(true, |cues| contains_any(input.text, cues))
    }
}

/// Classify an utterance with an optional sensor snapshot.
pub fn classify(text: &str, snapshot: Option<&SensorSnapshot>) -> TriageSignal {
    classify_with_signals(text, &normalize(snapshot))
}

/// Classify against already-normalized signals.
pub fn classify_with_signals(text: &str, signals: &NormalizedSignals) -> TriageSignal {
    let lower = text.to_lowercase();
    let input = RuleInput {
        text: &lower,
        signals,
    };

    let fired: Vec<&ClassificationRule> = RULES
        .iter()
        .filter(|rule| rule.condition.matches(&input))
        .collect();

    for rule in &fired {
        tracing::debug!(rule_id = rule.id, "Classification rule fired");
    }

    let primary_symptom = fired
        .iter()
        .fold(PrimarySymptom::default(), |current, rule| rule.symptom.apply(current));

    let red_flags: BTreeSet<RedFlag> = fired
        .iter()
        .flat_map(|rule| rule.flags.iter())
        .filter(|effect| effect.raised(&input))
        .map(|effect| effect.flag)
        .collect();

    TriageSignal {
        primary_symptom,
        red_flags,
    }
}
