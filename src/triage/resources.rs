use std::collections::HashSet;

use super::types::{ResourceSet, TriageSignal};
use crate::config::{MAX_CBT_RESOURCES, MAX_RESOURCES};
use crate::knowledge::KnowledgeBase;
use crate::models::knowledge::{CBT_TECHNIQUE, CRISIS_RESOURCE};
use crate::models::{KnowledgeBaseEntry, PrimarySymptom};

/// Compose the resources surfaced for one turn.
///
/// Candidates are direct text matches, then every crisis resource when any
/// red flag is raised, then the first CBT techniques for plain anxiety or
/// depression. Duplicates keep their first position; the result is capped
/// at `MAX_RESOURCES`.
pub fn compose_resources(kb: &KnowledgeBase, text: &str, signal: &TriageSignal) -> ResourceSet {
    let mut candidates: Vec<&KnowledgeBaseEntry> = kb.search(text, None);

    if !signal.red_flags.is_empty() {
        candidates.extend(kb.by_type(CRISIS_RESOURCE));
    }

    if matches!(
        signal.primary_symptom,
        PrimarySymptom::Anxiety | PrimarySymptom::Depression
    ) {
        candidates.extend(kb.by_type(CBT_TECHNIQUE).into_iter().take(MAX_CBT_RESOURCES));
    }

    let mut seen = HashSet::new();
    let entries = candidates
        .into_iter()
        .filter(|entry| seen.insert(entry.id.as_str()))
        .take(MAX_RESOURCES)
        .cloned()
        .collect();

    ResourceSet::from_composed(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::knowledge::{DIAGNOSTIC_CRITERIA, SELF_CARE_STRATEGY};
    use crate::models::RedFlag;

    fn test_store() -> KnowledgeBase {
        KnowledgeBase::from_entries(vec![
            KnowledgeBaseEntry::new("cr-1", CRISIS_RESOURCE, "Call or text 988 for support."),
            KnowledgeBaseEntry::new("cr-2", CRISIS_RESOURCE, "Text HOME to 741741."),
            KnowledgeBaseEntry::new("cbt-1", CBT_TECHNIQUE, "Box breathing for panic."),
            KnowledgeBaseEntry::new("cbt-2", CBT_TECHNIQUE, "Thought record for worry."),
            KnowledgeBaseEntry::new("cbt-3", CBT_TECHNIQUE, "Behavioral activation."),
            KnowledgeBaseEntry::new("dx-1", DIAGNOSTIC_CRITERIA, "Panic: sudden surge of fear."),
            KnowledgeBaseEntry::new("sc-1", SELF_CARE_STRATEGY, "Walk outdoors daily."),
        ])
    }

    #[test]
    fn nothing_matches_gives_empty_set() {
        let kb = test_store();
        let set = compose_resources(&kb, "zzz", &TriageSignal::default());
        assert!(set.is_empty());
    }

    #[test]
    fn text_matches_come_first() {
        let kb = test_store();
        let set = compose_resources(&kb, "walk", &TriageSignal::default());
        assert_eq!(set.ids(), vec!["sc-1"]);
    }

    #[test]
    fn red_flags_append_crisis_resources() {
        let kb = test_store();
        let signal = TriageSignal::new(PrimarySymptom::Ptsd, [RedFlag::TraumaResponse]);
        let set = compose_resources(&kb, "walk", &signal);
        assert_eq!(set.ids(), vec!["sc-1", "cr-1", "cr-2"]);
    }

    #[test]
    fn anxiety_appends_two_cbt_entries() {
        let kb = test_store();
        let signal = TriageSignal::new(PrimarySymptom::Anxiety, []);
        let set = compose_resources(&kb, "zzz", &signal);
        assert_eq!(set.ids(), vec!["cbt-1", "cbt-2"]);
    }

    #[test]
    fn mixed_symptom_gets_no_cbt_entries() {
        let kb = test_store();
        let signal = TriageSignal::new(PrimarySymptom::MixedAnxietyDepression, []);
        assert!(compose_resources(&kb, "zzz", &signal).is_empty());
    }

    #[test]
    fn duplicates_keep_first_position() {
        let kb = test_store();
        let signal = TriageSignal::new(PrimarySymptom::Depression, [RedFlag::SuicidalIdeation]);
        // "988" matches cr-1 directly; crisis step re-adds it.
        let set = compose_resources(&kb, "988", &signal);
        assert_eq!(set.ids(), vec!["cr-1", "cr-2", "cbt-1", "cbt-2"]);
    }

    #[test]
    fn result_is_capped_at_four() {
        let kb = test_store();
        let signal = TriageSignal::new(PrimarySymptom::Anxiety, [RedFlag::PanicAttack]);
        let set = compose_resources(&kb, "panic walk worry", &signal);
        assert_eq!(set.len(), MAX_RESOURCES);
        // Direct matches: cbt-1, cbt-2, dx-1, sc-1 fill the cap before crisis entries.
        assert_eq!(set.ids(), vec!["cbt-1", "cbt-2", "dx-1", "sc-1"]);
    }

    #[test]
    fn never_duplicates_ids() {
        let kb = test_store();
        let signal = TriageSignal::new(PrimarySymptom::Depression, [RedFlag::PanicAttack]);
        for text in ["", "988 741741", "panic breathing worry", "text for"] {
            let set = compose_resources(&kb, text, &signal);
            let ids: HashSet<&str> = set.ids().into_iter().collect();
            assert_eq!(ids.len(), set.len());
            assert!(set.len() <= MAX_RESOURCES);
        }
    }
}
