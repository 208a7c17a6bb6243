use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::KnowledgeBaseEntry;

/// Immutable, ordered knowledge base.
///
/// Never mutated after construction, so a single instance can be shared
/// (`&KnowledgeBase` or `Arc<KnowledgeBase>`) by concurrent triage turns.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeBaseEntry>,
    /// Lower-cased `text` per entry, same indices as `entries`.
    lowered: Vec<String>,
}

impl KnowledgeBase {
    /// Build a store from already-validated entries, keeping their order.
    pub fn from_entries(entries: Vec<KnowledgeBaseEntry>) -> Self {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                tracing::warn!(id = %entry.id, "Duplicate knowledge base id");
            }
        }

        let lowered = entries.iter().map(|e| e.text.to_lowercase()).collect();
        Self { entries, lowered }
    }

    pub fn entries(&self) -> &[KnowledgeBaseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose text contains at least one whitespace-separated term of
    /// `query` (case-insensitive substring match), optionally restricted to
    /// an exact `kind`. An empty query matches nothing.
    pub fn search(&self, query: &str, kind: Option<&str>) -> Vec<&KnowledgeBaseEntry> {
        let lower = query.to_lowercase();
        let terms: Vec<&str> = lower.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .zip(&self.lowered)
            .filter(|(entry, _)| kind.map_or(true, |k| entry.kind == k))
            .filter(|(_, text)| terms.iter().any(|term| text.contains(term)))
            .map(|(entry, _)| entry)
            .collect()
    }

    /// All entries of exactly `kind`, in store order.
    pub fn by_type(&self, kind: &str) -> Vec<&KnowledgeBaseEntry> {
        self.entries.iter().filter(|e| e.kind == kind).collect()
    }

    /// Uniform pick among entries of `kind` (or the whole store).
    /// `None` when nothing qualifies.
    pub fn random_of<R: Rng + ?Sized>(
        &self,
        kind: Option<&str>,
        rng: &mut R,
    ) -> Option<&KnowledgeBaseEntry> {
        match kind {
            Some(kind) => self.by_type(kind).choose(rng).copied(),
            None => self.entries.choose(rng),
        }
    }

    /// Distinct resource types, in order of first appearance.
    pub fn types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.kind.as_str())
            .filter(|k| seen.insert(*k))
            .collect()
    }
}
