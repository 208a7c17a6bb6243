use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::store::KnowledgeBase;
use super::KnowledgeBaseError;
use crate::config;
use crate::models::KnowledgeBaseEntry;

/// Dataset shipped with the binary.
const BUNDLED_DATASET: &str = include_str!("../../resources/knowledge_base.json");

/// Where a knowledge base was loaded from (for logs and diagnostics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeBaseSource {
    Bundled,
    File(PathBuf),
}

impl std::fmt::Display for KnowledgeBaseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Record as it appears in the dataset. Every field is optional here so a
/// missing one is reported with its index instead of a bare serde error.
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    text: Option<String>,
}

impl KnowledgeBase {
    /// Load the dataset bundled into the binary.
    pub fn bundled() -> Result<Self, KnowledgeBaseError> {
        Self::from_json(BUNDLED_DATASET, KnowledgeBaseSource::Bundled)
    }

    /// Load a dataset from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            KnowledgeBaseError::Load(path.display().to_string(), e.to_string())
        })?;
        Self::from_json(&json, KnowledgeBaseSource::File(path.to_path_buf()))
    }

    /// Load from `path` when given, otherwise fall back to the bundled dataset.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, KnowledgeBaseError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    /// Resolve the configured source: an explicit path, then the
    /// `MINDTRIAGE_KNOWLEDGE_BASE` environment variable, then the bundled dataset.
    pub fn configured(path: Option<&Path>) -> Result<Self, KnowledgeBaseError> {
        let resolved = resolve_path(path, config::knowledge_base_override());
        Self::load_or_bundled(resolved.as_deref())
    }

    /// Parse and validate a JSON array of `{id, type, text}` records.
    pub fn from_json(json: &str, source: KnowledgeBaseSource) -> Result<Self, KnowledgeBaseError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)
            .map_err(|e| KnowledgeBaseError::Parse(source.to_string(), e.to_string()))?;

        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| validate_entry(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let kb = Self::from_entries(entries);
        tracing::info!(entries = kb.len(), source = %source, "Knowledge base loaded");
        Ok(kb)
    }
}

/// Explicit path first, then the environment override.
fn resolve_path(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or(from_env)
}

fn validate_entry(index: usize, raw: RawEntry) -> Result<KnowledgeBaseEntry, KnowledgeBaseError> {
    let id = required(raw.id, index, "id")?;
    let kind = required(raw.kind, index, "type")?;
    let text = required(raw.text, index, "text")?;
    Ok(KnowledgeBaseEntry { id, kind, text })
}

fn required(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, KnowledgeBaseError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(KnowledgeBaseError::MalformedEntry { index, field }),
    }
}
