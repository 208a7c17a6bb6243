pub mod config;
pub mod knowledge; // Read-only resource store
pub mod models;
pub mod triage; // Classifier, priority, resources, explanation

use tracing_subscriber::EnvFilter;

pub use knowledge::{KnowledgeBase, KnowledgeBaseError, KnowledgeBaseSource};
pub use models::{
    KnowledgeBaseEntry, Mood, PrimarySymptom, PriorityLevel, RedFlag, SensorSnapshot,
};
pub use triage::{
    classify, compose_resources, explain, priority_for, ResourceSet, TriageAssessment,
    TriageEngine, TriageSignal,
};

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// clean for JSON output. Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "mindtriage=debug,mindtriage_lib=debug"
    } else {
        config::default_log_filter()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
