//! Triage pipeline: signals → classification → {priority, resources} →
//! explanation.

pub mod classify;
pub mod engine;
pub mod explain;
pub mod explainability;
pub mod priority;
pub mod reply;
pub mod resources;
pub mod signals;
pub mod types;

pub use classify::classify;
pub use engine::TriageEngine;
pub use explain::explain;
pub use priority::priority_for;
pub use resources::compose_resources;
pub use signals::{normalize, NormalizedSignals, SensorSimulator};
pub use types::{
    ExplainabilityFactor, ExplainabilityReport, PriorityAssessment, ResourceSet,
    TriageAssessment, TriageSignal,
};
