use std::ffi::OsString;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Mindtriage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming a knowledge-base JSON file to load instead of
/// the bundled dataset.
pub const KNOWLEDGE_BASE_ENV: &str = "MINDTRIAGE_KNOWLEDGE_BASE";

/// Upper bound on resources surfaced per turn.
pub const MAX_RESOURCES: usize = 4;
/// CBT entries appended for plain anxiety / depression.
pub const MAX_CBT_RESOURCES: usize = 2;

/// Heart rate strictly above this raises a panic flag (bpm).
pub const ELEVATED_HEART_RATE_BPM: u32 = 100;
/// Heart rate strictly above this raises severe physiological distress (bpm).
pub const SEVERE_HEART_RATE_BPM: u32 = 120;

/// Fixed confidence shown next to every priority, in percent.
pub const DISPLAY_CONFIDENCE: u8 = 88;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "mindtriage=info,mindtriage_lib=info"
}

/// Knowledge-base file named by the environment, if any.
pub fn knowledge_base_override() -> Option<PathBuf> {
    knowledge_base_from_env_value(std::env::var_os(KNOWLEDGE_BASE_ENV))
}

/// An unset or empty variable means "no override".
fn knowledge_base_from_env_value(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
