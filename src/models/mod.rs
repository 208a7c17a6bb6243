pub mod enums;
pub mod knowledge;
pub mod sensor;

pub use enums::{Impact, ParseEnumError, PrimarySymptom, PriorityLevel, RedFlag};
pub use knowledge::KnowledgeBaseEntry;
pub use sensor::{Mood, SensorSnapshot};
