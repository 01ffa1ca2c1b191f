// Model exports
pub mod officer;
pub mod score;

pub use officer::{Address, Coordinates, OfficerRecord, Ownership, Role};
pub use score::{Confidence, ConnectionScore, ScoreBreakdown, HIGH_CONFIDENCE_SCORE, MEDIUM_CONFIDENCE_SCORE};
