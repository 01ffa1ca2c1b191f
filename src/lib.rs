//! Family Connections - heuristic scoring of likely family ties between corporate officers
//!
//! Compares two officer records over names, dates of birth, shared appointments,
//! significant-control holdings, and addresses, and classifies the summed points
//! into a confidence tier.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::config::{ScorerConfig, Settings, SettingsError};
pub use crate::core::{score, ConnectionScorer, DistanceProvider, GeodesicDistance, HaversineDistance, UnavailableDistance};
pub use models::{Address, Confidence, ConnectionScore, Coordinates, OfficerRecord, Ownership, Role, ScoreBreakdown};
