use serde::{Deserialize, Serialize};

/// Total at or above which a connection is classified HIGH
pub const HIGH_CONFIDENCE_SCORE: u32 = 150;

/// Total at or above which a connection is classified MEDIUM
pub const MEDIUM_CONFIDENCE_SCORE: u32 = 100;

/// Confidence tier of a connection score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Classify a total score. Thresholds are fixed.
    pub fn from_score(total_score: u32) -> Self {
        if total_score >= HIGH_CONFIDENCE_SCORE {
            Confidence::High
        } else if total_score >= MEDIUM_CONFIDENCE_SCORE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "LOW",
            Confidence::Medium => "MEDIUM",
            Confidence::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points awarded by each sub-scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub surname_score: u32,
    pub middle_name_score: u32,
    pub age_score: u32,
    pub shared_appointment_score: u32,
    pub multiple_roles_score: u32,
    pub timing_score: u32,
    pub psc_score: u32,
    pub exact_match_score: u32,
    pub proximity_score: u32,
    pub company_name_score: u32,
}

impl ScoreBreakdown {
    /// Sum of all sub-scores, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        [
            self.surname_score,
            self.middle_name_score,
            self.age_score,
            self.shared_appointment_score,
            self.multiple_roles_score,
            self.timing_score,
            self.psc_score,
            self.exact_match_score,
            self.proximity_score,
            self.company_name_score,
        ]
        .into_iter()
        .fold(0, u32::saturating_add)
    }
}

/// Result of comparing two officer records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionScore {
    pub total_score: u32,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
    pub breakdown: ScoreBreakdown,
}
