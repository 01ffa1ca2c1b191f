use crate::config::ScorerConfig;
use crate::core::dates::{days_between, DateError};

/// Points for an age gap in the sibling band
pub const SIBLING_SCORE: u32 = 30;

/// Points for an age gap in the parent/child band
pub const GENERATIONAL_SCORE: u32 = 25;

/// Allowed deviation in years from the configured generational gap
pub const GENERATIONAL_TOLERANCE_YEARS: f64 = 5.0;

const DAYS_PER_YEAR: f64 = 365.25;

/// Likely relationship implied by an age gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Sibling,
    Generational,
}

impl AgeBand {
    pub fn points(&self) -> u32 {
        match self {
            AgeBand::Sibling => SIBLING_SCORE,
            AgeBand::Generational => GENERATIONAL_SCORE,
        }
    }
}

/// Age difference in fractional years, regardless of who is older
pub fn age_difference_years(dob1: &str, dob2: &str) -> Result<f64, DateError> {
    Ok(days_between(dob1, dob2)? as f64 / DAYS_PER_YEAR)
}

/// Classify an age difference. The sibling band is checked first.
pub fn classify_age_gap(difference_years: f64, config: &ScorerConfig) -> Option<AgeBand> {
    if difference_years <= config.sibling_age_range {
        Some(AgeBand::Sibling)
    } else if (difference_years - config.generational_age_gap).abs() <= GENERATIONAL_TOLERANCE_YEARS {
        Some(AgeBand::Generational)
    } else {
        None
    }
}

/// Points for the age relationship between two dates of birth.
/// Malformed dates score 0.
pub fn score_age(dob1: &str, dob2: &str, config: &ScorerConfig) -> u32 {
    match age_difference_years(dob1, dob2) {
        Ok(difference) => classify_age_gap(difference, config)
            .map(|band| band.points())
            .unwrap_or(0),
        Err(e) => {
            tracing::debug!("Skipping age relationship: {}", e);
            0
        }
    }
}
