use crate::config::ScorerConfig;
use crate::core::distance::DistanceProvider;
use crate::models::Address;

/// Street-suffix abbreviations, applied in order as plain substring replacements
pub const SUFFIX_ABBREVIATIONS: [(&str, &str); 7] = [
    ("road", "rd"),
    ("street", "st"),
    ("avenue", "ave"),
    ("lane", "ln"),
    ("close", "cl"),
    ("court", "ct"),
    ("drive", "dr"),
];

/// Points from the address heuristics. At most one of the two is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AddressScores {
    pub exact_match_score: u32,
    pub proximity_score: u32,
    /// Measured distance in miles, when proximity was evaluated
    pub distance_miles: Option<f64>,
}

/// Lower-case, trim, and abbreviate street suffixes.
///
/// Replacement is not word-boundary aware, so "Stroad" becomes "strd".
pub fn normalize_address(address: &str) -> String {
    let mut normalized = address.trim().to_lowercase();
    for (long, short) in SUFFIX_ABBREVIATIONS {
        normalized = normalized.replace(long, short);
    }
    normalized
}

/// Score two addresses: exact normalized match first, otherwise distance.
/// Any distance failure counts as not nearby.
pub fn score_addresses<D>(
    address1: Option<&Address>,
    address2: Option<&Address>,
    config: &ScorerConfig,
    distance: &D,
) -> AddressScores
where
    D: DistanceProvider + ?Sized,
{
    let mut scores = AddressScores::default();
    let (Some(address1), Some(address2)) = (address1, address2) else {
        return scores;
    };

    let normalized1 = address1.full_address.as_deref().map(normalize_address).unwrap_or_default();
    let normalized2 = address2.full_address.as_deref().map(normalize_address).unwrap_or_default();
    if !normalized1.is_empty() && normalized1 == normalized2 {
        scores.exact_match_score = config.shared_address_score;
        return scores;
    }

    let (Some(from), Some(to)) = (address1.coordinates(), address2.coordinates()) else {
        return scores;
    };

    match distance.distance_miles(from, to) {
        Ok(miles) => {
            scores.distance_miles = Some(miles);
            if miles <= config.address_proximity_threshold {
                scores.proximity_score = config.nearby_address_score;
            }
        }
        Err(e) => {
            tracing::debug!("Skipping address proximity: {}", e);
        }
    }

    scores
}
