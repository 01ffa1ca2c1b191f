use crate::core::count_u32;
use crate::models::Ownership;
use std::collections::HashSet;

/// Points per company both people hold a significant-control stake in
pub const SHARED_PSC_SCORE: u32 = 20;

/// Upper bound on the ownership overlap score
pub const MAX_PSC_SCORE: u32 = 60;

/// Points for overlapping PSC holdings, capped at [`MAX_PSC_SCORE`]
pub fn score_ownership(holdings1: &[Ownership], holdings2: &[Ownership]) -> u32 {
    if holdings1.is_empty() || holdings2.is_empty() {
        return 0;
    }

    let companies1: HashSet<&str> = holdings1.iter().map(|h| h.company_number.as_str()).collect();
    let companies2: HashSet<&str> = holdings2.iter().map(|h| h.company_number.as_str()).collect();
    let shared = count_u32(companies1.intersection(&companies2).count());

    SHARED_PSC_SCORE.saturating_mul(shared).min(MAX_PSC_SCORE)
}
