use crate::config::ScorerConfig;
use crate::core::{count_u32, fuzzy::{partial_ratio, ratio}};
use std::collections::BTreeSet;

/// Points from the name heuristics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameScores {
    /// Raw surname similarity when it meets the threshold, else 0
    pub surname_score: u32,
    pub middle_name_score: u32,
    /// Middle names both people share, lower-cased and sorted
    pub shared_middle_names: Vec<String>,
}

/// Compare surnames (last token of each full name) and middle names
pub fn score_names(
    full_name1: &str,
    full_name2: &str,
    middle_names1: &[String],
    middle_names2: &[String],
    config: &ScorerConfig,
) -> NameScores {
    let mut scores = NameScores::default();

    let surname1 = derive_surname(full_name1);
    let surname2 = derive_surname(full_name2);
    if !surname1.is_empty() && !surname2.is_empty() {
        let similarity = ratio(&surname1, &surname2);
        if similarity >= config.surname_similarity_threshold {
            scores.surname_score = similarity;
        }
    }

    let shared: Vec<String> = lowercase_set(middle_names1)
        .intersection(&lowercase_set(middle_names2))
        .cloned()
        .collect();
    if !shared.is_empty() {
        scores.middle_name_score = config.middle_name_match_score.saturating_mul(count_u32(shared.len()));
    }
    scores.shared_middle_names = shared;

    scores
}

/// Points when `surname` appears, fuzzily, inside `company_name`
pub fn score_company_name(
    surname: Option<&str>,
    company_name: Option<&str>,
    config: &ScorerConfig,
) -> u32 {
    let surname = surname.unwrap_or_default().trim().to_lowercase();
    let company_name = company_name.unwrap_or_default().trim().to_lowercase();
    if surname.is_empty() || company_name.is_empty() {
        return 0;
    }

    if partial_ratio(&surname, &company_name) >= config.surname_similarity_threshold {
        config.company_name_score
    } else {
        0
    }
}

/// Last whitespace-delimited token of a full name, lower-cased.
/// Empty when the name has no tokens.
pub fn derive_surname(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .last()
        .map(str::to_lowercase)
        .unwrap_or_default()
}

fn lowercase_set(names: &[String]) -> BTreeSet<String> {
    names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}
