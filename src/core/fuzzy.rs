//! Fuzzy string similarity on a 0-100 scale

use strsim::normalized_levenshtein;

/// Whole-string similarity: normalized Levenshtein distance scaled to 0-100.
///
/// Symmetric and case-insensitive. Identical strings score 100; if either
/// string is empty the score is 0.
pub fn ratio(a: &str, b: &str) -> u32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    scaled(normalized_levenshtein(&a, &b))
}

/// Best-substring similarity: the shorter string is aligned against every
/// window of the same length in the longer one, keeping the best [`ratio`].
///
/// A short string fully contained in a longer one scores 100.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    if long.contains(short.as_str()) {
        return 100;
    }

    let long_chars: Vec<char> = long.chars().collect();
    let window = short.chars().count();

    let best = long_chars
        .windows(window)
        .map(|w| {
            let candidate: String = w.iter().collect();
            normalized_levenshtein(&short, &candidate)
        })
        .fold(0.0_f64, f64::max);

    scaled(best)
}

#[inline]
fn scaled(similarity: f64) -> u32 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u32
}
