use std::collections::HashSet;

/// Fixed credit for one string fully containing the other. Coarse on
/// purpose: a guess that is a substring or superset of the true title gets
/// the same reward regardless of the length difference.
const CONTAINMENT_SCORE: f64 = 0.7;

pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Match strength between two strings in [0, 1].
///
/// Both inputs are lowercased and trimmed first. Equal strings score 1.0,
/// strings too short to form bigrams score 0.0, and containment
/// short-circuits at a fixed 0.7. Everything else falls through to the Dice
/// coefficient over character bigram sets. Symmetric in its arguments.
///
/// No threshold is applied here; callers compare the result against their
/// own cutoff to decide whether fuzzy credit applies.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }

    if a.chars().count() < 2 || b.chars().count() < 2 {
        return 0.0;
    }

    if a.contains(&b) || b.contains(&a) {
        return CONTAINMENT_SCORE;
    }

    let first = bigrams(&a);
    let second = bigrams(&b);

    let combined_size = first.len() + second.len();
    if combined_size == 0 {
        return 0.0;
    }

    let shared = first.intersection(&second).count();
    2.0 * shared as f64 / combined_size as f64
}

fn bigrams(s: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
