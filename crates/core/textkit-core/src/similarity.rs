//! Edit-distance similarity
//!
//! Levenshtein distance and the normalized similarity score built on it.
//! Strings are compared as sequences of Unicode scalar values (`char`), so a
//! precomposed `é` is one unit while `e` followed by U+0301 is two. Grapheme
//! clusters are not segmented.

/// Compute the Levenshtein edit distance between two strings.
///
/// Uses two rolling rows sized to the shorter input, so memory is
/// O(min(m, n)) while time stays O(m * n).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Iterate the longer string in the outer loop.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, cl) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cs) in short.iter().enumerate() {
            let cost = if cl == cs { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost) // substitution
                .min(prev[j + 1] + 1) // deletion
                .min(curr[j] + 1); // insertion
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Normalized similarity between two strings in `[0, 1]`
///
/// Computed as `(max_len - distance) / max_len`, where `max_len` is the
/// char count of the longer input. Two empty strings are identical (`1.0`);
/// a non-empty string against `""` scores `0.0`.
///
/// # Example
///
/// ```
/// use textkit_core::similarity;
///
/// assert_eq!(similarity("hello", "hallo"), 0.8);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = edit_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Find the candidate most similar to `target`
///
/// Returns `None` when no candidate reaches `threshold`. Ties go to the
/// earliest candidate.
pub fn closest_match<'a, I>(target: &str, candidates: I, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        let score = similarity(target, candidate);
        tracing::trace!(query = target, candidate, score, "scored candidate");
        if score < threshold {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(candidate, _)| candidate)
}
