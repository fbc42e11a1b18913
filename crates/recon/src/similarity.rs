//! Jaro similarity, without the Winkler prefix bonus.
//!
//! Characters match when equal and no further apart than the match window
//! (`max(len) / 2 - 1`). Transpositions are half the matched characters that
//! appear in a different order in the two strings.
//!
//! ```text
//! jaro = (m / |a| + m / |b| + (m - t) / m) / 3
//! ```

/// Similarity in `[0, 1]`; 1.0 only for identical non-empty strings, 0.0 when
/// either string is empty or nothing matches.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Fixed argument order so jaro(a, b) and jaro(b, a) run the same
    // arithmetic.
    let (a, b) = if (a.len(), &a) <= (b.len(), &b) { (a, b) } else { (b, a) };

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let window = (b.len() / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();
    let transpositions = (half_transpositions / 2) as f64;

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions) / m) / 3.0
}
