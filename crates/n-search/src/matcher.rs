//! Approximate substring matching.
//!
//! Finds where a pattern occurs inside a text while tolerating typos. The
//! cost of an occurrence is its edit distance (insertions, deletions,
//! substitutions) to the pattern; the text outside the occurrence is free.
//!
//! The score folds cost and position together:
//!
//! ```text
//! score = errors / pattern_len + start / distance
//! ```
//!
//! so `0.0` is an exact occurrence at offset 0, and an occurrence that
//! needs every pattern character edited scores at least `1.0`.

/// One approximate occurrence of a pattern in a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occurrence {
    /// Edit distance between the pattern and `text[start..end]`.
    pub errors: usize,
    /// First char of the occurrence.
    pub start: usize,
    /// One past the last char of the occurrence.
    pub end: usize,
    /// Combined score, lower is better.
    pub score: f64,
}

/// Find the best-scoring occurrence of `pattern` in `text`.
///
/// `distance` controls how fast the score grows with the occurrence's start
/// offset; `0` means any offset other than the very start costs a full
/// `1.0`. Returns `None` for an empty pattern.
#[must_use]
pub fn best_occurrence(pattern: &[char], text: &[char], distance: usize) -> Option<Occurrence> {
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    // cost[i]: edit distance of pattern[..i] against the best substring of
    // text ending at the current column. start[i]: where that substring
    // begins.
    let mut cost: Vec<usize> = (0..=m).collect();
    let mut start = vec![0usize; m + 1];
    let mut next_cost = vec![0usize; m + 1];
    let mut next_start = vec![0usize; m + 1];

    let mut best = occurrence(m, m, 0, 0, distance);

    for (j, &tc) in text.iter().enumerate() {
        next_cost[0] = 0;
        next_start[0] = j + 1;
        for i in 1..=m {
            let substitute = cost[i - 1] + usize::from(pattern[i - 1] != tc);
            let skip_text = cost[i] + 1;
            let skip_pattern = next_cost[i - 1] + 1;

            let (mut c, mut s) = (substitute, start[i - 1]);
            if skip_text < c || (skip_text == c && start[i] < s) {
                (c, s) = (skip_text, start[i]);
            }
            if skip_pattern < c || (skip_pattern == c && next_start[i - 1] < s) {
                (c, s) = (skip_pattern, next_start[i - 1]);
            }
            next_cost[i] = c;
            next_start[i] = s;
        }
        std::mem::swap(&mut cost, &mut next_cost);
        std::mem::swap(&mut start, &mut next_start);

        let candidate = occurrence(m, cost[m], start[m], j + 1, distance);
        if candidate.score < best.score {
            best = candidate;
        }
    }

    Some(best)
}

fn occurrence(pattern_len: usize, errors: usize, start: usize, end: usize, distance: usize) -> Occurrence {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = if distance == 0 {
        if start == 0 { 0.0 } else { 1.0 }
    } else {
        start as f64 / distance as f64
    };
    Occurrence {
        errors,
        start,
        end,
        score: accuracy + proximity,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
