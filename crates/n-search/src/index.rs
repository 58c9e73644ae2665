//! Search index — typo-tolerant, ranked lookup over a fixed name list.
//!
//! The index is built once and never mutated, so a query is a pure function
//! of the index and the query string. Sharing one index between threads
//! needs no locking.
//!
//! # Ranking
//!
//! 1. Match score (see [`matcher`](crate::matcher)), lower first.
//! 2. Whole-name similarity to the query (normalized Levenshtein), higher
//!    first. Puts `bg-red` ahead of `bg-red-500` for the query `bg-red`.
//! 3. Position in the original list.

use crate::matcher::best_occurrence;

/// Default similarity cutoff: 0.0 = exact only, 1.0 = match anything.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Default maximum number of results per query.
pub const DEFAULT_LIMIT: usize = 20;

/// Default offset normalizer: an occurrence starting `distance` chars in
/// costs as much as a full miss.
pub const DEFAULT_DISTANCE: usize = 100;

// ---------------------------------------------------------------------------
// SearchOptions
// ---------------------------------------------------------------------------

/// Tunables fixed at index construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Highest score that still counts as a match, in `[0.0, 1.0]`.
    pub threshold: f64,
    /// Maximum number of results returned per query.
    pub limit: usize,
    /// Offset normalizer for the proximity part of the score.
    pub distance: usize,
    /// Compare case-sensitively.
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            distance: DEFAULT_DISTANCE,
            case_sensitive: false,
        }
    }
}

impl SearchOptions {
    /// Set the threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Bring the threshold into `[0.0, 1.0]`. NaN falls back to the default.
    fn sanitized(mut self) -> Self {
        if self.threshold.is_nan() {
            log::warn!("search threshold is NaN, using {DEFAULT_THRESHOLD}");
            self.threshold = DEFAULT_THRESHOLD;
        } else if !(0.0..=1.0).contains(&self.threshold) {
            let clamped = self.threshold.clamp(0.0, 1.0);
            log::warn!(
                "search threshold {} outside [0.0, 1.0], clamped to {clamped}",
                self.threshold
            );
            self.threshold = clamped;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// SearchHit
// ---------------------------------------------------------------------------

/// One ranked result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    /// The matched name.
    pub item: &'a str,
    /// Position of the name in the list the index was built from.
    pub index: usize,
    /// Match score, lower is better.
    pub score: f64,
}

// ---------------------------------------------------------------------------
// SearchIndex
// ---------------------------------------------------------------------------

/// Immutable fuzzy index over a list of names.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Vec<String>,
    /// Match keys, case-folded unless the index is case-sensitive.
    keys: Vec<Vec<char>>,
    options: SearchOptions,
}

impl SearchIndex {
    /// Build an index over `items` (order is kept for tie-breaking).
    #[must_use]
    pub fn new<I, S>(items: I, options: SearchOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.sanitized();
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let keys = items
            .iter()
            .map(|item| fold(item, options.case_sensitive))
            .collect();
        log::debug!(
            "built search index over {} names (threshold {})",
            items.len(),
            options.threshold
        );
        Self {
            items,
            keys,
            options,
        }
    }

    /// The options the index was built with, after sanitizing.
    #[inline]
    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Number of indexed names.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index has no names.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ranked names matching `query`, at most `limit` of them.
    ///
    /// An empty or whitespace-only query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_hits(query)
            .into_iter()
            .map(|hit| hit.item.to_string())
            .collect()
    }

    /// Like [`search`](Self::search), with positions and scores.
    #[must_use]
    pub fn search_hits(&self, query: &str) -> Vec<SearchHit<'_>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let pattern = fold(query, self.options.case_sensitive);
        let folded_query: String = pattern.iter().collect();
        let mut ranked: Vec<(SearchHit<'_>, f64)> = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(index, key)| {
                let occ = best_occurrence(&pattern, key, self.options.distance)?;
                if occ.score > self.options.threshold {
                    return None;
                }
                let folded_item: String = key.iter().collect();
                let similarity = strsim::normalized_levenshtein(&folded_query, &folded_item);
                let hit = SearchHit {
                    item: &self.items[index],
                    index,
                    score: occ.score,
                };
                Some((hit, similarity))
            })
            .collect();

        ranked.sort_by(|(a, a_sim), (b, b_sim)| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| b_sim.total_cmp(a_sim))
                .then_with(|| a.index.cmp(&b.index))
        });
        ranked.truncate(self.options.limit);
        let hits: Vec<SearchHit<'_>> = ranked.into_iter().map(|(hit, _)| hit).collect();

        log::trace!("query {query:?}: {} hits", hits.len());
        hits
    }
}

fn fold(s: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        s.chars().collect()
    } else {
        s.chars().flat_map(char::to_lowercase).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalogue() -> Vec<&'static str> {
        vec![
            "bg-blue-500",
            "bg-red",
            "bg-red-100",
            "bg-red-500",
            "m-4",
            "mx-4",
            "p-4",
            "px-4",
            "text-red",
            "text-red-500",
            "text-xl",
        ]
    }

    fn index() -> SearchIndex {
        SearchIndex::new(catalogue(), SearchOptions::default())
    }

    // -- empty queries ------------------------------------------------------

    #[test]
    fn empty_query_returns_nothing() {
        assert!(index().search("").is_empty());
    }

    #[test]
    fn whitespace_query_returns_nothing() {
        assert!(index().search("   \t").is_empty());
    }

    #[test]
    fn empty_index_returns_nothing() {
        let idx = SearchIndex::new(Vec::<String>::new(), SearchOptions::default());
        assert!(idx.is_empty());
        assert!(idx.search("bg").is_empty());
    }

    // -- ranking ------------------------------------------------------------

    #[test]
    fn exact_name_ranks_first() {
        let results = index().search("bg-red");
        assert_eq!(results.first().map(String::as_str), Some("bg-red"));
        assert!(results.contains(&"bg-red-500".to_string()));
    }

    #[test]
    fn typo_still_matches() {
        let results = index().search("bg-rde");
        assert!(results.iter().take(3).any(|r| r == "bg-red"), "{results:?}");
    }

    #[test]
    fn case_insensitive_by_default() {
        assert_eq!(index().search("TEXT-XL").first().map(String::as_str), Some("text-xl"));
    }

    #[test]
    fn case_sensitive_option() {
        let idx = SearchIndex::new(
            catalogue(),
            SearchOptions {
                case_sensitive: true,
                ..SearchOptions::default()
            },
        );
        assert!(idx.search("TEXT-XL").is_empty());
        assert_eq!(idx.search("text-xl").first().map(String::as_str), Some("text-xl"));
    }

    #[test]
    fn scores_are_non_decreasing() {
        let idx = index();
        let hits = idx.search_hits("red");
        assert!(!hits.is_empty());
        for pair in hits.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn prefix_match_beats_infix_match() {
        let hits = index().search("p-4");
        assert_eq!(hits.first().map(String::as_str), Some("p-4"));
    }

    #[test]
    fn hits_report_original_position() {
        let idx = index();
        let hit = idx.search_hits("text-xl")[0];
        assert_eq!(hit.item, "text-xl");
        assert_eq!(hit.index, 10);
        assert!(hit.score.abs() < f64::EPSILON);
    }

    // -- threshold and limit ------------------------------------------------

    #[test]
    fn zero_threshold_is_exact_prefix_only() {
        let idx = SearchIndex::new(catalogue(), SearchOptions::default().with_threshold(0.0));
        assert_eq!(idx.search("text-red"), vec!["text-red", "text-red-500"]);
        assert!(idx.search("txt-red").is_empty());
    }

    #[test]
    fn full_threshold_matches_everything() {
        let idx = SearchIndex::new(catalogue(), SearchOptions::default().with_threshold(1.0));
        assert_eq!(idx.search("zzzz").len(), catalogue().len());
    }

    #[test]
    fn threshold_is_clamped() {
        let idx = SearchIndex::new(catalogue(), SearchOptions::default().with_threshold(7.5));
        assert!((idx.options().threshold - 1.0).abs() < f64::EPSILON);
        let idx = SearchIndex::new(catalogue(), SearchOptions::default().with_threshold(-1.0));
        assert!(idx.options().threshold.abs() < f64::EPSILON);
        let idx = SearchIndex::new(catalogue(), SearchOptions::default().with_threshold(f64::NAN));
        assert!((idx.options().threshold - DEFAULT_THRESHOLD).abs() < f64::EPSILON);
    }

    #[test]
    fn results_capped_at_limit() {
        let names: Vec<String> = (0..50).map(|i| format!("p-{i}")).collect();
        let idx = SearchIndex::new(names, SearchOptions::default());
        assert_eq!(idx.search("p-").len(), DEFAULT_LIMIT);

        let idx = SearchIndex::new(catalogue(), SearchOptions::default().with_limit(2));
        assert_eq!(idx.search("bg").len(), 2);
    }

    // -- purity -------------------------------------------------------------

    #[test]
    fn queries_are_idempotent() {
        let idx = index();
        let first = idx.search("red");
        let _ = idx.search("px");
        let _ = idx.search("");
        assert_eq!(idx.search("red"), first);
    }

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchIndex>();
    }
}
