//! Ranked text search over entity display names.
//!
//! The screen only depends on the [`SearchRanker`] trait: given a display
//! name and a query it wants a non-negative relevance score, where zero
//! means "no match, exclude the row". [`FuzzyRanker`] is the default
//! implementation, backed by `nucleo-matcher`.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::cell::RefCell;

/// Scores display names against a filter query. Higher is more relevant,
/// zero excludes the name.
pub trait SearchRanker {
    fn score(&self, name: &str, query: &str) -> u32;
}

/// Default fuzzy ranker using nucleo-matcher.
pub struct FuzzyRanker {
    // Matcher keeps internal scratch buffers; reuse it across calls.
    matcher: RefCell<Matcher>,
}

impl FuzzyRanker {
    pub fn new() -> Self {
        Self {
            matcher: RefCell::new(Matcher::new(Config::DEFAULT)),
        }
    }
}

impl Default for FuzzyRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRanker for FuzzyRanker {
    fn score(&self, name: &str, query: &str) -> u32 {
        if query.is_empty() {
            return 0;
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut buf = Vec::new();
        let haystack = Utf32Str::new(name, &mut buf);
        // Shift by one so a genuine zero-score match still counts as a match.
        pattern
            .score(haystack, &mut self.matcher.borrow_mut())
            .map(|score| score + 1)
            .unwrap_or(0)
    }
}
