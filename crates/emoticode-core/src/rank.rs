//! Suggestion ranking policies.
//!
//! The trie orders completions alphabetically. Product-specific ordering,
//! such as putting a user's most used emoji first, plugs in through
//! [`Ranker`] after the trie has produced its candidates.

use std::{cmp::Reverse, collections::HashMap, fmt};

use crate::Suggestion;

/// Reorders completion candidates.
///
/// Implementations return an ordered subsequence of `candidates`: they may
/// drop or reorder entries, never invent new ones.
pub trait Ranker: fmt::Debug + Send + Sync {
    /// Rank `candidates`, which arrive in trie order.
    fn rank(&self, candidates: Vec<Suggestion>) -> Vec<Suggestion>;
}

/// Keeps trie order (ascending by shortcode).
#[derive(Debug, Clone, Copy, Default)]
pub struct Alphabetical;

impl Ranker for Alphabetical {
    fn rank(&self, candidates: Vec<Suggestion>) -> Vec<Suggestion> {
        candidates
    }
}

/// Orders by caller-supplied usage weight, highest first.
///
/// The sort is stable, so equal weights keep alphabetical order. Names
/// without a weight count as zero. Persisting weights across sessions is
/// the caller's job.
#[derive(Debug, Clone, Default)]
pub struct FrequencyRanker {
    weights: HashMap<String, u32>,
}

impl FrequencyRanker {
    /// Create a ranker with no weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of a canonical shortcode name.
    pub fn with_weight(mut self, name: impl Into<String>, weight: u32) -> Self {
        self.weights.insert(name.into(), weight);
        self
    }

    /// Count one more use of `name`.
    pub fn record(&mut self, name: &str) {
        let weight = self.weights.entry(name.to_owned()).or_default();
        *weight = weight.saturating_add(1);
    }

    /// Current weight of `name`.
    pub fn weight(&self, name: &str) -> u32 {
        self.weights.get(name).copied().unwrap_or(0)
    }
}

impl FromIterator<(String, u32)> for FrequencyRanker {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self { weights: iter.into_iter().collect() }
    }
}

impl Ranker for FrequencyRanker {
    fn rank(&self, mut candidates: Vec<Suggestion>) -> Vec<Suggestion> {
        candidates.sort_by_key(|candidate| Reverse(self.weight(&candidate.name)));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(name: &str) -> Suggestion {
        Suggestion { name: name.into(), code: String::new() }
    }

    fn order(ranked: &[Suggestion]) -> Vec<&str> {
        ranked.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn alphabetical_is_identity() {
        let input = vec![suggestion("a"), suggestion("b")];
        assert_eq!(Alphabetical.rank(input.clone()), input);
    }

    #[test]
    fn frequency_puts_heavy_first_and_keeps_ties_stable() {
        let ranker = FrequencyRanker::new().with_weight("joy", 5).with_weight("grin", 5);
        let ranked =
            ranker.rank(vec![suggestion("grin"), suggestion("grinning"), suggestion("joy")]);

        assert_eq!(order(&ranked), vec!["grin", "joy", "grinning"]);
    }

    #[test]
    fn record_increments() {
        let mut ranker = FrequencyRanker::new();
        ranker.record("joy");
        ranker.record("joy");

        assert_eq!(ranker.weight("joy"), 2);
        assert_eq!(ranker.weight("grin"), 0);
    }

    #[test]
    fn collect_from_pairs() {
        let ranker: FrequencyRanker = [("joy".to_string(), 3)].into_iter().collect();
        assert_eq!(ranker.weight("joy"), 3);
    }
}
