//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`crate::EmojiResolver`].
///
/// Deserializes with defaults for missing fields, so a host application can
/// embed it in its own config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Suggestions shown when the caller does not ask for a specific count.
    pub default_limit: usize,
    /// Candidates fetched from the trie before a ranker reorders them.
    ///
    /// Larger pools let frequently used emoji surface from further down the
    /// alphabet.
    pub candidate_pool: usize,
    /// Lower-case the typed prefix before querying the trie.
    pub fold_case: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { default_limit: 8, candidate_pool: 32, fold_case: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"fold_case": false}"#).expect("deserialize");

        assert_eq!(config, ResolverConfig { default_limit: 8, candidate_pool: 32, fold_case: false });
    }

    #[test]
    fn empty_document_is_default() {
        let config: ResolverConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn serialized_config_reads_back() {
        let config = ResolverConfig { default_limit: 3, candidate_pool: 64, fold_case: true };
        let json = serde_json::to_string(&config).expect("serialize");

        assert_eq!(json, r#"{"default_limit":3,"candidate_pool":64,"fold_case":true}"#);
        assert_eq!(serde_json::from_str::<ResolverConfig>(&json).expect("deserialize"), config);
    }
}
