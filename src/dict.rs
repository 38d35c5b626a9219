//! The dictionary-lookup collaborator used when extending the word list.
//!
//! Scoring and narrowing never touch this module; it is consulted only by
//! [`ConfigManager::add_words`](crate::ConfigManager::add_words), and the
//! session core stays fully synchronous.

use async_trait::async_trait;
use either::Either;
use futures::future::join_all;
use itertools::Itertools;

use crate::words;

const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// The words a validation run accepted and rejected, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCheck {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Decides whether words are real enough to enter the word list.
///
/// Implementations must not assume anything about call context beyond being
/// awaited; in particular the engine never holds a session lock across a
/// validation call.
#[async_trait]
pub trait WordValidator: Send + Sync {
    /// Whether a single word should be accepted.
    async fn is_real_word(&self, word: &str) -> bool;

    /// Checks every word concurrently and buckets the results.
    async fn validate_words(&self, words: &[String]) -> WordCheck {
        let results = join_all(words.iter().map(|w| self.is_real_word(w))).await;
        let (valid, invalid) = words
            .iter()
            .cloned()
            .zip(results)
            .partition_map(|(word, ok)| {
                if ok {
                    Either::Left(word)
                } else {
                    Either::Right(word)
                }
            });
        WordCheck { valid, invalid }
    }
}

/// Validator backed by the free dictionaryapi.dev lookup.
///
/// A word counts as real when the entry lookup answers with a success
/// status. When the lookup cannot be reached at all, the validator falls
/// back to the local shape rule instead of failing the whole operation.
pub struct DictionaryApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for DictionaryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryApi {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Points the validator at a different endpoint, e.g. a test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        DictionaryApi {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WordValidator for DictionaryApi {
    async fn is_real_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), word);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::warn!("dictionary lookup for \"{word}\" failed ({err}), using shape rule");
                words::is_well_formed(&word)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Validator accepting a fixed set of words, for tests.
    pub(crate) struct StubValidator {
        real: Vec<String>,
    }

    impl StubValidator {
        pub(crate) fn accepting(words: &[&str]) -> Self {
            StubValidator {
                real: words.iter().map(|w| w.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl WordValidator for StubValidator {
        async fn is_real_word(&self, word: &str) -> bool {
            self.real.iter().any(|w| w == word)
        }
    }
}
