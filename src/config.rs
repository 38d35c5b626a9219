//! Game configuration and word-list curation.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    dict::WordValidator,
    words::{self, DEFAULT_WORDS},
    ConfigError,
};

pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 20;
pub const DEFAULT_MAX_ROUNDS: u32 = 6;

/// The settings a session plays under.
///
/// A config is immutable once a session binds it; changing the rules means
/// resetting the session with a replacement config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub word_list: Vec<String>,
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_list: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl GameConfig {
    /// Checks that the config can actually host a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_list.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&self.max_rounds) {
            return Err(ConfigError::MaxRoundsOutOfRange(self.max_rounds));
        }
        Ok(())
    }
}

/// What happened to each word offered to [`ConfigManager::add_words`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddedWords {
    /// Accepted and appended to the word list.
    pub added: Vec<String>,
    /// Already present in the word list.
    pub duplicates: Vec<String>,
    /// Rejected by the dictionary collaborator.
    pub invalid: Vec<String>,
}

impl AddedWords {
    pub fn any_added(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Curates a [`GameConfig`] between games.
///
/// The manager owns a working copy of the config; sessions receive clones
/// of it. New words pass through the dictionary collaborator before they
/// are accepted, which is the only place the engine consults it.
#[derive(Clone, Debug)]
pub struct ConfigManager {
    config: GameConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl ConfigManager {
    pub fn new(config: GameConfig) -> Self {
        ConfigManager { config }
    }

    /// The current configuration, cloned for handing to a session.
    pub fn config(&self) -> GameConfig {
        self.config.clone()
    }

    pub fn word_count(&self) -> usize {
        self.config.word_list.len()
    }

    /// Validates `words` against the dictionary and appends the survivors.
    ///
    /// Input is normalized first; entries that do not even have the right
    /// shape are dropped silently, words already configured are reported as
    /// duplicates, and repeats within one batch count once.
    pub async fn add_words(
        &mut self,
        words: &[String],
        validator: &dyn WordValidator,
    ) -> AddedWords {
        let (duplicates, candidates): (Vec<String>, Vec<String>) = words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| words::is_well_formed(w))
            .partition(|w| self.config.word_list.contains(w));
        let candidates: Vec<String> = candidates.into_iter().unique().collect();

        let checked = validator.validate_words(&candidates).await;
        self.config.word_list.extend(checked.valid.iter().cloned());
        log::debug!(
            "word list extended by {} word(s), {} rejected",
            checked.valid.len(),
            checked.invalid.len()
        );

        AddedWords {
            added: checked.valid,
            duplicates,
            invalid: checked.invalid,
        }
    }

    /// Removes the given words, returning the ones actually present.
    pub fn remove_words(&mut self, words: &[String]) -> Vec<String> {
        let mut removed = Vec::new();
        for word in words {
            let word = word.trim().to_lowercase();
            if let Some(index) = self.config.word_list.iter().position(|w| *w == word) {
                self.config.word_list.remove(index);
                removed.push(word);
            }
        }
        removed
    }

    /// Changes the round limit, subject to the usual bounds.
    pub fn set_max_rounds(&mut self, max_rounds: u32) -> Result<(), ConfigError> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&max_rounds) {
            return Err(ConfigError::MaxRoundsOutOfRange(max_rounds));
        }
        self.config.max_rounds = max_rounds;
        Ok(())
    }

    /// Restores the bundled word list and default round limit.
    pub fn reset_to_default(&mut self) {
        self.config = GameConfig::default();
    }
}
