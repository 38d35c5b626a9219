//! The word list bundled with the engine.

/// Length of every playable word.
pub const WORD_LEN: usize = 5;

/// Words shipped as the default pool for new configurations.
///
/// Callers normally extend or replace this list through
/// [`ConfigManager`](crate::ConfigManager); the engine itself never assumes
/// a guess is a member of any list.
pub static DEFAULT_WORDS: &[&str] = &[
    "brain", "happy", "cloud", "sport", "music",
    "dance", "world", "plant", "movie", "space",
    "light", "beach", "dream", "phone", "table",
    "house", "river", "smile", "heart", "peace",
    "power", "trust", "magic", "sleep", "green",
    "basic", "party", "stone", "fresh", "voice",
];

/// Checks the local word-shape rule: exactly five ASCII letters.
///
/// This is the same rule the dictionary collaborator falls back to when the
/// remote lookup is unreachable.
pub fn is_well_formed(word: &str) -> bool {
    word.chars().count() == WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic())
}
