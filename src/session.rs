//! Per-game state machine for normal and hard mode sessions.

use std::time::{Duration, Instant};

use rand::{seq::index::sample, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    config::GameConfig,
    narrow::narrow,
    score::{score, FeedbackRow},
    words::WORD_LEN,
    EngineError, GuessError, Result,
};

/// Number of candidate words drawn for a hard mode session. Word lists
/// shorter than this are used whole.
pub const CANDIDATE_POOL_SIZE: usize = 9;

/// Which rules a session plays by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// A secret answer is fixed at creation.
    Normal,
    /// The engine defers committing to an answer for as long as the
    /// candidate pool allows.
    Hard,
}

/// Where a session is in its lifecycle. `Won` and `Lost` are terminal; only
/// an explicit reset leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Mode-specific secret state. Normal sessions always hold an answer; hard
/// sessions hold a pool until it collapses to one word.
#[derive(Debug, Clone)]
enum ModeState {
    Normal { answer: String },
    Hard { pool: Vec<String>, answer: Option<String> },
}

impl ModeState {
    fn init(mode: GameMode, config: &GameConfig, rng: &mut impl Rng) -> ModeState {
        match mode {
            GameMode::Normal => ModeState::Normal {
                answer: draw_answer(config, rng),
            },
            GameMode::Hard => ModeState::Hard {
                pool: draw_pool(config, rng),
                answer: None,
            },
        }
    }
}

fn draw_answer(config: &GameConfig, rng: &mut impl Rng) -> String {
    let index = rng.gen_range(0..config.word_list.len());
    config.word_list[index].to_lowercase()
}

fn draw_pool(config: &GameConfig, rng: &mut impl Rng) -> Vec<String> {
    let take = config.word_list.len().min(CANDIDATE_POOL_SIZE);
    sample(rng, config.word_list.len(), take)
        .iter()
        .map(|i| config.word_list[i].to_lowercase())
        .collect()
}

/// One player's game, identified by an opaque id.
///
/// A session is created and owned by a [`SessionStore`](crate::SessionStore);
/// callers interact with it through the store, which guarantees one mutation
/// at a time per session.
#[derive(Debug)]
pub struct GameSession {
    id: String,
    mode: GameMode,
    config: GameConfig,
    round: u32,
    guesses: Vec<String>,
    feedback: Vec<FeedbackRow>,
    status: GameStatus,
    state: ModeState,
    created_at: Instant,
}

impl GameSession {
    /// Creates a session playing `mode` under `config`.
    ///
    /// The RNG drives answer selection (normal) or candidate sampling
    /// (hard); pass a seeded one for deterministic behavior.
    pub fn new(
        id: impl Into<String>,
        mode: GameMode,
        config: GameConfig,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        config.validate()?;
        let state = ModeState::init(mode, &config, rng);
        Ok(GameSession {
            id: id.into(),
            mode,
            config,
            round: 0,
            guesses: Vec::new(),
            feedback: Vec::new(),
            status: GameStatus::InProgress,
            state,
            created_at: Instant::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn feedback_history(&self) -> &[FeedbackRow] {
        &self.feedback
    }

    /// Time since the session was created or last reset.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    fn committed_answer(&self) -> Option<&str> {
        match &self.state {
            ModeState::Normal { answer } => Some(answer),
            ModeState::Hard { answer, .. } => answer.as_deref(),
        }
    }

    /// Plays one round.
    ///
    /// The raw guess is trimmed and lower-cased, then rejected unless it is
    /// exactly five ASCII letters. Feedback comes from plain scoring when an
    /// answer is committed, or from the adversarial narrower while a hard
    /// session still has an open pool. Matching the committed answer wins;
    /// exhausting `max_rounds` without winning loses.
    pub fn submit_guess(&mut self, raw: &str) -> Result<FeedbackRow> {
        if self.status.is_terminal() {
            return Err(EngineError::GameOver);
        }

        let guess = normalize(raw);
        check_guess(&guess)?;

        let feedback = match &mut self.state {
            ModeState::Normal { answer } => score(&guess, answer),
            ModeState::Hard {
                answer: Some(answer),
                ..
            } => score(&guess, answer),
            ModeState::Hard { pool, answer } => {
                let narrowed = narrow(pool, &guess);
                if let Some(only) = narrowed.finalized() {
                    log::debug!("session {}: answer finalized to \"{only}\"", self.id);
                    *answer = Some(only.to_string());
                }
                *pool = narrowed.pool;
                narrowed.feedback
            }
        };

        self.guesses.push(guess.clone());
        self.feedback.push(feedback.clone());
        self.round += 1;
        debug_assert_eq!(self.round as usize, self.guesses.len());
        debug_assert_eq!(self.guesses.len(), self.feedback.len());
        debug_assert!(self.round <= self.config.max_rounds);

        if self.committed_answer() == Some(guess.as_str()) {
            self.status = GameStatus::Won;
            log::info!("session {} won in round {}", self.id, self.round);
        } else if self.round >= self.config.max_rounds {
            self.status = GameStatus::Lost;
            log::info!("session {} lost after round {}", self.id, self.round);
        }

        Ok(feedback)
    }

    /// Starts the session over under a new configuration, keeping its id
    /// and mode. Fails without touching the session if `config` is invalid.
    pub fn reset(&mut self, config: GameConfig, rng: &mut impl Rng) -> Result<()> {
        config.validate()?;
        self.state = ModeState::init(self.mode, &config, rng);
        self.config = config;
        self.round = 0;
        self.guesses.clear();
        self.feedback.clear();
        self.status = GameStatus::InProgress;
        self.created_at = Instant::now();
        log::debug!("session {} reset", self.id);
        Ok(())
    }

    /// The redacted view safe to hand to a player.
    ///
    /// The answer only appears once the game is over, and for hard mode only
    /// if the pool actually collapsed to one word before the end; a hard
    /// session lost with several candidates left reveals nothing.
    pub fn public_state(&self) -> PublicState {
        let over = self.status.is_terminal();
        let (answer, candidates_remaining, answer_finalized) = match &self.state {
            ModeState::Normal { answer } => (over.then(|| answer.clone()), None, None),
            ModeState::Hard { pool, answer } => (
                if over { answer.clone() } else { None },
                Some(pool.len()),
                Some(answer.is_some()),
            ),
        };

        PublicState {
            session_id: self.id.clone(),
            current_round: self.round,
            guesses: self.guesses.clone(),
            game_over: over,
            won: self.status == GameStatus::Won,
            max_rounds: self.config.max_rounds,
            answer,
            candidates_remaining,
            answer_finalized,
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn check_guess(word: &str) -> Result<(), GuessError> {
    let letters = word.chars().count();
    if letters != WORD_LEN {
        return Err(GuessError::WrongLength(letters));
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuessError::NotAlphabetic);
    }
    Ok(())
}

/// What a session looks like from the outside.
///
/// Serializes to camelCase; the optional fields are omitted entirely when
/// absent, so a normal mode state never mentions candidates and no state
/// leaks an unrevealed answer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicState {
    pub session_id: String,
    pub current_round: u32,
    pub guesses: Vec<String>,
    pub game_over: bool,
    pub won: bool,
    pub max_rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Hard mode only: size of the surviving candidate pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates_remaining: Option<usize>,
    /// Hard mode only: whether the pool has collapsed to a committed answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_finalized: Option<bool>,
}
