//! Registry of live sessions with lazy TTL eviction.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, RwLock},
    time::Duration,
};

use rand::{rngs::StdRng, SeedableRng};
use uuid::Uuid;

use crate::{
    config::GameConfig,
    score::FeedbackRow,
    session::{GameMode, GameSession, PublicState},
    EngineError, Result,
};

/// How long an untouched session stays resident. The sweep runs lazily on
/// the next [`SessionStore::create`] call, not on a timer.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Owns every live [`GameSession`], keyed by opaque random ids.
///
/// The store is the only component holding sessions, and all mutation goes
/// through it: each session sits behind its own lock, so one guess or reset
/// runs at a time per session while state reads of different sessions (or
/// concurrent reads of the same one) proceed freely. The store itself is
/// `Send + Sync` and meant to be shared behind an [`Arc`] by a transport
/// layer.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::{GameConfig, GameMode, SessionStore};
///
/// let store = SessionStore::new();
/// let (id, state) = store.create(GameMode::Hard, GameConfig::default())?;
/// assert_eq!(state.candidates_remaining, Some(9));
///
/// let (feedback, state) = store.submit_guess(&id, "crane")?;
/// assert_eq!(state.current_round, 1);
/// #
/// # Ok::<_, wordle_engine::EngineError>(())
/// ```
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<RwLock<GameSession>>>>,
    rng: Mutex<StdRng>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an empty store with an entropy-seeded RNG and the default
    /// one-hour TTL.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty store drawing answers and candidate pools from
    /// `rng`. Tests pass a seeded RNG to make session contents predictable.
    pub fn with_rng(rng: StdRng) -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
            ttl: SESSION_TTL,
        }
    }

    /// Overrides the eviction TTL.
    pub fn with_ttl(self, ttl: Duration) -> Self {
        SessionStore { ttl, ..self }
    }

    /// Creates a session and returns its id with the initial public state.
    ///
    /// Sessions older than the TTL are purged before the new one is stored;
    /// ids are UUIDs with no reuse guarantee.
    pub fn create(&self, mode: GameMode, config: GameConfig) -> Result<(String, PublicState)> {
        let id = Uuid::new_v4().to_string();
        let session = {
            let mut rng = self.rng.lock().unwrap();
            GameSession::new(id.clone(), mode, config, &mut *rng)?
        };
        let state = session.public_state();

        let mut sessions = self.sessions.write().unwrap();
        sweep(&mut sessions, self.ttl);
        sessions.insert(id.clone(), Arc::new(RwLock::new(session)));
        log::debug!("created {mode:?} session {id} ({} live)", sessions.len());

        Ok((id, state))
    }

    fn session(&self, id: &str) -> Result<Arc<RwLock<GameSession>>> {
        let sessions = self.sessions.read().unwrap();
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::SessionNotFound(id.to_string()))
    }

    /// Plays one round of the identified session.
    pub fn submit_guess(&self, id: &str, raw: &str) -> Result<(FeedbackRow, PublicState)> {
        let session = self.session(id)?;
        let mut session = session.write().unwrap();
        let feedback = session.submit_guess(raw)?;
        Ok((feedback, session.public_state()))
    }

    /// The redacted state of the identified session.
    pub fn public_state(&self, id: &str) -> Result<PublicState> {
        let session = self.session(id)?;
        let state = session.read().unwrap().public_state();
        Ok(state)
    }

    /// Restarts the identified session under a new configuration.
    pub fn reset(&self, id: &str, config: GameConfig) -> Result<PublicState> {
        let session = self.session(id)?;
        let mut session = session.write().unwrap();
        {
            let mut rng = self.rng.lock().unwrap();
            session.reset(config, &mut *rng)?;
        }
        Ok(session.public_state())
    }

    /// Drops the identified session. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.write().unwrap().remove(id).is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sweep(sessions: &mut HashMap<String, Arc<RwLock<GameSession>>>, ttl: Duration) {
    let before = sessions.len();
    sessions.retain(|_, session| session.read().unwrap().age() <= ttl);
    let evicted = before - sessions.len();
    if evicted > 0 {
        log::debug!("evicted {evicted} idle session(s)");
    }
}
