//! End-to-end flows through the public API.

use rand::{rngs::StdRng, SeedableRng};
use serde_json::Value;
use wordle_engine::{
    ConfigManager, EngineError, GameConfig, GameMode, SessionStore,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn seeded_store() -> SessionStore {
    SessionStore::with_rng(StdRng::seed_from_u64(42))
}

#[test]
fn normal_game_runs_to_a_loss() {
    init_logging();
    let store = seeded_store();
    let (id, state) = store
        .create(GameMode::Normal, GameConfig::default())
        .unwrap();
    assert_eq!(state.max_rounds, 6);

    // "fuzzy" is not in the default list, so it can never win.
    let mut last = state;
    for round in 1..=6 {
        let (_, state) = store.submit_guess(&id, "fuzzy").unwrap();
        assert_eq!(state.current_round, round);
        last = state;
    }

    assert!(last.game_over);
    assert!(!last.won);
    let answer = last.answer.expect("a lost normal game reveals its answer");
    assert!(GameConfig::default().word_list.contains(&answer));

    assert!(matches!(
        store.submit_guess(&id, "fuzzy"),
        Err(EngineError::GameOver)
    ));
}

#[test]
fn hard_game_narrows_and_never_lies() {
    init_logging();
    let store = seeded_store();
    let (id, state) = store.create(GameMode::Hard, GameConfig::default()).unwrap();
    assert_eq!(state.candidates_remaining, Some(9));
    assert_eq!(state.answer_finalized, Some(false));

    let mut remaining = 9;
    for guess in ["crane", "light", "mouth", "party", "spend", "brick"] {
        let (feedback, state) = store.submit_guess(&id, guess).unwrap();
        let now = state.candidates_remaining.unwrap();
        assert!(now <= remaining, "candidate pool grew");
        assert!(now >= 1);
        remaining = now;

        if state.answer_finalized == Some(false) {
            assert_eq!(state.answer, None);
        }
        assert!(feedback.hits() + feedback.presents() <= 5);
        if state.game_over {
            break;
        }
    }
}

#[test]
fn public_state_wire_shape() {
    init_logging();
    let store = seeded_store();

    let (_, normal) = store
        .create(GameMode::Normal, GameConfig::default())
        .unwrap();
    let json = serde_json::to_value(&normal).unwrap();
    let object = json.as_object().unwrap();
    assert!(object.contains_key("sessionId"));
    assert!(object.contains_key("currentRound"));
    assert!(object.contains_key("maxRounds"));
    assert_eq!(object.get("gameOver"), Some(&Value::Bool(false)));
    // Nothing secret and nothing hard-mode-specific leaks.
    assert!(!object.contains_key("answer"));
    assert!(!object.contains_key("candidatesRemaining"));
    assert!(!object.contains_key("answerFinalized"));

    let (_, hard) = store.create(GameMode::Hard, GameConfig::default()).unwrap();
    let json = serde_json::to_value(&hard).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.get("candidatesRemaining"), Some(&Value::from(9)));
    assert_eq!(object.get("answerFinalized"), Some(&Value::Bool(false)));
    assert!(!object.contains_key("answer"));
}

#[test]
fn reset_swaps_configs_wholesale() {
    init_logging();
    let store = seeded_store();
    let (id, _) = store
        .create(GameMode::Normal, GameConfig::default())
        .unwrap();
    store.submit_guess(&id, "fuzzy").unwrap();

    let tiny = GameConfig {
        word_list: vec!["caves".to_string()],
        max_rounds: 2,
    };
    let state = store.reset(&id, tiny).unwrap();
    assert_eq!(state.current_round, 0);
    assert_eq!(state.max_rounds, 2);

    let (_, state) = store.submit_guess(&id, "caves").unwrap();
    assert!(state.won);
    assert_eq!(state.answer.as_deref(), Some("caves"));
}

#[tokio::test]
async fn curated_config_feeds_new_sessions() {
    init_logging();

    struct Friendly;

    #[async_trait::async_trait]
    impl wordle_engine::WordValidator for Friendly {
        async fn is_real_word(&self, word: &str) -> bool {
            word.chars().all(|c| c.is_ascii_lowercase())
        }
    }

    let mut manager = ConfigManager::default();
    let outcome = manager
        .add_words(&["crisp".to_string(), "Vexed".to_string()], &Friendly)
        .await;
    assert_eq!(outcome.added.len(), 2);

    let store = seeded_store();
    let (id, _) = store.create(GameMode::Normal, manager.config()).unwrap();
    let (_, state) = store.submit_guess(&id, "crisp").unwrap();
    assert_eq!(state.guesses, vec!["crisp".to_string()]);
}
