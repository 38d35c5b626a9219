//! Adversarial candidate narrowing for hard mode.
//!
//! Hard mode never picks a secret word up front. Instead it keeps a pool of
//! candidate answers and, on every guess, reports the feedback that commits
//! to as little as possible while staying truthful for every word that
//! survives. Candidates that would produce identical feedback are
//! indistinguishable to the player, so the pool is narrowed one feedback
//! partition at a time.

use crate::score::{score, FeedbackRow};

/// The outcome of narrowing a candidate pool against one guess.
#[derive(Debug, Clone)]
pub struct Narrowed {
    /// The surviving candidates, a non-empty subset of the input pool.
    pub pool: Vec<String>,
    /// The feedback every surviving candidate would have produced.
    pub feedback: FeedbackRow,
}

impl Narrowed {
    /// The committed answer, if the pool collapsed to a single word.
    pub fn finalized(&self) -> Option<&str> {
        match self.pool.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

/// Picks the least-informative truthful feedback for `guess` and the
/// candidates that remain consistent with it.
///
/// Every candidate is scored as if it were the answer and candidates with
/// identical rows are grouped into partitions, kept in pool order. The
/// selection rule, in order:
///
/// 1. A clean-miss partition (no hits, no presents) is always chosen when
///    one exists.
/// 2. Otherwise the minimum hit count and minimum present count are taken
///    independently across all partitions. With a non-zero present minimum,
///    the first partition matching it is chosen; otherwise the first
///    partition matching the hit minimum.
///
/// The two minimums need not land on the same partition: the selected
/// partition can have more hits than the hit-minimal one.
pub fn narrow(pool: &[String], guess: &str) -> Narrowed {
    debug_assert!(!pool.is_empty(), "candidate pool must never be empty");

    let mut partitions: Vec<(FeedbackRow, Vec<String>)> = Vec::new();
    for candidate in pool {
        let row = score(guess, candidate);
        match partitions.iter_mut().find(|(feedback, _)| *feedback == row) {
            Some((_, members)) => members.push(candidate.clone()),
            None => partitions.push((row, vec![candidate.clone()])),
        }
    }

    let (feedback, members) = partitions
        .iter()
        .find(|(feedback, _)| feedback.is_clean_miss())
        .or_else(|| {
            let min_hits = partitions.iter().map(|(f, _)| f.hits()).min()?;
            let min_presents = partitions.iter().map(|(f, _)| f.presents()).min()?;
            if min_presents > 0 {
                partitions.iter().find(|(f, _)| f.presents() == min_presents)
            } else {
                partitions.iter().find(|(f, _)| f.hits() == min_hits)
            }
        })
        .expect("a non-empty pool yields at least one partition");

    Narrowed {
        pool: members.clone(),
        feedback: feedback.clone(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn clean_miss_keeps_the_whole_pool() {
        let narrowed = narrow(&pool(&["crane", "trace", "react"]), "zzzzz");
        assert_eq!(narrowed.pool, pool(&["crane", "trace", "react"]));
        assert!(narrowed.feedback.is_clean_miss());
        assert!(narrowed.finalized().is_none());
    }

    #[test]
    fn clean_miss_beats_every_scored_partition() {
        // "moldy" shares no letter with the guess; both other candidates do.
        let narrowed = narrow(&pool(&["cigar", "moldy", "caste"]), "cigar");
        assert_eq!(narrowed.pool, pool(&["moldy"]));
        assert!(narrowed.feedback.is_clean_miss());
    }

    #[test]
    fn present_minimum_decides_when_nonzero() {
        // vs "abcde": "bavvv" scores 0 hits / 2 presents, "aecdx" scores
        // 3 hits / 1 present. The present minimum (1) picks "aecdx" even
        // though "bavvv" has strictly fewer hits.
        let narrowed = narrow(&pool(&["bavvv", "aecdx"]), "abcde");
        assert_eq!(narrowed.pool, pool(&["aecdx"]));
        assert_eq!(narrowed.feedback.hits(), 3);
        assert_eq!(narrowed.feedback.presents(), 1);
        assert_eq!(narrowed.finalized(), Some("aecdx"));
    }

    #[test]
    fn hit_minimum_decides_when_presents_bottom_out() {
        // vs "abcde": "vbcde" scores 4 hits / 0 presents, "azcdv" scores
        // 3 hits / 0 presents. Zero present minimum falls through to the
        // hit minimum.
        let narrowed = narrow(&pool(&["vbcde", "azcdv"]), "abcde");
        assert_eq!(narrowed.pool, pool(&["azcdv"]));
        assert_eq!(narrowed.feedback.hits(), 3);
    }

    #[test]
    fn indistinguishable_candidates_survive_together() {
        // "abbbb" and "acccc" produce the identical row against "aaaaa"
        // (one hit at position 0), so the chosen partition keeps both and
        // no answer is finalized.
        let narrowed = narrow(&pool(&["abbbb", "baaaa", "acccc"]), "aaaaa");
        assert_eq!(narrowed.pool, pool(&["abbbb", "acccc"]));
        assert!(narrowed.finalized().is_none());
    }

    #[test]
    fn first_matching_partition_wins_ties() {
        // Both candidates score exactly one hit but at different positions,
        // so they form two partitions; pool order breaks the tie.
        let narrowed = narrow(&pool(&["avvvv", "vbvvv"]), "abcde");
        assert_eq!(narrowed.pool, pool(&["avvvv"]));
        assert_eq!(narrowed.feedback.hits(), 1);
    }

    #[test]
    fn pool_never_grows_over_repeated_rounds() {
        let mut current = pool(&[
            "brain", "happy", "cloud", "sport", "music", "dance", "world", "plant", "movie",
        ]);
        for guess in ["crane", "light", "mouth", "happy", "brain"] {
            let narrowed = narrow(&current, guess);
            assert!(!narrowed.pool.is_empty());
            assert!(narrowed.pool.len() <= current.len());
            assert!(narrowed.pool.iter().all(|w| current.contains(w)));
            current = narrowed.pool;
        }
    }
}
