//! Scoring a guess against one concrete answer.

use std::fmt::{self, Display};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::words::WORD_LEN;

/// How correct a single guessed letter is.
///
/// `Hit` means the letter sits in the answer at the same position. `Present`
/// means the answer contains the letter elsewhere, at a position no other
/// guessed letter has already claimed. `Miss` means the answer has no
/// unclaimed occurrence of the letter left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Hit,
    Present,
    Miss,
}

impl Grade {
    fn code(self) -> char {
        match self {
            Grade::Hit => 'H',
            Grade::Present => 'P',
            Grade::Miss => 'M',
        }
    }
}

/// One cell of a [`FeedbackRow`]: a guessed letter and its [`Grade`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradedLetter {
    pub letter: char,
    #[serde(rename = "result")]
    pub grade: Grade,
}

/// The feedback for one whole guess, in guess order.
///
/// Two rows compare equal only when every letter and every grade matches,
/// which is what the hard mode narrower keys its candidate partitions on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackRow([GradedLetter; WORD_LEN]);

impl FeedbackRow {
    /// Number of `Hit` cells.
    pub fn hits(&self) -> usize {
        self.0.iter().filter(|c| c.grade == Grade::Hit).count()
    }

    /// Number of `Present` cells.
    pub fn presents(&self) -> usize {
        self.0.iter().filter(|c| c.grade == Grade::Present).count()
    }

    /// True when the row carries no information about letter positions at
    /// all, i.e. every cell is a `Miss`.
    pub fn is_clean_miss(&self) -> bool {
        self.0.iter().all(|c| c.grade == Grade::Miss)
    }

    /// The grades alone, without their letters.
    pub fn grades(&self) -> [Grade; WORD_LEN] {
        self.0.map(|c| c.grade)
    }
}

impl Deref for FeedbackRow {
    type Target = [GradedLetter];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.grade.code())?;
        }
        Ok(())
    }
}

/// Classifies `guess` against `answer`, letter by letter.
///
/// Both inputs must already be normalized 5-letter words; this function
/// performs no validation and never fails. Repeated letters are handled the
/// way Wordle does: exact positions are claimed first, then each remaining
/// guess letter claims the leftmost unclaimed occurrence in the answer, so a
/// letter never scores more often than it appears in the answer.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::score::{score, Grade};
///
/// let row = score("boots", "robot");
/// assert_eq!(
///     row.grades(),
///     [Grade::Present, Grade::Hit, Grade::Present, Grade::Present, Grade::Miss],
/// );
/// ```
pub fn score(guess: &str, answer: &str) -> FeedbackRow {
    debug_assert_eq!(guess.chars().count(), WORD_LEN);
    debug_assert_eq!(answer.chars().count(), WORD_LEN);

    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();

    let mut grades = [Grade::Miss; WORD_LEN];
    let mut answer_used = [false; WORD_LEN];
    let mut guess_used = [false; WORD_LEN];

    // Exact positions claim their answer letter before anything else.
    for i in 0..WORD_LEN {
        if guess[i] == answer[i] {
            grades[i] = Grade::Hit;
            answer_used[i] = true;
            guess_used[i] = true;
        }
    }

    // Remaining guess letters consume unclaimed answer letters left to
    // right; once consumed, an answer letter cannot match again.
    for i in 0..WORD_LEN {
        if guess_used[i] {
            continue;
        }
        if let Some(j) = (0..WORD_LEN).find(|&j| !answer_used[j] && answer[j] == guess[i]) {
            grades[i] = Grade::Present;
            answer_used[j] = true;
        }
    }

    FeedbackRow(std::array::from_fn(|i| GradedLetter {
        letter: guess[i],
        grade: grades[i],
    }))
}
