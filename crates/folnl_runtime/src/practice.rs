//! Block-ordering translation exercises.
//!
//! A [`ChallengeManager`] picks a corpus example, splits the expected answer
//! into blocks with opaque ids, shuffles them and remembers the correct order
//! until the challenge is solved or evicted. The manager is shared behind a
//! `Mutex`, so `&self` methods may be called from several threads.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use folnl_translator::{CORPUS, Direction};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

use crate::blocks;
use crate::config::DEFAULT_PRACTICE_CAPACITY;

/// Which directions a new challenge may use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PracticeMode {
    /// Always sentence to formula.
    NlToFol,
    /// Always formula to sentence.
    FolToNl,
    /// Either, picked at random.
    #[default]
    Mixed,
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NlToFol => "nl-to-fol",
            Self::FolToNl => "fol-to-nl",
            Self::Mixed => "mixed",
        })
    }
}

/// Returned for an unrecognized practice mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown practice mode: {0} (expected nl2fol, fol2nl, or mixed)")]
pub struct UnknownMode(pub String);

impl FromStr for PracticeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            return Ok(Self::Mixed);
        }
        match s.parse::<Direction>() {
            Ok(Direction::NlToFol) => Ok(Self::NlToFol),
            Ok(Direction::FolToNl) => Ok(Self::FolToNl),
            Err(_) => Err(UnknownMode(s.to_string())),
        }
    }
}

/// One shuffled block as shown to the learner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Opaque hex id.
    pub id: String,
    /// Text on the block.
    pub text: String,
}

/// A freshly created exercise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    /// Opaque hex id used to verify an answer.
    pub id: String,
    /// Direction the learner translates in.
    pub direction: Direction,
    /// Text to translate.
    pub prompt: &'static str,
    /// What to do with the blocks.
    pub instructions: &'static str,
    /// Answer blocks in shuffled order.
    pub blocks: Vec<Block>,
}

impl Challenge {
    /// Number of blocks in the expected answer.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Human-readable direction label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.direction.label()
    }
}

/// Outcome of checking a block selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the selection is the expected translation.
    pub correct: bool,
    /// Feedback for the learner.
    pub message: String,
    /// The assembled answer, once solved.
    pub expected: Option<String>,
}

impl Verdict {
    fn retry(message: impl Into<String>) -> Self {
        Self {
            correct: false,
            message: message.into(),
            expected: None,
        }
    }
}

/// Returns the instructions shown for `direction`.
#[must_use]
pub const fn instructions(direction: Direction) -> &'static str {
    match direction {
        Direction::NlToFol => "Arrange the blocks to build the matching logical formula.",
        Direction::FolToNl => {
            "Arrange the blocks to build the matching natural-language sentence."
        }
    }
}

#[derive(Debug)]
struct StoredChallenge {
    answer_order: Vec<String>,
    blocks_by_id: HashMap<String, String>,
    expected_text: String,
}

#[derive(Debug)]
struct Inner {
    rng: ChaCha8Rng,
    challenges: HashMap<String, StoredChallenge>,
    /// Challenge ids, oldest first.
    order: VecDeque<String>,
}

impl Inner {
    fn next_id(&mut self) -> String {
        format!("{:032x}", self.rng.r#gen::<u128>())
    }

    fn remove(&mut self, id: &str) {
        self.challenges.remove(id);
        self.order.retain(|open| open != id);
    }
}

/// Creates challenges and checks answers.
#[derive(Debug)]
pub struct ChallengeManager {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl Default for ChallengeManager {
    fn default() -> Self {
        Self::new(DEFAULT_PRACTICE_CAPACITY)
    }
}

impl ChallengeManager {
    /// Creates a manager seeded from OS entropy.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, ChaCha8Rng::from_entropy())
    }

    /// Creates a manager with a fixed seed, for reproducible sessions.
    #[must_use]
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(capacity: usize, rng: ChaCha8Rng) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner {
                rng,
                challenges: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Maximum number of open challenges.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of open challenges.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.lock().challenges.len()
    }

    /// Creates a challenge, evicting the oldest open ones beyond capacity.
    pub fn create_challenge(&self, mode: PracticeMode) -> Challenge {
        let mut inner = self.lock();

        let example = CORPUS[inner.rng.gen_range(0..CORPUS.len())];
        let direction = match mode {
            PracticeMode::NlToFol => Direction::NlToFol,
            PracticeMode::FolToNl => Direction::FolToNl,
            PracticeMode::Mixed => {
                if inner.rng.gen_bool(0.5) {
                    Direction::NlToFol
                } else {
                    Direction::FolToNl
                }
            }
        };

        let texts = blocks::split(example.answer(direction), direction);
        let mut answer_blocks = Vec::with_capacity(texts.len());
        for text in &texts {
            answer_blocks.push(Block {
                id: inner.next_id(),
                text: text.clone(),
            });
        }
        let mut shuffled = answer_blocks.clone();
        shuffled.shuffle(&mut inner.rng);

        let id = inner.next_id();
        let stored = StoredChallenge {
            answer_order: answer_blocks.iter().map(|b| b.id.clone()).collect(),
            blocks_by_id: answer_blocks.into_iter().map(|b| (b.id, b.text)).collect(),
            expected_text: blocks::assemble(&texts, direction),
        };
        inner.challenges.insert(id.clone(), stored);
        inner.order.push_back(id.clone());
        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.challenges.remove(&evicted);
                debug!(challenge = %evicted, "evicted practice challenge");
            }
        }

        debug!(challenge = %id, %direction, blocks = texts.len(), "created practice challenge");
        Challenge {
            id,
            direction,
            prompt: example.prompt(direction),
            instructions: instructions(direction),
            blocks: shuffled,
        }
    }

    /// Checks a selection of block ids against a challenge.
    ///
    /// Returns `None` if the challenge is unknown, solved or evicted. Blocks
    /// carrying the same text are interchangeable. A correct answer closes
    /// the challenge.
    pub fn verify(&self, challenge_id: &str, selection: &[String]) -> Option<Verdict> {
        let mut inner = self.lock();
        let stored = inner.challenges.get(challenge_id)?;

        if selection.is_empty() {
            return Some(Verdict::retry("Select blocks before checking your answer."));
        }
        if selection.iter().any(|id| !stored.blocks_by_id.contains_key(id)) {
            return Some(Verdict::retry(
                "One or more selected blocks are not part of this challenge.",
            ));
        }
        let expected_count = stored.answer_order.len();
        if selection.len() != expected_count {
            return Some(Verdict::retry(format!(
                "You have used {} of {expected_count} blocks. Keep going!",
                selection.len()
            )));
        }

        let chosen: HashSet<&String> = selection.iter().collect();
        let expected: HashSet<&String> = stored.answer_order.iter().collect();
        if chosen != expected {
            return Some(Verdict::retry(
                "Something is missing or extra. Double-check the blocks you used.",
            ));
        }

        let texts_match = selection
            .iter()
            .zip(&stored.answer_order)
            .all(|(picked, wanted)| stored.blocks_by_id[picked] == stored.blocks_by_id[wanted]);
        if !texts_match {
            return Some(Verdict::retry(
                "Not quite right. Adjust the order of the blocks and try again.",
            ));
        }

        let expected_text = stored.expected_text.clone();
        inner.remove(challenge_id);
        debug!(challenge = %challenge_id, "solved practice challenge");
        Some(Verdict {
            correct: true,
            message: "Nice work! That matches the expected translation.".to_string(),
            expected: Some(expected_text),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
