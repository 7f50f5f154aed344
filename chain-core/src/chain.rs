use serde::{Serialize, Deserialize};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fmt;

/// Seconds on the clock for each link of the chain.
pub const ROUND_SECONDS: u32 = 30;
/// Score awarded per second left on the clock when a guess lands.
pub const POINTS_PER_SECOND: u32 = 10;

/// One confirmed word in the chain: the word itself, its dictionary
/// definition, and the synonym candidates the next hint is drawn from.
/// Produced once per link by the lookup layer and immutable afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub definition: String,
    pub synonyms: Vec<String>,
}

/// Failure modes of the external dictionary lookup. None of these mutate
/// game state; the caller may retry the same operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NotFound,
    Network(String),
    Parse(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound => write!(f, "word not found"),
            LookupError::Network(msg) => write!(f, "network error: {}", msg),
            LookupError::Parse(msg) => write!(f, "unexpected dictionary response: {}", msg),
        }
    }
}

/// Result of feeding a guess through the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong word. Nothing changed; the player may try again.
    Mismatch,
    /// Correct word appended and a new hint selected.
    Continued,
    /// Correct word appended but every synonym was already used, so the
    /// chain is finished and the game is over.
    ChainComplete,
}

/// Canonical form used for all word comparisons and the used-words set.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Picks the next hidden target from `synonyms`, skipping anything already
/// present in `used` (which holds normalized words). Returns the empty
/// string when no candidate remains, the sentinel for "chain cannot
/// continue". Selection is uniform over the remaining candidates.
pub fn select_next_word<R: Rng + ?Sized>(
    synonyms: &[String],
    used: &HashSet<String>,
    rng: &mut R,
) -> String {
    let available: Vec<&String> = synonyms
        .iter()
        .filter(|word| !used.contains(&normalize(word)))
        .collect();
    available
        .choose(rng)
        .map(|word| (*word).clone())
        .unwrap_or_default()
}

/// Authoritative game state: the chain of confirmed words, the hidden
/// target the player must guess next, score, and clock. Owned exclusively
/// by the engine; the rendering layer only reads it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChainState {
    /// Insertion order is guess order; words are pairwise distinct
    /// case-insensitively.
    pub chain: Vec<WordEntry>,
    /// The word the player must guess next. Empty means the chain cannot
    /// continue.
    pub next_hint: String,
    pub score: u32,
    pub time_left: u32,
    pub game_over: bool,
    pub start_word: String,
}

impl ChainState {
    /// Fresh state for a new game rooted at `entry`.
    pub fn new<R: Rng + ?Sized>(entry: WordEntry, rng: &mut R) -> Self {
        let mut used = HashSet::new();
        used.insert(normalize(&entry.word));
        let next_hint = select_next_word(&entry.synonyms, &used, rng);
        log::debug!("new chain: start={} hint={}", entry.word, next_hint);
        Self {
            start_word: entry.word.clone(),
            chain: vec![entry],
            next_hint,
            score: 0,
            time_left: ROUND_SECONDS,
            game_over: false,
        }
    }

    /// The most recently confirmed word, i.e. the one currently shown to
    /// the player.
    pub fn current_word(&self) -> Option<&WordEntry> {
        self.chain.last()
    }

    /// Case-insensitive set of every word already in the chain. Derived on
    /// demand, never stored.
    pub fn used_words(&self) -> HashSet<String> {
        self.chain.iter().map(|entry| normalize(&entry.word)).collect()
    }

    /// Whether `raw_guess` (after trimming and lowercasing) equals the
    /// current hint. Always false when no hint remains.
    pub fn matches_hint(&self, raw_guess: &str) -> bool {
        !self.next_hint.is_empty() && normalize(raw_guess) == normalize(&self.next_hint)
    }

    /// Extends the chain with the entry fetched for a correct guess.
    ///
    /// The guessed word is appended in every case. If one of its synonyms
    /// is still unused it becomes the new hint, the remaining clock is
    /// converted to score, and the clock resets. If every synonym was
    /// already used the hint clears and the game ends; the terminal guess
    /// itself awards no points.
    ///
    /// Calling this on a finished chain mutates nothing and reports
    /// `ChainComplete`.
    pub fn apply_guess<R: Rng + ?Sized>(&mut self, entry: WordEntry, rng: &mut R) -> GuessOutcome {
        if self.game_over {
            return GuessOutcome::ChainComplete;
        }
        let mut used = self.used_words();
        used.insert(normalize(&entry.word));
        let next = select_next_word(&entry.synonyms, &used, rng);
        self.chain.push(entry);
        if next.is_empty() {
            self.next_hint.clear();
            self.game_over = true;
            log::debug!("chain complete after {} words, score={}", self.chain.len(), self.score);
            GuessOutcome::ChainComplete
        } else {
            self.score += self.time_left * POINTS_PER_SECOND;
            self.time_left = ROUND_SECONDS;
            self.next_hint = next;
            GuessOutcome::Continued
        }
    }

    /// One second elapsed. Returns the remaining time. No-op once the game
    /// is over.
    pub fn tick(&mut self) -> u32 {
        if !self.game_over {
            self.time_left = self.time_left.saturating_sub(1);
        }
        self.time_left
    }

    /// The clock ran out. Chain, score, and the unguessed hint are kept
    /// as-is; the hint becomes the "missed word" shown at game end.
    pub fn time_up(&mut self) {
        if !self.game_over {
            log::debug!("time up at {} words, score={}", self.chain.len(), self.score);
            self.game_over = true;
        }
    }
}
