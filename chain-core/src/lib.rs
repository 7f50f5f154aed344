//! Pure game logic for the word-association chain game.
//!
//! The player is shown a word and must guess a hidden related word; each
//! correct guess extends the chain and selects the next hidden target from
//! the guessed word's synonyms, skipping anything already used. The chain
//! ends when no candidate remains or the clock runs out.
//!
//! This crate performs no I/O: dictionary lookups, timers, and persistence
//! live in the frontend, which drives [`ChainEngine`] and feeds fetched
//! [`WordEntry`] values back in.

pub mod chain;
pub mod engine;
pub mod history;
pub mod starter;

pub use chain::{
    normalize, select_next_word, ChainState, GuessOutcome, LookupError, WordEntry,
    POINTS_PER_SECOND, ROUND_SECONDS,
};
pub use engine::{ChainEngine, Generation, Phase};
pub use history::FinishedGame;
pub use starter::{random_start_word, STARTER_WORDS};
