use rand::Rng;

use crate::chain::{ChainState, GuessOutcome, WordEntry};
use crate::history::FinishedGame;

/// Monotonic stamp identifying one game instance. Every async lookup and
/// every timer is tagged with the generation it was started for; results
/// carrying a superseded generation are discarded instead of mutating the
/// freshly started game.
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game yet, or a start lookup is in flight.
    Loading,
    /// A game is running and accepting guesses.
    Active,
    /// Terminal until an explicit restart replaces the whole state.
    GameOver,
}

/// Drives the chain through its Loading/Active/GameOver lifecycle.
///
/// The engine itself performs no I/O. The caller runs the dictionary lookup
/// and feeds the result back through the matching `complete_*` call, stamped
/// with the generation returned by the operation that requested it. At most
/// one operation is expected to be in flight at a time; the caller
/// serializes by disabling input while a lookup is pending.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainEngine {
    state: Option<ChainState>,
    generation: Generation,
    starting: bool,
}

impl ChainEngine {
    pub fn new() -> Self {
        Self {
            state: None,
            generation: 0,
            starting: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.starting {
            return Phase::Loading;
        }
        match &self.state {
            None => Phase::Loading,
            Some(state) if state.game_over => Phase::GameOver,
            Some(_) => Phase::Active,
        }
    }

    pub fn state(&self) -> Option<&ChainState> {
        self.state.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a result stamped with `generation` still targets the current
    /// game.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Begins a new game. Bumps the generation, which also invalidates any
    /// lookup or timer still in flight for the previous game. The prior
    /// state is retained until `complete_start` commits the replacement, so
    /// a failed start loses nothing.
    pub fn begin_start(&mut self) -> Generation {
        self.generation += 1;
        self.starting = true;
        log::debug!("starting game generation {}", self.generation);
        self.generation
    }

    /// Commits the start word's entry fetched for `generation`. Returns
    /// false when the result is stale and was discarded.
    pub fn complete_start<R: Rng + ?Sized>(
        &mut self,
        generation: Generation,
        entry: WordEntry,
        rng: &mut R,
    ) -> bool {
        if !self.is_current(generation) {
            log::debug!("discarding stale start result for generation {}", generation);
            return false;
        }
        self.starting = false;
        self.state = Some(ChainState::new(entry, rng));
        true
    }

    /// The start lookup failed. Nothing was committed; the phase falls back
    /// to whatever the retained state implies.
    pub fn fail_start(&mut self, generation: Generation) {
        if self.is_current(generation) {
            self.starting = false;
        }
    }

    /// Validates a guess against the current hint. A mismatch mutates
    /// nothing and is returned as a recoverable outcome. A match authorizes
    /// one lookup for the guessed word: fetch its entry, then call
    /// `complete_guess` with the returned generation.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<Generation, GuessOutcome> {
        match &self.state {
            Some(state) if !self.starting && !state.game_over => {
                if state.matches_hint(raw_guess) {
                    Ok(self.generation)
                } else {
                    Err(GuessOutcome::Mismatch)
                }
            }
            _ => Err(GuessOutcome::Mismatch),
        }
    }

    /// Applies the entry fetched for a matched guess. Returns None when the
    /// result is stale (a restart happened while the lookup was in flight)
    /// or the game already ended.
    pub fn complete_guess<R: Rng + ?Sized>(
        &mut self,
        generation: Generation,
        entry: WordEntry,
        rng: &mut R,
    ) -> Option<GuessOutcome> {
        if !self.is_current(generation) {
            log::debug!("discarding stale guess result for generation {}", generation);
            return None;
        }
        let state = self.state.as_mut()?;
        if state.game_over {
            return None;
        }
        Some(state.apply_guess(entry, rng))
    }

    /// One second elapsed on the game clock. Flips to GameOver when the
    /// clock reaches zero. No-op outside Active.
    pub fn tick(&mut self) {
        if self.phase() != Phase::Active {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            if state.tick() == 0 {
                state.time_up();
            }
        }
    }

    /// Explicit timeout, e.g. from a timer widget. No-op outside Active.
    pub fn time_up(&mut self) {
        if self.phase() != Phase::Active {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            state.time_up();
        }
    }

    /// The record handed to the history recorder once the game is over.
    /// The missed word's definition is supplied by the caller since fetching
    /// it is best-effort.
    pub fn finished_game(&self, missed_word_definition: String, played_at: u64) -> Option<FinishedGame> {
        let state = self.state.as_ref()?;
        if !state.game_over {
            return None;
        }
        Some(FinishedGame {
            start_word: state.start_word.clone(),
            score: state.score,
            chain: state.chain.clone(),
            missed_word: state.next_hint.clone(),
            missed_word_definition,
            played_at,
        })
    }
}

impl Default for ChainEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(word: &str, synonyms: &[&str]) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            definition: format!("definition of {}", word),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn started(seed: u64) -> (ChainEngine, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = ChainEngine::new();
        let generation = engine.begin_start();
        engine.complete_start(generation, entry("happy", &["glad"]), &mut rng);
        (engine, rng)
    }

    #[test]
    fn start_transitions_loading_to_active() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = ChainEngine::new();
        assert_eq!(engine.phase(), Phase::Loading);
        let generation = engine.begin_start();
        assert_eq!(engine.phase(), Phase::Loading);
        assert!(engine.complete_start(generation, entry("happy", &["glad"]), &mut rng));
        assert_eq!(engine.phase(), Phase::Active);
        assert_eq!(engine.state().unwrap().start_word, "happy");
    }

    #[test]
    fn failed_first_start_stays_loading() {
        let mut engine = ChainEngine::new();
        let generation = engine.begin_start();
        engine.fail_start(generation);
        assert_eq!(engine.phase(), Phase::Loading);
        assert!(engine.state().is_none());
    }

    #[test]
    fn failed_restart_retains_running_game() {
        let (mut engine, _) = started(1);
        let before = engine.state().cloned();
        let generation = engine.begin_start();
        assert_eq!(engine.phase(), Phase::Loading);
        engine.fail_start(generation);
        assert_eq!(engine.phase(), Phase::Active);
        assert_eq!(engine.state().cloned(), before);
    }

    #[test]
    fn stale_start_result_is_discarded() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = ChainEngine::new();
        let first = engine.begin_start();
        // The player restarts while the first lookup is still in flight.
        let second = engine.begin_start();
        assert!(!engine.complete_start(first, entry("stale", &["old"]), &mut rng));
        assert!(engine.state().is_none());
        assert!(engine.complete_start(second, entry("happy", &["glad"]), &mut rng));
        assert_eq!(engine.state().unwrap().start_word, "happy");
    }

    #[test]
    fn mismatched_guess_changes_nothing() {
        let (mut engine, _) = started(1);
        let before = engine.clone();
        assert_eq!(engine.submit_guess("wrong"), Err(GuessOutcome::Mismatch));
        assert_eq!(engine, before);
    }

    #[test]
    fn matched_guess_completes_through_generation() {
        let (mut engine, mut rng) = started(1);
        let generation = engine.submit_guess("glad").expect("hint is glad");
        let outcome = engine.complete_guess(generation, entry("glad", &["joyful"]), &mut rng);
        assert_eq!(outcome, Some(GuessOutcome::Continued));
        let state = engine.state().unwrap();
        assert_eq!(state.chain.len(), 2);
        assert_eq!(state.next_hint, "joyful");
    }

    #[test]
    fn stale_guess_result_is_discarded() {
        let (mut engine, mut rng) = started(1);
        let generation = engine.submit_guess("glad").expect("hint is glad");
        // Restart races the in-flight guess lookup.
        let restart = engine.begin_start();
        engine.complete_start(restart, entry("bright", &["shiny"]), &mut rng);
        let before = engine.clone();
        assert_eq!(engine.complete_guess(generation, entry("glad", &["joyful"]), &mut rng), None);
        assert_eq!(engine, before);
    }

    #[test]
    fn exhausting_guess_ends_the_game() {
        let (mut engine, mut rng) = started(1);
        let generation = engine.submit_guess("glad").expect("hint is glad");
        let outcome = engine.complete_guess(generation, entry("glad", &["happy"]), &mut rng);
        assert_eq!(outcome, Some(GuessOutcome::ChainComplete));
        assert_eq!(engine.phase(), Phase::GameOver);
        let record = engine.finished_game(String::new(), 0).unwrap();
        assert_eq!(record.missed_word, "");
        assert_eq!(record.chain.len(), 2);
    }

    #[test]
    fn ticking_to_zero_times_out() {
        let (mut engine, _) = started(1);
        for _ in 0..crate::chain::ROUND_SECONDS {
            engine.tick();
        }
        assert_eq!(engine.phase(), Phase::GameOver);
        let record = engine.finished_game(String::new(), 0).unwrap();
        assert_eq!(record.missed_word, "glad");
        assert_eq!(record.score, 0);
    }

    #[test]
    fn game_over_is_terminal_until_restart() {
        let (mut engine, mut rng) = started(1);
        engine.time_up();
        let frozen = engine.clone();
        engine.time_up();
        engine.tick();
        assert_eq!(engine.submit_guess("glad"), Err(GuessOutcome::Mismatch));
        assert_eq!(engine, frozen);

        // An explicit restart fully replaces the state.
        let generation = engine.begin_start();
        engine.complete_start(generation, entry("bright", &["shiny"]), &mut rng);
        assert_eq!(engine.phase(), Phase::Active);
        assert_eq!(engine.state().unwrap().score, 0);
        assert_eq!(engine.state().unwrap().start_word, "bright");
    }

    #[test]
    fn finished_game_snapshot_is_independent_of_restart() {
        let (mut engine, mut rng) = started(1);
        engine.time_up();
        let stale = engine.generation();
        let record = engine.finished_game(String::new(), 7).unwrap();

        // The player restarts while post-game work (recording, definition
        // lookup) still holds the record. The snapshot must stay intact even
        // though the engine has moved on.
        let generation = engine.begin_start();
        engine.complete_start(generation, entry("bright", &["shiny"]), &mut rng);
        assert!(!engine.is_current(stale));
        assert_eq!(record.start_word, "happy");
        assert_eq!(record.missed_word, "glad");
        assert_eq!(record.played_at, 7);
        assert!(engine.finished_game(String::new(), 7).is_none());
    }

    #[test]
    fn no_finished_game_while_active() {
        let (engine, _) = started(1);
        assert!(engine.finished_game(String::new(), 0).is_none());
    }
}
