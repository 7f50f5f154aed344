use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

/// Curated pool of chain starters. Every word is lowercase and common
/// enough that the dictionary returns a healthy synonym list for it.
pub static STARTER_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    include_str!("starter_words.txt")
        .lines()
        .map(|line| line.trim().to_owned())
        .filter(|word| !word.is_empty())
        .collect()
});

/// Uniformly random starter for a new game.
pub fn random_start_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    STARTER_WORDS
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| "happy".to_string())
}
