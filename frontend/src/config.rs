/// Free Dictionary API. The game consumes it read-only; there is no
/// backend of our own.
const DICTIONARY_API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub fn dictionary_entry_url(word: &str) -> String {
    format!("{}/{}", DICTIONARY_API_BASE, word)
}
