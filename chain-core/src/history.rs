use serde::{Serialize, Deserialize};

use crate::chain::WordEntry;

/// Everything the history recorder keeps about one finished game: where the
/// chain started, how far it got, and the word the player never reached.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FinishedGame {
    pub start_word: String,
    pub score: u32,
    pub chain: Vec<WordEntry>,
    /// The hint left unguessed at game end; empty when the chain ended
    /// because no continuation existed.
    pub missed_word: String,
    #[serde(default)]
    pub missed_word_definition: String,
    /// Seconds since epoch, for display ordering. Zero in older records.
    #[serde(default)]
    pub played_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_records_missing_optional_fields() {
        let json = r#"{
            "start_word": "happy",
            "score": 300,
            "chain": [{"word": "happy", "definition": "feeling joy", "synonyms": ["glad"]}],
            "missed_word": "glad"
        }"#;
        let record: FinishedGame = serde_json::from_str(json).unwrap();
        assert_eq!(record.missed_word_definition, "");
        assert_eq!(record.played_at, 0);
        assert_eq!(record.chain[0].word, "happy");
    }

    #[test]
    fn roundtrips_through_json() {
        let record = FinishedGame {
            start_word: "happy".to_string(),
            score: 540,
            chain: vec![WordEntry {
                word: "happy".to_string(),
                definition: "feeling joy".to_string(),
                synonyms: vec!["glad".to_string(), "joyful".to_string()],
            }],
            missed_word: "joyful".to_string(),
            missed_word_definition: "full of joy".to_string(),
            played_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<FinishedGame>(&json).unwrap(), record);
    }
}
