use std::collections::HashSet;

use gloo_net::http::Request;
use serde::Deserialize;

use chain_core::{normalize, LookupError, WordEntry};

use crate::config::dictionary_entry_url;

// Shape of the dictionaryapi.dev response, reduced to the fields we read.
// Synonym lists appear both on meanings and on individual definitions.
#[derive(Deserialize)]
struct ApiEntry {
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Deserialize)]
struct ApiMeaning {
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
}

#[derive(Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    synonyms: Vec<String>,
}

/// Fetches the dictionary entry for `word` and shapes it into a
/// [`WordEntry`]. The word is normalized before the request so the chain
/// only ever sees lowercase words.
pub async fn fetch_word_entry(word: &str) -> Result<WordEntry, LookupError> {
    let request_word = normalize(word);
    let response = Request::get(&dictionary_entry_url(&request_word))
        .send()
        .await
        .map_err(|err| LookupError::Network(err.to_string()))?;

    match response.status() {
        200 => {}
        404 => return Err(LookupError::NotFound),
        status => return Err(LookupError::Network(format!("status {}", status))),
    }

    let body = response
        .text()
        .await
        .map_err(|err| LookupError::Network(err.to_string()))?;
    parse_word_entry(&request_word, &body)
}

/// Decodes the API payload into a validated [`WordEntry`]. Synonyms keep
/// their source order across meanings and definitions, duplicates are
/// dropped case-insensitively, and the headword itself is excluded. An
/// entry without any definition is rejected as malformed.
pub fn parse_word_entry(word: &str, body: &str) -> Result<WordEntry, LookupError> {
    let entries: Vec<ApiEntry> =
        serde_json::from_str(body).map_err(|err| LookupError::Parse(err.to_string()))?;
    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Parse("empty entry list".to_string()))?;

    let mut definition = String::new();
    let mut synonyms: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(normalize(word));

    // Synonyms are stored normalized: the hint is rendered letter by letter
    // and matched against lowercase vowel keys, so API casing must not leak
    // through.
    let push_synonym = |candidate: &str, synonyms: &mut Vec<String>, seen: &mut HashSet<String>| {
        let normalized = normalize(candidate);
        if !normalized.is_empty() && seen.insert(normalized.clone()) {
            synonyms.push(normalized);
        }
    };

    for meaning in &entry.meanings {
        for candidate in &meaning.synonyms {
            push_synonym(candidate, &mut synonyms, &mut seen);
        }
        for def in &meaning.definitions {
            if definition.is_empty() {
                definition = def.definition.clone();
            }
            for candidate in &def.synonyms {
                push_synonym(candidate, &mut synonyms, &mut seen);
            }
        }
    }

    if definition.is_empty() {
        return Err(LookupError::Parse("entry has no definitions".to_string()));
    }

    Ok(WordEntry {
        word: normalize(word),
        definition,
        synonyms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAPPY: &str = r#"[{
        "word": "happy",
        "meanings": [
            {
                "partOfSpeech": "adjective",
                "definitions": [
                    {"definition": "Experiencing the effect of favourable fortune.", "synonyms": ["lucky"]},
                    {"definition": "Content, satisfied.", "synonyms": []}
                ],
                "synonyms": ["glad", "joyful", "Glad", "happy"]
            },
            {
                "partOfSpeech": "noun",
                "definitions": [{"definition": "A happy event.", "synonyms": ["cheerful"]}],
                "synonyms": []
            }
        ]
    }]"#;

    #[test]
    fn parses_definition_and_ordered_synonyms() {
        let entry = parse_word_entry("Happy", HAPPY).unwrap();
        assert_eq!(entry.word, "happy");
        assert_eq!(entry.definition, "Experiencing the effect of favourable fortune.");
        // Source order, case-insensitive dedup, headword excluded.
        assert_eq!(entry.synonyms, vec!["glad", "joyful", "lucky", "cheerful"]);
    }

    #[test]
    fn synonyms_are_lowercased_for_display() {
        let body = r#"[{
            "word": "lucky",
            "meanings": [{
                "definitions": [{"definition": "Favoured by luck.", "synonyms": ["FORTUNATE"]}],
                "synonyms": ["Blessed", "charmed"]
            }]
        }]"#;
        let entry = parse_word_entry("lucky", body).unwrap();
        // Every synonym can become the next hint, whose letters are matched
        // against lowercase vowel keys.
        assert_eq!(entry.synonyms, vec!["blessed", "charmed", "fortunate"]);
    }

    #[test]
    fn rejects_entry_without_definitions() {
        let body = r#"[{"word": "zzz", "meanings": [{"definitions": [], "synonyms": ["sleep"]}]}]"#;
        assert!(matches!(
            parse_word_entry("zzz", body),
            Err(LookupError::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_entry_list() {
        assert!(matches!(parse_word_entry("happy", "[]"), Err(LookupError::Parse(_))));
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(matches!(
            parse_word_entry("happy", "{\"title\": \"No Definitions Found\"}"),
            Err(LookupError::Parse(_))
        ));
    }
}
