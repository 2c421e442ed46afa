//! Plain-text rendering of lookup results

use crate::lookup::Meanings;

/// Shown when there is nothing to list
pub const NOT_FOUND: &str = "No definitions found.";

/// Definitions listed per part of speech
pub const MAX_DEFINITIONS: usize = 10;

/// Synonyms or antonyms listed per section
pub const MAX_TERMS: usize = 20;

/// Render meanings as numbered blocks, one per part of speech in key order
pub fn format_meanings(meanings: &Meanings) -> String {
    if meanings.is_empty() {
        return NOT_FOUND.to_string();
    }

    let mut lines = Vec::new();
    for (pos, defs) in meanings {
        lines.push(format!("{pos}:"));
        for (i, def) in defs.iter().take(MAX_DEFINITIONS).enumerate() {
            lines.push(format!("  {}. {def}", i + 1));
        }
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}

/// Header, definitions, then synonyms and antonyms when present
pub fn format_word_summary(
    word: &str,
    meanings: &Meanings,
    synonyms: &[String],
    antonyms: &[String],
) -> String {
    let mut blocks = vec![
        format!("Word: {word}\n"),
        format!("Definitions:\n{}", format_meanings(meanings)),
    ];

    if !synonyms.is_empty() {
        blocks.push(format!("\nSynonyms:\n{}", join_terms(synonyms)));
    }
    if !antonyms.is_empty() {
        blocks.push(format!("\nAntonyms:\n{}", join_terms(antonyms)));
    }

    blocks.join("\n").trim().to_string()
}

fn join_terms(terms: &[String]) -> String {
    terms
        .iter()
        .take(MAX_TERMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
