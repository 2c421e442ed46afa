use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default word preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        text.trim().to_lowercase()
    }
}

pub struct WordPreprocessor;
impl Preprocessor for WordPreprocessor {}

/// Cache and lookup key for a user supplied word
pub fn normalize_word(word: &str) -> String {
    WordPreprocessor.process(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_word("  Algorithm  "), "algorithm");
        assert_eq!(normalize_word("algorithm"), normalize_word("  ALGORITHM\n"));
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word(" \t\n "), "");
    }

    #[test]
    fn compatibility_forms_are_folded() {
        // U+FB01 LATIN SMALL LIGATURE FI
        assert_eq!(normalize_word("\u{FB01}ne"), "fine");
    }
}
