// Text normalization and tokenization.
//
// Turns raw article text into the bag of terms that the TF/DF engine counts.
// A term is lowercase, made only of ASCII letters, digits and hyphens, longer
// than two characters, and not a stopword.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::stopwords::StopwordSet;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is a valid regex"));

/// Minimum term length is this plus one.
const MAX_DROPPED_LEN: usize = 2;

/// Lowercase, strip URLs and punctuation, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lower, " ");

    let cleaned: String = without_urls
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize with the default curated stopword set.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// A tokenizer bound to one stopword set.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    stopwords: &'static StopwordSet,
}

static EXTENDED: LazyLock<StopwordSet> = LazyLock::new(StopwordSet::extended);

impl Tokenizer {
    pub fn curated() -> Self {
        Self {
            stopwords: StopwordSet::default_set(),
        }
    }

    /// Tokenizer using the curated set plus the ISO English stopword list.
    pub fn extended() -> Self {
        Self {
            stopwords: &EXTENDED,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        self.stopwords
    }

    /// Split normalized text into terms, dropping stopwords and short tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        normalize(text)
            .split(' ')
            .filter(|t| !t.is_empty() && t.len() > MAX_DROPPED_LEN && !self.stopwords.contains(t))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::curated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  Bone   LOSS\n\tin Mice  "), "bone loss in mice");
    }

    #[test]
    fn test_normalize_strips_urls() {
        assert_eq!(
            normalize("see https://example.org/a?b=c and http://x.io now"),
            "see and now"
        );
    }

    #[test]
    fn test_normalize_replaces_punctuation_keeps_hyphens() {
        assert_eq!(normalize("Spaceflight-induced (bone) loss!"), "spaceflight-induced bone loss");
        assert_eq!(normalize("rodent's café"), "rodent s caf");
    }

    #[test]
    fn test_tokenize_filters_stopwords_and_short_tokens() {
        let terms = tokenize("Mice show bone loss in microgravity at 1g");
        assert_eq!(terms, vec!["mice", "bone", "loss", "microgravity"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("!!! ??? ...").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_repeats() {
        let terms = tokenize("gravity gravity GRAVITY");
        assert_eq!(terms, vec!["gravity", "gravity", "gravity"]);
    }

    #[test]
    fn test_extended_tokenizer_drops_more() {
        let text = "the mice were placed in microgravity";
        let curated = Tokenizer::curated().tokenize(text);
        let extended = Tokenizer::extended().tokenize(text);
        assert!(extended.len() <= curated.len());
        assert!(!extended.contains(&"the".to_string()));
    }
}
