// Stopword set: the two-tier exclusion list applied during tokenization.
//
// The general tier holds English function words. The domain tier holds
// academic boilerplate, publishing-platform names and catalog words that
// show up in nearly every scraped research page without saying anything
// about its topic. Both tiers are curated by hand; tweak them here.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// General English function words.
const GENERAL: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Academic, platform and catalog boilerplate.
const DOMAIN: &[&str] = &[
    // generic academic phrasing
    "using", "used", "use", "result", "results", "method", "methods", "conclusion", "study",
    "studies", "based", "analysis", "paper", "approach", "new", "also", "well", "show", "shown",
    "showed", "may", "might", "can", "however", "therefore", "within", "among", "across", "found",
    "significant", "significantly", "present", "presented", "proposed", "provide", "provided",
    "provides", "per", "via", "et", "al", "system", "systems", "different", "including",
    "similar", "type", "total", "group", "groups", "one", "two", "three", "min", "day", "days",
    "time",
    // publishing platforms and indexes
    "doi", "google", "scholar", "pubmed", "pmc", "sci", "biol", "physiol", "microbiol", "res",
    // article furniture
    "article", "articles", "fig", "figure", "table", "tab", "supplementary", "free", "dataset",
    "datasets", "file", "files", "information", "data", "model", "models", "test", "reads",
    "open", "find", "number", "values", "sample", "samples",
    // organizations and places
    "usa", "university", "center", "international", "york", "cornell",
    // agency and program names that are not topical
    "nasa", "iss", "mission", "missions", "genelab",
    // catalog words
    "state", "potential", "identified", "performed",
];

static CURATED: LazyLock<StopwordSet> = LazyLock::new(StopwordSet::curated);

/// Immutable set of lowercase words excluded from tokenization.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The curated general + domain set.
    pub fn curated() -> Self {
        let words = GENERAL
            .iter()
            .chain(DOMAIN.iter())
            .map(|w| w.to_string())
            .collect();
        Self { words }
    }

    /// The curated set merged with the ISO English list from `stop-words`.
    ///
    /// Much more aggressive: it drops a lot of general vocabulary, which helps
    /// on noisy news pages but can hide legitimate topic words.
    pub fn extended() -> Self {
        let mut set = Self::curated();
        set.words
            .extend(get(LANGUAGE::English).into_iter().map(|w| w.to_lowercase()));
        set
    }

    /// Shared handle to the default curated set.
    pub fn default_set() -> &'static StopwordSet {
        &CURATED
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::curated()
    }
}
