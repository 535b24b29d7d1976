// Keyword extraction: tokenization, TF-IDF ranking and keyword selection.

pub mod selection;
pub mod stats;
pub mod stopwords;
pub mod tfidf;
pub mod tokenize;
pub mod traits;
