// Keyword ranker trait: the seam between the corpus and the ranking method.
//
// The default implementation is TF-IDF over the curated stopword set. Callers
// that need both the ranking and the raw TF/DF maps (the graph builder does)
// go through the same ranker so the two always agree on tokenization.

use super::tfidf::{KeywordStat, TfDf};
use crate::corpus::models::Article;

/// Trait for turning a set of articles into ranked keywords.
pub trait KeywordRanker {
    /// Per-article term frequencies and corpus document frequencies.
    fn tf_df(&self, articles: &[Article]) -> TfDf;

    /// Ranked keywords, best first.
    fn rank(&self, articles: &[Article]) -> Vec<KeywordStat>;
}
