// Derived keyword views: search filter, document-frequency histogram and the
// articles that match the current selection.

use serde::Serialize;

use super::selection::SelectedKeywords;
use super::tfidf::{KeywordStat, TfDf};
use crate::corpus::models::Article;

/// Default number of terms shown in the histogram.
pub const HISTOGRAM_TERMS: usize = 20;

/// One bar of the document-frequency histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramItem {
    pub term: String,
    /// Number of articles containing the term
    pub count: u32,
}

/// Keep ranked keywords whose term contains `query` (case-insensitive).
/// An empty query keeps everything.
pub fn filter_ranked<'a>(ranked: &'a [KeywordStat], query: &str) -> Vec<&'a KeywordStat> {
    let needle = query.trim().to_lowercase();
    ranked
        .iter()
        .filter(|k| k.term.contains(&needle))
        .collect()
}

/// Document-frequency bars for the first `limit` ranked keywords,
/// highest count first. Equal counts keep their ranking order.
pub fn histogram<'a, I>(ranked: I, limit: usize) -> Vec<HistogramItem>
where
    I: IntoIterator<Item = &'a KeywordStat>,
{
    let mut items: Vec<HistogramItem> = ranked
        .into_iter()
        .take(limit)
        .map(|k| HistogramItem {
            term: k.term.clone(),
            count: k.df,
        })
        .collect();
    // sort_by is stable
    items.sort_by(|a, b| b.count.cmp(&a.count));
    items
}

/// Articles containing at least one selected keyword, in corpus order.
pub fn relevant_articles<'a>(
    articles: &'a [Article],
    tf_df: &TfDf,
    selected: &SelectedKeywords,
) -> Vec<&'a Article> {
    if selected.is_empty() {
        return Vec::new();
    }
    articles
        .iter()
        .filter(|a| {
            tf_df
                .doc_tfs
                .get(&a.id)
                .is_some_and(|tf| selected.iter().any(|t| tf.contains_key(t)))
        })
        .collect()
}
