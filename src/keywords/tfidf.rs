// TF-IDF keyword ranking.
//
// Each article is one document. Term frequency is counted per document over
// the tokenized title and text; document frequency counts how many documents
// contain a term at least once. A term's corpus score is the sum over
// documents of TF x IDF, with the smoothed IDF
//
//   idf(t) = ln((N + 1) / (1 + df(t))) + 1
//
// so a term that appears everywhere still keeps a weight of 1 per occurrence,
// while rarer terms get boosted.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tokenize::Tokenizer;
use super::traits::KeywordRanker;
use crate::corpus::models::Article;

/// Default number of ranked keywords to keep.
pub const DEFAULT_MAX_TERMS: usize = 200;

/// Term -> occurrence count within one document.
pub type TermFreq = HashMap<String, u32>;

/// Per-document term frequencies plus corpus-wide document frequency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfDf {
    /// Article id -> term frequencies for that article
    pub doc_tfs: HashMap<String, TermFreq>,
    /// Term -> number of distinct articles containing it
    pub df: HashMap<String, u32>,
}

impl TfDf {
    /// Term frequency of `term` in the article `doc_id` (0 when absent).
    pub fn tf(&self, doc_id: &str, term: &str) -> u32 {
        self.doc_tfs
            .get(doc_id)
            .and_then(|tf| tf.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Document frequency of `term` (0 when unseen).
    pub fn df(&self, term: &str) -> u32 {
        self.df.get(term).copied().unwrap_or(0)
    }
}

/// One ranked keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStat {
    pub term: String,
    /// Number of articles containing the term
    pub df: u32,
    /// Corpus-wide TF-IDF score
    pub tfidf: f64,
}

/// Compute TF/DF maps with the default tokenizer.
pub fn compute_tf_df(articles: &[Article]) -> TfDf {
    compute_tf_df_with(&Tokenizer::default(), articles)
}

/// Compute TF/DF maps, tokenizing `title + " " + text` for each article.
pub fn compute_tf_df_with(tokenizer: &Tokenizer, articles: &[Article]) -> TfDf {
    let mut doc_tfs: HashMap<String, TermFreq> = HashMap::with_capacity(articles.len());
    let mut df: HashMap<String, u32> = HashMap::new();

    for article in articles {
        let tokens = tokenizer.tokenize(&format!("{} {}", article.title, article.text));

        let mut tf = TermFreq::new();
        for token in tokens {
            *tf.entry(token).or_insert(0) += 1;
        }

        // TF keys are the distinct terms of this document, so each bumps DF once
        for term in tf.keys() {
            *df.entry(term.clone()).or_insert(0) += 1;
        }

        doc_tfs.insert(article.id.clone(), tf);
    }

    TfDf { doc_tfs, df }
}

/// Smoothed inverse document frequency for a corpus of `n` documents.
pub fn idf(n: usize, df: u32) -> f64 {
    let n = n as f64;
    ((n + 1.0) / (1.0 + df as f64)).ln() + 1.0
}

/// Rank keywords across the corpus with the default tokenizer.
pub fn rank_keywords(articles: &[Article], max_terms: usize) -> Vec<KeywordStat> {
    let tf_df = compute_tf_df(articles);
    rank_from_tf_df(articles, &tf_df, max_terms)
}

/// Rank keywords from precomputed TF/DF maps.
///
/// Sorted by descending score; equal scores are ordered by term so the
/// output is the same on every run.
pub fn rank_from_tf_df(articles: &[Article], tf_df: &TfDf, max_terms: usize) -> Vec<KeywordStat> {
    if max_terms == 0 || articles.is_empty() {
        return Vec::new();
    }

    let n = articles.len().max(1);
    let mut scores: HashMap<&str, f64> = HashMap::new();

    for article in articles {
        let Some(tf) = tf_df.doc_tfs.get(&article.id) else {
            continue;
        };
        for (term, &freq) in tf {
            // A term in a TF map has df >= 1, so the fallback never applies
            // to well-formed maps
            let df = tf_df.df.get(term).copied().unwrap_or(1);
            *scores.entry(term.as_str()).or_insert(0.0) += freq as f64 * idf(n, df);
        }
    }

    let mut ranked: Vec<KeywordStat> = scores
        .into_iter()
        .map(|(term, tfidf)| KeywordStat {
            term: term.to_string(),
            df: tf_df.df(term),
            tfidf,
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(max_terms);

    debug!(
        documents = articles.len(),
        kept = ranked.len(),
        "Ranked TF-IDF keywords"
    );

    ranked
}

/// Descending score, then ascending term.
fn compare_ranked(a: &KeywordStat, b: &KeywordStat) -> Ordering {
    b.tfidf
        .total_cmp(&a.tfidf)
        .then_with(|| a.term.cmp(&b.term))
}

/// TF-IDF ranker bound to a tokenizer and a result cap.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfRanker {
    pub max_terms: usize,
    pub tokenizer: Tokenizer,
}

impl Default for TfIdfRanker {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            tokenizer: Tokenizer::default(),
        }
    }
}

impl KeywordRanker for TfIdfRanker {
    fn tf_df(&self, articles: &[Article]) -> TfDf {
        compute_tf_df_with(&self.tokenizer, articles)
    }

    fn rank(&self, articles: &[Article]) -> Vec<KeywordStat> {
        let tf_df = self.tf_df(articles);
        rank_from_tf_df(articles, &tf_df, self.max_terms)
    }
}
