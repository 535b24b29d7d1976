// Relevance graph construction.
//
// Given the articles, the selected keywords and the per-article term
// frequencies, link every selected keyword to every article that mentions it.
// Link weight is the keyword's frequency in the article; an article's hits are
// the sum of its link weights. Articles with no hits are left out entirely,
// while every selected keyword gets a node even if nothing links to it.

use std::collections::HashSet;

use tracing::debug;

use super::model::{Graph, GraphLink, GraphNode};
use crate::corpus::models::Article;
use crate::keywords::tfidf::TfDf;

/// Build the keyword/article graph for a selection.
///
/// `selected` may contain duplicates; only the first occurrence of a term is
/// used. Keyword nodes come first in selection order, then article nodes in
/// corpus order.
pub fn build_graph<S: AsRef<str>>(articles: &[Article], selected: &[S], tf_df: &TfDf) -> Graph {
    let mut seen = HashSet::new();
    let terms: Vec<&str> = selected
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| seen.insert(*t))
        .collect();

    let mut nodes: Vec<GraphNode> = terms
        .iter()
        .map(|t| GraphNode::Keyword {
            term: t.to_string(),
        })
        .collect();
    let mut links = Vec::new();

    for article in articles {
        let Some(tf) = tf_df.doc_tfs.get(&article.id) else {
            continue;
        };

        let mut hits = 0u32;
        for term in &terms {
            let weight = tf.get(*term).copied().unwrap_or(0);
            if weight > 0 {
                hits += weight;
                links.push(GraphLink {
                    source: term.to_string(),
                    target: article.id.clone(),
                    weight,
                });
            }
        }

        if hits > 0 {
            nodes.push(GraphNode::Article {
                id: article.id.clone(),
                label: article.label().to_string(),
                url: article.url.clone(),
                hits,
            });
        }
    }

    debug!(
        keywords = terms.len(),
        nodes = nodes.len(),
        links = links.len(),
        "Built relevance graph"
    );

    Graph { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::NodeId;
    use crate::keywords::tfidf::compute_tf_df;

    fn corpus() -> Vec<Article> {
        vec![
            Article::new("a0", "Bone loss", "gravity gravity bone").with_url("https://x.org/0"),
            Article::new("a1", "", "plant roots gravity"),
            Article::new("a2", "Unrelated", "ocean salinity"),
        ]
    }

    #[test]
    fn test_links_and_hits() {
        let articles = corpus();
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph(&articles, &["gravity", "bone"], &tf_df);

        assert_eq!(graph.link_weight("gravity", "a0"), Some(2));
        // "bone" appears once in the title and once in the text
        assert_eq!(graph.link_weight("bone", "a0"), Some(2));
        assert_eq!(graph.link_weight("gravity", "a1"), Some(1));
        assert_eq!(graph.link_weight("bone", "a1"), None);

        let a0 = graph.node(&NodeId::Article("a0".to_string())).unwrap();
        assert_eq!(a0.hits(), Some(4));
        assert_eq!(a0.label(), "Bone loss");
    }

    #[test]
    fn test_unmatched_articles_are_omitted() {
        let articles = corpus();
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph(&articles, &["gravity"], &tf_df);
        assert!(graph.node(&NodeId::Article("a2".to_string())).is_none());
        assert_eq!(graph.article_nodes().count(), 2);
    }

    #[test]
    fn test_blank_title_uses_id_label() {
        let articles = corpus();
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph(&articles, &["roots"], &tf_df);
        let a1 = graph.node(&NodeId::Article("a1".to_string())).unwrap();
        assert_eq!(a1.label(), "a1");
    }

    #[test]
    fn test_duplicate_selection_is_ignored() {
        let articles = corpus();
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph(&articles, &["gravity", "gravity"], &tf_df);
        assert_eq!(graph.keyword_nodes().count(), 1);
        assert_eq!(graph.links.len(), 2);
        let a0 = graph.node(&NodeId::Article("a0".to_string())).unwrap();
        assert_eq!(a0.hits(), Some(2));
    }

    #[test]
    fn test_linkless_keyword_still_present() {
        let articles = corpus();
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph(&articles, &["nebula"], &tf_df);
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.links.is_empty());
    }

    #[test]
    fn test_empty_selection_gives_empty_graph() {
        let articles = corpus();
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph::<&str>(&articles, &[], &tf_df);
        assert!(graph.is_empty());
    }
}
