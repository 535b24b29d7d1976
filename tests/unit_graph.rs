// Unit tests for relevance graph construction and the mindmap projection.
//
// Covers the graph invariants (every link weight matches TF, every article
// node has positive hits equal to its link total, keyword nodes always
// present), the empty-corpus and zero-TF cases, and the JSON shape.

use std::collections::HashSet;

use keyweave::corpus::models::Article;
use keyweave::graph::builder::build_graph;
use keyweave::graph::model::{Graph, GraphNode, NodeId};
use keyweave::graph::tree::{to_tree, TreeRole, ROOT_NAME};
use keyweave::keywords::tfidf::{compute_tf_df, TfDf};
use proptest::prelude::*;

fn corpus() -> Vec<Article> {
    vec![
        Article::new("a0", "Bone loss in orbit", "Bone density drops during long missions.")
            .with_url("https://example.org/bone"),
        Article::new("a1", "Root growth", "Roots grow sideways without gravity. Gravity matters."),
        Article::new("a2", "Muscle atrophy", "Muscle mass falls in orbit."),
    ]
}

// ============================================================
// Structure
// ============================================================

#[test]
fn keyword_without_matches_has_no_links() {
    let articles = vec![Article::new("a0", "Plant roots", "Roots bend toward light.")];
    let tf_df = compute_tf_df(&articles);
    let graph = build_graph(&articles, &["gravity"], &tf_df);

    assert_eq!(graph.keyword_nodes().count(), 1);
    assert_eq!(graph.nodes[0].label(), "gravity");
    assert!(graph.links.is_empty());
    assert!(graph.node(&NodeId::Article("a0".to_string())).is_none());
}

#[test]
fn empty_corpus_gives_keyword_nodes_only() {
    let graph = build_graph(&[], &["gravity", "bone"], &TfDf::default());
    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.nodes.iter().all(GraphNode::is_keyword));
    assert!(graph.links.is_empty());
}

#[test]
fn keywords_come_first_in_selection_order() {
    let articles = corpus();
    let tf_df = compute_tf_df(&articles);
    let graph = build_graph(&articles, &["orbit", "gravity", "bone"], &tf_df);

    let labels: Vec<&str> = graph.nodes.iter().map(GraphNode::label).collect();
    assert_eq!(
        labels,
        vec!["orbit", "gravity", "bone", "Bone loss in orbit", "Root growth", "Muscle atrophy"]
    );
}

#[test]
fn hits_sum_link_weights() {
    let articles = corpus();
    let tf_df = compute_tf_df(&articles);
    let graph = build_graph(&articles, &["orbit", "bone"], &tf_df);

    assert_eq!(graph.link_weight("bone", "a0"), Some(tf_df.tf("a0", "bone")));
    let a0 = graph.node(&NodeId::Article("a0".to_string())).unwrap();
    assert_eq!(
        a0.hits(),
        Some(tf_df.tf("a0", "bone") + tf_df.tf("a0", "orbit"))
    );
    assert!(graph.node(&NodeId::Article("a1".to_string())).is_none());
}

#[test]
fn article_id_equal_to_keyword_does_not_collide() {
    let articles = vec![Article::new("gravity", "Gravity wells", "gravity")];
    let tf_df = compute_tf_df(&articles);
    let graph = build_graph(&articles, &["gravity"], &tf_df);

    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.node(&NodeId::Keyword("gravity".to_string())).is_some());
    assert!(graph.node(&NodeId::Article("gravity".to_string())).is_some());
}

#[test]
fn graph_json_uses_kind_tags() {
    let articles = corpus();
    let tf_df = compute_tf_df(&articles);
    let graph = build_graph(&articles, &["muscle"], &tf_df);

    let json = serde_json::to_value(&graph).unwrap();
    assert_eq!(json["nodes"][0]["kind"], "keyword");
    assert_eq!(json["nodes"][0]["id"], "muscle");
    assert_eq!(json["nodes"][0]["label"], "muscle");
    assert!(json["nodes"][0].get("hits").is_none());
    assert_eq!(json["nodes"][1]["kind"], "article");
    assert_eq!(json["nodes"][1]["id"], "a2");
    assert_eq!(json["nodes"][1]["label"], "Muscle atrophy");
    assert_eq!(json["nodes"][1]["hits"], 2);
    assert_eq!(json["links"][0]["source"], "muscle");
    assert_eq!(json["links"][0]["target"], "a2");

    let back: Graph = serde_json::from_value(json).unwrap();
    assert_eq!(back, graph);
}

// ============================================================
// Tree
// ============================================================

#[test]
fn tree_mirrors_graph() {
    let articles = corpus();
    let tf_df = compute_tf_df(&articles);
    let graph = build_graph(&articles, &["orbit", "comet"], &tf_df);
    let tree = to_tree(&graph);

    assert_eq!(tree.name, ROOT_NAME);
    assert_eq!(tree.role, TreeRole::Root);
    assert_eq!(tree.children.len(), 2);

    let orbit = &tree.children[0];
    assert_eq!(orbit.role, TreeRole::Keyword);
    let names: Vec<&str> = orbit.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bone loss in orbit", "Muscle atrophy"]);
    assert_eq!(orbit.children[0].url.as_deref(), Some("https://example.org/bone"));
    assert!(tree.children[1].children.is_empty());
}

// ============================================================
// Properties
// ============================================================

const VOCAB: &[&str] = &["gravity", "bone", "plants", "roots", "mice", "orbit"];

fn corpus_strategy() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(VOCAB), 0..10),
        0..6,
    )
    .prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, words)| Article::new(format!("a{i}"), "", words.join(" ")))
            .collect()
    })
}

fn selection_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn graph_is_complete_and_consistent(
        articles in corpus_strategy(),
        selected in selection_strategy(),
    ) {
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph(&articles, &selected, &tf_df);

        let distinct: HashSet<&str> = selected.iter().copied().collect();
        prop_assert_eq!(graph.keyword_nodes().count(), distinct.len());

        for link in &graph.links {
            prop_assert!(link.weight > 0);
            prop_assert_eq!(link.weight, tf_df.tf(&link.target, &link.source));
            prop_assert!(graph.node(&link.target_id()).is_some());
            prop_assert!(graph.node(&link.source_id()).is_some());
        }

        for article in &articles {
            let expected: u32 = distinct.iter().map(|t| tf_df.tf(&article.id, t)).sum();
            let node = graph.node(&NodeId::Article(article.id.clone()));
            if expected == 0 {
                prop_assert!(node.is_none());
            } else {
                prop_assert_eq!(node.and_then(GraphNode::hits), Some(expected));
            }
        }
    }

    #[test]
    fn tree_lists_each_link_once(
        articles in corpus_strategy(),
        selected in selection_strategy(),
    ) {
        let tf_df = compute_tf_df(&articles);
        let graph = build_graph(&articles, &selected, &tf_df);
        let tree = to_tree(&graph);

        let leaves: usize = tree.children.iter().map(|k| k.children.len()).sum();
        prop_assert_eq!(leaves, graph.links.len());
    }
}
