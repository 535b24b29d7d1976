// Mindmap projection: Topics -> keyword -> article.
//
// A tree view of the same graph for renderers that want a hierarchy instead
// of a force layout. An article linked to several keywords shows up under
// each of them.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::model::{Graph, GraphNode};

pub const ROOT_NAME: &str = "Topics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeRole {
    Root,
    Keyword,
    Article,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub role: TreeRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub children: Vec<TreeNode>,
}

/// Project a graph onto a three-level tree.
pub fn to_tree(graph: &Graph) -> TreeNode {
    let articles: HashMap<&str, &GraphNode> = graph
        .article_nodes()
        .filter_map(|n| match n {
            GraphNode::Article { id, .. } => Some((id.as_str(), n)),
            GraphNode::Keyword { .. } => None,
        })
        .collect();

    let children = graph
        .keyword_nodes()
        .map(|kw| {
            let term = kw.label();
            let mut placed = HashSet::new();
            let leaves = graph
                .links_for_keyword(term)
                .filter(|l| placed.insert(l.target.as_str()))
                .filter_map(|l| articles.get(l.target.as_str()))
                .map(|node| article_leaf(node))
                .collect();

            TreeNode {
                name: term.to_string(),
                role: TreeRole::Keyword,
                url: None,
                children: leaves,
            }
        })
        .collect();

    TreeNode {
        name: ROOT_NAME.to_string(),
        role: TreeRole::Root,
        url: None,
        children,
    }
}

fn article_leaf(node: &GraphNode) -> TreeNode {
    let url = match node {
        GraphNode::Article { url, .. } => url.clone(),
        GraphNode::Keyword { .. } => None,
    };
    TreeNode {
        name: node.label().to_string(),
        role: TreeRole::Article,
        url,
        children: Vec::new(),
    }
}
