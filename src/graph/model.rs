// Relevance graph data model.
//
// The graph is bipartite: keyword nodes on one side, article nodes on the
// other, linked by how often the keyword occurs in the article. Node identity
// is a tagged union, so an article whose id happens to equal a keyword never
// collides with it.

use serde::{Deserialize, Serialize};

/// Identity of a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum NodeId {
    Keyword(String),
    Article(String),
}

/// A keyword or article node.
///
/// Both kinds serialize to the same flat shape,
/// `{kind, id, label, url?, hits?}`, so renderers can treat nodes uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "NodeRecord", from = "NodeRecord")]
pub enum GraphNode {
    Keyword {
        term: String,
    },
    Article {
        id: String,
        label: String,
        url: Option<String>,
        /// Sum of link weights over all selected keywords
        hits: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum NodeKind {
    Keyword,
    Article,
}

/// Wire form of a node.
#[derive(Serialize, Deserialize)]
struct NodeRecord {
    kind: NodeKind,
    id: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hits: Option<u32>,
}

impl From<GraphNode> for NodeRecord {
    fn from(node: GraphNode) -> Self {
        match node {
            GraphNode::Keyword { term } => NodeRecord {
                kind: NodeKind::Keyword,
                id: term.clone(),
                label: term,
                url: None,
                hits: None,
            },
            GraphNode::Article {
                id,
                label,
                url,
                hits,
            } => NodeRecord {
                kind: NodeKind::Article,
                id,
                label,
                url,
                hits: Some(hits),
            },
        }
    }
}

impl From<NodeRecord> for GraphNode {
    fn from(record: NodeRecord) -> Self {
        match record.kind {
            NodeKind::Keyword => GraphNode::Keyword { term: record.id },
            NodeKind::Article => GraphNode::Article {
                id: record.id,
                label: record.label,
                url: record.url,
                hits: record.hits.unwrap_or(0),
            },
        }
    }
}

impl GraphNode {
    pub fn id(&self) -> NodeId {
        match self {
            GraphNode::Keyword { term } => NodeId::Keyword(term.clone()),
            GraphNode::Article { id, .. } => NodeId::Article(id.clone()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GraphNode::Keyword { term } => term,
            GraphNode::Article { label, .. } => label,
        }
    }

    /// Hit count for article nodes; `None` for keywords.
    pub fn hits(&self) -> Option<u32> {
        match self {
            GraphNode::Keyword { .. } => None,
            GraphNode::Article { hits, .. } => Some(*hits),
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, GraphNode::Keyword { .. })
    }
}

/// Weighted edge from a keyword to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    /// Keyword term
    pub source: String,
    /// Article id
    pub target: String,
    /// Occurrences of the keyword in the article, always > 0
    pub weight: u32,
}

impl GraphLink {
    pub fn source_id(&self) -> NodeId {
        NodeId::Keyword(self.source.clone())
    }

    pub fn target_id(&self) -> NodeId {
        NodeId::Article(self.target.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl Graph {
    pub fn keyword_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_keyword())
    }

    pub fn article_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| !n.is_keyword())
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id() == id)
    }

    /// Weight of the link between `term` and `article_id`, if any.
    pub fn link_weight(&self, term: &str, article_id: &str) -> Option<u32> {
        self.links
            .iter()
            .find(|l| l.source == term && l.target == article_id)
            .map(|l| l.weight)
    }

    pub fn links_for_keyword<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a GraphLink> {
        self.links.iter().filter(move |l| l.source == term)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
