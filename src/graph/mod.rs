// Relevance graph: keyword/article nodes with frequency-weighted links.

pub mod builder;
pub mod model;
pub mod tree;
