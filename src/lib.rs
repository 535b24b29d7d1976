// Keyweave: keyword relevance graphs for scraped article collections
//
// This is the library root. Each module corresponds to a stage of the
// pipeline: CSV rows become articles, articles become ranked keywords, and a
// keyword selection becomes a relevance graph and chat context.

pub mod chat;
pub mod config;
pub mod corpus;
pub mod graph;
pub mod keywords;
pub mod output;
pub mod scrape;
pub mod session;
pub mod status;
