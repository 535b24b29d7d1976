// Colored terminal output for keyword tables, histograms and graphs.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use super::truncate_chars;
use crate::graph::model::{Graph, GraphNode};
use crate::graph::tree::TreeNode;
use crate::keywords::selection::SelectedKeywords;
use crate::keywords::stats::HistogramItem;
use crate::keywords::tfidf::KeywordStat;

/// Display ranked keywords as a table, marking selected ones.
pub fn display_keywords(ranked: &[&KeywordStat], selected: &SelectedKeywords, total: usize) {
    if ranked.is_empty() {
        println!("No keywords to show. Is the session empty, or the filter too narrow?");
        return;
    }

    println!(
        "\n{}",
        format!("=== Keywords ({} of {} ranked) ===", ranked.len(), total).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<32} {:>9}  {:>5}",
        "Rank".dimmed(),
        "Term".dimmed(),
        "TF-IDF".dimmed(),
        "DF".dimmed(),
    );
    println!("  {}", "-".repeat(56).dimmed());

    for (i, stat) in ranked.iter().enumerate() {
        let marker = if selected.contains(&stat.term) {
            "*".bright_green().bold()
        } else {
            " ".normal()
        };
        println!(
            "  {:>4}. {}{:<31} {:>9.2}  {:>5}",
            i + 1,
            marker,
            stat.term,
            stat.tfidf,
            stat.df,
        );
    }
    println!();
}

/// Display document-frequency bars.
pub fn display_histogram(items: &[HistogramItem]) {
    if items.is_empty() {
        return;
    }

    println!("{}", "=== Document frequency ===".bold());
    println!();

    let max = items.iter().map(|i| i.count).max().unwrap_or(1).max(1);
    let bar_width: usize = 30;

    for item in items {
        let filled = ((item.count as f64 / max as f64) * bar_width as f64).round() as usize;
        let bar = "=".repeat(filled.max(1));
        println!(
            "  {:<24} {} {}",
            truncate_chars(&item.term, 24),
            bar.bright_blue(),
            item.count
        );
    }
    println!();
}

/// One-screen summary of a relevance graph.
pub fn display_graph_summary(graph: &Graph) {
    let keywords = graph.keyword_nodes().count();
    let articles = graph.article_nodes().count();

    println!(
        "\n{}",
        format!(
            "=== Relevance graph: {} keywords, {} articles, {} links ===",
            keywords,
            articles,
            graph.links.len()
        )
        .bold()
    );
    println!();

    for node in graph.keyword_nodes() {
        let term = node.label();
        let links = graph.links_for_keyword(term).count();
        let weight: u32 = graph.links_for_keyword(term).map(|l| l.weight).sum();
        let line = format!("  {term}  ({links} articles, {weight} mentions)");
        if links == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line.bright_green());
        }
    }

    let mut ranked: Vec<&GraphNode> = graph.article_nodes().collect();
    ranked.sort_by(|a, b| b.hits().cmp(&a.hits()));

    if !ranked.is_empty() {
        println!();
        println!("  {}", "Top articles by hits:".dimmed());
        for node in ranked.iter().take(15) {
            println!(
                "  {:>5}  {}",
                node.hits().unwrap_or(0),
                truncate_chars(node.label(), 70)
            );
        }
    }
    println!();
}

/// Print a mindmap tree with indentation.
pub fn display_tree(tree: &TreeNode) {
    println!("{}", tree.name.bold());
    for keyword in &tree.children {
        println!("  {}", keyword.name.bright_green());
        for article in &keyword.children {
            match article.url.as_deref() {
                Some(url) => println!("    - {} {}", truncate_chars(&article.name, 70), url.dimmed()),
                None => println!("    - {}", truncate_chars(&article.name, 70)),
            }
        }
    }
}
