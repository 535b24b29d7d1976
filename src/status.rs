// Session status display: corpus size, scrape coverage, selection, chat.

use std::path::Path;

use crate::session::Session;

/// Display session status to the terminal.
pub fn show(session: &Session, path: &Path) {
    if !path.exists() {
        println!("Session: not started");
        println!("\nRun `keyweave scrape <file.csv>` to build one.");
        return;
    }

    let file_size = std::fs::metadata(path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Session: {} ({})", path.display(), file_size);

    if let Some(saved_at) = session.saved_at {
        println!("Last saved: {}", saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    println!(
        "Rows: {} (title column: {}, URL column: {})",
        session.rows.len(),
        display_column(&session.title_column),
        display_column(&session.url_column),
    );

    // An article whose text is no longer than its title got nothing from the page
    let scraped = session
        .articles
        .iter()
        .filter(|a| a.text.trim().len() > a.title.trim().len())
        .count();
    println!(
        "Articles: {} total, {} with scraped text",
        session.articles.len(),
        scraped
    );

    if session.selected.is_empty() {
        println!("Selected keywords: none");
        println!("  Run `keyweave keywords` and `keyweave select add <term>`");
    } else {
        println!(
            "Selected keywords: {}",
            session.selected.iter().collect::<Vec<_>>().join(", ")
        );
    }

    println!("Chat messages: {}", session.chat.len());
}

fn display_column(name: &str) -> &str {
    if name.is_empty() {
        "none"
    } else {
        name
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
