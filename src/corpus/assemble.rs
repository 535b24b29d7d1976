// Article assembly: pick the rows worth scraping and turn each scrape
// outcome into an article, falling back to the row's own title when the page
// couldn't be fetched.

use super::models::{Article, Row, ScrapeTarget};
use crate::scrape::traits::ScrapedPage;

/// Rows with a non-empty title or URL in the chosen columns.
pub fn targets_from_rows(rows: &[Row], title_column: &str, url_column: &str) -> Vec<ScrapeTarget> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let title = cell(row, title_column);
            let url = cell(row, url_column);
            if title.is_empty() && url.is_empty() {
                return None;
            }
            Some(ScrapeTarget {
                index,
                title,
                url,
                row: row.clone(),
            })
        })
        .collect()
}

fn cell(row: &Row, column: &str) -> String {
    if column.is_empty() {
        return String::new();
    }
    row.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Build the article for the target at `position` in the scrape batch.
///
/// `page` is `None` when the URL wasn't fetchable or the fetch failed. The
/// article text is the title followed by the scraped body, so a failed scrape
/// still leaves the title to be counted.
pub fn article_from_scrape(position: usize, target: &ScrapeTarget, page: Option<&ScrapedPage>) -> Article {
    let scraped_title = page.map(|p| p.title.trim()).unwrap_or("");
    let body = page.map(|p| p.text.trim()).unwrap_or("");

    let found_title = if target.title.is_empty() {
        scraped_title
    } else {
        target.title.as_str()
    };

    let text = [found_title, body]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let title = if !found_title.is_empty() {
        found_title.to_string()
    } else if !target.url.is_empty() {
        target.url.clone()
    } else {
        format!("Row {}", target.index + 1)
    };

    Article {
        id: format!("a{position}"),
        title,
        url: (!target.url.is_empty()).then(|| target.url.clone()),
        text,
        row: target.row.clone(),
    }
}
