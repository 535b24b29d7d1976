// Column helpers: list the CSV headers and guess which ones hold the
// article title and URL.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::models::Row;

/// Only this many leading rows are inspected when listing columns.
const COLUMN_SCAN_ROWS: usize = 50;

static TITLE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)title|headline|name").expect("title key pattern"));
static URL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)url|link|href|source").expect("url key pattern"));
static HTTP_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("http value pattern"));

/// Whether a string looks like a fetchable http(s) URL.
pub fn is_http_url(value: &str) -> bool {
    HTTP_VALUE.is_match(value)
}

/// Column names seen in the first rows, in first-seen order.
/// With `include_empty`, a leading `""` stands for "no column".
pub fn column_options(rows: &[Row], include_empty: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns: Vec<String> = Vec::new();
    if include_empty {
        columns.push(String::new());
    }
    for row in rows.iter().take(COLUMN_SCAN_ROWS) {
        for key in row.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Guess the title column: names like "title" score 2, values longer than
/// 15 characters score 1.
pub fn guess_title_key(row: &Row) -> String {
    best_key(row, |key, value| {
        let mut score = 0;
        if TITLE_KEY.is_match(key) {
            score += 2;
        }
        if value.chars().count() > 15 {
            score += 1;
        }
        score
    })
}

/// Guess the URL column: names like "url" score 2, http(s) values score 2.
pub fn guess_url_key(row: &Row) -> String {
    best_key(row, |key, value| {
        let mut score = 0;
        if URL_KEY.is_match(key) {
            score += 2;
        }
        if is_http_url(value) {
            score += 2;
        }
        score
    })
}

/// Highest-scoring key; the earliest key wins ties. Empty row -> "".
fn best_key(row: &Row, score: impl Fn(&str, &str) -> u32) -> String {
    let mut best: Option<(&String, u32)> = None;
    for (key, value) in row {
        let s = score(key, value);
        if best.is_none_or(|(_, b)| s > b) {
            best = Some((key, s));
        }
    }
    best.map(|(k, _)| k.clone()).unwrap_or_default()
}
