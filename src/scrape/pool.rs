// Bounded-concurrency scrape pool.
//
// Scrapes every target with at most `concurrency` requests in flight, then
// assembles articles in target order. A failed scrape is logged and turned
// into a fallback article; it never aborts the batch.

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::traits::{ScrapedPage, Scraper};
use crate::corpus::assemble::article_from_scrape;
use crate::corpus::columns::is_http_url;
use crate::corpus::models::{Article, ScrapeTarget};

/// Default number of pages fetched in parallel.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Scrape all targets and build one article per target, in target order.
pub async fn scrape_all(
    scraper: &dyn Scraper,
    targets: &[ScrapeTarget],
    concurrency: usize,
    show_progress: bool,
) -> Vec<Article> {
    let concurrency = concurrency.max(1);

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Scraping [{bar:30}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut outcomes: Vec<(usize, Option<ScrapedPage>)> = stream::iter(
        targets.iter().enumerate().map(|(position, target)| async move {
            (position, fetch(scraper, target).await)
        }),
    )
    .buffer_unordered(concurrency)
    .inspect(|_| pb.inc(1))
    .collect()
    .await;

    pb.finish_and_clear();

    outcomes.sort_by_key(|(position, _)| *position);

    let articles: Vec<Article> = outcomes
        .iter()
        .map(|(position, page)| article_from_scrape(*position, &targets[*position], page.as_ref()))
        .collect();

    let scraped = outcomes.iter().filter(|(_, page)| page.is_some()).count();
    info!(
        targets = targets.len(),
        scraped,
        fallbacks = targets.len() - scraped,
        "Scrape batch complete"
    );

    articles
}

/// Fetch one target. `None` when the URL isn't fetchable or the scrape failed.
async fn fetch(scraper: &dyn Scraper, target: &ScrapeTarget) -> Option<ScrapedPage> {
    if !is_http_url(&target.url) {
        return None;
    }
    match scraper.scrape(&target.url).await {
        Ok(page) => Some(page),
        Err(e) => {
            warn!(url = %target.url, error = %e, "Scrape failed, using row title");
            None
        }
    }
}
