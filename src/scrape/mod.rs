// Scraping: fetch each article URL and extract its readable text.
//
// The Scraper trait is the seam; HttpScraper is the default implementation
// and `pool::scrape_all` drives many scrapes with bounded concurrency.

pub mod extract;
pub mod http;
pub mod pool;
pub mod traits;
