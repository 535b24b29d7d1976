// HTML main-text extraction.
//
// Noise elements (scripts, navigation, headers, footers, forms, sidebars) are
// skipped entirely. The main text comes from the first <article>, then the
// first <main>, then all body paragraphs joined by newlines. The title comes
// from og:title, then <title>, then the first <h1>.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

use super::traits::ScrapedPage;

/// Extracted text is cut to this many characters.
pub const MAX_TEXT_CHARS: usize = 200_000;

const NOISE_TAGS: &[&str] = &[
    "script", "noscript", "style", "svg", "header", "footer", "nav", "form", "aside",
];

/// Elements whose text is a separate run of words from its neighbours.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "figure",
    "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "main", "ol", "p", "pre", "section", "table",
    "td", "th", "tr", "ul",
];

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

static ARTICLE: LazyLock<Selector> = LazyLock::new(|| selector("article"));
static MAIN: LazyLock<Selector> = LazyLock::new(|| selector("main"));
static BODY_PARAGRAPHS: LazyLock<Selector> = LazyLock::new(|| selector("body p"));
static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[property="og:title"]"#));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));

/// Extract title and main text from an HTML document.
pub fn extract_page(html: &str) -> ScrapedPage {
    let document = Html::parse_document(html);

    let main_text = first_text(&document, &ARTICLE)
        .or_else(|| first_text(&document, &MAIN))
        .unwrap_or_else(|| {
            document
                .select(&BODY_PARAGRAPHS)
                .filter(|p| !has_noise_ancestor(p))
                .map(|p| element_text(&p))
                .collect::<Vec<_>>()
                .join("\n")
        });

    let text: String = clean(&main_text).chars().take(MAX_TEXT_CHARS).collect();

    let title = document
        .select(&OG_TITLE)
        .filter_map(|m| m.value().attr("content"))
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| first_text(&document, &TITLE))
        .or_else(|| first_text(&document, &H1))
        .map(|t| clean(&t))
        .unwrap_or_default();

    ScrapedPage { title, text }
}

/// Text of the first matching element outside noise, if it has any.
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .find(|el| !has_noise_ancestor(el))
        .map(|el| element_text(&el))
        .filter(|t| !t.trim().is_empty())
}

/// Concatenated text below `el`, skipping noise subtrees.
fn element_text(el: &ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(el, &mut out);
    out
}

fn collect_text(el: &ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    if is_noise(&child_el) {
                        continue;
                    }
                    let block = is_block(&child_el);
                    if block {
                        out.push(' ');
                    }
                    collect_text(&child_el, out);
                    // Inline markup joins its text; blocks stay separate words
                    if block {
                        out.push(' ');
                    }
                }
            }
            _ => {}
        }
    }
}

fn is_block(el: &ElementRef<'_>) -> bool {
    BLOCK_TAGS.contains(&el.value().name())
}

fn is_noise(el: &ElementRef<'_>) -> bool {
    NOISE_TAGS.contains(&el.value().name())
}

fn has_noise_ancestor(el: &ElementRef<'_>) -> bool {
    is_noise(el)
        || el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|a| is_noise(&a))
}

/// Replace non-breaking spaces and collapse whitespace.
fn clean(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
