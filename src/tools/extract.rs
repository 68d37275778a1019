//! Content Extractor: one GET per URL, reduced to a bounded plain-text
//! bundle for prompt construction. Absence (network failure, non-2xx)
//! is an expected outcome here, never an error.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::types::PageContent;
use crate::core::AppState;

/// Browser-identifying request header; plenty of sites serve empty
/// shells to obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Hard cap on extracted body text, bounding downstream prompt size.
pub const MAX_TEXT_CHARS: usize = 3000;

// Subtrees stripped before any text extraction.
const SKIPPED_TAGS: [&str; 6] = ["script", "style", "nav", "footer", "iframe", "noscript"];

/// Fetches a URL and reduces it to a [`PageContent`] bundle.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Option<PageContent>;
}

/// Live fetcher: single GET, no retries, client-level timeouts.
pub struct HttpPageFetcher {
    http: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Option<PageContent> {
        let response = match self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("failed to fetch {}: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("fetch of {} returned status {}", url, response.status());
            return None;
        }

        let html = match response.text().await {
            Ok(h) => h,
            Err(e) => {
                warn!("failed to read body of {}: {}", url, e);
                return None;
            }
        };

        let page = page_content_from_html(&html);
        info!(
            "extracted {} chars, {} h1s from {}",
            page.text.len(),
            page.h1s.len(),
            url
        );
        Some(page)
    }
}

/// Cache-and-limit front for the configured fetcher: moka hit skips the
/// outbound GET entirely; misses run under the process-wide outbound
/// permit.
pub async fn fetch_page_cached(state: &Arc<AppState>, url: &str) -> Option<PageContent> {
    if let Some(hit) = state.page_cache.get(url).await {
        return Some(hit);
    }

    let _permit = state.outbound_limit.acquire().await.expect("semaphore closed");
    let page = state.page_fetcher.fetch_page(url).await?;
    state.page_cache.insert(url.to_string(), page.clone()).await;
    Some(page)
}

/// Reduce raw markup to the four-field bundle. Pure; all parsing rules
/// live here so they are testable without a server.
pub fn page_content_from_html(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let title = select_first_text(&document, "title");

    let description = Selector::parse("meta[name=\"description\"]")
        .ok()
        .and_then(|sel| {
            document
                .select(&sel)
                .next()
                .and_then(|el| el.value().attr("content"))
                .map(|c| c.trim().to_string())
        })
        .unwrap_or_default();

    // h1 texts in document order, skipping empties and any heading that
    // sits inside a stripped subtree.
    let mut h1s = Vec::new();
    if let Ok(sel) = Selector::parse("h1") {
        for el in document.select(&sel) {
            if in_skipped_subtree(&el) {
                continue;
            }
            let text = collapse_whitespace(&element_text(el));
            if !text.is_empty() {
                h1s.push(text);
            }
        }
    }

    let body_text = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(element_text)
        .unwrap_or_default();
    let text = truncate_chars(&collapse_whitespace(&body_text), MAX_TEXT_CHARS);

    PageContent {
        title,
        description,
        h1s,
        text,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn select_first_text(document: &Html, selector: &str) -> String {
    if let Ok(sel) = Selector::parse(selector) {
        if let Some(el) = document.select(&sel).next() {
            return collapse_whitespace(&el.text().collect::<String>());
        }
    }
    String::new()
}

/// Collect the visible text under an element, skipping stripped subtrees.
fn element_text(element: ElementRef) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef, out: &mut String) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push(' ');
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn in_skipped_subtree(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| SKIPPED_TAGS.contains(&a.value().name()))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    text.chars().take(max).collect()
}
