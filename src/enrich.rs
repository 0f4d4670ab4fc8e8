//! Best-effort web enrichment for answers.
//!
//! Fetches plain text from career information sources and extracts short
//! snippets relevant to a question. Everything here is best effort: a
//! fetcher error, an empty page, or a snippet with no relevant sentences
//! all degrade to "no enrichment" rather than an error the caller must
//! handle.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, WayfinderError};

/// HTTP request timeout for enrichment fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like user agent; some career sites reject default clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// At most this many sources are tried per question.
const MAX_SOURCES: usize = 2;

/// Fetched content shorter than this is considered useless.
const MIN_CONTENT_LEN: usize = 100;

/// Only the first sentences of a page are scanned for relevance.
const SCAN_SENTENCES: usize = 10;

/// A snippet keeps at most this many relevant sentences.
const MAX_SNIPPET_SENTENCES: usize = 3;

/// Career information sources, tried in order.
const SOURCE_URLS: &[&str] = &["https://www.bls.gov/ooh/"];

static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)>").unwrap()
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Fetches the readable text content of a URL.
///
/// The seam between answer composition and the network; tests substitute a
/// canned implementation.
pub trait TextFetcher: Send + Sync {
    /// Fetch the plain-text content of `url`.
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// A [`TextFetcher`] backed by a blocking HTTP client.
#[derive(Debug)]
pub struct HttpTextFetcher {
    client: reqwest::blocking::Client,
}

impl HttpTextFetcher {
    /// Create a fetcher with the standard timeout and user agent.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WayfinderError::enrichment(format!("failed to build client: {e}")))?;
        Ok(HttpTextFetcher { client })
    }
}

impl TextFetcher for HttpTextFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| WayfinderError::enrichment(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| WayfinderError::enrichment(format!("bad status: {e}")))?;
        let body = response
            .text()
            .map_err(|e| WayfinderError::enrichment(format!("failed to read body: {e}")))?;
        Ok(html_to_text(&body))
    }
}

/// Strip markup from an HTML document and collapse whitespace.
pub fn html_to_text(html: &str) -> String {
    let without_blocks = SCRIPT_STYLE.replace_all(html, " ");
    let without_tags = TAG.replace_all(&without_blocks, " ");
    WHITESPACE
        .replace_all(without_tags.trim(), " ")
        .into_owned()
}

/// Try the configured sources and return a relevant snippet for the
/// question, or `None` when nothing usable came back.
pub fn enrichment_for(question: &str, fetcher: &dyn TextFetcher) -> Option<String> {
    for url in SOURCE_URLS.iter().take(MAX_SOURCES) {
        match fetcher.fetch_text(url) {
            Ok(content) if content.len() > MIN_CONTENT_LEN => {
                return relevant_snippet(&content, question);
            }
            Ok(_) => {
                debug!(url, "enrichment source returned too little content");
                return None;
            }
            Err(error) => {
                debug!(url, %error, "enrichment source failed, trying next");
                continue;
            }
        }
    }
    None
}

/// Pick sentences from the start of the content that share a word with the
/// question.
fn relevant_snippet(content: &str, question: &str) -> Option<String> {
    let question_words: Vec<String> = question
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.to_string())
        .collect();

    let relevant: Vec<&str> = content
        .split('.')
        .take(SCAN_SENTENCES)
        .map(str::trim)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            question_words.iter().any(|word| lower.contains(word.as_str()))
        })
        .take(MAX_SNIPPET_SENTENCES)
        .collect();

    if relevant.is_empty() {
        None
    } else {
        Some(format!("{}.", relevant.join(". ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedFetcher {
        body: &'static str,
    }

    impl TextFetcher for CannedFetcher {
        fn fetch_text(&self, _url: &str) -> Result<String> {
            Ok(self.body.to_string())
        }
    }

    struct FailingFetcher;

    impl TextFetcher for FailingFetcher {
        fn fetch_text(&self, _url: &str) -> Result<String> {
            Err(WayfinderError::enrichment("unreachable"))
        }
    }

    #[test]
    fn test_html_to_text_strips_markup() {
        let html = "<html><head><style>body { color: red; }</style>\
                    <script>alert('x');</script></head>\
                    <body><h1>Careers</h1><p>Salary   data\nhere.</p></body></html>";
        let text = html_to_text(html);
        assert_eq!(text, "Careers Salary data here.");
        assert!(!text.contains("alert"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_relevant_snippet_picks_matching_sentences() {
        let content = "Nurses earn good salaries. The weather is sunny. \
                       Salary growth for nurses is strong. Unrelated sentence here.";
        let snippet = relevant_snippet(content, "nurse salary").unwrap();
        assert!(snippet.contains("Nurses earn good salaries"));
        assert!(snippet.contains("Salary growth"));
        assert!(!snippet.contains("weather"));
    }

    #[test]
    fn test_relevant_snippet_none_when_nothing_matches() {
        let content = "Completely unrelated text. More filler.";
        assert!(relevant_snippet(content, "quantum chromodynamics").is_none());
    }

    #[test]
    fn test_enrichment_for_short_content_is_none() {
        let fetcher = CannedFetcher { body: "too short" };
        assert!(enrichment_for("software developer salary", &fetcher).is_none());
    }

    #[test]
    fn test_enrichment_for_failure_is_none() {
        assert!(enrichment_for("software developer salary", &FailingFetcher).is_none());
    }

    #[test]
    fn test_enrichment_for_returns_snippet() {
        let fetcher = CannedFetcher {
            body: "Software developers build applications and earn competitive salaries. \
                   Padding sentence with many extra words to push the content length over \
                   the minimum threshold for usable pages.",
        };
        let snippet = enrichment_for("software developer salary", &fetcher).unwrap();
        assert!(snippet.contains("Software developers"));
    }
}
