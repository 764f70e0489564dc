//! Daily quote lookup.
//!
//! A remote quote is cached in process for a fixed TTL. Any remote failure
//! degrades to a random entry from a built-in table; fallback picks are not
//! cached so the next request tries the remote again.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use wallpaper_common::{Quote, WallpaperError, WallpaperResult};

use crate::config::QuoteConfig;
use crate::metrics::{record_quote, QuoteOrigin};

/// Built-in quotes as (text, author).
pub const FALLBACK_QUOTES: [(&str, &str); 10] = [
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Stay hungry, stay foolish.", "Steve Jobs"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
    ("It does not matter how slowly you go as long as you do not stop.", "Confucius"),
    ("Everything you've ever wanted is on the other side of fear.", "George Addair"),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    ("You miss 100% of the shots you don't take.", "Wayne Gretzky"),
    (
        "Hardships often prepare ordinary people for an extraordinary destiny.",
        "C.S. Lewis",
    ),
];

/// A uniformly random built-in quote.
pub fn fallback_quote() -> Quote {
    let (text, author) = FALLBACK_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_QUOTES[0]);
    Quote::new(text, author)
}

// ============================================================================
// Remote source
// ============================================================================

/// Something that can produce a quote over the network.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self) -> WallpaperResult<Quote>;
}

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    #[serde(default)]
    a: String,
}

/// Parse a ZenQuotes body: `[{"q": "...", "a": "..."}]`.
pub fn parse_zenquotes(body: &str) -> WallpaperResult<Quote> {
    let entries: Vec<ZenQuote> = serde_json::from_str(body)?;
    let first = entries
        .into_iter()
        .next()
        .ok_or_else(|| WallpaperError::QuoteError("empty response".to_string()))?;

    let text = strip_controls(&first.q);
    if text.trim().is_empty() {
        return Err(WallpaperError::QuoteError("blank quote".to_string()));
    }
    Ok(Quote::new(text.trim(), strip_controls(&first.a).trim()))
}

fn strip_controls(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// HTTP client for the ZenQuotes API.
pub struct ZenQuotesClient {
    client: reqwest::Client,
    url: String,
}

impl ZenQuotesClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> WallpaperResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WallpaperError::InternalError(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl QuoteSource for ZenQuotesClient {
    async fn fetch(&self) -> WallpaperResult<Quote> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| WallpaperError::QuoteError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WallpaperError::QuoteError(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WallpaperError::QuoteError(e.to_string()))?;
        parse_zenquotes(&body)
    }
}

// ============================================================================
// Cache
// ============================================================================

struct CachedQuote {
    quote: Quote,
    fetched_at: Instant,
}

/// Single-entry TTL cache for the last remote quote.
pub struct QuoteCache {
    entry: RwLock<Option<CachedQuote>>,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new(ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Initializing quote cache");
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    /// Cached quote if still fresh.
    pub async fn get(&self) -> Option<Quote> {
        let guard = self.entry.read().await;
        if let Some(cached) = guard.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                debug!("Quote cache hit");
                return Some(cached.quote.clone());
            }
            debug!("Quote cache expired");
        }
        None
    }

    pub async fn set(&self, quote: Quote) {
        let mut guard = self.entry.write().await;
        *guard = Some(CachedQuote {
            quote,
            fetched_at: Instant::now(),
        });
        debug!("Quote cached");
    }

    pub async fn invalidate(&self) {
        let mut guard = self.entry.write().await;
        *guard = None;
        debug!("Quote cache invalidated");
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Cache, then remote, then the built-in table.
pub struct QuoteProvider {
    source: Option<Arc<dyn QuoteSource>>,
    cache: QuoteCache,
}

impl QuoteProvider {
    pub fn new(source: Option<Arc<dyn QuoteSource>>, ttl: Duration) -> Self {
        Self {
            source,
            cache: QuoteCache::new(ttl),
        }
    }

    /// Build from config. Remote lookups are skipped when disabled.
    pub fn from_config(config: &QuoteConfig) -> WallpaperResult<Self> {
        let source: Option<Arc<dyn QuoteSource>> = if config.remote {
            let client =
                ZenQuotesClient::new(&config.url, Duration::from_secs(config.timeout_secs))?;
            Some(Arc::new(client))
        } else {
            info!("Remote quotes disabled, using built-in quotes");
            None
        };
        Ok(Self::new(source, Duration::from_secs(config.cache_ttl_secs)))
    }

    /// Never fails.
    pub async fn quote(&self) -> Quote {
        if let Some(quote) = self.cache.get().await {
            record_quote(QuoteOrigin::Cache);
            return quote;
        }

        if let Some(source) = &self.source {
            match source.fetch().await {
                Ok(quote) => {
                    self.cache.set(quote.clone()).await;
                    record_quote(QuoteOrigin::Remote);
                    return quote;
                }
                Err(e) => {
                    warn!(error = %e, "Quote fetch failed, using built-in quote");
                }
            }
        }

        record_quote(QuoteOrigin::Fallback);
        fallback_quote()
    }

    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }
}
