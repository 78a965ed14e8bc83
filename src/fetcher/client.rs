use std::time::{Duration, Instant};

use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, instrument};
use url::Url;

use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};

pub const DEFAULT_USER_AGENT: &str = "SeoAuditBot/0.1 (+https://seo-audit.example.com)";
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024; // 5MB
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Settings shared by every request issued through a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub max_redirects: usize,
    pub max_body_bytes: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Single-attempt HTTP(S) text fetcher. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_body_bytes: u64,
}

impl Fetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,text/plain;q=0.9,*/*;q=0.8",
            ),
        );

        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::ClientSetup(e.to_string()))?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Fetches `url` once, failing on transport errors, on `timeout`, and on
    /// any final status outside 2xx. Redirects are followed.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch(&self, url: &Url, timeout: Duration) -> Result<PageResponse, FetchError> {
        let started = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > self.max_body_bytes
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(str::to_string);

        let body_bytes = response
            .bytes()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Content-Length may be missing or describe the compressed body
        if body_bytes.len() as u64 > self.max_body_bytes {
            return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
        }

        let elapsed = started.elapsed();
        debug!(
            status = status.as_u16(),
            bytes = body_bytes.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "fetched"
        );

        Ok(process_response(
            final_url,
            status,
            content_type,
            body_bytes,
            elapsed,
        ))
    }
}
