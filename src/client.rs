//! Portal HTTP client.
//!
//! Performs the network half of the pipeline: fetching the JSON document
//! tree from a resolved API endpoint and classifying failures so the
//! caller can tell connectivity problems from permission problems.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error::{ExportError, Result};
use crate::tree::Node;

/// Some portals reject non-browser user agents outright.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Safety limit on continuation pages.
const MAX_PAGES: u32 = 1000;

/// One page of the document tree response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreePage {
    data: Vec<Node>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// HTTP client for public portal document APIs.
///
/// Cheaply cloneable; clones reference the same underlying connection
/// pool.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: Client,
}

impl PortalClient {
    /// Create a client with the portal-friendly user agent and a finite
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ExportError::Network)?;

        Ok(Self { http })
    }

    /// Fetch the full document tree behind `api_url`.
    ///
    /// The common case is a single round trip. If a response carries a
    /// continuation token the next page is requested with
    /// `?pageToken=<token>` and the pages are concatenated in order.
    ///
    /// # Errors
    ///
    /// * [`ExportError::Network`] on connection or timeout failure.
    /// * [`ExportError::PrivateSite`] when the portal answers 401 or 403.
    /// * [`ExportError::UnexpectedResponse`] for any other non-success
    ///   status, or a body that is not the expected tree schema.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_tree(&self, api_url: &Url) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        let mut next_url = Some(api_url.clone());
        let mut pages = 0u32;

        while let Some(url) = next_url.take() {
            let page = self.fetch_page(url).await?;
            nodes.extend(page.data);
            pages += 1;

            if let Some(token) = page.next_page_token {
                if pages >= MAX_PAGES {
                    tracing::warn!("reached pagination limit of {MAX_PAGES} pages, stopping");
                    break;
                }
                let mut url = api_url.clone();
                url.query_pairs_mut().clear().append_pair("pageToken", &token);
                next_url = Some(url);
            }
        }

        tracing::debug!(pages, entries = nodes.len(), "fetched document tree");
        Ok(nodes)
    }

    async fn fetch_page(&self, url: Url) -> Result<TreePage> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ExportError::Network)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ExportError::PrivateSite {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(ExportError::UnexpectedResponse {
                reason: format!("HTTP {status}"),
            });
        }

        let body = response.text().await.map_err(ExportError::Network)?;
        serde_json::from_str(&body).map_err(|e| ExportError::UnexpectedResponse {
            reason: format!("body is not a document tree: {e}"),
        })
    }
}
