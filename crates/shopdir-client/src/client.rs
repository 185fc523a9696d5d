//! HTTP loader for the shop list.
//!
//! Sources are tried strictly in order. A non-2xx status, a network error or
//! an unparseable body moves on to the next source; the first parsed payload
//! wins. There is no retry once every source has failed.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use shopdir_core::{AppConfig, ShopCollection};

use crate::error::{LoadError, SourceError};
use crate::normalize::normalize_shops;
use crate::source::{sources_from_config, ShopSource};
use crate::types::extract_shop_list;

/// What a successful load fetched and from where.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// Name of the source that answered.
    pub source_name: String,
    pub shop_count: usize,
    pub loaded_at: DateTime<Utc>,
    /// Failures from sources tried before the winning one.
    pub skipped: Vec<String>,
}

/// A freshly loaded collection plus its [`LoadReport`].
#[derive(Debug, Clone)]
pub struct LoadedShops {
    pub collection: ShopCollection,
    pub report: LoadReport,
}

struct FetchOutcome {
    payload: serde_json::Value,
    source_name: String,
    skipped: Vec<String>,
}

/// Client for the shop list endpoint and its fallback route.
pub struct ShopClient {
    client: Client,
    sources: Vec<ShopSource>,
}

impl ShopClient {
    /// Builds a client with the primary endpoint and optional proxy from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidSourceUrl`] for a malformed endpoint or
    /// [`LoadError::Client`] if the `reqwest::Client` cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, LoadError> {
        let sources = sources_from_config(config)?;
        Self::with_sources(sources, config.request_timeout_secs, &config.user_agent)
    }

    /// Builds a client over an explicit source list (tests point this at a
    /// mock server).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoSources`] for an empty list or
    /// [`LoadError::Client`] if the `reqwest::Client` cannot be constructed.
    pub fn with_sources(
        sources: Vec<ShopSource>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LoadError> {
        if sources.is_empty() {
            return Err(LoadError::NoSources);
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, sources })
    }

    /// Sources in the order they are tried.
    #[must_use]
    pub fn sources(&self) -> &[ShopSource] {
        &self.sources
    }

    /// Fetches, extracts and normalizes the shop list.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DataUnavailable`] with the last source failure
    /// when every source failed.
    pub async fn load(&self) -> Result<LoadedShops, LoadError> {
        let outcome = self.fetch_payload().await?;
        let collection = normalize_shops(extract_shop_list(&outcome.payload));

        tracing::info!(
            source = %outcome.source_name,
            shops = collection.len(),
            skipped = outcome.skipped.len(),
            "loaded shop list"
        );

        Ok(LoadedShops {
            report: LoadReport {
                source_name: outcome.source_name,
                shop_count: collection.len(),
                loaded_at: Utc::now(),
                skipped: outcome.skipped,
            },
            collection,
        })
    }

    async fn fetch_payload(&self) -> Result<FetchOutcome, LoadError> {
        let mut skipped = Vec::new();
        let mut last_error: Option<SourceError> = None;

        for source in &self.sources {
            match self.fetch_source(source).await {
                Ok(payload) => {
                    tracing::debug!(
                        source = %source.name,
                        url = %source.url,
                        "shop source answered"
                    );
                    return Ok(FetchOutcome {
                        payload,
                        source_name: source.name.clone(),
                        skipped,
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        source = %source.name,
                        error = %err,
                        "shop source failed; trying next"
                    );
                    skipped.push(err.to_string());
                    last_error = Some(err);
                }
            }
        }

        match last_error {
            Some(last) => {
                tracing::error!(
                    attempts = self.sources.len(),
                    error = %last,
                    "all shop sources failed"
                );
                Err(LoadError::DataUnavailable {
                    attempts: self.sources.len(),
                    last,
                })
            }
            // Unreachable: `with_sources` rejects an empty list.
            None => Err(LoadError::NoSources),
        }
    }

    async fn fetch_source(&self, source: &ShopSource) -> Result<serde_json::Value, SourceError> {
        let transport = |e: reqwest::Error| SourceError::Transport {
            source_name: source.name.clone(),
            source: e,
        };

        let response = self
            .client
            .get(source.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                source_name: source.name.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str::<serde_json::Value>(&body).map_err(|e| SourceError::Parse {
            source_name: source.name.clone(),
            source: e,
        })
    }
}
