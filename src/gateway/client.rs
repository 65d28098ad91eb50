use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use super::error::{GatewayError, body_excerpt};
use super::query::Select;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const INITIAL_BACKOFF: Duration = Duration::from_millis(100);
const MAX_BACKOFF: Duration = Duration::from_secs(2);

/// HTTP client for the gateway's REST dialect.
///
/// Every request carries the publishable API key; authenticated reads also
/// carry the user's bearer token. Transport errors and 5xx responses retry
/// with exponential backoff up to `max_retries` extra attempts; 4xx responses
/// are terminal.
pub struct GatewayClient {
    pub(super) http: reqwest::Client,
    pub(super) base_url: String,
    pub(super) api_key: String,
    max_retries: u32,
}

impl GatewayClient {
    pub fn new(base_url: &str, api_key: &str, max_retries: u32) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            max_retries,
        })
    }

    /// Run a select and parse the rows into the query's typed projection.
    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &Select,
        access_token: Option<&str>,
    ) -> Result<Vec<T>, GatewayError> {
        let url = format!("{}{}", self.base_url, query.path());
        let response = self
            .get_with_retry(&url, &query.query_pairs(), access_token)
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if is_auth_rejection(status) {
            return Err(GatewayError::AuthUnavailable(body_excerpt(&body)));
        }
        if !status.is_success() {
            return Err(GatewayError::FetchFailed {
                status: status.as_u16(),
                body: body_excerpt(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            GatewayError::Shape(format!("table {}: {e}", query.table()))
        })
    }

    async fn get_with_retry(
        &self,
        url: &str,
        pairs: &[(String, String)],
        access_token: Option<&str>,
    ) -> Result<reqwest::Response, GatewayError> {
        let mut delay = INITIAL_BACKOFF;
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                log::warn!("Retrying {url} (attempt {attempt}) after {delay:?}");
                sleep(delay).await;
                delay = std::cmp::min(delay * 2, MAX_BACKOFF);
            }

            let mut request = self.http.get(url).query(pairs).header("apikey", &self.api_key);
            if let Some(token) = access_token {
                request = request.bearer_auth(token);
            }

            match request.send().await {
                Ok(response) if response.status().is_server_error() => {
                    let status = response.status();
                    if attempt == self.max_retries {
                        let body = response.text().await.unwrap_or_default();
                        return Err(GatewayError::FetchFailed {
                            status: status.as_u16(),
                            body: body_excerpt(&body),
                        });
                    }
                    last_error = Some(GatewayError::FetchFailed {
                        status: status.as_u16(),
                        body: String::new(),
                    });
                }
                // 2xx and 4xx are both terminal; the caller maps the status.
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempt == self.max_retries {
                        return Err(GatewayError::Transport(e));
                    }
                    last_error = Some(GatewayError::Transport(e));
                }
            }
        }

        // Unreachable: the loop always returns on its final attempt.
        Err(last_error.unwrap_or(GatewayError::FetchFailed {
            status: 0,
            body: "retry budget exhausted".to_string(),
        }))
    }
}

/// An expired or revoked session reads differently from a broken query: the
/// web layer sends the user back to the login form instead of a 500.
pub(super) fn is_auth_rejection(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}
