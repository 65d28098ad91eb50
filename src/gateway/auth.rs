use serde::Deserialize;
use serde_json::json;

use super::client::{GatewayClient, is_auth_rejection};
use super::error::{GatewayError, body_excerpt};

/// A signed-in gateway session. The dashboard only ever forwards the access
/// token; it never inspects token internals.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySession {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: GatewayUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayUser {
    pub id: String,
    pub email: String,
}

impl GatewayClient {
    /// Exchange email + password for a session. Rejected credentials surface
    /// as `AuthUnavailable`; sign-in is never retried.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<GatewaySession, GatewayError> {
        let url = format!("{}/auth/v1/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if is_auth_rejection(status) || status.as_u16() == 400 {
            return Err(GatewayError::AuthUnavailable(body_excerpt(&body)));
        }
        if !status.is_success() {
            return Err(GatewayError::FetchFailed {
                status: status.as_u16(),
                body: body_excerpt(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Shape(format!("auth token response: {e}")))
    }

    /// Revoke the session's access token. Callers treat this as best-effort:
    /// the cookie session is purged regardless.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), GatewayError> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        // An already-expired token is as signed-out as it gets.
        if status.is_success() || is_auth_rejection(status) {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::FetchFailed {
            status: status.as_u16(),
            body: body_excerpt(&body),
        })
    }
}
