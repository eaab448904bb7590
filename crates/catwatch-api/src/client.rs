// Intent API HTTP client
//
// Wraps `reqwest::Client` with Catalyst-specific URL construction, token
// handling, and envelope unwrapping. Endpoint methods (devices, interfaces)
// are implemented as inherent methods via separate files to keep this
// module focused on transport mechanics.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{IntentEnvelope, TokenResponse};
use crate::transport::TransportConfig;

/// Header carrying the bearer token on every Intent API request.
const AUTH_HEADER: &str = "X-Auth-Token";

/// Raw HTTP client for the Catalyst Center Intent API.
///
/// Holds the token acquired at [`connect`](Self::connect) time. The token
/// is never refreshed: a run that outlives its validity fails with
/// [`Error::Authentication`] rather than re-authenticating.
#[derive(Debug)]
pub struct IntentClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl IntentClient {
    /// Authenticate against the controller and return a ready client.
    ///
    /// `POST /dna/system/api/v1/auth/token` with HTTP Basic credentials.
    /// Any non-2xx response is an [`Error::Authentication`] carrying the
    /// status and body; the caller is expected to abort the run.
    pub async fn connect(
        base_url: Url,
        username: &str,
        password: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let url = join(&base_url, "dna/system/api/v1/auth/token")?;
        debug!("requesting auth token from {}", url);

        let resp = http
            .post(url)
            .basic_auth(username, Some(password.expose_secret()))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                status: status.as_u16(),
                body: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            })?;

        debug!("auth token acquired");
        Ok(Self {
            http,
            base_url,
            token: token.token,
        })
    }

    /// Create a client with a pre-acquired token (tests, token reuse).
    pub fn with_token(http: reqwest::Client, base_url: Url, token: String) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an Intent API path: `{base}/dna/intent/api/v1/{path}`.
    pub(crate) fn intent_url(&self, path: &str) -> Result<Url, Error> {
        join(&self.base_url, &format!("dna/intent/api/v1/{path}"))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request with the token header and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        self.get_with_query(url, &[]).await
    }

    /// GET with query parameters; unwraps the `{ "response": ... }` envelope.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header(AUTH_HEADER, &self.token)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_envelope(resp).await
    }

    /// Parse the `{ response, version }` envelope, returning `response`.
    ///
    /// A 401 anywhere after connect means the token expired; that is
    /// surfaced as `Authentication`, distinct from other endpoint errors.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                status: status.as_u16(),
                body: preview(&body).to_owned(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Intent {
                status: status.as_u16(),
                body: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: IntentEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            })?;

        Ok(envelope.response)
    }
}

/// Join a path onto the base URL, tolerating trailing slashes.
fn join(base: &Url, path: &str) -> Result<Url, Error> {
    let full = format!("{}/{path}", base.as_str().trim_end_matches('/'));
    Url::parse(&full).map_err(Error::InvalidUrl)
}

/// Truncate a response body for error messages.
fn preview(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
