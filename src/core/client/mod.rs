//! Public client surface + builder.
//! Internals are split into `auth` (bearer header) and `constants` (outcome text + headers).

mod auth;
pub(crate) mod constants;

use crate::auth::AuthApi;
use crate::balance::BalanceApi;
use crate::core::OkraError;
use crate::transaction::TransactionApi;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub use constants::{FAILURE_PLACEHOLDER, STATUS_MESSAGE_PREFIX};

/// How a non-200 response from the provider is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Return `Ok` with a synthesized `"Status code returned was: <code>"` text. (Default)
    ///
    /// The error channel stays empty, so callers must inspect the text
    /// (see [`soft_status`](crate::soft_status)) to notice the anomaly.
    #[default]
    Report,
    /// Return [`OkraError::Status`] carrying the numeric code and URL.
    Error,
}

/// Credential holder and entry point for every Okra product.
///
/// A client is immutable once built and cheap to clone; clones share the
/// underlying connection pool. Each call opens an independent request.
///
/// # Example
///
/// ```no_run
/// # use okra_rs::OkraClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), okra_rs::OkraError> {
/// let client = OkraClient::new("my-token", "https://api.okra.ng/v2/");
/// let body = client.auth().by_id("1", "10", "5f8c9a").await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OkraClient {
    http: Client,
    token: String,
    base_url: String,
    status_policy: StatusPolicy,
}

impl fmt::Debug for OkraClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OkraClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("status_policy", &self.status_policy)
            .finish_non_exhaustive()
    }
}

impl OkraClient {
    /// Creates a client from a bearer token and a base URL.
    ///
    /// The base URL is used verbatim as a prefix for every endpoint path, so it
    /// normally ends with a `/` (e.g. `https://api.okra.ng/v2/`).
    ///
    /// # Panics
    ///
    /// Panics if `token` or `base_url` is empty. Missing credentials are a
    /// programming error; use [`OkraClient::builder`] to handle them at runtime.
    /// Also panics if the HTTP client cannot be initialized.
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        match Self::builder().token(token).base_url(base_url).build() {
            Ok(client) => client,
            Err(e) => construction_failed(&e),
        }
    }

    /// Create a new builder.
    pub fn builder() -> OkraClientBuilder {
        OkraClientBuilder::default()
    }

    /// The prefix prepended to every endpoint path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured status reporting policy.
    pub const fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Authentication records.
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Account balances.
    pub const fn balance(&self) -> BalanceApi<'_> {
        BalanceApi::new(self)
    }

    /// Transactions.
    pub const fn transaction(&self) -> TransactionApi<'_> {
        TransactionApi::new(self)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

fn construction_failed(e: &OkraError) -> ! {
    match e {
        OkraError::MissingCredentials { .. } => {
            panic!("Token and Base url is needed to call this Function: {e}")
        }
        other => panic!("failed to construct OkraClient: {other}"),
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`OkraClient`].
///
/// Every option besides the credentials is opt-in; with none set the client
/// behaves exactly like [`OkraClient::new`] (no timeouts, status reported as text).
#[derive(Default)]
pub struct OkraClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    status_policy: StatusPolicy,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl OkraClientBuilder {
    /// Set the bearer token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the base URL (e.g., `https://api.okra.ng/v2/`).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Choose how non-200 responses are reported. Default: [`StatusPolicy::Report`].
    #[must_use]
    pub const fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`OkraError::MissingCredentials`] if the token or base URL is
    /// missing or empty, or [`OkraError::RequestBuild`] if the HTTP client
    /// cannot be initialized.
    pub fn build(self) -> Result<OkraClient, OkraError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(OkraError::MissingCredentials { field: "token" })?;
        let base_url = self
            .base_url
            .filter(|u| !u.is_empty())
            .ok_or(OkraError::MissingCredentials { field: "base url" })?;

        let mut httpb = Client::builder();
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb
            .build()
            .map_err(|e| OkraError::RequestBuild(format!("failed to initialize http client: {e}")))?;

        Ok(OkraClient {
            http,
            token,
            base_url,
            status_policy: self.status_policy,
        })
    }
}
