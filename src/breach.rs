//! Breach lookup module
//!
//! Checks a password against the Pwned Passwords corpus with a k-anonymity
//! range query: only the first 5 hex characters of the SHA-1 digest leave the
//! process, the service answers with every known suffix under that prefix and
//! the match is decided locally.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::types::BreachStatus;

/// Range query endpoint; the 5-character prefix is appended.
pub const PWNED_RANGE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Number of digest characters disclosed to the service.
pub const PREFIX_LEN: usize = 5;

const USER_AGENT: &str = concat!("pwd-audit/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Breach lookup request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Breach lookup returned HTTP status {0}")]
    Status(u16),
    #[error("Breach lookup cancelled")]
    Cancelled,
}

/// Returns the SHA-1 digest of the UTF-8 password as 40 uppercase hex chars.
pub fn password_digest(password: &SecretString) -> String {
    hex::encode_upper(Sha1::digest(password.expose_secret().as_bytes()))
}

/// Splits a digest into the disclosed prefix and the locally kept suffix.
fn split_digest(digest: &str) -> (&str, &str) {
    digest.split_at(PREFIX_LEN)
}

/// Rejects non-success HTTP statuses.
fn check_status(status: reqwest::StatusCode) -> Result<(), BreachError> {
    if !status.is_success() {
        return Err(BreachError::Status(status.as_u16()));
    }
    Ok(())
}

/// Turns a range query outcome into a verdict: breached iff the suffix
/// appears in the body. Shared by the blocking and async paths.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn range_verdict(
    prefix: &str,
    suffix: &str,
    body: Result<String, BreachError>,
) -> Result<bool, BreachError> {
    match body {
        Ok(body) => {
            let breached = body.contains(suffix);

            #[cfg(feature = "tracing")]
            tracing::info!("Breach lookup for prefix {} done: breached={}", prefix, breached);

            Ok(breached)
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach lookup for prefix {} FAILED: {}", prefix, e);

            Err(e)
        }
    }
}

/// Transport for range queries.
///
/// Receives only the prefix and returns the raw response body
/// (`SUFFIX:COUNT` lines).
pub trait RangeTransport {
    fn fetch_range(&self, prefix: &str) -> Result<String, BreachError>;
}

/// Blocking HTTP transport against the Pwned Passwords range API.
///
/// Must not be driven from inside an async runtime; use
/// [`check_pwned_async`] there.
#[derive(Debug, Clone)]
pub struct HttpRangeTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpRangeTransport {
    /// Transport for [`PWNED_RANGE_URL`] with the client's default timeout.
    pub fn new() -> Result<Self, BreachError> {
        Self::with_options(PWNED_RANGE_URL, None)
    }

    /// Transport for a custom base URL (the prefix is appended verbatim).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, BreachError> {
        Self::with_options(base_url, None)
    }

    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, BreachError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl RangeTransport for HttpRangeTransport {
    fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = format!("{}{}", self.base_url, prefix);
        let response = self.client.get(&url).send()?;
        check_status(response.status())?;
        Ok(response.text()?)
    }
}

/// Breach checker over any [`RangeTransport`].
///
/// Stateless apart from the transport: no caching, no retry. Each call makes
/// exactly one range query.
#[derive(Debug, Clone)]
pub struct BreachChecker<T = HttpRangeTransport> {
    transport: T,
}

impl BreachChecker<HttpRangeTransport> {
    /// Checker for the public Pwned Passwords service.
    pub fn new() -> Result<Self, BreachError> {
        Ok(Self::with_transport(HttpRangeTransport::new()?))
    }
}

impl<T: RangeTransport> BreachChecker<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Checks whether the password appears in the breach corpus.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the service answers with a
    /// non-success status. A failure is never reported as "not breached".
    pub fn is_breached(&self, password: &SecretString) -> Result<bool, BreachError> {
        let digest = password_digest(password);
        let (prefix, suffix) = split_digest(&digest);

        #[cfg(feature = "tracing")]
        tracing::debug!("Breach lookup for prefix {}", prefix);

        range_verdict(prefix, suffix, self.transport.fetch_range(prefix))
    }
}

/// One-shot check against the public service.
///
/// Builds a fresh blocking client per call.
pub fn is_breached(password: &SecretString) -> Result<bool, BreachError> {
    BreachChecker::new()?.is_breached(password)
}

/// Async check against the public service, abandoned when `token` is cancelled.
#[cfg(feature = "async")]
pub async fn check_pwned_async(
    client: &reqwest::Client,
    password: &SecretString,
    token: CancellationToken,
) -> Result<bool, BreachError> {
    check_pwned_async_at(client, PWNED_RANGE_URL, password, token).await
}

#[cfg(feature = "async")]
async fn check_pwned_async_at(
    client: &reqwest::Client,
    base_url: &str,
    password: &SecretString,
    token: CancellationToken,
) -> Result<bool, BreachError> {
    let digest = password_digest(password);
    let (prefix, suffix) = split_digest(&digest);
    let url = format!("{}{}", base_url, prefix);

    #[cfg(feature = "tracing")]
    tracing::debug!("Breach lookup for prefix {}", prefix);

    let lookup = async {
        let response = client.get(&url).send().await?;
        check_status(response.status())?;
        Ok::<_, BreachError>(response.text().await?)
    };

    let body = tokio::select! {
        biased;
        _ = token.cancelled() => Err(BreachError::Cancelled),
        body = lookup => body,
    };

    range_verdict(prefix, suffix, body)
}

/// Async version that sends the three-state outcome via channel.
#[cfg(feature = "async")]
pub async fn breach_status_tx(
    client: &reqwest::Client,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<BreachStatus>,
) {
    let status = BreachStatus::from(check_pwned_async(client, password, token).await);

    if let Err(e) = tx.send(status).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send breach status: {}", e);
    }
}
