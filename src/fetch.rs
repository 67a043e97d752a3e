//! Documentation page retrieval.
//!
//! One GET request, no retries, no caching. Callers that already have the
//! HTML in hand (tests, local files) skip this module entirely and use
//! [`crate::parse_docs`] directly.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Canonical location of the Underscore.js documentation page.
pub const DEFAULT_DOCS_URL: &str =
    "https://raw.githubusercontent.com/jashkenas/underscore/master/index.html";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetch the documentation page body as text.
///
/// The URL must parse and use an `http` or `https` scheme. A non-success
/// status is an error; transport failures surface as [`Error::Fetch`].
pub async fn fetch_docs(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }

    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    tracing::debug!(%url, "fetching documentation");
    let response = client.get(parsed).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    tracing::debug!(bytes = body.len(), "received documentation body");
    Ok(body)
}
