//! Provider metadata endpoints.
//!
//! Each provider publishes the addresses its services are reachable at; the
//! submodules model the per-provider response schemas. Fetches are one-shot:
//! there are no retries, and a failure aborts the caller's run.

pub mod gcp;
pub mod github;

use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches `url` and decodes the JSON response body.
async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    let rsp = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = rsp.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status,
        });
    }

    rsp.json().await.map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
