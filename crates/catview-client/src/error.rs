use thiserror::Error;

/// Errors returned by [`crate::CatalogClient`] fetches.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The response body could not be deserialized into the expected records.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
