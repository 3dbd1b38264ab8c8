use taskboard_core::error::CoreError;

/// Errors from the client data-access layer and client-local state.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL cannot carry request paths.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `message` from the JSON error body, or the raw body.
        message: String,
    },

    /// A form failed client-side validation; nothing was sent.
    #[error(transparent)]
    Form(#[from] CoreError),

    /// Reading or writing the session file failed.
    #[error("Session file error: {0}")]
    Session(#[from] std::io::Error),
}

impl ClientError {
    /// True when the server reported the target as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
