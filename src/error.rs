use thiserror::Error as ThisError;

/// Errors produced while building or running a listings search.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A setter was given a value outside the field's domain. The request
    /// state is left exactly as it was before the call.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    /// The listings API reported a failure, either as a non-success HTTP
    /// status or as an error body.
    #[error("listings API error {code}: {message}")]
    Api { code: u16, message: String },

    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("listings request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failure from a third-party [`PageFetcher`](crate::search::PageFetcher)
    /// implementation.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
