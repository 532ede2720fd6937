use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Each resource method wraps the underlying cause in [`OkraError::Context`]
/// with a short static message naming the operation that failed, so the
/// `Display` output reads as a chain from outermost to innermost cause:
///
/// ```text
/// error fetching auth using id: error fetching product using id: error doing request: ...
/// ```
#[derive(Debug, Error)]
pub enum OkraError {
    /// The client was built without a bearer token or base URL.
    #[error("{field} is needed to call the Okra API")]
    MissingCredentials {
        /// Which credential was missing (`"token"` or `"base url"`).
        field: &'static str,
    },

    /// The request payload could not be serialized to JSON.
    #[error("error marshalling json: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The URL, method, headers, or body could not form a valid request.
    #[error("error making http call: {0}")]
    RequestBuild(String),

    /// A network-level failure (DNS, connect, TLS, I/O) while talking to the provider.
    #[error("error doing request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be fully read.
    #[error("error reading body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The provider answered with a non-200 status.
    ///
    /// Only produced when the client is built with [`StatusPolicy::Error`](crate::StatusPolicy::Error);
    /// the default policy reports the status through the returned text instead.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the status.
        url: String,
    },

    /// An error annotated with the high-level operation that failed.
    #[error("{context}: {source}")]
    Context {
        /// Static description of the failed operation.
        context: &'static str,
        /// The underlying cause.
        #[source]
        source: Box<OkraError>,
    },
}

impl OkraError {
    /// Wraps `self` with a static message naming the operation that failed.
    #[must_use]
    pub fn context(self, context: &'static str) -> Self {
        Self::Context {
            context,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping every [`OkraError::Context`] layer.
    #[must_use]
    pub fn root(&self) -> &OkraError {
        let mut cur = self;
        while let Self::Context { source, .. } = cur {
            cur = &**source;
        }
        cur
    }

    /// The outermost context message, if this error carries one.
    #[must_use]
    pub fn context_message(&self) -> Option<&'static str> {
        match self {
            Self::Context { context, .. } => Some(*context),
            _ => None,
        }
    }

    /// Returns `true` if the provider could not be reached or the response could not be read.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self.root(), Self::Transport(_) | Self::BodyRead(_))
    }
}
