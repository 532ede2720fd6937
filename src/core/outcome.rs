//! Helpers for callers that work with the provider's `(text, error)` pair shape.

use crate::core::OkraError;
use crate::core::client::constants::{FAILURE_PLACEHOLDER, STATUS_MESSAGE_PREFIX};

/// Converts a query result into a `(text, error)` pair.
pub trait Outcome {
    /// On success the text is the response body (or the status message) and
    /// the error is `None`. On failure the text is [`FAILURE_PLACEHOLDER`].
    ///
    /// Check the error, not the text, to detect hard failures.
    fn into_pair(self) -> (String, Option<OkraError>);
}

impl Outcome for Result<String, OkraError> {
    fn into_pair(self) -> (String, Option<OkraError>) {
        match self {
            Ok(text) => (text, None),
            Err(e) => (FAILURE_PLACEHOLDER.to_owned(), Some(e)),
        }
    }
}

/// Extracts the status code from a text produced for a non-200 response.
///
/// Returns `None` for any other text, including a genuine response body.
///
/// ```
/// assert_eq!(okra_rs::soft_status("Status code returned was: 401"), Some(401));
/// assert_eq!(okra_rs::soft_status(r#"{"status":"success"}"#), None);
/// ```
pub fn soft_status(text: &str) -> Option<u16> {
    text.strip_prefix(STATUS_MESSAGE_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_maps_to_text_and_none() {
        let (text, err) = Ok::<_, OkraError>("{\"data\":[]}".to_string()).into_pair();
        assert_eq!(text, "{\"data\":[]}");
        assert!(err.is_none());
    }

    #[test]
    fn err_maps_to_placeholder() {
        let res: Result<String, OkraError> =
            Err(OkraError::RequestBuild("bad".into()).context("error retrieving auth bycustomer"));
        let (text, err) = res.into_pair();
        assert_eq!(text, "Error");
        assert!(err.unwrap().to_string().starts_with("error retrieving auth bycustomer: "));
    }

    #[test]
    fn soft_status_rejects_partial_matches() {
        assert_eq!(soft_status("Status code returned was: "), None);
        assert_eq!(soft_status("Status code returned was: abc"), None);
        assert_eq!(soft_status("Error"), None);
    }
}
