//! Centralized constants for outcome text and request headers.

/// Text returned in place of a response body when an operation fails.
///
/// Only surfaced through [`Outcome::into_pair`](crate::Outcome::into_pair); a
/// `Result` carries the error itself.
pub const FAILURE_PLACEHOLDER: &str = "Error";

/// Prefix of the synthesized text returned for a non-200 status (the numeric code follows).
pub const STATUS_MESSAGE_PREFIX: &str = "Status code returned was: ";

/// Scheme used in the `Authorization` header.
pub(crate) const BEARER_SCHEME: &str = "Bearer";

/// Content type sent alongside every JSON request body.
pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";
