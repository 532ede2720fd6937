//! The single authenticated POST every query goes through.

use crate::core::client::constants::{JSON_CONTENT_TYPE, STATUS_MESSAGE_PREFIX};
use crate::core::{OkraClient, OkraError, StatusPolicy};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use url::Url;

/// POST `body` (if any) to `endpoint_url` with the client's bearer token.
///
/// * `200` returns the response body verbatim.
/// * any other status returns `Ok("Status code returned was: <code>")`, or
///   [`OkraError::Status`] under [`StatusPolicy::Error`]. The body of a non-200
///   response is not read.
/// * network failures return [`OkraError::Transport`]; a body that cannot be
///   read returns [`OkraError::BodyRead`].
///
/// The response is dropped on every path, which releases its connection.
pub(crate) async fn send(
    client: &OkraClient,
    endpoint_url: &str,
    body: Option<Vec<u8>>,
) -> Result<String, OkraError> {
    let url = Url::parse(endpoint_url)
        .map_err(|e| OkraError::RequestBuild(format!("invalid url `{endpoint_url}`: {e}")))?;

    let mut req = client
        .http()
        .post(url.clone())
        .header(AUTHORIZATION, client.bearer_header()?);
    if let Some(bytes) = body {
        req = req
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(bytes);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %url, "okra request");

    let resp = req.send().await.map_err(|e| {
        if e.is_builder() {
            OkraError::RequestBuild(e.to_string())
        } else {
            OkraError::Transport(e)
        }
    })?;

    let status = resp.status();
    #[cfg(feature = "tracing")]
    tracing::debug!(url = %url, status = status.as_u16(), "okra response");

    if status != StatusCode::OK {
        return match client.status_policy() {
            StatusPolicy::Report => {
                #[cfg(feature = "tracing")]
                tracing::warn!(url = %url, status = status.as_u16(), "non-200 status reported as text");
                Ok(status_message(status.as_u16()))
            }
            StatusPolicy::Error => Err(OkraError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        };
    }

    resp.text().await.map_err(OkraError::BodyRead)
}

/// The text returned for a non-200 status under [`StatusPolicy::Report`].
pub(crate) fn status_message(status: u16) -> String {
    format!("{STATUS_MESSAGE_PREFIX}{status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_renders_decimal_code() {
        assert_eq!(status_message(404), "Status code returned was: 404");
        assert_eq!(status_message(503), "Status code returned was: 503");
    }

    #[tokio::test]
    async fn malformed_url_is_a_build_error() {
        let client = OkraClient::new("tok123", "::not-a-url::");
        let err = send(&client, "::not-a-url::auth/getById", None)
            .await
            .unwrap_err();
        assert!(matches!(err, OkraError::RequestBuild(_)));
    }
}
