//! Bearer credential handling.

use super::constants::BEARER_SCHEME;
use crate::core::error::OkraError;
use reqwest::header::HeaderValue;

impl super::OkraClient {
    /// Builds the `Authorization` header value for this client's token.
    ///
    /// The value is marked sensitive so it never shows up in `Debug` output of the request.
    pub(crate) fn bearer_header(&self) -> Result<HeaderValue, OkraError> {
        let mut value = HeaderValue::from_str(&format!("{BEARER_SCHEME} {}", self.token))
            .map_err(|_| {
                OkraError::RequestBuild("bearer token is not a valid header value".into())
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::OkraClient;

    #[test]
    fn bearer_header_format() {
        let client = OkraClient::new("tok123", "https://api.example.com/v2/");
        let value = client.bearer_header().unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn bearer_header_rejects_control_chars() {
        let client = OkraClient::new("tok\n123", "https://api.example.com/v2/");
        let err = client.bearer_header().unwrap_err();
        assert!(err.to_string().starts_with("error making http call: "));
    }
}
