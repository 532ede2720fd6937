/// A provider endpoint: the path appended to the client's base URL and the
/// message used to annotate any error from calling it.
///
/// Each product module declares its endpoints as a table of constants; the
/// product methods are thin specializations over that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Path relative to the base URL, without a leading slash (e.g. `auth/getById`).
    pub path: &'static str,
    /// Static context attached to errors (e.g. `error fetching auth using id`).
    pub context: &'static str,
}

impl Endpoint {
    /// Declares an endpoint from its relative path and error context.
    ///
    /// ```
    /// # use okra_rs::Endpoint;
    /// const IDENTITY_BY_ID: Endpoint = Endpoint::new("identity/getById", "error fetching identity using id");
    /// assert_eq!(IDENTITY_BY_ID.url("https://api.okra.ng/v2/"), "https://api.okra.ng/v2/identity/getById");
    /// ```
    pub const fn new(path: &'static str, context: &'static str) -> Self {
        Self { path, context }
    }

    /// The absolute URL string for this endpoint under `base_url`.
    ///
    /// The base is used as a plain prefix, so `https://api.okra.ng/v2/` + `auth/getById`
    /// becomes `https://api.okra.ng/v2/auth/getById`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_plain_concatenation() {
        let ep = Endpoint::new("auth/getById", "error fetching auth using id");
        assert_eq!(
            ep.url("https://api.example.com/v2/"),
            "https://api.example.com/v2/auth/getById"
        );
        // no separator is inserted
        assert_eq!(ep.url("https://api.example.com/v2"), "https://api.example.com/v2auth/getById");
    }
}
