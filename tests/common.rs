#![allow(dead_code)]

use httpmock::{Method::POST, Mock, MockServer};
use okra_rs::OkraClient;
use serde_json::{Value, json};

pub const TOKEN: &str = "tok123";
pub const REPLY: &str = r#"{"status":"success","data":{"auths":[]}}"#;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client whose base URL points at `<server>/v2/`.
pub fn client_for(server: &MockServer) -> OkraClient {
    OkraClient::new(TOKEN, format!("{}/v2/", server.base_url()))
}

/// The wide query body with every key present and empty.
pub fn empty_query() -> Value {
    json!({
        "page": "", "limit": "", "customer": "", "from": "", "to": "", "bank": "",
        "id": "", "account": "", "type": "", "amount": "", "account_id": "",
        "record_id": "", "currency": ""
    })
}

/// `empty_query()` with the given keys filled in.
pub fn query_with(pairs: &[(&str, &str)]) -> Value {
    let mut body = empty_query();
    for (key, value) in pairs {
        assert!(body.get(*key).is_some(), "unknown query key {key}");
        body[*key] = json!(value);
    }
    body
}

/// Mocks an authenticated JSON POST to `/v2/<path>` that replies 200 with `REPLY`.
pub fn mock_post<'a>(server: &'a MockServer, path: &str, body: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v2/{path}"))
            .header("authorization", format!("Bearer {TOKEN}"))
            .header("content-type", "application/json")
            .json_body(body);
        then.status(200)
            .header("content-type", "application/json")
            .body(REPLY);
    })
}

/// Mocks an authenticated POST that carries no body and no content type (for `retrieve` calls).
pub fn mock_bare_post<'a>(server: &'a MockServer, path: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v2/{path}"))
            .header("authorization", format!("Bearer {TOKEN}"))
            .header_missing("content-type")
            .body("");
        then.status(200)
            .header("content-type", "application/json")
            .body(REPLY);
    })
}
