mod common;

use common::{REPLY, client_for, mock_bare_post, mock_post, query_with, setup_server};
use httpmock::Method::POST;
use serde_json::json;

#[tokio::test]
async fn auth_retrieve_posts_without_payload() {
    let server = setup_server();
    let mock = mock_bare_post(&server, "products/auths");

    let body = client_for(&server).auth().retrieve().await.unwrap();

    mock.assert();
    assert_eq!(body, REPLY);
}

#[tokio::test]
async fn auth_by_id_sends_exact_wire_body() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/auth/getById")
            .header("authorization", "Bearer tok123")
            .body(
                r#"{"page":"","limit":"","customer":"","from":"","to":"","bank":"","id":"42","account":"","type":"","amount":"","account_id":"","record_id":"","currency":""}"#,
            );
        then.status(200).body(REPLY);
    });

    let body = client_for(&server).auth().by_id("", "", "42").await.unwrap();

    mock.assert();
    assert_eq!(body, REPLY);
}

#[tokio::test]
async fn auth_by_options_nests_names() {
    let server = setup_server();
    let mock = mock_post(
        &server,
        "auth/getByOptions",
        json!({
            "page": "1",
            "limit": "10",
            "options": { "first_name": "Ada", "last_name": "Lovelace" }
        }),
    );

    let body = client_for(&server)
        .auth()
        .by_options("1", "10", "Ada", "Lovelace")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(body, REPLY);
}

#[tokio::test]
async fn auth_by_customer() {
    let server = setup_server();
    let mock = mock_post(
        &server,
        "auth/getByCustomer",
        query_with(&[("page", "1"), ("limit", "20"), ("customer", "cus_7")]),
    );

    client_for(&server).auth().by_customer("1", "20", "cus_7").await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn auth_by_date_range() {
    let server = setup_server();
    let mock = mock_post(
        &server,
        "auth/getByDate",
        query_with(&[
            ("page", "1"),
            ("limit", "20"),
            ("from", "2020-01-01"),
            ("to", "2020-06-30"),
        ]),
    );

    client_for(&server)
        .auth()
        .by_date_range("1", "20", "2020-01-01", "2020-06-30")
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn auth_by_bank() {
    let server = setup_server();
    let mock = mock_post(
        &server,
        "auth/getByBank",
        query_with(&[("page", "3"), ("limit", "5"), ("bank", "bank_gt")]),
    );

    client_for(&server).auth().by_bank("3", "5", "bank_gt").await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn auth_by_customer_date() {
    let server = setup_server();
    let mock = mock_post(
        &server,
        "auth/getByCustomerDate",
        query_with(&[
            ("page", "1"),
            ("limit", "20"),
            ("from", "2020-01-01"),
            ("to", "2020-06-30"),
            ("customer", "cus_7"),
        ]),
    );

    client_for(&server)
        .auth()
        .by_customer_date("1", "20", "2020-01-01", "2020-06-30", "cus_7")
        .await
        .unwrap();
    mock.assert();
}
