//! Mock Notion server helpers built on wiremock

use notion_notes::ApiConfig;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token the mock server expects
pub const TEST_TOKEN: &str = "secret_integration_test";
/// Database id the mock server serves
pub const TEST_DATABASE: &str = "db-0001";

/// API settings pointing at `server`
pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        token: TEST_TOKEN.to_string(),
        database_id: TEST_DATABASE.to_string(),
        base_url: server.uri(),
        ..Default::default()
    }
}

/// Serve `body` for the database query, requiring auth and version headers
pub async fn mount_query(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/v1/databases/{TEST_DATABASE}/query")))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("notion-version", "2022-06-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Serve `body` for the children of `page_id`
pub async fn mount_children(server: &MockServer, page_id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/blocks/{page_id}/children")))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer the children of `page_id` with an error status
pub async fn mount_children_error(server: &MockServer, page_id: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/blocks/{page_id}/children")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
