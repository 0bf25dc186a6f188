//! Integration tests for the generate-blurb flow.
//!
//! Both upstreams (Wikipedia query API, chat-completion API) are stubbed
//! with wiremock; the application runs on a random port.

mod common;

use common::{
    chat_completion_json, spawn_app, test_config, wikipedia_missing_json, wikipedia_page_json,
};
use reqwest::Client;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestUpstreams {
    wikipedia: MockServer,
    openai: MockServer,
}

impl TestUpstreams {
    async fn start() -> Self {
        Self {
            wikipedia: MockServer::start().await,
            openai: MockServer::start().await,
        }
    }

    fn config(&self) -> generator_service::config::GeneratorConfig {
        test_config(
            &format!("{}/w/api.php", self.wikipedia.uri()),
            &format!("{}/v1", self.openai.uri()),
        )
    }
}

#[tokio::test]
async fn generate_blurb_returns_title_type_and_blurb() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("titles", "Earth"))
        .and(query_param("prop", "extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wikipedia_page_json(
            "Earth",
            "Earth is the third planet from the Sun.",
        )))
        .mount(&upstreams.wikipedia)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_json(
            "  ... that Earth is the third planet from the Sun?  ",
        )))
        .mount(&upstreams.openai)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "Earth")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["title"], "Earth");
    assert_eq!(body["type"], "DYK");
    // The first choice's content, trimmed
    assert_eq!(
        body["blurb"],
        "... that Earth is the third planet from the Sun?"
    );
}

#[tokio::test]
async fn blurb_type_is_uppercased_in_response() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wikipedia_page_json("Earth", "Earth is a planet.")),
        )
        .mount(&upstreams.wikipedia)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_json("A blurb.")))
        .mount(&upstreams.openai)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let client = Client::new();

    for (given, expected) in [("dyk", "DYK"), ("Otd", "OTD"), ("custom", "CUSTOM")] {
        let body: serde_json::Value = client
            .post(format!("http://localhost:{}/generate_blurb", port))
            .query(&[("title", "Earth"), ("blurb_type", given)])
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");

        assert_eq!(body["type"], expected, "blurb_type {:?}", given);
    }
}

#[tokio::test]
async fn missing_article_returns_error_payload_with_status_200() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(wikipedia_missing_json("Nonexistent Page")),
        )
        .mount(&upstreams.wikipedia)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "Nonexistent Page")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        serde_json::json!({
            "error": "Article 'Nonexistent Page' not found or could not be fetched."
        })
    );
}

#[tokio::test]
async fn upstream_404_returns_error_payload_with_status_200() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstreams.wikipedia)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "Earth")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["error"],
        "Article 'Earth' not found or could not be fetched."
    );
}

#[tokio::test]
async fn empty_extract_returns_error_payload() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wikipedia_page_json("Stub", "")))
        .mount(&upstreams.wikipedia)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let body: serde_json::Value = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "Stub")])
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(
        body["error"],
        "Article 'Stub' not found or could not be fetched."
    );
}

#[tokio::test]
async fn wikipedia_outage_maps_to_bad_gateway() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstreams.wikipedia)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "Earth")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 502);
}

#[tokio::test]
async fn provider_failure_maps_to_bad_gateway() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wikipedia_page_json("Earth", "Earth is a planet.")),
        )
        .mount(&upstreams.wikipedia)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&upstreams.openai)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "Earth")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 502);
}

#[tokio::test]
async fn provider_rate_limit_maps_to_429() {
    let upstreams = TestUpstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wikipedia_page_json("Earth", "Earth is a planet.")),
        )
        .mount(&upstreams.wikipedia)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&upstreams.openai)
        .await;

    let port = spawn_app(upstreams.config()).await;
    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "Earth")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 429);
}

#[tokio::test]
async fn missing_title_is_rejected() {
    let upstreams = TestUpstreams::start().await;
    let port = spawn_app(upstreams.config()).await;

    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn empty_title_is_a_validation_error() {
    let upstreams = TestUpstreams::start().await;
    let port = spawn_app(upstreams.config()).await;

    let response = Client::new()
        .post(format!("http://localhost:{}/generate_blurb", port))
        .query(&[("title", "")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}
