//! Shared helpers for generator-service integration tests.

use generator_service::config::{
    GenerationConfig, GeneratorConfig, OpenAiConfig, WikipediaConfig,
};
use generator_service::startup::Application;
use secrecy::Secret;
use std::time::Duration;

/// Build a config pointing at stubbed upstreams, with a random port.
pub fn test_config(wikipedia_api_url: &str, openai_api_base: &str) -> GeneratorConfig {
    GeneratorConfig {
        common: blurb_core::config::Config { port: 0 },
        openai: OpenAiConfig {
            api_key: Secret::new("test-api-key".to_string()),
            api_base: openai_api_base.to_string(),
            model: "gpt-4o-mini".to_string(),
        },
        wikipedia: WikipediaConfig {
            api_url: wikipedia_api_url.to_string(),
        },
        generation: GenerationConfig {
            temperature: 0.7,
            max_tokens: 100,
            max_article_chars: 12_000,
        },
    }
}

/// Spawn the application on a random port and return the port number.
pub async fn spawn_app(config: GeneratorConfig) -> u16 {
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

/// A canonical Wikipedia query-API payload for an existing article.
pub fn wikipedia_page_json(title: &str, extract: &str) -> serde_json::Value {
    serde_json::json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "9228": {
                    "pageid": 9228,
                    "ns": 0,
                    "title": title,
                    "extract": extract
                }
            }
        }
    })
}

/// The query-API payload for a title that does not exist.
pub fn wikipedia_missing_json(title: &str) -> serde_json::Value {
    serde_json::json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "-1": {
                    "ns": 0,
                    "title": title,
                    "missing": ""
                }
            }
        }
    })
}

/// A canonical chat-completion payload with a single choice.
pub fn chat_completion_json(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 24, "total_tokens": 144 }
    })
}
