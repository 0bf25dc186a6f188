//! HTTP handlers for the generator service.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::services::prompt::build_prompt;
use crate::services::providers::{GenerationParams, ProviderError};
use crate::services::wikipedia::FetchError;
use crate::startup::AppState;
use blurb_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateBlurbParams {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[serde(default = "default_blurb_type")]
    pub blurb_type: String,
}

fn default_blurb_type() -> String {
    "DYK".to_string()
}

#[derive(Debug, Serialize)]
pub struct GenerateBlurbResponse {
    pub title: String,
    #[serde(rename = "type")]
    pub blurb_type: String,
    pub blurb: String,
}

/// Fixed status/usage message.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Wikipedia AI Blurb Generator API is running.",
        "usage": "POST /generate_blurb?title=ARTICLE_TITLE&blurb_type=DYK or OTD"
    }))
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "generator-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Generate a DYK or OTD style blurb for a Wikipedia article title.
///
/// A title the query API does not know keeps the original always-200
/// contract and returns an error payload; genuine upstream failures get a
/// real gateway status instead.
pub async fn generate_blurb(
    State(state): State<AppState>,
    Query(params): Query<GenerateBlurbParams>,
) -> Result<Response, AppError> {
    params.validate()?;
    let blurb_type = params.blurb_type.to_uppercase();

    let article_text = match state.wikipedia.fetch_extract(&params.title).await {
        Ok(text) => text,
        Err(FetchError::NotFound { .. }) => {
            tracing::info!(title = %params.title, "Article not found");
            return Ok(Json(json!({
                "error": format!(
                    "Article '{}' not found or could not be fetched.",
                    params.title
                )
            }))
            .into_response());
        }
        Err(err) => {
            tracing::error!(title = %params.title, error = %err, "Wikipedia fetch failed");
            return Err(AppError::BadGateway(err.to_string()));
        }
    };

    let prompt = build_prompt(
        &article_text,
        &blurb_type,
        state.config.generation.max_article_chars,
    );
    let generation_params = GenerationParams {
        temperature: Some(state.config.generation.temperature),
        max_tokens: Some(state.config.generation.max_tokens),
    };

    let response = state
        .text_provider
        .generate(&prompt, &generation_params)
        .await
        .map_err(|err| match err {
            ProviderError::RateLimited => {
                AppError::TooManyRequests("Model provider rate limited".to_string())
            }
            other => {
                tracing::error!(title = %params.title, error = %other, "Blurb generation failed");
                AppError::BadGateway(other.to_string())
            }
        })?;

    let blurb = response.text.unwrap_or_default();
    if blurb.is_empty() {
        return Err(AppError::BadGateway(
            "Model returned an empty completion".to_string(),
        ));
    }

    tracing::info!(
        title = %params.title,
        blurb_type = %blurb_type,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Generated blurb"
    );

    Ok(Json(GenerateBlurbResponse {
        title: params.title,
        blurb_type,
        blurb,
    })
    .into_response())
}
