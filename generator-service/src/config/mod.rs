use blurb_core::config::{self as core_config, get_env, is_prod};
use blurb_core::error::AppError;
use secrecy::Secret;

/// Default cap on article characters embedded into the prompt. Extracts
/// longer than this are truncated before the chat-completion call so an
/// oversized article cannot blow the model's context window.
const DEFAULT_MAX_ARTICLE_CHARS: usize = 12_000;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    pub wikipedia: WikipediaConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct WikipediaConfig {
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_tokens: i32,
    pub max_article_chars: usize,
}

impl GeneratorConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = is_prod();

        Ok(GeneratorConfig {
            common,
            openai: OpenAiConfig {
                // No default: a missing key is a startup failure, not a
                // request-time surprise.
                api_key: Secret::new(get_env("OPENAI_API_KEY", None, is_prod)?),
                api_base: get_env(
                    "OPENAI_API_BASE",
                    Some("https://api.openai.com/v1"),
                    is_prod,
                )?,
                model: get_env("OPENAI_MODEL", Some("gpt-4o-mini"), is_prod)?,
            },
            wikipedia: WikipediaConfig {
                api_url: get_env(
                    "WIKIPEDIA_API_URL",
                    Some("https://en.wikipedia.org/w/api.php"),
                    is_prod,
                )?,
            },
            generation: GenerationConfig {
                temperature: get_env("GENERATION_TEMPERATURE", Some("0.7"), is_prod)?
                    .parse()
                    .unwrap_or(0.7),
                max_tokens: get_env("GENERATION_MAX_TOKENS", Some("100"), is_prod)?
                    .parse()
                    .unwrap_or(100),
                max_article_chars: get_env(
                    "GENERATION_MAX_ARTICLE_CHARS",
                    Some(&DEFAULT_MAX_ARTICLE_CHARS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_ARTICLE_CHARS),
            },
        })
    }
}
