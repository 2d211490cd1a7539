use serde::Deserialize;
use std::env;

use crate::services::shuffle::DEFAULT_RANDOM_QUESTION_LIMIT;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:1323";
pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub questions_path: String,
    pub random_question_limit: usize,
    pub otlp_endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            questions_path: DEFAULT_QUESTIONS_PATH.to_string(),
            random_question_limit: DEFAULT_RANDOM_QUESTION_LIMIT,
            otlp_endpoint: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let settings = base_settings()?;

        let bind_addr = settings
            .get_string("server.bind_addr")
            .or_else(|_| env::var("BIND_ADDR"))
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let questions_path = settings
            .get_string("catalog.questions_path")
            .or_else(|_| env::var("QUESTIONS_PATH"))
            .unwrap_or_else(|_| DEFAULT_QUESTIONS_PATH.to_string());

        let random_question_limit = settings
            .get_int("catalog.random_question_limit")
            .ok()
            .and_then(|value| usize::try_from(value).ok())
            .or_else(|| {
                env::var("RANDOM_QUESTION_LIMIT")
                    .ok()
                    .and_then(|value| value.trim().parse().ok())
            })
            .unwrap_or(DEFAULT_RANDOM_QUESTION_LIMIT);

        // Telemetry export stays off unless an endpoint is configured
        let otlp_endpoint = settings
            .get_string("telemetry.otlp_endpoint")
            .or_else(|_| env::var("OTEL_EXPORTER_OTLP_ENDPOINT"))
            .ok()
            .filter(|endpoint| !endpoint.trim().is_empty());

        Ok(Config {
            bind_addr,
            questions_path,
            random_question_limit,
            otlp_endpoint,
        })
    }
}

/// Settings for the `quizwizard` command-line client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let settings = base_settings()?;

        let api_url = settings
            .get_string("client.api_url")
            .or_else(|_| env::var("API_URL"))
            .or_else(|_| env::var("api_url"))
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| config::ConfigError::NotFound("API_URL".to_string()))?;

        Ok(ClientConfig { api_url })
    }
}

/// `config/<APP_ENV>.toml` (optional) overlaid with `APP__`-prefixed env vars.
fn base_settings() -> Result<config::Config, config::ConfigError> {
    let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

    config::Config::builder()
        .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()
}
