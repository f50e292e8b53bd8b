use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemma2-9b-it";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub system: SystemConfig,
    pub groq: GroqConfig,
}

#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// A missing key is not a startup error; it surfaces as a
    /// configuration error when the user submits a translation.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Reads configuration from the process environment. `.env` loading
    /// happens in main before this is called.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => 12393,
        };
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            system: SystemConfig {
                host,
                port,
                static_dir,
            },
            groq: GroqConfig {
                api_key,
                model,
                base_url,
            },
        })
    }
}
