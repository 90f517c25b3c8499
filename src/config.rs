use clap::Parser;

use crate::error::Error;
use crate::provider::openai::{DEFAULT_API_BASE, DEFAULT_MODEL};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "cardgen-gateway")]
#[command(about = "Generates flashcards and quiz questions with an LLM")]
pub struct Args {
    // Address to bind
    #[arg(long, env = "CARDGEN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "CARDGEN_PORT", default_value_t = 8000)]
    pub port: u16,

    // Chat model used for every request
    #[arg(short, long, env = "CARDGEN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    // OpenAI-compatible API root
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    // Provider credential
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Settings fixed at startup and never changed afterwards.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub api_base: String,
    pub api_key: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, Error> {
        let api_key = args
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config(format!("{} not set (env, .env file or --api-key)", API_KEY_ENV)))?;

        Ok(Self {
            host: args.host,
            port: args.port,
            model: args.model,
            api_base: args.api_base,
            api_key,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
