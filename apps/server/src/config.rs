//! Server configuration, read from the environment.

use hacks_ai::DEFAULT_GEMINI_MODEL;

pub struct Config {
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Gemini API key. Empty disables the coach (it falls back to its
    /// fixed error message instead of failing requests).
    pub gemini_api_key: String,
    /// Gemini model used for coaching summaries.
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            db_path: env_or("HACKS_DB_PATH", "data/hacks.db"),
            listen_addr: env_or("HACKS_LISTEN_ADDR", "127.0.0.1:8420"),
            gemini_api_key: env_or("GEMINI_API_KEY", ""),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
