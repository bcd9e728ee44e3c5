use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        api_url: get_env_or_default("SEARCH_API_URL", DEFAULT_API_URL),
        debounce_ms: get_env_parsed_or_default("SEARCH_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS),
    }
});

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Search terms shorter than this never reach the backend.
pub const MIN_SEARCH_TERM_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub debounce_ms: u64,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed_or_default<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("Invalid value for environment variable {key}: {raw}")),
        Err(_) => default,
    }
}
