use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            api_base_url: env::var("MEDVAX_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            data_dir: env::var("MEDVAX_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            http_timeout_secs: env::var("MEDVAX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(30),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("medvax")
}
