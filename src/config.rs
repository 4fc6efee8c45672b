use dotenv::dotenv;
use std::env;

use crate::errors::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data.sqlite3";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub foreign_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            foreign_keys: true,
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL` and `DATABASE_FOREIGN_KEYS`, loading `.env` first.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let foreign_keys = match env::var("DATABASE_FOREIGN_KEYS") {
            Ok(value) => parse_flag(&value).ok_or(AppError::InvalidConfig {
                key: "DATABASE_FOREIGN_KEYS",
                value,
            })?,
            Err(_) => true,
        };

        Ok(Config {
            database_url,
            foreign_keys,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
