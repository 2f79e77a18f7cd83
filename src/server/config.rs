use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_port(std::env::var("PORT").ok())?,
        })
    }
}

/// Parses the listen port, falling back to the default when unset.
fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            }),
    }
}
