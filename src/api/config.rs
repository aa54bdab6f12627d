use dotenvy::dotenv;
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// Password given to the bootstrap `admin` account when ADMIN_PASSWORD is unset.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_MINUTES: u64 = 525_600;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Runtime settings, read once at startup and shared through the app state.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
    pub admin_password: String,
    pub seed_menu: bool,
    pub db_max_connections: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "kiosk.db".to_string()),
            bind_address: parse_or("BIND_ADDRESS", "127.0.0.1:5001")?,
            jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?,
            jwt_expiration_minutes: session_minutes(parse_or("JWT_EXPIRATION_MINUTES", "60")?)?,
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            seed_menu: parse_flag("SEED_MENU", false)?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", "8")?,
        };

        if config.jwt_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }

        tracing::info!(
            database_url = %config.database_url,
            bind_address = %config.bind_address,
            seed_menu = config.seed_menu,
            "Config loaded"
        );

        Ok(config)
    }
}

fn parse_or<T>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn session_minutes(minutes: u64) -> Result<u64, ConfigError> {
    if (1..=MAX_SESSION_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(ConfigError::Invalid {
            key: "JWT_EXPIRATION_MINUTES",
            reason: format!("must be between 1 and {MAX_SESSION_MINUTES}, got {minutes}"),
        })
    }
}

fn parse_flag(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => Err(ConfigError::Invalid {
                key,
                reason: format!("expected a boolean, got {other:?}"),
            }),
        },
    }
}
