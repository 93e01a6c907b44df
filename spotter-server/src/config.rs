use anyhow::{Context, Result};
use spotter_core::DEFAULT_ROUND_SIZE;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub round_size: usize,
    /// Origin used when building shareable challenge links
    pub public_base_url: String,
}

fn parse_var<T>(name: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .with_context(|| format!("Invalid {}", name))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = parse_var("PORT", "8080")?;

        let round_size: usize = parse_var("ROUND_SIZE", &DEFAULT_ROUND_SIZE.to_string())?;
        if round_size == 0 {
            anyhow::bail!("ROUND_SIZE must be at least 1");
        }

        Ok(Self {
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://{}:{}", host, port)),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://spotter.db?mode=rwc".to_string()),
            host,
            port,
            round_size,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "sqlite::memory:".to_string(),
            round_size: DEFAULT_ROUND_SIZE,
            public_base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.round_size, DEFAULT_ROUND_SIZE);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_parse_var_falls_back_to_default() {
        let value: u16 = parse_var("SPOTTER_TEST_UNSET_PORT", "9090").unwrap();
        assert_eq!(value, 9090);
        assert!(parse_var::<u16>("SPOTTER_TEST_UNSET_PORT", "not-a-port").is_err());
    }
}
