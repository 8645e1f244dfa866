use anyhow::{bail, Context, Result};

/// Which waitlist store the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Memory,
}

impl Backend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "memory" => Ok(Backend::Memory),
            other => bail!("Unknown WAITLIST_BACKEND: '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub backend: Backend,
    pub database_url: Option<String>,

    // Admin
    pub admin_password: Option<String>,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Storage - a missing DATABASE_URL runs the postgres backend in degraded mode
            backend: match std::env::var("WAITLIST_BACKEND") {
                Ok(value) => Backend::parse(&value)?,
                Err(_) => Backend::Postgres,
            },
            database_url: non_empty_var("DATABASE_URL"),

            // Admin
            admin_password: non_empty_var("ADMIN_PASSWORD"),

            // Server
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT is not a valid port number: {}", value))?,
                Err(_) => 8080,
            },
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
