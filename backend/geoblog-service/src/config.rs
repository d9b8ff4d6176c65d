/// Configuration management for geoblog-service
///
/// Values come from built-in defaults overridden by environment variables
/// (optionally loaded from a `.env` file). Nested keys use `__` as the
/// separator, e.g. `SERVER__PORT=8080` or `SESSION__SECRET=...`.
use serde::Deserialize;

const DEV_SESSION_SECRET: &str = "development-secret-change-in-production";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Application environment (development, staging, production)
    #[serde(default = "default_env")]
    pub env: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// HMAC secret used to sign session tokens
    pub secret: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Lifetime of a regular (browser-session) login
    #[serde(default = "default_expiry_hours")]
    pub expiry_hours: u64,
    /// Lifetime of a remember-me login
    #[serde(default = "default_remember_days")]
    pub remember_days: u64,
    #[serde(default)]
    pub secure_cookie: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_env() -> String {
    "development".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_cookie_name() -> String {
    "geoblog_session".to_string()
}

fn default_expiry_hours() -> u64 {
    24
}

fn default_remember_days() -> u64 {
    30
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("server.env", default_env())?
            .set_default("database.url", "sqlite://geoblog.db")?
            .set_default("database.max_connections", default_max_connections() as i64)?
            .set_default("session.secret", DEV_SESSION_SECRET)?
            .set_default("session.cookie_name", default_cookie_name())?
            .set_default("session.expiry_hours", default_expiry_hours() as i64)?
            .set_default("session.remember_days", default_remember_days() as i64)?
            .set_default("session.secure_cookie", false)?
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.server.env.eq_ignore_ascii_case("production")
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.is_production() && self.session.secret == DEV_SESSION_SECRET {
            anyhow::bail!("SESSION__SECRET must be set to a non-default value in production");
        }
        if self.session.secret.trim().is_empty() {
            anyhow::bail!("SESSION__SECRET must not be empty");
        }
        Ok(())
    }
}
