use anyhow::{Context, anyhow};
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::{ops::Deref, sync::Arc};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub struct ConfigInner {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    pub encoding_key: EncodingKey,
    pub decoding_key: DecodingKey,
    pub seed_demo_users: bool,
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    /// Reads configuration from the process environment (after `.env` has been loaded).
    pub fn from_env() -> anyhow::Result<Config> {
        let db_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("PORT is not a number: {port}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let allowed_origin =
            std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
        let seed_demo_users = match std::env::var("SEED_DEMO_USERS") {
            Ok(flag) => flag
                .parse()
                .with_context(|| format!("SEED_DEMO_USERS is not a boolean: {flag}"))?,
            Err(_) => false,
        };

        Ok(Self::new(
            db_url,
            host,
            port,
            allowed_origin,
            &jwt_secret,
            seed_demo_users,
        ))
    }

    pub fn new(
        db_url: String,
        host: String,
        port: u16,
        allowed_origin: String,
        jwt_secret: &str,
        seed_demo_users: bool,
    ) -> Config {
        Self(Arc::new(ConfigInner {
            db_url,
            host,
            port,
            allowed_origin,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            seed_demo_users,
        }))
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow!("{key} is not set in .env file"))
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
