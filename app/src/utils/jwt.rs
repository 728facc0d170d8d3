use anyhow::Context;
use chrono::Utc;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::config::Config;

const ALGORITHM: Algorithm = Algorithm::HS256;
const ISSUER: &str = "sportreg";
const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Access token body: the signed-in identity under `data`.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims<T> {
    iss: String,
    iat: i64,
    exp: i64,
    data: T,
}

/// Only HS256 tokens minted here, checked without clock leeway.
fn validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss"]);
    validation.leeway = 0;
    validation
}

pub fn encode_data<T: Serialize>(config: &Config, data: T) -> anyhow::Result<String> {
    let now = Utc::now();
    let claims = AccessClaims {
        iss: ISSUER.to_string(),
        iat: now.timestamp(),
        exp: (now + ACCESS_TOKEN_TTL).timestamp(),
        data,
    };
    encode(&Header::new(ALGORITHM), &claims, &config.encoding_key)
        .context("Failed to sign access token")
}

pub fn decode_data<T: DeserializeOwned>(config: &Config, token: &str) -> anyhow::Result<T> {
    let token_data = decode::<AccessClaims<T>>(token, &config.decoding_key, &validation())
        .context("Rejected access token")?;
    Ok(token_data.claims.data)
}
