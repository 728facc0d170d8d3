use anyhow::Context;

const HASH_COST: u32 = 10;

pub fn hash(password: &str) -> anyhow::Result<String> {
    bcrypt::hash(password, HASH_COST).context("Failed to hash password")
}

pub fn verify(password: &str, hash: &str) -> anyhow::Result<bool> {
    bcrypt::verify(password, hash).context("Failed to verify password")
}
