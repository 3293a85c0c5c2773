//! Basic example: populate a nested struct from the process environment

use envbind::Unmarshal;

#[derive(Debug, Default, Unmarshal)]
struct Config {
    pub url: String,
    pub delete_user: Option<bool>,
    pub bytes: Vec<u8>,
    pub auth: Auth,
}

#[derive(Debug, Default, Unmarshal)]
struct Auth {
    // AUTH_SIGNING_KEY
    pub signing_key: String,
    // AUTH_TTL_SECONDS
    pub ttl_seconds: u32,
}

fn main() -> anyhow::Result<()> {
    // Show how each field is resolved
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    std::env::set_var("URL", "https://example.com");
    std::env::set_var("AUTH_SIGNING_KEY", "signing_key");
    std::env::set_var("AUTH_TTL_SECONDS", "60");
    std::env::set_var("BYTES", "these are bytes");
    std::env::set_var("DELETE_USER", "true");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  URL: {}", config.url);
    println!("  Signing key: {}", config.auth.signing_key);
    println!("  TTL seconds: {}", config.auth.ttl_seconds);
    println!("  Delete user: {:?}", config.delete_user);
    println!("  Bytes: {}", String::from_utf8_lossy(&config.bytes));

    Ok(())
}
