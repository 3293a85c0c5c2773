//! Example demonstrating env tags: explicit names, defaults, required and skip

use envbind::Unmarshal;

#[derive(Debug, Default, Unmarshal)]
struct Config {
    // Never populated, even though HashMap is not supported
    #[env("-")]
    pub internal: std::collections::HashMap<String, String>,

    // Required, but the default satisfies it
    #[env(r",required default=John\sDoe")]
    pub name: String,

    pub url: String,

    #[env(",default=blue")]
    pub favorite_color: String,

    // Nested fields read AUTH_* instead of AUTHENTICATION_*
    #[env("AUTH")]
    pub authentication: Authentication,
}

#[derive(Debug, Default, Unmarshal)]
struct Authentication {
    pub signing_key: String,

    // Explicit names are not prefixed
    #[env("JWT_TTL")]
    pub ttl_seconds: u32,

    pub max_age: u32,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config::default();
    envbind::unmarshal(
        [
            "URL=https://example.com",
            "AUTH_SIGNING_KEY=signing_key",
            "JWT_TTL=60",
        ],
        &mut config,
    )?;

    println!("  URL: {}", config.url);
    println!("  Signing key: {}", config.authentication.signing_key);
    println!("  TTL seconds: {}", config.authentication.ttl_seconds);
    println!("  Max age: {}", config.authentication.max_age);
    println!("  Favorite color: {}", config.favorite_color);
    println!("  Name: {}", config.name);

    Ok(())
}
