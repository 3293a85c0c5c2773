//! Example demonstrating the prefixed entry point

use envbind::Unmarshal;

#[derive(Debug, Default, Unmarshal)]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_SERVER_PORT, etc.
    pub database_url: String,

    pub server: Server,

    // Explicit names are used as-is
    #[env("RUST_LOG")]
    pub log_filter: String,
}

#[derive(Debug, Default, Unmarshal)]
struct Server {
    #[env(",default=8080")]
    pub port: u16,

    #[env(",default=false")]
    pub tls: bool,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config::default();
    envbind::unmarshal_with_prefix(
        [
            "MYAPP_DATABASE_URL=postgres://localhost/db",
            "MYAPP_SERVER_PORT=3000",
            "RUST_LOG=info",
        ],
        &mut config,
        "MYAPP_",
    )?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.server.port);
    println!("  TLS: {}", config.server.tls);
    println!("  Log filter: {}", config.log_filter);

    Ok(())
}
