//! Example demonstrating Option<T> and Box<T> fields

use envbind::Unmarshal;

#[derive(Debug, Default, Unmarshal)]
struct Config {
    pub database_url: String,

    // None unless MAX_CONNECTIONS is set
    pub max_connections: Option<u32>,

    // None unless DEBUG is set
    pub debug: Option<bool>,

    pub label: Box<String>,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config::default();
    envbind::unmarshal(
        ["DATABASE_URL=postgres://localhost/db", "DEBUG=1", "LABEL=edge"],
        &mut config,
    )?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max connections: {:?}", config.max_connections);
    println!("  Debug: {:?}", config.debug);
    println!("  Label: {}", config.label);

    Ok(())
}
