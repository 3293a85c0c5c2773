//! Example demonstrating field errors

use envbind::{EnvError, Unmarshal};

#[derive(Debug, Default, Unmarshal)]
struct Config {
    pub port: u16,

    #[env(",required")]
    pub api_key: String,
}

fn main() {
    let mut config = Config::default();

    // Out of range for u16
    if let Err(err) = envbind::unmarshal(["PORT=70000", "API_KEY=k"], &mut config) {
        println!("{err}");
        println!("  field: {}", err.field());
        println!("  env var: {}", err.env_var());
    }

    // Missing required value
    match envbind::unmarshal(["PORT=8080"], &mut config) {
        Err(err) if matches!(err.cause(), EnvError::Missing) => {
            println!("{} is required", err.env_var());
        }
        other => println!("unexpected: {other:?}"),
    }
}
