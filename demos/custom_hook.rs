//! Example demonstrating custom conversion hooks

use envbind::{Json, Unmarshal, UnmarshalEnv};
use std::time::Duration;

// Comma-separated list
#[derive(Debug, Default)]
struct IdList(Vec<String>);

impl UnmarshalEnv for IdList {
    fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()> {
        self.0 = raw.split(',').map(|s| s.trim().to_string()).collect();
        Ok(())
    }
}

// Seconds as a Duration
#[derive(Debug, Default)]
struct Seconds(Duration);

impl UnmarshalEnv for Seconds {
    fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()> {
        self.0 = Duration::from_secs(raw.parse()?);
        Ok(())
    }
}

#[derive(Debug, Default, Unmarshal)]
struct Config {
    #[env("VALID_IDS")]
    pub valid_ids: IdList,

    pub primary_id: String,

    // JSON via serde_json
    pub tags: Json<Vec<String>>,

    // Only allocated when REQUEST_TIMEOUT is set
    pub request_timeout: Option<Seconds>,

    #[env(",default=30")]
    pub idle_timeout: Seconds,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config::default();
    envbind::unmarshal(
        [
            "VALID_IDS=id1, id2",
            "PRIMARY_ID=4321",
            r#"TAGS=["prod","api","v2"]"#,
        ],
        &mut config,
    )?;

    println!("Configuration loaded:");
    println!("  Valid IDs: {:?}", config.valid_ids.0);
    println!("  Primary ID: {}", config.primary_id);
    println!("  Tags: {:?}", *config.tags);
    println!("  Request timeout: {:?}", config.request_timeout.map(|s| s.0));
    println!("  Idle timeout: {:?}", config.idle_timeout.0);

    Ok(())
}
