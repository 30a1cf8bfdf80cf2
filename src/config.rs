//! Operator configuration loading.
//!
//! Parses the TOML file the operator supplies at startup, one table per
//! connector. Every field is independently settable and list fields keep
//! their configured order:
//!
//! ```toml
//! [github]
//! client_id = "abc"
//! client_secret = "xyz"
//! host = "github.example.com"    # optional, GitHub Enterprise only
//! ca_cert = "/etc/ssl/ghe.pem"   # optional, GitHub Enterprise only
//!
//! [github.team]
//! users = ["alice"]
//! orgs = ["acme"]
//! teams = ["acme/core"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::connectors::github::{GithubConfig, GithubTeamConfig};

/// Complete auth-subsystem configuration. Absent tables mean the connector
/// is not enabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub github: Option<GithubSection>,
}

/// The `[github]` table: connector config plus the default team allow-list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubSection {
    #[serde(flatten)]
    pub config: GithubConfig,
    #[serde(default)]
    pub team: GithubTeamConfig,
}

/// Loads configuration from a TOML file.
pub fn load_config(path: &str) -> Result<AuthConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path))?;
    let config: AuthConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path))?;
    Ok(config)
}
