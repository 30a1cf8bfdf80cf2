use anyhow::{bail, Context, Result};
use sso_connectors::config::{load_config, AuthConfig};
use sso_connectors::ConnectorRegistry;
use tracing::{error, info, warn};

/// Config-check tool: loads the operator config, validates every enabled
/// connector against the compiled-in registry, and exits non-zero if any
/// connector is misconfigured. Serialized payloads are never printed -
/// they contain the client secret.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_connectors=info".into()),
        )
        .init();

    let config_path = std::env::var("SSO_CONNECTORS_CONFIG")
        .unwrap_or_else(|_| "connectors.toml".to_string());

    let redirect_uri = std::env::var("SSO_REDIRECT_URI")
        .unwrap_or_else(|_| "https://ci.example.com/sky/issuer/callback".to_string());

    let registry = ConnectorRegistry::builtin();
    info!(
        config_path = %config_path,
        connectors = ?registry.ids(),
        "Checking connector configuration"
    );

    let config = load_config(&config_path).context("Failed to load connector config")?;
    let failures = check_connectors(&config, &redirect_uri);

    if failures > 0 {
        bail!("{} connector(s) failed validation", failures);
    }
    info!("All configured connectors are valid");
    Ok(())
}

/// Validates and test-serializes each enabled connector, returning the
/// number of failures.
fn check_connectors(config: &AuthConfig, redirect_uri: &str) -> usize {
    use sso_connectors::{ProviderConfig, TeamAuthConfig};

    let mut failures = 0;

    match &config.github {
        Some(github) => {
            let name = github.config.display_name();
            match github.config.serialize(redirect_uri) {
                Ok(bytes) => {
                    info!(connector = name, payload_bytes = bytes.len(), "Connector config valid")
                }
                Err(e) => {
                    error!(connector = name, error = %e, "Connector config invalid");
                    failures += 1;
                }
            }
            if !github.team.is_valid() {
                warn!(
                    connector = name,
                    "No users, orgs, or teams allow-listed; nobody can authenticate"
                );
            }
        }
        None => info!("GitHub connector not configured"),
    }

    failures
}
