//! GitHub identity-provider connector.
//!
//! Covers both the public github.com service and self-hosted GitHub
//! Enterprise deployments (via the `host` / `ca_cert` overrides).

mod config;
mod team;

pub use config::GithubConfig;
pub use team::GithubTeamConfig;

use crate::connector::ConnectorDescriptor;

/// Connector identifier used for registry lookup and operator config.
pub const CONNECTOR_ID: &str = "github";

/// Builds the GitHub connector's registration payload: the `"github"` id
/// plus fresh zero-valued config instances.
///
/// Pure factory with no side effects; the host registers the result into
/// its [`ConnectorRegistry`](crate::registry::ConnectorRegistry) during
/// startup composition.
pub fn describe() -> ConnectorDescriptor {
    ConnectorDescriptor {
        id: CONNECTOR_ID,
        config: Box::new(GithubConfig::default()),
        team_config: Box::new(GithubTeamConfig::default()),
    }
}
