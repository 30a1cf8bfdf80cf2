//! SSO Connectors - Identity-provider connector configs for the CI auth subsystem.
//!
//! This crate defines the configuration surface each identity-provider
//! connector exposes to the authentication dispatcher: the operator-supplied
//! credentials and options for a provider (currently GitHub), their
//! validation, and their serialization into the JSON wire format the
//! downstream OAuth2/OIDC dispatcher consumes. It also defines the per-team
//! authorization allow-list (which provider users/orgs/teams may act as a
//! given team).
//!
//! The dispatcher itself - OAuth handshake, token issuance, session storage,
//! membership resolution against the provider API - lives elsewhere and only
//! consumes the contracts defined here.
//!
//! # Architecture
//!
//! ```text
//! Operator config (TOML / flags)
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │  Connector config (per provider)        │
//! │  - validate credentials                 │
//! │  - serialize to dispatcher wire format  │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │  ConnectorRegistry (host-owned)         │
//! │  - built once at startup composition    │
//! │  - read-only thereafter                 │
//! └─────────────────────────────────────────┘
//!          ↓
//!   Auth dispatcher (external)
//! ```
//!
//! # Core Types
//!
//! - [`ProviderConfig`] - Trait every provider config implements
//! - [`TeamAuthConfig`] - Trait every per-team allow-list implements
//! - [`ConnectorDescriptor`] - One connector's id + config instances
//! - [`ConnectorRegistry`] - Append-only registry keyed by connector id
//!
//! # Registering connectors
//!
//! Registration is an explicit startup step owned by the host, not a
//! load-time side effect:
//!
//! ```
//! use sso_connectors::registry::ConnectorRegistry;
//!
//! let registry = ConnectorRegistry::builtin();
//! assert!(registry.get("github").is_some());
//! ```

mod connector;
mod error;
mod secret;

pub mod config;
pub mod connectors;
pub mod registry;

// Re-export public types
pub use connector::{ConnectorDescriptor, ProviderConfig, TeamAuthConfig};
pub use error::{ConfigError, FieldViolation, ValidationError};
pub use registry::{ConnectorRegistry, RegistryError};
pub use secret::Secret;
