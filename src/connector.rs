use crate::error::{ConfigError, ValidationError};

/// Provider-side configuration contract for an identity-provider connector.
///
/// One implementation exists per provider (GitHub, and others elsewhere).
/// Instances are populated once from operator-supplied configuration at
/// process start and treated as immutable afterwards; the dispatcher calls
/// these methods on the populated instance.
///
/// # Lifecycle
/// 1. Host obtains a zero-valued instance via the connector's `describe()`
/// 2. Config loader populates the fields from the operator's config source
/// 3. Dispatcher calls `validate()` before use
/// 4. Dispatcher calls `serialize(redirect_uri)` to hand the provider
///    definition to the downstream OAuth2/OIDC layer
pub trait ProviderConfig: Send + Sync {
    /// Human-readable display label (e.g. `"GitHub"`) for UI and log contexts.
    fn display_name(&self) -> &str;

    /// Checks required fields.
    ///
    /// Every check runs unconditionally so a single call reports all missing
    /// fields at once; failures are aggregated into one [`ValidationError`].
    fn validate(&self) -> Result<(), ValidationError>;

    /// Serializes the provider definition to the dispatcher's JSON wire
    /// format.
    ///
    /// Validates first: on failure the validation error is propagated
    /// unchanged and no bytes are produced. `redirect_uri` is the callback
    /// URL the provider redirects to after authentication; it is supplied by
    /// the caller and never stored.
    fn serialize(&self, redirect_uri: &str) -> Result<Vec<u8>, ConfigError>;
}

/// Per-team authorization allow-list contract.
///
/// Declares which provider identities may act as a given team. All
/// operations are total - there are no error conditions.
pub trait TeamAuthConfig: Send + Sync {
    /// True iff at least one allow-list (users, orgs, teams) is non-empty.
    fn is_valid(&self) -> bool;

    /// Allow-listed usernames, in configured order.
    fn users(&self) -> &[String];

    /// Allow-listed group identifiers, in configured order, normalized to
    /// the dispatcher's `org` / `org:team` forms.
    fn groups(&self) -> Vec<String>;
}

/// One connector's registration payload: its identifier plus the config
/// instances the host hands to the flag/config loader.
///
/// Produced by each connector module's `describe()` factory and inserted
/// into the [`ConnectorRegistry`](crate::registry::ConnectorRegistry) by the
/// host during startup composition.
pub struct ConnectorDescriptor {
    /// Unique connector identifier, lowercase alphanumeric (e.g. `"github"`).
    /// Used for registry lookup, configuration, and logging.
    pub id: &'static str,
    /// Provider-side configuration instance.
    pub config: Box<dyn ProviderConfig>,
    /// Per-team allow-list instance.
    pub team_config: Box<dyn TeamAuthConfig>,
}

impl std::fmt::Debug for ConnectorDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorDescriptor")
            .field("id", &self.id)
            .field("display_name", &self.config.display_name())
            .finish()
    }
}
