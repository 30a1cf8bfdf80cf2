use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::connector::ProviderConfig;
use crate::error::{ConfigError, FieldViolation, ValidationError};
use crate::secret::Secret;

/// Display label shown in UI and log contexts.
pub const DISPLAY_NAME: &str = "GitHub";

/// Value for the dispatcher's `teamNameField`: map identities using both
/// the username and organization-membership fields.
const TEAM_NAME_FIELD: &str = "both";

/// GitHub connector configuration.
///
/// Populated once from the operator's config source at process start and
/// immutable afterwards. `client_id` and `client_secret` are required; the
/// remaining fields only matter for GitHub Enterprise deployments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubConfig {
    /// OAuth application client id.
    #[serde(default)]
    pub client_id: String,

    /// OAuth application client secret. Never logged.
    #[serde(default)]
    pub client_secret: Secret,

    /// Hostname of a GitHub Enterprise deployment (no scheme, no trailing
    /// slash). Empty means the public github.com service.
    #[serde(default)]
    pub host: String,

    /// Path to the CA certificate (PEM) of a GitHub Enterprise deployment.
    /// The file is never opened here; the path is forwarded verbatim.
    #[serde(default)]
    pub ca_cert: Option<PathBuf>,
}

/// Wire record consumed by the downstream OAuth2/OIDC dispatcher.
///
/// Field names and the two constant values are fixed by that external
/// contract; do not rename.
#[derive(Serialize)]
struct WireConfig<'a> {
    #[serde(rename = "clientID")]
    client_id: &'a str,
    #[serde(rename = "clientSecret")]
    client_secret: &'a str,
    #[serde(rename = "redirectURI")]
    redirect_uri: &'a str,
    #[serde(rename = "hostName")]
    host_name: &'a str,
    #[serde(rename = "rootCA")]
    root_ca: String,
    #[serde(rename = "teamNameField")]
    team_name_field: &'a str,
    #[serde(rename = "loadAllGroups")]
    load_all_groups: bool,
}

impl ProviderConfig for GithubConfig {
    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.client_id.is_empty() {
            violations.push(FieldViolation::missing("client-id"));
        }

        if self.client_secret.is_empty() {
            violations.push(FieldViolation::missing("client-secret"));
        }

        ValidationError::from_violations(violations)
    }

    fn serialize(&self, redirect_uri: &str) -> Result<Vec<u8>, ConfigError> {
        self.validate()?;

        let root_ca = self
            .ca_cert
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        let bytes = serde_json::to_vec(&WireConfig {
            client_id: &self.client_id,
            client_secret: self.client_secret.expose(),
            redirect_uri,
            host_name: &self.host,
            root_ca,
            team_name_field: TEAM_NAME_FIELD,
            load_all_groups: true,
        })?;

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn valid_config() -> GithubConfig {
        GithubConfig {
            client_id: "abc".to_string(),
            client_secret: Secret::new("xyz"),
            host: String::new(),
            ca_cert: None,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(GithubConfig::default().display_name(), "GitHub");
    }

    #[test]
    fn test_validate_reports_all_missing_fields() {
        let err = GithubConfig::default().validate().unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["client-id", "client-secret"]);

        let msg = err.to_string();
        assert!(msg.contains("Missing client-id"));
        assert!(msg.contains("Missing client-secret"));
    }

    #[test]
    fn test_validate_reports_single_missing_field() {
        let config = GithubConfig {
            client_id: "abc".to_string(),
            ..GithubConfig::default()
        };
        let err = config.validate().unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["client-secret"]);
    }

    #[test]
    fn test_validate_ignores_enterprise_fields() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.host = "github.example.com".to_string();
        config.ca_cert = Some(PathBuf::from("/etc/ssl/ghe.pem"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialize_propagates_validation_error() {
        let config = GithubConfig::default();
        let expected = config.validate().unwrap_err();

        match config.serialize("https://ci.example.com/callback") {
            Err(ConfigError::Validation(err)) => assert_eq!(err, expected),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_serialize_wire_format() {
        let bytes = valid_config()
            .serialize("https://ci.example.com/callback")
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["clientID"], "abc");
        assert_eq!(value["clientSecret"], "xyz");
        assert_eq!(value["redirectURI"], "https://ci.example.com/callback");
        assert_eq!(value["hostName"], "");
        assert_eq!(value["rootCA"], "");
        assert_eq!(value["teamNameField"], "both");
        assert_eq!(value["loadAllGroups"], true);
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_serialize_enterprise_fields() {
        let mut config = valid_config();
        config.host = "github.example.com".to_string();
        config.ca_cert = Some(PathBuf::from("/etc/ssl/ghe.pem"));

        let bytes = config.serialize("https://ci.example.com/callback").unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["hostName"], "github.example.com");
        assert_eq!(value["rootCA"], "/etc/ssl/ghe.pem");
    }

    #[test]
    fn test_debug_never_reveals_secret() {
        let config = valid_config();
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("xyz"));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: GithubConfig = toml::from_str(
            r#"
            client_id = "abc"
            client_secret = "xyz"
            host = "github.example.com"
            ca_cert = "/etc/ssl/ghe.pem"
            "#,
        )
        .unwrap();

        assert_eq!(config.client_id, "abc");
        assert_eq!(config.client_secret.expose(), "xyz");
        assert_eq!(config.host, "github.example.com");
        assert_eq!(config.ca_cert, Some(PathBuf::from("/etc/ssl/ghe.pem")));
    }
}
