//! Server configuration loaded via OrthoConfig.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Deployment mode; controls log format and request logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

/// Returned when the environment name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown environment `{0}`; expected development or production")]
pub struct ParseEnvironmentError(String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ParseEnvironmentError(raw.to_owned())),
        }
    }
}

/// Problems turning settings into a bindable server configuration.
#[derive(Debug, Error)]
pub enum ServerSettingsError {
    #[error("invalid host `{host}`: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    Environment(#[from] ParseEnvironmentError),
}

/// Listener and mode settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEVCAMPER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// `development` or `production`.
    pub environment: Option<String>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Parse the configured environment.
    ///
    /// # Errors
    /// Fails when the name is not recognised.
    pub fn environment(&self) -> Result<Environment, ParseEnvironmentError> {
        self.environment
            .as_deref()
            .map_or(Ok(Environment::default()), str::parse)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Fails when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerSettingsError> {
        let ip: IpAddr =
            self.host()
                .parse()
                .map_err(|source| ServerSettingsError::InvalidHost {
                    host: self.host().to_owned(),
                    source,
                })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("devcamper")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("DEVCAMPER_HOST", None::<String>),
            ("DEVCAMPER_PORT", None::<String>),
            ("DEVCAMPER_ENVIRONMENT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default host parses"),
            SocketAddr::from(([0, 0, 0, 0], 5000))
        );
        assert_eq!(settings.environment(), Ok(Environment::Development));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DEVCAMPER_HOST", Some("127.0.0.1".to_owned())),
            ("DEVCAMPER_PORT", Some("8080".to_owned())),
            ("DEVCAMPER_ENVIRONMENT", Some("production".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("host parses"),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(settings.environment(), Ok(Environment::Production));
    }

    #[rstest]
    #[case("Development", Ok(Environment::Development))]
    #[case("prod", Ok(Environment::Production))]
    #[case("staging", Err(ParseEnvironmentError("staging".to_owned())))]
    fn environment_names_parse(
        #[case] raw: &str,
        #[case] expected: Result<Environment, ParseEnvironmentError>,
    ) {
        assert_eq!(raw.parse::<Environment>(), expected);
    }

    #[test]
    fn hostnames_are_rejected() {
        let settings = ServerSettings {
            host: Some("localhost".to_owned()),
            port: 5000,
            environment: None,
        };
        assert!(matches!(
            settings.bind_addr(),
            Err(ServerSettingsError::InvalidHost { .. })
        ));
    }
}
