use std::fmt;
use std::sync::Arc;
use crate::config::errors::ConfigError;
use crate::config::config_spec::ConfigSpec;
use crate::config::EnvironmentProvider;

/// Settings needed to start the server
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    public_url: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ConfigError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://bugs.db?mode=rwc")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?
            .value;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("5000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?
            .value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        // Defaults to the local address, which depends on the port
        let public_url = ConfigSpec::new(env_provider)
            .env_override("PUBLIC_URL")
            .min_length(1)
            .load_setting_with_source()?
            .value;
        let public_url = if public_url.is_empty() {
            format!("http://localhost:{}/api", server_port)
        } else {
            public_url
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            public_url,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("public_url", &self.public_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn load(vars: &[(&str, &str)]) -> Result<BootstrapSettings, ConfigError> {
        BootstrapSettings::from_env_provider(Arc::new(MockEnvironment::empty().with_vars(vars)))
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = load(&[]).unwrap();

        assert_eq!(settings.database_url(), "sqlite://bugs.db?mode=rwc");
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 5000);
        assert_eq!(settings.server_address(), "0.0.0.0:5000");
        assert_eq!(settings.public_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let settings = load(&[
            ("DATABASE_URL", "sqlite://test.db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("PUBLIC_URL", "https://bugs.example.com/api"),
        ])
        .unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.public_url(), "https://bugs.example.com/api");
    }

    #[test]
    fn test_public_url_default_follows_port() {
        let settings = load(&[("PORT", "9090")]).unwrap();

        assert_eq!(settings.public_url(), "http://localhost:9090/api");
    }

    #[test]
    fn test_empty_database_url_fails_validation() {
        match load(&[("DATABASE_URL", "")]) {
            Err(ConfigError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("must be at least 1 characters long"));
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_fails_validation() {
        for port in ["0", "70000", "abc"] {
            match load(&[("PORT", port)]) {
                Err(ConfigError::InvalidSetting { setting_name, .. }) => assert_eq!(setting_name, "PORT"),
                other => panic!("Expected InvalidSetting for PORT={}, got: {:?}", port, other),
            }
        }
    }

    #[test]
    fn test_invalid_host_fails_validation() {
        assert!(load(&[("HOST", "")]).is_err());
        assert!(load(&[("HOST", "not-an-ip")]).is_err());
    }

    #[test]
    fn test_empty_public_url_fails_validation() {
        assert!(load(&[("PUBLIC_URL", "")]).is_err());
    }
}
