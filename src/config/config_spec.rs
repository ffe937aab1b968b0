use std::net::IpAddr;
use std::sync::Arc;

use crate::config::errors::ConfigError;
use crate::config::EnvironmentProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value with source tracking
    ///
    /// The environment variable wins over the default. A setting with neither
    /// resolves to an empty string from `ConfigValueSource::Default`.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ConfigError> {
        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, env_var)?;

                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable { name: env_var.clone() },
                });
            }
        }

        let value = self.default_value.clone().unwrap_or_default();
        if self.default_value.is_some() {
            self.validate_value(&value, self.setting_name())?;
        }

        Ok(ConfigValue {
            value,
            source: ConfigValueSource::Default,
        })
    }

    fn setting_name(&self) -> &str {
        self.env_override.as_deref().unwrap_or("default")
    }

    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ConfigError> {
        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(ConfigError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("must be at least {} characters long", min),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ConfigError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    /// Accept an IPv4/IPv6 literal or `localhost`
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }
        if value == "localhost" {
            return Ok(());
        }

        let unbracketed = value
            .strip_prefix('[')
            .and_then(|v| v.strip_suffix(']'))
            .unwrap_or(value);

        unbracketed
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| format!("Invalid host address: {}", value))
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let port: u32 = value
            .parse()
            .map_err(|_| format!("Port must be a number, got '{}'", value))?;

        if port < u32::from(min) || port > u32::from(max) {
            return Err(format!("Port must be between {} and {}", min, max));
        }

        Ok(())
    }

    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ConfigError> {
        value.parse::<u16>().map_err(|e| ConfigError::ParseError {
            setting_name: setting_name.to_string(),
            error: e.to_string(),
        })
    }
}
