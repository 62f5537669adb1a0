use core_config::{ConfigError, FromEnv, env_parse};

/// Users domain settings
#[derive(Debug, Clone, Default)]
pub struct UsersConfig {
    /// Validate name and email on registration (`USERS_ENFORCE_SCHEMA`)
    pub enforce_schema: bool,
}

impl FromEnv for UsersConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            enforce_schema: env_parse("USERS_ENFORCE_SCHEMA", "false")?,
        })
    }
}
