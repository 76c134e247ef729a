//! Environment-based bot configuration.

use crate::error::{config::ConfigError, AppError};

const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
const GUILD_ID: &str = "GUILD_ID";

pub struct Config {
    pub discord_token: String,

    /// Guild to register slash commands to. Commands are registered globally when unset.
    pub guild_id: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `.env` loading happens in `main` before this is called, so values from the file
    /// and the process environment are treated the same.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - `DISCORD_TOKEN` missing or `GUILD_ID` unparseable
    pub fn from_env() -> Result<Self, AppError> {
        let discord_token = std::env::var(DISCORD_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(DISCORD_TOKEN.to_string()))?;

        let guild_id = parse_guild_id(std::env::var(GUILD_ID).ok())?;

        Ok(Self {
            discord_token,
            guild_id,
        })
    }
}

/// Parses the optional `GUILD_ID` value.
///
/// An unset or blank value means "register globally". Discord snowflakes are never zero,
/// so `0` is rejected along with anything that isn't a `u64`.
fn parse_guild_id(value: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar {
            name: GUILD_ID.to_string(),
            value,
            reason: "guild ID cannot be zero".to_string(),
        }),
        Ok(id) => Ok(Some(id)),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: GUILD_ID.to_string(),
            value,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_guild_id_registers_globally() {
        assert_eq!(parse_guild_id(None).unwrap(), None);
        assert_eq!(parse_guild_id(Some("  ".to_string())).unwrap(), None);
    }

    #[test]
    fn parses_guild_id() {
        assert_eq!(
            parse_guild_id(Some("123456789012345678".to_string())).unwrap(),
            Some(123456789012345678)
        );
        assert_eq!(parse_guild_id(Some(" 42 ".to_string())).unwrap(), Some(42));
    }

    #[test]
    fn rejects_non_numeric_guild_id() {
        let err = parse_guild_id(Some("my-guild".to_string())).unwrap_err();
        match err {
            ConfigError::InvalidEnvVar { name, value, .. } => {
                assert_eq!(name, "GUILD_ID");
                assert_eq!(value, "my-guild");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_guild_id() {
        assert!(matches!(
            parse_guild_id(Some("0".to_string())),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
