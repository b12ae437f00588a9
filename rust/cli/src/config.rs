//! Table configuration for the CLI: built-in defaults, then a TOML file named
//! by `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. The source of
//! every value is kept so `holdem cfg` can show where it came from.

use std::fs;

use holdem_engine::settings::GameSettings;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const BUY_IN_ENV: &str = "HOLDEM_BUY_IN";
pub const BIG_BLIND_ENV: &str = "HOLDEM_BIG_BLIND";
pub const ACTION_TIMEOUT_ENV: &str = "HOLDEM_ACTION_TIMEOUT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub buy_in: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub action_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        let table = GameSettings::default();
        Self {
            seed: table.seed,
            buy_in: table.buy_in,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            action_timeout_secs: table.action_timeout_secs,
        }
    }
}

impl Config {
    /// Engine settings for a table built from this configuration.
    pub fn game_settings(&self, table_id: &str) -> GameSettings {
        GameSettings {
            table_id: table_id.to_string(),
            seed: self.seed,
            buy_in: self.buy_in,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            action_timeout_secs: self.action_timeout_secs,
            ..GameSettings::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub buy_in: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub action_timeout_secs: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            buy_in: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            action_timeout_secs: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.buy_in {
            cfg.buy_in = v;
            sources.buy_in = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.action_timeout_secs {
            cfg.action_timeout_secs = v;
            sources.action_timeout_secs = ValueSource::File;
        }
    }

    if let Some(v) = env_value(SEED_ENV)? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(BUY_IN_ENV)? {
        cfg.buy_in = v;
        sources.buy_in = ValueSource::Env;
    }
    if let Some(v) = env_value(BIG_BLIND_ENV)? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value(ACTION_TIMEOUT_ENV)? {
        cfg.action_timeout_secs = v;
        sources.action_timeout_secs = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// A set, non-empty variable that does not parse is an error, not a default.
fn env_value<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", name, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    buy_in: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    action_timeout_secs: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.game_settings("config")
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_engine() {
        let cfg = Config::default();
        assert_eq!((cfg.small_blind, cfg.big_blind, cfg.buy_in), (1, 2, 200));
        assert_eq!(cfg.action_timeout_secs, 30);
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn blinds_out_of_order_are_rejected() {
        let cfg = Config {
            small_blind: 10,
            big_blind: 5,
            ..Config::default()
        };
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn file_keys_are_checked() {
        assert!(toml::from_str::<FileConfig>("big_blind = 4\nbuy_in = 400").is_ok());
        assert!(toml::from_str::<FileConfig>("level = 3").is_err());
    }

    #[test]
    fn settings_carry_the_table_id() {
        let settings = Config::default().game_settings("sim");
        assert_eq!(settings.table_id, "sim");
        assert_eq!(settings.big_blind, 2);
    }
}
