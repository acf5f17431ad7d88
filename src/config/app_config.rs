use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_CONFIG_DIR: &str = "GIT_CREDENTIAL_OP_CONFIG_DIR";
pub const ENV_ACCOUNT: &str = "GIT_CREDENTIAL_OP_ACCOUNT";
pub const ENV_VAULT: &str = "GIT_CREDENTIAL_OP_VAULT";
pub const ENV_OP_PATH: &str = "GIT_CREDENTIAL_OP_OP_PATH";
pub const ENV_OP_CONFIG: &str = "GIT_CREDENTIAL_OP_OP_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("profile \"{0}\" is not defined in config.toml")]
    UnknownProfile(String),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub account: Option<String>,
    pub vault: Option<String>,
    pub op_path: Option<String>,
    pub op_config: Option<String>,

    // Profile management
    pub default_profile: Option<String>,
    pub profiles: Option<HashMap<String, FileProfileConfig>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FileProfileConfig {
    pub account: Option<String>,
    pub vault: Option<String>,
}

/// Values given on the command line; they take precedence over everything.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub account: Option<String>,
    pub vault: Option<String>,
    pub op_path: Option<PathBuf>,
    pub op_config: Option<PathBuf>,
    pub profile: Option<String>,
}

/// Resolved helper settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// 1Password account shorthand, sign-in address, account id or user id.
    pub account: Option<String>,
    /// Vault to search; `None` searches every vault the account can read.
    pub vault: Option<String>,
    /// Explicit `op` executable; `None` searches `PATH`.
    pub op_path: Option<PathBuf>,
    /// 1Password CLI configuration directory.
    pub op_config: Option<PathBuf>,
    /// Profile the values were drawn from, if any.
    pub profile: Option<String>,
}

impl Config {
    /// Resolves each setting: CLI > env > profile > config file > default.
    pub fn create(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let file_cfg = load_file_config()?;
        let (profile_name, profile) = resolve_profile(overrides.profile, &file_cfg)?;

        let account = overrides
            .account
            .or_else(|| env_value(ENV_ACCOUNT))
            .or_else(|| profile.account.clone())
            .or_else(|| file_cfg.account.clone());
        let vault = overrides
            .vault
            .or_else(|| env_value(ENV_VAULT))
            .or_else(|| profile.vault.clone())
            .or_else(|| file_cfg.vault.clone());
        let op_path = overrides
            .op_path
            .or_else(|| env_value(ENV_OP_PATH).map(PathBuf::from))
            .or_else(|| file_cfg.op_path.as_ref().map(PathBuf::from));
        let op_config = overrides
            .op_config
            .or_else(|| env_value(ENV_OP_CONFIG).map(PathBuf::from))
            .or_else(|| file_cfg.op_config.as_ref().map(PathBuf::from));

        Ok(Config {
            account: account.filter(|s| !s.is_empty()),
            vault: vault.filter(|s| !s.is_empty()),
            op_path,
            op_config,
            profile: profile_name,
        })
    }
}

fn resolve_profile(
    cli_profile: Option<String>,
    file_cfg: &FileConfig,
) -> Result<(Option<String>, FileProfileConfig), ConfigError> {
    let lookup = |name: &str| {
        file_cfg
            .profiles
            .as_ref()
            .and_then(|profiles| profiles.get(name))
            .cloned()
    };

    if let Some(name) = cli_profile {
        return match lookup(&name) {
            Some(p) => Ok((Some(name), p)),
            None => Err(ConfigError::UnknownProfile(name)),
        };
    }

    // A default_profile pointing at a missing profile is ignored.
    if let Some(name) = file_cfg.default_profile.as_deref() {
        if let Some(p) = lookup(name) {
            return Ok((Some(name.to_string()), p));
        }
    }

    Ok((None, FileProfileConfig::default()))
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Location of `config.toml`, honouring `GIT_CREDENTIAL_OP_CONFIG_DIR`.
pub fn config_file_path() -> PathBuf {
    let cfg_dir = if let Ok(p) = env::var(ENV_CONFIG_DIR) {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    cfg_dir.join("git-credential-op").join("config.toml")
}

/// Loads `config.toml`; a missing file is the empty configuration.
pub fn load_file_config() -> Result<FileConfig, ConfigError> {
    let path = config_file_path();
    let text = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FileConfig::default())
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
}
