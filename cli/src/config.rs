//! Persisted CLI configuration.
//!
//! Lives at `~/.config/lazrchain/cli/config.yml` unless overridden with
//! `--config`.  Besides the backend URL and user identity this also keeps
//! the local record of the last reward claim, the terminal analogue of the
//! browser build's local storage; the backend remains authoritative for
//! everything financial.

use {
    serde::{Deserialize, Serialize},
    std::{fs, io, path::Path, sync::LazyLock},
};

/// Default config path, `None` when no home directory can be resolved.
pub static CONFIG_FILE: LazyLock<Option<String>> = LazyLock::new(|| {
    dirs_next::home_dir().and_then(|mut path| {
        path.extend([".config", "lazrchain", "cli", "config.yml"]);
        path.to_str().map(String::from)
    })
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API base URL.
    pub api_url: String,
    pub user_id: String,
    pub email: String,
    /// Connected wallet address, empty until linked.
    pub wallet_address: String,
    /// Platform deposit address USDT transfers are sent to.
    pub admin_address: String,
    /// Last reward claim (epoch ms), `None` if never claimed.
    pub last_reward_claim_ms: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/api/user".to_string(),
            user_id: String::new(),
            email: String::new(),
            wallet_address: String::new(),
            admin_address: "TRCxE7B7Gmu9UG2YA3c3H6FNqJ7F8v7EKV".to_string(),
            last_reward_claim_ms: None,
        }
    }
}

impl Config {
    pub fn load(config_file: &str) -> Result<Self, io::Error> {
        let file = fs::File::open(config_file)?;
        serde_yaml::from_reader(file).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Load the config, falling back to defaults when the file is missing.
    pub fn load_or_default(config_file: &str) -> Result<Self, io::Error> {
        match Self::load(config_file) {
            Ok(config) => Ok(config),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    pub fn save(&self, config_file: &str) -> Result<(), io::Error> {
        let serialized = serde_yaml::to_string(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        if let Some(dir) = Path::new(config_file).parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(config_file, serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let path = path.to_str().unwrap();

        let config = Config {
            user_id: "u-42".to_string(),
            email: "user@example.com".to_string(),
            last_reward_claim_ms: Some(1_700_000_000_000),
            ..Config::default()
        };
        config.save(path).unwrap();
        assert_eq!(Config::load(path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yml");
        let config = Config::load_or_default(path.to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.last_reward_claim_ms.is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep/nested/config.yml");
        Config::default().save(path.to_str().unwrap()).unwrap();
        assert!(path.exists());
    }
}
