// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::defs;

/// What `set_name` does with a name longer than the argument region.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TruncationPolicy {
    /// Keep the first `capacity` bytes.
    #[default]
    Truncate,
    /// Fail with `Error::NameTooLong` and leave the title untouched.
    Reject,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub truncation: TruncationPolicy,
    #[serde(default = "default_true")]
    pub update_kernel_name: bool,
    #[serde(default = "default_true")]
    pub log_renames: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truncation: TruncationPolicy::default(),
            update_kernel_name: true,
            log_renames: true,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).context("failed to read config file")?;

        let config: Config = toml::from_str(&content).context("failed to parse config file")?;

        Ok(config)
    }

    /// Reads the file named by `$PROCNAME_CONFIG`. Falls back to defaults when
    /// the variable is unset or the file does not exist.
    pub fn load_default() -> Result<Self> {
        let Some(path) = env::var_os(defs::CONFIG_ENV_VAR).map(PathBuf::from) else {
            return Ok(Self::default());
        };

        match Self::from_file(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                let is_not_found = e
                    .root_cause()
                    .downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false);

                if is_not_found {
                    tracing::debug!(
                        target: defs::LOG_TARGET,
                        "config {} not found, using defaults",
                        path.display()
                    );
                    Ok(Self::default())
                } else {
                    Err(e).with_context(|| format!("failed to load {}", path.display()))
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }

        fs::write(path.as_ref(), content).context("failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.truncation, TruncationPolicy::Truncate);
        assert!(config.update_kernel_name);
    }

    #[test]
    fn parses_reject_policy() {
        let config: Config = toml::from_str(
            r#"
            truncation = "reject"
            update_kernel_name = false
            "#,
        )
        .unwrap();
        assert_eq!(config.truncation, TruncationPolicy::Reject);
        assert!(!config.update_kernel_name);
        assert!(config.log_renames);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(toml::from_str::<Config>(r#"truncation = "wrap""#).is_err());
    }

    #[test]
    fn save_then_load() {
        let path = env::temp_dir()
            .join(format!("procname-{}", std::process::id()))
            .join("config.toml");
        let config = Config {
            truncation: TruncationPolicy::Reject,
            update_kernel_name: false,
            log_renames: false,
        };

        config.save_to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_default_follows_env_var() {
        let dir = env::temp_dir().join(format!("procname-env-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let malformed = dir.join("broken.toml");
        fs::write(&malformed, "truncation = 3\n").unwrap();

        // SAFETY: no other test in this crate reads or writes this variable.
        unsafe { env::remove_var(defs::CONFIG_ENV_VAR) };
        let unset = Config::load_default().unwrap();

        unsafe { env::set_var(defs::CONFIG_ENV_VAR, dir.join("absent.toml")) };
        let absent = Config::load_default().unwrap();

        unsafe { env::set_var(defs::CONFIG_ENV_VAR, &malformed) };
        let broken = Config::load_default();

        unsafe { env::remove_var(defs::CONFIG_ENV_VAR) };
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(unset, Config::default());
        assert_eq!(absent, Config::default());
        assert!(broken.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = env::temp_dir().join("procname-does-not-exist.toml");
        assert!(Config::from_file(path).is_err());
    }
}
