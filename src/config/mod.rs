//! Configuration management for `civic_issues`.
//!
//! Configuration is layered, highest precedence first:
//! - CLI flags (and their `CIVIC_*` environment variables)
//! - Workspace config (`<data-dir>/config.yaml`)
//! - Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use civic_lib::identity::load_session;
use civic_lib::{CivicError, CurrentUser, FileSlot, IssueStore, Result, Role};
use serde::{Deserialize, Serialize};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".civic";
/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Values read from `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Slot holding the issue collection.
    pub issues_slot: String,
    /// Slot holding the identity collaborator's session.
    pub session_slot: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issues_slot: "civic-issues".to_string(),
            session_slot: "user".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load `<data_dir>/config.yaml`, falling back to defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file exists but cannot be read or parsed,
    /// or names an empty slot.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CivicError::Config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        let config = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(&text)
                .map_err(|e| CivicError::Config(format!("{}: {e}", path.display())))?
        };

        if config.issues_slot.trim().is_empty() || config.session_slot.trim().is_empty() {
            return Err(CivicError::Config(format!(
                "{}: slot names cannot be empty",
                path.display()
            )));
        }
        Ok(config)
    }
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub user_id: Option<i64>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub role: Option<String>,
}

impl CliOverrides {
    const fn has_identity(&self) -> bool {
        self.user_id.is_some()
            || self.user_email.is_some()
            || self.user_name.is_some()
            || self.role.is_some()
    }

    /// Identity built from the override flags, if any were given.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if `--role` is not a known role.
    pub fn user(&self) -> Result<Option<CurrentUser>> {
        if !self.has_identity() {
            return Ok(None);
        }
        let role = match self.role.as_deref() {
            Some(role) => role.parse::<Role>()?,
            None => Role::User,
        };
        Ok(Some(CurrentUser {
            id: self.user_id,
            email: self.user_email.clone().unwrap_or_default(),
            name: self.user_name.clone().unwrap_or_default(),
            role,
        }))
    }
}

/// A resolved data directory and its configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub data_dir: PathBuf,
    pub config: Config,
}

impl Workspace {
    /// Resolve the data directory and load its config.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the config file is invalid.
    pub fn discover(cli: &CliOverrides) -> Result<Self> {
        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let config = Config::load(&data_dir)?;
        Ok(Self { data_dir, config })
    }

    #[must_use]
    pub fn issues_slot(&self) -> FileSlot {
        FileSlot::new(&self.data_dir, &self.config.issues_slot)
    }

    #[must_use]
    pub fn session_slot(&self) -> FileSlot {
        FileSlot::new(&self.data_dir, &self.config.session_slot)
    }

    /// Open the issue store over this workspace's issues slot.
    #[must_use]
    pub fn open_store(&self) -> IssueStore<FileSlot> {
        IssueStore::open(self.issues_slot())
    }

    /// The current user: CLI overrides win over the session slot.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if an override role is invalid.
    pub fn current_user(&self, cli: &CliOverrides) -> Result<Option<CurrentUser>> {
        if let Some(user) = cli.user()? {
            return Ok(Some(user));
        }
        Ok(load_session(&self.session_slot()))
    }
}
