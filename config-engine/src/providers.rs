use crate::error::{ConfigError, Result};
use crate::settings::AppConfig;
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "SPLITBILL_";
pub const CONFIG_FILE_NAME: &str = "splitbill.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "splitbill", "splitbill")
}

/// `splitbill.toml` in the platform configuration directory
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Platform data directory used when `storage.path` is unset
///
/// # Errors
///
/// Returns [`ConfigError::NoDataDir`] when the platform reports no home directory.
pub fn default_data_dir() -> Result<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDir)
}

/// Builds an [`AppConfig`] from layered sources
pub struct ConfigLoader {
    figment: Figment,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Start from built-in defaults
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(AppConfig::default())),
        }
    }

    /// Merge the platform config file if it exists
    pub fn with_default_file(self) -> Self {
        match default_config_file() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "merging default config file");
                self.merge_file(&path)
            }
            _ => self,
        }
    }

    /// Merge an explicit file; YAML by `.yaml`/`.yml` extension, TOML otherwise
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceNotFound`] if the file does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::SourceNotFound(path.to_path_buf()));
        }
        Ok(self.merge_file(path))
    }

    /// Merge `SPLITBILL_*` environment variables
    pub fn with_env(self) -> Self {
        Self {
            figment: self.figment.merge(Env::prefixed(ENV_PREFIX).split("__")),
        }
    }

    /// Extract and validate
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed or the result does not validate.
    pub fn load(self) -> Result<AppConfig> {
        let config: AppConfig = self.figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn merge_file(self, path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let figment = if is_yaml {
            self.figment.merge(Yaml::file(path))
        } else {
            self.figment.merge(Toml::file(path))
        };
        Self { figment }
    }
}

/// Load with every standard source, plus `explicit` when given
///
/// # Errors
///
/// See [`ConfigLoader::with_file`] and [`ConfigLoader::load`].
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new().with_default_file();
    if let Some(path) = explicit {
        loader = loader.with_file(path)?;
    }
    loader.with_env().load()
}
