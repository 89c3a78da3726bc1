// Mon Oct 12 2026 - Alex

use crate::output::FormatterRegistry;
use crate::resolve::{LocalStore, StoreError};
use crate::structure::{LayoutError, OffsetCalculator};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub local: PathBuf,
    pub tag: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            local: PathBuf::from("ccrawl.db"),
            tag: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub pointer_size: u64,
    pub pack: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pointer_size: 8,
            pack: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatsConfig {
    pub default: String,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            default: "C".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub verbose: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub resolve: ResolveConfig,
    pub layout: LayoutConfig,
    pub formats: FormatsConfig,
    pub terminal: TerminalConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database(mut self, path: PathBuf) -> Self {
        self.database.local = path;
        self
    }

    pub fn with_pointer_size(mut self, pointer_size: u64) -> Self {
        self.layout.pointer_size = pointer_size;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::debug!("using default config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.offset_calculator()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        if !FormatterRegistry::with_defaults().has_format(&self.formats.default) {
            return Err(ConfigError::Validation(format!(
                "unknown default format {}",
                self.formats.default
            )));
        }
        if self.terminal.verbose && self.terminal.quiet {
            return Err(ConfigError::Validation(
                "verbose and quiet are exclusive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn offset_calculator(&self) -> Result<OffsetCalculator, LayoutError> {
        let calc = OffsetCalculator::new(self.layout.pointer_size)?;
        match self.layout.pack {
            Some(pack) => calc.with_pack(pack),
            None => Ok(calc),
        }
    }

    /// Local store with the configured tag filter.
    pub fn open_store(&self) -> Result<LocalStore, StoreError> {
        let store = LocalStore::open(&self.database.local)?;
        Ok(match &self.database.tag {
            Some(tag) => store.with_tag(tag),
            None => store,
        })
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.terminal.quiet {
            log::LevelFilter::Error
        } else if self.terminal.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.offset_calculator().unwrap().pointer_size(), 8);
        assert_eq!(config.database.local, PathBuf::from("ccrawl.db"));
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_validation() {
        assert!(Config::new().with_pointer_size(2).validate().is_err());

        let mut packed = Config::new();
        packed.layout.pack = Some(3);
        assert!(packed.validate().is_err());

        let mut format = Config::new();
        format.formats.default = "ctypes".to_string();
        assert!(matches!(format.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("type_crawl_cfg_{}", std::process::id()));
        let path = dir.join("config.json");
        let mut config = Config::new().with_pointer_size(4);
        config.resolve.limit = Some(2);
        config.database.tag = Some("linux".to_string());
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
        assert!(matches!(
            Config::load(dir.join("missing.json")),
            Err(ConfigError::NotFound(_))
        ));
        assert_eq!(Config::load_or_default(dir.join("missing.json")), Config::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"layout": {"pointer_size": 4}}"#).unwrap();
        assert_eq!(config.layout.pointer_size, 4);
        assert_eq!(config.formats.default, "C");
    }
}
