//! Layered configuration.
//!
//! Defaults, then the global `<config_dir>/il/config.toml`, then the
//! project `<root>/config.toml` (or only an explicit `--config` / `IL_CONFIG`
//! file), then `IL_*` environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IlError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub bot: BotConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, il_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("IL_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(il_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Render as TOML, used by `il init` to seed a config file.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| IlError::Serialization(err.to_string()))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("il/config.toml")),
            None => Ok(None),
        }
    }

    fn load_project(il_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = il_root.join("config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| IlError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| IlError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
        if let Some(patch) = patch.bot {
            self.bot.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_usize("IL_SEARCH_MAX_RESULTS")? {
            self.search.max_results = value;
        }
        if let Some(value) = env_usize("IL_SEARCH_MIN_QUERY_CHARS")? {
            self.search.min_query_chars = value;
        }

        if let Some(value) = env_usize("IL_DISPLAY_PAGE_SIZE")? {
            self.display.page_size = value;
        }
        if let Some(value) = env_usize("IL_DISPLAY_TITLE_MAX_CHARS")? {
            self.display.title_max_chars = value;
        }
        if let Some(value) = env_usize("IL_DISPLAY_NOTABLE_LIMIT")? {
            self.display.notable_limit = value;
        }

        if let Some(value) = env_string("IL_BOT_PREFIX") {
            self.bot.prefix = value;
        }

        Ok(())
    }

    /// Reject values that would make searches or pagination meaningless.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("search.max_results", self.search.max_results),
            ("display.page_size", self.display.page_size),
            ("display.title_max_chars", self.display.title_max_chars),
            ("display.notable_limit", self.display.notable_limit),
        ];
        for (key, value) in sizes {
            if value == 0 {
                return Err(IlError::Config(format!("{key} must be greater than zero")));
            }
        }
        if self.bot.prefix.trim().is_empty() {
            return Err(IlError::MissingConfig("bot.prefix".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Row cap applied to every search mode
    #[serde(default)]
    pub max_results: usize,
    /// Shortest trimmed query accepted
    #[serde(default)]
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 30,
            min_query_chars: 2,
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
        if let Some(value) = patch.min_query_chars {
            self.min_query_chars = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub title_max_chars: usize,
    /// Rows shown by the notable listing before it truncates
    #[serde(default)]
    pub notable_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            title_max_chars: 256,
            notable_limit: 20,
        }
    }
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.page_size {
            self.page_size = value;
        }
        if let Some(value) = patch.title_max_chars {
            self.title_max_chars = value;
        }
        if let Some(value) = patch.notable_limit {
            self.notable_limit = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Command prefix recognised by `il chat`
    #[serde(default)]
    pub prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "S".to_string(),
        }
    }
}

impl BotConfig {
    fn merge(&mut self, patch: BotPatch) {
        if let Some(value) = patch.prefix {
            self.prefix = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub search: Option<SearchPatch>,
    pub display: Option<DisplayPatch>,
    pub bot: Option<BotPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub max_results: Option<usize>,
    pub min_query_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub page_size: Option<usize>,
    pub title_max_chars: Option<usize>,
    pub notable_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BotPatch {
    pub prefix: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|err| IlError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
