use crate::configuration::ListingConfiguration;
use crate::error::ConfigError;
use anyhow::Context;
use serde_json::Value;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming a TOML or JSON settings file.
pub const CONFIG_PATH_ENV: &str = "VITRINE_LISTING_CONFIG_PATH";
/// Environment variable holding inline JSON settings.
pub const CONFIG_JSON_ENV: &str = "VITRINE_LISTING_CONFIG_JSON";

const DEFAULT_FILES: &[&str] = &[
    "listing.toml",
    "listing.json",
    "config/listing.toml",
    "config/listing.json",
];

/// Source that produced the listing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ListingConfiguration {
    /// Load listing settings using environment variables.
    /// Evaluation order:
    /// 1) `$VITRINE_LISTING_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$VITRINE_LISTING_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found under the working directory,
    /// 4) an empty configuration, which leaves every modifier inactive.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let cwd = env::current_dir()
            .context("failed to resolve working directory")?;
        Self::load_from_sources(
            env::var(CONFIG_PATH_ENV).ok(),
            env::var(CONFIG_JSON_ENV).ok(),
            &cwd,
        )
    }

    /// Same as [`ListingConfiguration::load_from_env`] with the inputs passed
    /// in explicitly. Default files are looked up relative to `root`.
    pub fn load_from_sources(
        path_var: Option<String>,
        json_var: Option<String>,
        root: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)> {
        let (config, source) = if let Some(path_str) = path_var
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            (Self::load_from_file(&path)?, ConfigSource::EnvPath(path))
        } else if let Some(raw) = json_var
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            (parsed, ConfigSource::EnvInline)
        } else if let Some(path) = Self::find_default_file(root) {
            (Self::load_from_file(&path)?, ConfigSource::File(path))
        } else {
            (Self::default(), ConfigSource::Default)
        };

        tracing::info!(
            target: "listing::config",
            source = ?source,
            keys = config.len(),
            "loaded listing configuration"
        );
        Ok((config, source))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| {
                format!(
                    "failed to read listing config from {}",
                    path.display()
                )
            })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid listing config {}", path.display())
            }),
            Some("toml") | Some("tml") => Self::parse_toml(&contents)
                .with_context(|| {
                    format!("invalid listing config {}", path.display())
                }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        Self::parse_toml(contents).or_else(|toml_err| {
            Self::parse_json(contents).map_err(|json_err| {
                anyhow::anyhow!(
                    "failed to parse listing config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn parse_toml(raw: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(raw)?;
        let value = serde_json::to_value(table)?;
        Self::from_value(value)
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}
