//! Configuration management for DocuApp.
//!
//! Parses `docuapp.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7878
//!
//! [site]
//! title = "DocuApp"
//! tagline = "Documentation Hub"
//! theme = "light"
//! ```
//!
//! A missing config file yields defaults; a malformed one is a
//! [`ConfigError`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docuapp.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override default theme.
    pub theme: Option<Theme>,
}

/// Error returned when configuration loading fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly given config path does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the config file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parse error.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site presentation configuration.
    pub site: SiteConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the sidebar header.
    pub title: String,
    /// Tagline shown under the site title.
    pub tagline: String,
    /// Default theme.
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "DocuApp".to_owned(),
            tagline: "Documentation Hub".to_owned(),
            theme: Theme::Light,
        }
    }
}

/// Theme name exchanged with the frontend.
///
/// Only the name crosses this boundary; the actual styling lives with the
/// frontend. Unknown names fall back to [`Theme::System`] so a stale stored
/// preference can never break startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl FromStr for Theme {
    type Err = std::convert::Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        })
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        name.parse().unwrap_or(Self::System)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path`, that file must exist. Otherwise
    /// `docuapp.toml` is searched for in the current directory and its
    /// parents; no file means defaults. CLI settings are applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicit path is missing, or a config
    /// file cannot be read or parsed.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => match discover(&std::env::current_dir().unwrap_or_default()) {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        Ok(config)
    }

    /// Parse a config file.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply CLI overrides.
    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(theme) = cli.theme {
            self.site.theme = theme;
        }
    }
}

/// Search for `docuapp.toml` in `start` and its parents.
fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.site.title, "DocuApp");
        assert_eq!(config.site.theme, Theme::Light);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docuapp.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[site]\ntitle = \"My Docs\"\ntheme = \"dark\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 9000);
        // Unset fields keep their defaults.
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config.site.theme, Theme::Dark);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = Config::load(Some(&dir.path().join("nope.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docuapp.toml");
        std::fs::write(&path, "[server\nport = !").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_cli_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docuapp.toml");
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();

        let cli = CliSettings {
            port: Some(8080),
            theme: Some(Theme::Dark),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&cli)).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.theme, Theme::Dark);
    }

    #[test]
    fn test_discover_walks_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[server]\nport = 1\n").unwrap();

        let found = discover(&nested).unwrap();

        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_theme_round_trip_and_fallback() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("sepia".parse::<Theme>().unwrap(), Theme::System);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
