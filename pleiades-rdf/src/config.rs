//! Export configuration.
//!
//! Loads `ExportConfig` from TOML (or JSON when the extension is `.json`).
//! Every field has a default, so a file only needs the values it changes.
//!
//! ```toml
//! places_base = "http://pleiades.stoa.org/places/"
//! virtual_host_root = "/plone"
//!
//! [attribution]
//! collapse_into = "contributors"
//!
//! [attribution.username_aliases]
//! "T. Elliott" = "thomase"
//!
//! [[attribution.credit_aliases]]
//! account = "sgillies"
//! aliases = ["S. Gillies"]
//! ```

use pleiades_geo::grid::DEFAULT_GRID_BASE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_PLACES_BASE: &str = "http://pleiades.stoa.org/places/";
pub const DEFAULT_TIME_PERIODS_BASE: &str = "http://pleiades.stoa.org/vocabularies/time-periods/";

/// Top-level export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Base URL of published places, used for connection targets.
    pub places_base: String,
    /// Base URL of atlas grid references.
    pub grid_base: String,
    /// Base URL of time-period terms.
    pub time_periods_base: String,
    /// Virtual-host root removed from every absolute URL.
    pub virtual_host_root: Option<String>,
    pub attribution: AttributionConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            places_base: DEFAULT_PLACES_BASE.to_string(),
            grid_base: DEFAULT_GRID_BASE.to_string(),
            time_periods_base: DEFAULT_TIME_PERIODS_BASE.to_string(),
            virtual_host_root: None,
            attribution: AttributionConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Apply virtual-host rewriting to an absolute URL.
    pub fn rewrite_url(&self, url: &str) -> String {
        match self.virtual_host_root.as_deref() {
            Some(root) if !root.is_empty() => url.replace(root, ""),
            _ => url.to_string(),
        }
    }
}

/// Creator/contributor handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    /// Display names mapped to account ids before directory lookup.
    pub username_aliases: BTreeMap<String, String>,
    /// Accounts whose double credit is collapsed.
    pub credit_aliases: Vec<CreditAlias>,
    /// Which list loses the duplicate credit.
    pub collapse_into: CollapseInto,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            username_aliases: BTreeMap::from([
                ("T. Elliott".to_string(), "thomase".to_string()),
                ("S. Gillies".to_string(), "sgillies".to_string()),
            ]),
            credit_aliases: vec![CreditAlias {
                account: "sgillies".to_string(),
                aliases: vec!["S. Gillies".to_string()],
            }],
            collapse_into: CollapseInto::default(),
        }
    }
}

impl AttributionConfig {
    /// Account id to look up for a creator/contributor entry.
    pub fn account_for<'a>(&'a self, username: &'a str) -> &'a str {
        self.username_aliases
            .get(username)
            .map(String::as_str)
            .unwrap_or(username)
    }
}

/// An account and the other spellings that denote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAlias {
    pub account: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CreditAlias {
    /// True if `entry` is the account or one of its aliases.
    pub fn denotes(&self, entry: &str) -> bool {
        entry == self.account || self.aliases.iter().any(|a| a == entry)
    }
}

/// Where a double credit is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapseInto {
    /// Keep the creator credit; drop the account and its aliases from contributors.
    #[default]
    Contributors,
    /// Keep the contributor credit; drop the account from creators.
    Creators,
}

/// Errors from config file loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {detail}")]
    Parse { path: PathBuf, detail: String },
}

/// Load a config file from the given path. Detects format by extension:
/// `.json` → JSON, everything else → TOML.
pub fn load_config(path: &Path) -> Result<ExportConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        debug!(path = %path.display(), "empty export config, using defaults");
        return Ok(ExportConfig::default());
    }

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    } else {
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.grid_base, "http://atlantides.org/capgrids/");
        assert_eq!(config.attribution.account_for("T. Elliott"), "thomase");
        assert_eq!(config.attribution.account_for("jbecker"), "jbecker");
        assert_eq!(config.attribution.collapse_into, CollapseInto::Contributors);
    }

    #[test]
    fn test_rewrite_url() {
        let mut config = ExportConfig::default();
        let url = "http://pleiades.stoa.org/plone/places/1";
        assert_eq!(config.rewrite_url(url), url);

        config.virtual_host_root = Some("/plone".into());
        assert_eq!(config.rewrite_url(url), "http://pleiades.stoa.org/places/1");
    }

    #[test]
    fn test_load_toml_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
virtual_host_root = "/plone"

[attribution]
collapse_into = "creators"

[[attribution.credit_aliases]]
account = "jbecker"
aliases = ["J. Becker", "Jeff Becker"]
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.virtual_host_root.as_deref(), Some("/plone"));
        assert_eq!(config.places_base, DEFAULT_PLACES_BASE);
        assert_eq!(config.attribution.collapse_into, CollapseInto::Creators);
        assert_eq!(config.attribution.credit_aliases.len(), 1);
        assert!(config.attribution.credit_aliases[0].denotes("Jeff Becker"));
        // username_aliases keeps its default when not set
        assert_eq!(config.attribution.account_for("S. Gillies"), "sgillies");
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"grid_base": "http://example.org/grids/"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.grid_base, "http://example.org/grids/");
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(load_config(file.path()).unwrap(), ExportConfig::default());
    }

    #[test]
    fn test_parse_error_names_path() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "places_base = [").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
