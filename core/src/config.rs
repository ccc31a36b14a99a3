//! Engine configuration.
//!
//! Language data (suffix tables, weights, rule chains) lives with each
//! language crate. This config only holds language-agnostic knobs.

use serde::{Deserialize, Serialize};

use crate::error::{NameCaseError, Result};
use crate::language::NamePart;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Template used by `Engine::formatted_default`.
    pub default_format: String,

    /// Template marker selecting given names.
    pub given_marker: char,
    /// Template marker selecting family names.
    pub family_marker: char,
    /// Template marker selecting patronymics.
    pub patronymic_marker: char,

    /// Character joining the components of a compound token
    /// ("Римский-Корсаков").
    pub compound_separator: char,

    /// Re-classify the non-final components of a compound family name and
    /// keep the ones that do not look like family names unchanged.
    pub recheck_compound_heads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: "S N F".to_string(),
            given_marker: 'N',
            family_marker: 'S',
            patronymic_marker: 'F',
            compound_separator: '-',
            recheck_compound_heads: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| NameCaseError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .map_err(|e| NameCaseError::Config(format!("write {}: {e}", path.display())))
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NameCaseError::Config(e.to_string()))
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| NameCaseError::Config(e.to_string()))
    }

    /// Which part a template char selects, if it is a marker.
    pub fn marker_part(&self, ch: char) -> Option<NamePart> {
        if ch == self.given_marker {
            Some(NamePart::Given)
        } else if ch == self.family_marker {
            Some(NamePart::Family)
        } else if ch == self.patronymic_marker {
            Some(NamePart::Patronymic)
        } else {
            None
        }
    }
}
