use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub lectures: Vec<Lecture>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Directory that lecture `file` paths are resolved against.
    pub content_dir: PathBuf,
    /// Lecture shown first. Falls back to the lowest id.
    pub start: Option<u32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Lecture Notes".to_string(),
            content_dir: PathBuf::from("."),
            start: None,
        }
    }
}

/// One catalog entry. `file` and `pdf` are opaque paths, never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lecture {
    pub id: u32,
    pub title: String,
    pub file: String,
    pub pdf: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Config {
    /// Parse config from TOML text, validate it and sort the catalog by id.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        config.lectures.sort_by_key(|lecture| lecture.id);
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content)
    }

    /// Load config from a TOML file, or return the bundled catalog if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::compiled_default()),
            Err(e) => Err(ConfigError::Io(path.to_path_buf(), e)),
        }
    }

    /// The bundled catalog from `default_config.toml`.
    pub fn compiled_default() -> Self {
        // build.rs checks the file parses and every entry is complete
        Self::from_toml(DEFAULT_CONFIG).expect("bundled default_config.toml is valid")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for lecture in &self.lectures {
            if !seen.insert(lecture.id) {
                return Err(ConfigError::Validation(format!(
                    "lecture id {} appears more than once",
                    lecture.id
                )));
            }
        }
        if let Some(start) = self.site.start {
            if !seen.contains(&start) {
                return Err(ConfigError::Validation(format!(
                    "site.start = {start} is not a lecture in the catalog"
                )));
            }
        }
        Ok(())
    }

    pub fn lecture(&self, id: u32) -> Option<&Lecture> {
        self.lectures.iter().find(|lecture| lecture.id == id)
    }

    /// Lecture ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.lectures.iter().map(|lecture| lecture.id)
    }

    pub fn start_id(&self) -> Option<u32> {
        self.site.start.or_else(|| self.ids().next())
    }

    /// The lecture before or after `id` in catalog order, if any.
    pub fn neighbor(&self, id: u32, direction: Direction) -> Option<u32> {
        let index = self.lectures.iter().position(|lecture| lecture.id == id)?;
        let target = match direction {
            Direction::Previous => index.checked_sub(1)?,
            Direction::Next => index + 1,
        };
        self.lectures.get(target).map(|lecture| lecture.id)
    }
}
