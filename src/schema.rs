//! Schema version descriptor and the properties file it is read from.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::properties::{DB_PATCH, DB_VERSION};
use crate::error::{DbError, Result};

/// A database schema identified by `(version, patch)`, e.g. `OMERO4.4` / `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaVersion {
    pub version: String,
    pub patch: String,
}

impl SchemaVersion {
    #[must_use]
    pub fn new(version: impl Into<String>, patch: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            patch: patch.into(),
        }
    }

    /// Reads the supported schema from `omero.db.version` / `omero.db.patch`.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        Ok(Self::new(props.require(DB_VERSION)?, props.require(DB_PATCH)?))
    }

    /// Directory holding this schema's SQL under `sql_dir`.
    #[must_use]
    pub fn sql_directory(&self, sql_dir: &Path, dialect: &str) -> PathBuf {
        sql_dir.join(dialect).join(self.to_string())
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}", self.version, self.patch)
    }
}

/// Key/value pairs from a Java-style `.properties` file.
///
/// The key ends at the first `=`, `:` or whitespace, so `key=value`,
/// `key: value` and `key value` are all accepted. `#` and `!` start comments.
/// Line continuations and escapes are not interpreted.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let values = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .map(|line| {
                let end = line
                    .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
                    .unwrap_or(line.len());
                let (key, rest) = line.split_at(end);
                let rest = rest.trim_start();
                let value = rest.strip_prefix(['=', ':']).unwrap_or(rest).trim();
                (key.to_string(), value.to_string())
            })
            .collect();

        Self { values }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DbError::io(path, e))?;
        info!("Loaded properties from: {}", path.display());
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DbError::MissingProperty(key.to_string()))
    }
}
