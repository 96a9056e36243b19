//! The label → source-file registry the report walks.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::InspectError;

/// Variable holding the freshly fetched cache array.
pub const DEFAULT_NEW_VAR: &str = "cache.noticias";
/// Variable holding the persistent fallback array.
pub const DEFAULT_OLD_VAR: &str = "cacheFijo";
/// Numeric field carrying the refresh time in epoch milliseconds.
pub const DEFAULT_TIMESTAMP_FIELD: &str = "timestamp";

/// One section source to inspect.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    pub label: String,
    pub path: PathBuf,
    #[serde(default = "default_new_var")]
    pub new_var: String,
    #[serde(default = "default_old_var")]
    pub old_var: String,
    #[serde(default = "default_timestamp_field")]
    pub timestamp_field: String,
}

fn default_new_var() -> String {
    DEFAULT_NEW_VAR.to_string()
}

fn default_old_var() -> String {
    DEFAULT_OLD_VAR.to_string()
}

fn default_timestamp_field() -> String {
    DEFAULT_TIMESTAMP_FIELD.to_string()
}

impl Target {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Target {
            label: label.into(),
            path: path.into(),
            new_var: default_new_var(),
            old_var: default_old_var(),
            timestamp_field: default_timestamp_field(),
        }
    }
}

/// The built-in mapping: one route source per content section.
pub fn default_targets() -> Vec<Target> {
    ["noticias", "musica", "farandula"]
        .into_iter()
        .map(|seccion| Target::new(seccion, format!("src/app/api/{seccion}/route.ts")))
        .collect()
}

#[derive(Debug, Deserialize)]
struct TargetsFile {
    targets: Vec<Target>,
}

/// Load a target list from a YAML file. Unlike cache absence, a broken
/// targets file is operator input and fails loudly.
pub fn load_targets(path: &Path) -> Result<Vec<Target>, InspectError> {
    let content = std::fs::read_to_string(path).map_err(|e| InspectError::io(path, e))?;
    let file: TargetsFile =
        serde_yaml::from_str(&content).map_err(|e| InspectError::config(path, e))?;
    Ok(file.targets)
}
