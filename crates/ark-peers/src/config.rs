//! Options a compilation context is created with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for [`Context::create`](crate::Context::create).
///
/// Deserialized from camelCase JSON:
///
/// ```json
/// { "fileName": "main.ets", "source": "...", "arktsconfig": "arktsconfig.json" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextOptions {
    pub file_name: String,
    pub source: String,
    pub arktsconfig: Option<PathBuf>,
    pub extra_args: Vec<String>,
    /// Keep going when an advance leaves the engine in its error state.
    pub force: bool,
}

impl ContextOptions {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> ContextOptions {
        ContextOptions {
            file_name: file_name.into(),
            source: source.into(),
            ..ContextOptions::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<ContextOptions> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<ContextOptions> {
        let text = std::fs::read_to_string(path)?;
        ContextOptions::from_json_str(&text)
    }

    /// Argument vector handed to the engine's config constructor.
    pub fn engine_args(&self) -> Vec<String> {
        let mut args = vec!["_".to_string()];
        if let Some(config) = &self.arktsconfig {
            args.push("--arktsconfig".to_string());
            args.push(config.display().to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args.push(self.file_name.clone());
        args
    }
}
