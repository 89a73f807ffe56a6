// Resolves where posts live and where the index is written.
use crate::error::BlogdexError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional per-blog config file, looked up in the root.
pub const CONFIG_FILE_NAME: &str = "blogdex.toml";

/// Index location relative to the root when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "build/blog-index.json";

/// Extension of source documents (without the dot).
pub const DEFAULT_EXTENSION: &str = "md";

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// On-disk shape of `blogdex.toml`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default = "default_output")]
    output: PathBuf,
    #[serde(default = "default_extension")]
    extension: String,
}

/// Explicit settings threaded into every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that is scanned and that source paths are relative to
    pub root: PathBuf,
    /// Index path; relative paths are resolved against `root`
    pub output: PathBuf,
    /// Document extension without the leading dot
    pub extension: String,
}

impl Config {
    /// Defaults for the given root, ignoring any config file.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: default_output(),
            extension: default_extension(),
        }
    }

    /// Load settings for `root`, reading `config_path` or `<root>/blogdex.toml`.
    ///
    /// A missing `<root>/blogdex.toml` yields defaults. An explicitly given
    /// path must exist.
    pub fn load(root: impl Into<PathBuf>, config_path: Option<&Path>) -> Result<Self, BlogdexError> {
        let root = root.into();
        let path = match config_path {
            Some(explicit) if !explicit.exists() => {
                return Err(BlogdexError::Config {
                    path: explicit.to_path_buf(),
                    message: "config file not found".to_string(),
                });
            }
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let implicit = root.join(CONFIG_FILE_NAME);
                if !implicit.exists() {
                    return Ok(Self::new(root));
                }
                implicit
            }
        };

        let contents = fs::read_to_string(&path).map_err(|e| BlogdexError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| BlogdexError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            root,
            output: file.output,
            extension: file.extension.trim_start_matches('.').to_string(),
        })
    }

    /// Override the index location.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Absolute (or root-joined) path of the index file.
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }
}
