// File: src/config.rs
// Purpose: Configuration parsing from fsroute.toml

use anyhow::{Context, Result};
use fsroute_router::{normalize_prefix, CompileOptions, Compiler, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the config file looked up in the project root
pub const CONFIG_FILE: &str = "fsroute.toml";

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing routes/, middleware/ and plugins/ (default: "servers")
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// URL prefix the routes are mounted under (default: "/api")
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Validate every route in strict mode
    #[serde(default)]
    pub strict: bool,

    /// Extra parameter types: name → regex
    #[serde(default)]
    pub types: BTreeMap<String, String>,
}

// Default values
fn default_src_dir() -> String {
    "servers".to_string()
}

fn default_prefix() -> String {
    "/api".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            prefix: default_prefix(),
            strict: false,
            types: BTreeMap::new(),
        }
    }
}

/// Parse configuration from a TOML string
impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut config: Config = toml::from_str(content)?;
        config.prefix = normalize_prefix(&config.prefix);
        Ok(config)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        content
            .parse::<Self>()
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from `<root>/fsroute.toml`
    pub fn load_from_root(root: impl AsRef<Path>) -> Result<Self> {
        Self::load(root.as_ref().join(CONFIG_FILE))
    }

    /// Applies command-line overrides
    pub fn with_overrides(
        mut self,
        src_dir: Option<String>,
        prefix: Option<String>,
        strict: bool,
    ) -> Self {
        if let Some(src_dir) = src_dir {
            self.src_dir = src_dir;
        }
        if let Some(prefix) = prefix {
            self.prefix = normalize_prefix(&prefix);
        }
        self.strict |= strict;
        self
    }

    /// Directory holding routes/, middleware/ and plugins/
    pub fn src_path(&self, root: &Path) -> PathBuf {
        root.join(&self.src_dir)
    }

    /// Built-in types plus the `[types]` table
    pub fn registry(&self) -> TypeRegistry {
        TypeRegistry::builtin().extend(self.types.clone())
    }

    /// Compiler configured from this file
    pub fn compiler(&self) -> Compiler {
        Compiler::new(self.registry()).with_options(CompileOptions {
            strict: self.strict,
        })
    }
}
