use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    // Seed for the automatic side. Random if missing.
    pub rng_seed: Option<u64>,
    pub colored: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self { ConsoleConfig { rng_seed: None, colored: true } }
}

impl ConsoleConfig {
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(contents).context("Failed to parse console config")
    }

    pub fn read_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml(&contents)
    }
}
