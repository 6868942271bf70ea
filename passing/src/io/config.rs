//! Demonstration configuration stored in `passing.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::{Mechanism, Pair};

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "passing.toml";

/// Demonstration configuration (TOML).
///
/// Missing fields default to the classroom values `a = 5`, `b = 2` and all
/// three mechanisms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    pub a: i32,
    pub b: i32,

    /// Mechanisms run by `passing all`, in order.
    pub mechanisms: Vec<Mechanism>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let pair = Pair::default();
        Self {
            a: pair.a,
            b: pair.b,
            mechanisms: Mechanism::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn initial(&self) -> Pair {
        Pair::new(self.a, self.b)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mechanisms.is_empty() {
            return Err(anyhow!("mechanisms must be a non-empty array"));
        }
        let mut seen = HashSet::new();
        for mechanism in &self.mechanisms {
            if !seen.insert(mechanism) {
                return Err(anyhow!("mechanisms lists {} more than once", mechanism));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DemoConfig::default()`.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        return Ok(DemoConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DemoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DemoConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
