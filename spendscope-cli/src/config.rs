use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spendscope_finance::{ReportFormat, RuleSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub rules: RulesSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub output: PathBuf,
    pub format: ReportFormat,
    /// Currency the statement is expected to be in
    pub currency: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from("analyzeResults/report.json"),
            format: ReportFormat::Summary,
            currency: "EUR".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesSection {
    /// Rules file; built-in rules when unset
    pub file: Option<PathBuf>,
}

pub fn load_config() -> Result<Config> {
    load_config_from(&state::config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = state::config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

/// Rules from `path`, or the built-in set.
pub fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    let Some(p) = path else {
        return Ok(RuleSet::default());
    };
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    RuleSet::from_toml_str(&s).with_context(|| format!("rules file {}", p.display()))
}
