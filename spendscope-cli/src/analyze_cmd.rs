//! `spendscope analyze`: statement file in, JSON report out.

use anyhow::{Context, Result};
use spendscope_finance::{Analyzer, ReportDocument, ReportFormat};
use spendscope_ingest::parse_statement_str;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::{self, Config};

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub csv: PathBuf,
    pub out: Option<PathBuf>,
    pub rules: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub stdout: bool,
}

pub async fn run(opts: AnalyzeOptions, cfg: &Config) -> Result<ReportDocument> {
    let rules_path = opts.rules.clone().or_else(|| cfg.rules.file.clone());
    let rules = config::load_rules(rules_path.as_deref())?;

    let text = tokio::fs::read_to_string(&opts.csv)
        .await
        .with_context(|| format!("reading {}", opts.csv.display()))?;
    let records =
        parse_statement_str(&text).with_context(|| format!("parsing {}", opts.csv.display()))?;

    let analyzer = Analyzer::new(&rules).with_expected_currency(cfg.report.currency.as_str());
    let doc = analyzer
        .analyze(&records)
        .with_context(|| format!("analyzing {}", opts.csv.display()))?;

    let format = opts.format.unwrap_or(cfg.report.format);
    let json = doc.to_json(format).context("serialize report")?;
    if opts.stdout {
        println!("{json}");
    }

    let out = opts.out.unwrap_or_else(|| cfg.report.output.clone());
    if let Err(e) = write_report(&out, &json).await {
        error!(path = %out.display(), "could not write report: {e:#}");
        return Err(e);
    }

    info!(
        path = %out.display(),
        months = doc.monthly_expenses.len(),
        average = %doc.average_month_expenses,
        "report written"
    );
    Ok(doc)
}

async fn write_report(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("create {}", parent.display()))?;
    }
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("write {}", path.display()))
}
