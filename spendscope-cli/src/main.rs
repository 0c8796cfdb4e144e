use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use spendscope_core::parse_amount;
use spendscope_finance::{ReportFormat, SavingsPlan};
use std::path::PathBuf;

mod analyze_cmd;
mod config;
mod logging;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPENDSCOPE_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "spendscope", version = VERSION, about = "Monthly spending breakdown from bank statement exports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Categorize a statement export and write the monthly JSON report
    Analyze {
        /// Semicolon-separated statement export
        #[arg(long)]
        csv: PathBuf,

        /// Report path (default from config: analyzeResults/report.json)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Rules TOML file (default: config, then built-in rules)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// flat | summary
        #[arg(long)]
        format: Option<ReportFormat>,

        /// Also print the report to stdout
        #[arg(long)]
        stdout: bool,
    },

    /// Shop-name rules
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },

    /// Config file at ~/.spendscope/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Total contributed by a fixed monthly savings plan
    Project {
        /// Monthly contribution in euros
        #[arg(long, default_value = "400")]
        monthly: String,

        /// Horizon in years
        #[arg(long, default_value_t = 10)]
        years: u32,
    },
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Write the built-in rules as TOML
    Init {
        /// Destination (default: ~/.spendscope/rules.toml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the rules `analyze` would use
    Show {
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            csv,
            out,
            rules,
            format,
            stdout,
        } => {
            if !csv.exists() {
                bail!("CSV not found: {} (pass --csv <path>)", csv.display());
            }
            let cfg = config::load_config()?;
            let opts = analyze_cmd::AnalyzeOptions {
                csv,
                out,
                rules,
                format,
                stdout,
            };
            analyze_cmd::run(opts, &cfg).await?;
        }

        Command::Rules { command } => match command {
            RulesCommand::Init { path, force } => {
                let path = match path {
                    Some(p) => p,
                    None => state::default_rules_path()?,
                };
                if path.exists() && !force {
                    bail!("{} already exists (pass --force to overwrite)", path.display());
                }
                let text = spendscope_finance::RuleSet::default().to_toml_string()?;
                std::fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            RulesCommand::Show { rules } => {
                let cfg = config::load_config()?;
                let path = rules.or(cfg.rules.file);
                let rule_set = config::load_rules(path.as_deref())?;
                match &path {
                    Some(p) => println!("# rules from {}\n", p.display()),
                    None => println!("# built-in rules\n"),
                }
                print!("{}", rule_set.to_toml_string()?);
            }
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },

        Command::Project { monthly, years } => {
            let monthly = parse_amount(&monthly).context("--monthly")?;
            let plan = SavingsPlan::new(monthly, years);
            let total = plan
                .total()
                .context("contribution total does not fit in 64-bit cents")?;

            println!("Investment horizon: {} years ({} months)", plan.years, plan.months());
            println!("Monthly investment: {} euros", plan.monthly);
            println!("Result: {} euros", total);
        }
    }

    Ok(())
}
