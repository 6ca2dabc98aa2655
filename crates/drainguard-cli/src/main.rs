//! CLI entry point for drainguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `drainguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use drainguard_app::{
    CheckInput, EXIT_RUNTIME_ERROR, ExplainOutput, OutputFormat, render_report, run_check,
    run_explain, verdict_exit_code, write_text,
};
use drainguard_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "drainguard",
    version,
    about = "Container graceful shutdown compliance validator"
)]
struct Cli {
    /// Path to drainguard config TOML (a missing file means defaults).
    #[arg(long, global = true, default_value = "drainguard.toml")]
    config: Utf8PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check build files and workload manifests for graceful-shutdown problems.
    Check {
        /// Output format (text|junit|sarif|json).
        #[arg(long, default_value = "text")]
        format: String,

        /// Where to write the report file (junit, sarif and json formats only).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Disable a rule by id (repeatable).
        #[arg(long, value_name = "RULE")]
        disable: Vec<String>,

        /// Files or directories to check.
        paths: Vec<Utf8PathBuf>,
    },

    /// Explain a rule id with remediation guidance.
    Explain {
        /// The rule id to explain (e.g. "DG001").
        rule: String,
    },
}

impl Cli {
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let code = match &cli.cmd {
        Commands::Check {
            format,
            report_out,
            disable,
            paths,
        } => cmd_check(&cli.config, format, report_out.as_deref(), disable, paths),
        Commands::Explain { rule } => Ok(cmd_explain(rule)),
    };

    match code {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("drainguard error: {err:#}");
            std::process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}

fn cmd_check(
    config: &Utf8Path,
    format: &str,
    report_out: Option<&Utf8Path>,
    disable: &[String],
    paths: &[Utf8PathBuf],
) -> anyhow::Result<i32> {
    if paths.is_empty() {
        print_usage_banner();
        return Ok(0);
    }

    let format = OutputFormat::parse(format)?;
    let cfg_text = read_config(config)?;

    let output = run_check(CheckInput {
        paths,
        config_text: &cfg_text,
        overrides: Overrides {
            disable: disable.to_vec(),
        },
    })?;

    let rendered = render_report(&output.report, format)?;
    println!("{}", rendered.trim_end_matches('\n'));

    let report_path = report_out.or(format.default_report_path().map(Utf8Path::new));
    if let (OutputFormat::Junit | OutputFormat::Sarif | OutputFormat::Json, Some(path)) =
        (format, report_path)
    {
        write_text(path, &rendered).context("write report")?;
        log::info!("report written to {}", path);
    }

    Ok(verdict_exit_code(output.report.verdict))
}

/// Missing config is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path);
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn print_usage_banner() {
    println!(
        "DrainGuard v{}: Container graceful shutdown compliance validator",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: drainguard check [--format text|junit|sarif|json] [PATHS]...");
    println!();
    println!("  Dockerfiles are checked for shell-form ENTRYPOINT/CMD.");
    println!("  YAML manifests are checked for terminationGracePeriodSeconds,");
    println!("  preStop hooks and readiness probes.");
}

fn cmd_explain(rule: &str) -> i32 {
    match run_explain(rule) {
        ExplainOutput::Found { rule, explanation } => {
            print!("{}", drainguard_app::format_explanation(rule, &explanation));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_rules,
        } => {
            eprint!(
                "{}",
                drainguard_app::format_not_found(&identifier, available_rules)
            );
            1
        }
    }
}
