use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use sensory_optima::input::{Environment, demo_env, load_env};
use sensory_optima::logging::init_tracing;
use sensory_optima::model::Weights;
use sensory_optima::pipeline::compute_optima;
use sensory_optima::report::{OutputFormat, render, write_reports};

#[derive(Parser, Debug)]
#[command(name = "sensory-optima")]
#[command(version, about = "Rank sensory modes and align the best score to the H7 target")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the modes in a JSON environment file.
    Run {
        /// JSON document with `modes` and optional `weights`.
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Score the built-in four-mode demo environment.
    Demo {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Directory for summary.json, report.txt and ranking.tsv. Prints to stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,
    #[arg(long)]
    w_snr: Option<f64>,
    #[arg(long)]
    w_coverage: Option<f64>,
    #[arg(long)]
    w_cost: Option<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    env: Environment,
    weights: Weights,
    out_dir: Option<PathBuf>,
    format: OutputFormat,
}

fn main() {
    init_tracing("info");
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(cli)?;
    if config.env.modes.is_empty() {
        warn!("no modes provided; result is empty");
    }

    let result = compute_optima(&config.env.modes, Some(&config.weights));
    info!(
        mode_star = result.mode_star.as_deref().unwrap_or("None"),
        n_modes = result.ranking.len(),
        "optima computed"
    );

    match &config.out_dir {
        Some(dir) => write_reports(&result, dir).map_err(|e| e.to_string())?,
        None => print!("{}", render(&result, config.format).map_err(|e| e.to_string())?),
    }
    Ok(())
}

fn resolve_config(cli: Cli) -> Result<RunConfig, String> {
    let (env, common) = match cli.command {
        Command::Run { input, common } => (load_env(&input).map_err(|e| e.to_string())?, common),
        Command::Demo { common } => (demo_env(), common),
    };
    // CLI weights override the file's per key.
    let weights = env.weights.unwrap_or_default().with_overrides(
        common.w_snr,
        common.w_coverage,
        common.w_cost,
    );
    Ok(RunConfig {
        env,
        weights,
        out_dir: common.out,
        format: match common.format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        },
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
