mod aggregate;
mod config;
mod error;
mod input;
mod logging;
mod model;
mod report;

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::aggregate::Aggregator;
use crate::aggregate::profiles::edit_datasets;
use crate::config::{Settings, ZeroScorePolicy};
use crate::error::RunError;
use crate::input::LocalFs;
use crate::model::{Dataset, MetricsTable, Model, TaskKind};
use crate::report::{write_summary, write_table_reports};

#[derive(Debug, Parser)]
#[command(
    name = "remedi-layerscan",
    version,
    about = "Aggregate per-layer model-editing metrics into layer score tables"
)]
struct Cli {
    /// TOML settings file; flags below override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding `<prefix>_<dataset>_<model>` results folders.
    #[arg(long, global = true)]
    results_root: Option<PathBuf>,

    /// Where tables and the summary are written.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Harmonic-mean behavior when a sub-score is zero.
    #[arg(long, global = true, value_enum)]
    zero_scores: Option<ZeroScorePolicy>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Generation quality per layer.
    Gen {
        #[arg(long, value_enum, default_value_t = Model::GptJ)]
        model: Model,
        #[arg(long, value_enum, default_value_t = Dataset::Counterfact)]
        dataset: Dataset,
    },
    /// Attribute classification F1/MCC per layer.
    Class {
        #[arg(long, value_enum, default_value_t = Model::GptJ)]
        model: Model,
        #[arg(long, value_enum, default_value_t = Dataset::Counterfact)]
        dataset: Dataset,
    },
    /// Entailment correlations per layer on McRae.
    Ent {
        #[arg(long, value_enum, default_value_t = Model::GptJ)]
        model: Model,
    },
    /// Every task/dataset combination with results present.
    All {
        #[arg(long, value_enum, default_value_t = Model::GptJ)]
        model: Model,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let settings = resolve_settings(cli)?;
    let source = LocalFs;
    let aggregator = Aggregator::from_settings(&source, &settings);

    let (model, jobs) = plan_jobs(&cli.command);
    let skip_missing = matches!(cli.command, Command::All { .. });

    let mut tables: Vec<MetricsTable> = Vec::with_capacity(jobs.len());
    for (task, dataset) in jobs {
        let table = match aggregator.aggregate(task, model, dataset) {
            Ok(table) => table,
            Err(err) if skip_missing && err.is_missing_results() => {
                warn!("skipping {task} on {dataset}: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if table.is_empty() {
            warn!("{task} table for {model}/{dataset} has no rows");
        }
        write_table_reports(&table, &settings, &settings.out_dir)?;
        tables.push(table);
    }

    write_summary(&tables, &settings, &settings.out_dir)?;
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, RunError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(root) = &cli.results_root {
        settings.results_root = root.clone();
    }
    if let Some(out) = &cli.out {
        settings.out_dir = out.clone();
    }
    if let Some(policy) = cli.zero_scores {
        settings.zero_scores = policy;
    }
    Ok(settings)
}

fn plan_jobs(command: &Command) -> (Model, Vec<(TaskKind, Dataset)>) {
    match *command {
        Command::Gen { model, dataset } => (model, vec![(TaskKind::Gen, dataset)]),
        Command::Class { model, dataset } => (model, vec![(TaskKind::Class, dataset)]),
        Command::Ent { model } => (model, vec![(TaskKind::Ent, Dataset::Mcrae)]),
        Command::All { model } => {
            let mut jobs = Vec::new();
            for task in [TaskKind::Gen, TaskKind::Class] {
                for &dataset in edit_datasets() {
                    jobs.push((task, dataset));
                }
            }
            jobs.push((TaskKind::Ent, Dataset::Mcrae));
            (model, jobs)
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
