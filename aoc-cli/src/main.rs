//! `aoc` - run the Advent of Code 2022-2024 solvers on local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Linking aoc-solutions pulls in its registered solver plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::{ArcExecutorError, CliError};
use executor::{Executor, WorkItem};
use inputs::InputStore;
use output::OutputFormatter;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries answers
fn init_tracing(default_level: &str) -> Result<(), CliError> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_tracing(config.log_level())?;

    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.len(), tags = ?config.tags, "registry built");

    if config.list {
        let solvers: Vec<_> = registry
            .iter_info()
            .filter(|info| config.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| config.day_filter.is_none_or(|d| info.day == d))
            .collect();
        OutputFormatter::new(config.quiet).print_listing(&solvers);
        return Ok(());
    }

    let executor = Executor::new(registry, &config).map_err(ArcExecutorError::from)?;
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    report_missing_inputs(&work_items, &config);

    run_executor(executor, config.quiet)
}

/// Warn up front about inputs that are not on disk
fn report_missing_inputs(work_items: &[WorkItem], config: &Config) {
    let inputs = InputStore::new(config.input_dir.clone());
    info!(input_dir = %config.input_dir.display(), "reading inputs");
    let missing: Vec<String> = work_items
        .iter()
        .filter(|w| !inputs.contains(w.year, w.day))
        .map(|w| inputs.path(w.year, w.day).display().to_string())
        .collect();
    if !missing.is_empty() {
        warn!(count = missing.len(), files = ?missing, "missing input files");
    }
}

/// Run the executor on a background thread and print results in order
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys: Vec<ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);
    Ok(())
}

/// Registry of every linked solver carrying all of `tags`
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_puzzles_registered() {
        let registry = build_registry(&[]).unwrap();
        for year in 2022..=2024 {
            assert!(registry.contains(year, 1), "{} day 1", year);
            assert!(registry.contains(year, 25), "{} day 25", year);
        }
        assert_eq!(registry.get_info(2024, 25).map(|info| info.parts), Some(1));
        assert!(!registry.contains(2021, 1));
    }

    #[test]
    fn test_tag_filter_requires_all_tags() {
        let registry = build_registry(&["2023".to_string(), "graph".to_string()]).unwrap();
        assert!(registry.contains(2023, 25));
        assert!(registry.iter_info().all(|info| info.year == 2023));
        assert!(!registry.contains(2023, 1));
    }
}
