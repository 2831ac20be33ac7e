//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Time spent parsing, absent when no parse happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Everything a worker thread needs to run a work item
struct RunContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: RunContext,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: RunContext {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
            },
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.context
            .registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: select_parts(self.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            solvers = work_items.len(),
            mode = ?self.context.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "starting run"
        );

        match self.context.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.context) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.execute_parallel(by_year, &tx)
            }
            // Part additionally splits each item's parts inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singles = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_parallel(singles, &tx)
            }
        }
    }

    /// Run groups in parallel on the pool, items within a group in order
    fn execute_parallel(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let context = &self.context;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map_with(tx.clone(), |tx, items| {
                    items.iter().fold(None, |err, work| match run_work_item(work, tx, context) {
                        Ok(()) => err,
                        Err(e) => Some(ArcExecutorError::combine_opt(err, e)),
                    })
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the `--part` filter and the solver's part count
fn select_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        #[allow(clippy::reversed_empty_ranges)]
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Load the input and solve every part of one work item
///
/// Input and solver failures become error results; only a closed result
/// channel is returned as an error.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    context: &RunContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match context.inputs.read(year, day) {
        Ok(input) => {
            debug!(year, day, bytes = input.len(), "loaded input");
            input
        }
        Err(source) => {
            warn!(year, day, error = %source, "input unavailable");
            let error = ArcExecutorError::from(ExecutorError::Input { year, day, source });
            for part in work.parts.clone() {
                send(tx, SolverResult::failed(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    let results: Vec<SolverResult> = if context.parallelize_by == ParallelizeBy::Part {
        // each part gets a freshly parsed solver
        work.parts
            .clone()
            .into_par_iter()
            .map(|part| solve_parts(context, year, day, &input, part..=part))
            .flatten()
            .collect()
    } else {
        solve_parts(context, year, day, &input, work.parts.clone())
    };

    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

/// Parse once, then solve `parts` in order
fn solve_parts(
    context: &RunContext,
    year: u16,
    day: u8,
    input: &str,
    parts: RangeInclusive<u8>,
) -> Vec<SolverResult> {
    let mut solver = match context.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            warn!(year, day, error = %e, "solver could not be created");
            let error = ArcExecutorError::from(ExecutorError::Solver(e));
            return parts
                .map(|part| SolverResult::failed(year, day, part, error.clone()))
                .collect();
        }
    };
    let parse_duration = solver.parse_duration();

    parts
        .map(|part| match solver.solve(part) {
            Ok(solved) => {
                let solve_duration = solved.duration();
                debug!(year, day, part, %parse_duration, %solve_duration, "solved");
                SolverResult {
                    year,
                    day,
                    part,
                    answer: Ok(solved.answer),
                    parse_duration: Some(parse_duration),
                    solve_duration,
                }
            }
            Err(e) => {
                warn!(year, day, part, error = %e, "solve failed");
                SolverResult::failed(
                    year,
                    day,
                    part,
                    ExecutorError::Solver(SolverError::SolveError(e)).into(),
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{
        AocParser, ParseError, PartSolver, RegisterableSolver, SolveError, Solver,
        SolverRegistryBuilder,
    };
    use std::fs;
    use tempfile::TempDir;

    /// Sums the numbers on each line, then multiplies them
    struct Tally;

    impl AocParser for Tally {
        type SharedData<'a> = Vec<u64>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            input
                .lines()
                .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
                .collect()
        }
    }

    impl PartSolver<1> for Tally {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<u64>().to_string())
        }
    }

    impl PartSolver<2> for Tally {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().product::<u64>().to_string())
        }
    }

    impl Solver for Tally {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                2 => <Self as PartSolver<2>>::solve(shared),
                _ => Err(SolveError::PartOutOfRange(part)),
            }
        }
    }

    fn executor(inputs: &TempDir, parallelize_by: ParallelizeBy, part: Option<u8>) -> Executor {
        let builder = SolverRegistryBuilder::new();
        let builder = Tally.register_with(builder, 2022, 1).unwrap();
        let builder = Tally.register_with(builder, 2022, 2).unwrap();
        let registry = Tally.register_with(builder, 2023, 1).unwrap().build();

        let config = Config {
            year_filter: None,
            day_filter: None,
            part_filter: part,
            tags: Vec::new(),
            input_dir: inputs.path().to_path_buf(),
            thread_count: 2,
            parallelize_by,
            quiet: true,
            verbosity: 0,
            list: false,
        };
        Executor::new(registry, &config).unwrap()
    }

    fn write_input(dir: &TempDir, year: u16, day: u8, content: &str) {
        let year_dir = dir.path().join(year.to_string());
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join(format!("day{:02}.txt", day)), content).unwrap();
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<SolverResult> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    #[test]
    fn test_select_parts() {
        assert_eq!(select_parts(None, 2), 1..=2);
        assert_eq!(select_parts(Some(2), 2), 2..=2);
        assert!(select_parts(Some(2), 1).is_empty());
    }

    #[test]
    fn test_collect_work_items_with_part_filter() {
        let dir = TempDir::new().unwrap();
        let executor = executor(&dir, ParallelizeBy::Day, Some(2));
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|w| w.parts == (2..=2)));
        assert_eq!((items[2].year, items[2].day), (2023, 1));
    }

    #[test]
    fn test_every_mode_gives_same_answers() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, 2022, 1, "1\n2\n3\n");
        write_input(&dir, 2022, 2, "4\n5\n");
        write_input(&dir, 2023, 1, "7\n");

        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Year,
            ParallelizeBy::Day,
            ParallelizeBy::Part,
        ] {
            let answers: Vec<String> = run(&executor(&dir, mode, None))
                .into_iter()
                .map(|r| r.answer.unwrap())
                .collect();
            assert_eq!(answers, vec!["6", "6", "9", "20", "7", "7"], "{:?}", mode);
        }
    }

    #[test]
    fn test_missing_input_reported_per_part() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, 2022, 1, "1\n2\n");
        write_input(&dir, 2023, 1, "oops\n");

        let results = run(&executor(&dir, ParallelizeBy::Day, None));
        assert_eq!(results.len(), 6);

        let missing: Vec<_> = results.iter().filter(|r| (r.year, r.day) == (2022, 2)).collect();
        assert_eq!(missing.len(), 2);
        assert!(missing.iter().all(|r| matches!(
            r.answer.as_ref().map_err(|e| e.inner()),
            Err(ExecutorError::Input { .. })
        )));

        let unparsable = results.iter().find(|r| r.year == 2023).unwrap();
        assert!(matches!(
            unparsable.answer.as_ref().map_err(|e| e.inner()),
            Err(ExecutorError::Solver(SolverError::ParseError(_)))
        ));
        assert_eq!(results[0].answer.as_deref().ok(), Some("3"));
    }
}
