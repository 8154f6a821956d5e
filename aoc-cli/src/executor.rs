//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::CliError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single solver part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared between the rows of a day that failed before solving
    pub answer: Result<String, Arc<CliError>>,
    /// Set on the first part solved against a freshly parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: Arc<CliError>) -> Self {
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
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Executor for running solvers over their stored inputs
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;

        Ok(Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            parallelize_by: config.parallelize_by,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send one result per part to `tx`
    ///
    /// Failures of a single day become error rows; only a closed channel
    /// stops the run.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), CliError> {
        let work_items = self.collect_work_items();
        debug!(items = work_items.len(), mode = ?self.parallelize_by, "executing");

        match self.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .try_for_each(|work| self.run_work_item(work, &tx)),
            ParallelizeBy::Day => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .try_for_each(|work| self.run_work_item(work, &tx))
            }),
        }
    }

    /// Read the input, parse it and solve every requested part in order
    fn run_work_item(&self, work: &WorkItem, tx: &Sender<SolverResult>) -> Result<(), CliError> {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.read(year, day) {
            Ok(input) => input,
            Err(e) => {
                warn!(year, day, "{e}");
                return send_failures(work, tx, CliError::from(e));
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => return send_failures(work, tx, CliError::from(e)),
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(year, day, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            tx.send(result).map_err(|_| CliError::ChannelSend)?;
        }
        Ok(())
    }
}

/// Report the same failure for every part of a work item
fn send_failures(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    error: CliError,
) -> Result<(), CliError> {
    let error = Arc::new(error);
    for part in work.parts.clone() {
        tx.send(SolverResult::failed(work.year, work.day, part, Arc::clone(&error)))
            .map_err(|_| CliError::ChannelSend)?;
    }
    Ok(())
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration: None,
        },
        Err(e) => SolverResult::failed(year, day, part, Arc::new(e.into())),
    }
}
