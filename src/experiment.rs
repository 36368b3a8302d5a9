use crate::errors::*;
use crate::generator::{generate_ksat, WIDTH_3SAT};
use crate::solver::{SolveStats, Solver, SolverOptions};
use crate::verifier::verify;
use crate::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt;
use std::ops::{Add, RangeInclusive};
use std::path::PathBuf;

/// Where a solved instance came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Origin {
    /// Drawn by the random generator.
    Generated,
    /// Read from a DIMACS file.
    File(PathBuf),
}

/// Outcome of solving one instance.
#[derive(Debug)]
pub struct SingleReport {
    /// Where the instance came from.
    pub origin: Origin,
    /// The instance that was solved.
    pub instance: Instance,
    /// Solver verdict.
    pub solution: Solution,
    /// Search counters.
    pub stats: SolveStats,
    /// Verifier verdict on the model, when one was found.
    pub verified: Option<bool>,
}

impl SingleReport {
    /// Solve `instance` and verify the model if there is one.
    pub fn new(instance: Instance, origin: Origin, options: &SolverOptions) -> Result<Self> {
        let (solution, stats) = Solver::new(*options).solve_with_stats(&instance);
        let verified = match solution.model() {
            Some(model) => Some(verify(&instance, model)?),
            None => None,
        };
        Ok(SingleReport {
            origin,
            instance,
            solution,
            stats,
            verified,
        })
    }
}

impl fmt::Display for SingleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Origin::Generated => writeln!(f, "Generated 3SAT Problem:")?,
            Origin::File(path) => writeln!(f, "Problem read from {}:", path.display())?,
        }
        write!(f, "{}", self.instance)?;
        match &self.solution {
            Solution::Sat(model) => {
                writeln!(f, "\nThe problem is satisfiable!")?;
                writeln!(f, "Satisfying assignment:")?;
                write!(f, "{}", model)?;
                match self.verified {
                    Some(true) => writeln!(f, "\nThe solution is verified to be correct!")?,
                    _ => writeln!(f, "\nThe solution is incorrect!")?,
                }
            }
            Solution::Unsat => writeln!(f, "\nThe problem is not satisfiable.")?,
            Solution::Unknown => writeln!(
                f,
                "\nSearch stopped after {} assignments without an answer.",
                self.stats.tries
            )?,
        }
        Ok(())
    }
}

/// Generate a random 3-SAT instance, solve it and verify the result.
pub fn run_single<R>(
    rng: &mut R,
    n_vars: usize,
    n_clauses: usize,
    options: &SolverOptions,
) -> Result<SingleReport>
where
    R: Rng + ?Sized,
{
    let instance = generate_ksat(rng, n_vars, n_clauses, WIDTH_3SAT)?;
    SingleReport::new(instance, Origin::Generated, options)
}

/// Batch experiment options.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Variable counts to sample.
    pub var_range: RangeInclusive<usize>,
    /// Clause/variable ratios to sample.
    pub ratios: Vec<f64>,
    /// Trials per (ratio, variable count) pair.
    pub trials: usize,
    /// Clause width.
    pub width: usize,
    /// Base seed; every trial gets its own RNG derived from it.
    pub seed: u64,
    /// Spread trials over the rayon thread pool.
    pub parallel: bool,
    /// Options handed to each solver.
    pub solver: SolverOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            var_range: 3..=10,
            ratios: integer_ratios(6),
            trials: 10,
            width: WIDTH_3SAT,
            seed: 0,
            parallel: true,
            solver: SolverOptions::default(),
        }
    }
}

/// The ratios `1, 2, ..., max_ratio`.
pub fn integer_ratios(max_ratio: usize) -> Vec<f64> {
    (1..=max_ratio).map(|r| r as f64).collect()
}

/// Aggregated outcome for one clause/variable ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RatioResult {
    /// Clause/variable ratio.
    pub ratio: f64,
    /// Trials found satisfiable.
    pub satisfied: usize,
    /// Trials where the search budget ran out.
    pub unknown: usize,
    /// Trials run.
    pub total: usize,
}

impl RatioResult {
    /// Fraction of trials found satisfiable.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.satisfied as f64 / self.total as f64
        }
    }
}

impl fmt::Display for RatioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clause/literal ratio: {}   Percent Solved: {:.2}%",
            self.ratio,
            self.fraction() * 100.0
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    satisfied: usize,
    unknown: usize,
    total: usize,
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            satisfied: self.satisfied + other.satisfied,
            unknown: self.unknown + other.unknown,
            total: self.total + other.total,
        }
    }
}

/// splitmix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn trial_seed(seed: u64, ratio_idx: usize, n_vars: usize, trial: usize) -> u64 {
    mix(mix(mix(mix(seed) ^ ratio_idx as u64) ^ n_vars as u64) ^ trial as u64)
}

fn run_trial(
    options: &BatchOptions,
    ratio_idx: usize,
    n_vars: usize,
    n_clauses: usize,
    trial: usize,
) -> Result<Tally> {
    let mut rng = StdRng::seed_from_u64(trial_seed(options.seed, ratio_idx, n_vars, trial));
    let instance = generate_ksat(&mut rng, n_vars, n_clauses, options.width)?;
    let solution = Solver::new(options.solver).solve(&instance);
    Ok(Tally {
        satisfied: solution.is_sat() as usize,
        unknown: matches!(solution, Solution::Unknown) as usize,
        total: 1,
    })
}

/// Estimate the satisfiable fraction of random instances per ratio.
///
/// For each ratio `r` and each `n` in the variable range, `trials`
/// instances with `floor(n * r)` clauses are generated and solved. Trial
/// seeds depend only on their position, so parallel and sequential runs
/// agree.
///
/// Fails with `EmptyBatch` when there is nothing to run.
pub fn run_batch(options: &BatchOptions) -> Result<Vec<RatioResult>> {
    if options.ratios.is_empty() {
        return Err(ErrorKind::EmptyBatch("no ratios".into()).into());
    }
    if options.var_range.is_empty() {
        return Err(ErrorKind::EmptyBatch(format!(
            "variable range {}..={} is empty",
            options.var_range.start(),
            options.var_range.end()
        ))
        .into());
    }
    if options.trials == 0 {
        return Err(ErrorKind::EmptyBatch("zero trials".into()).into());
    }
    let mut results = Vec::with_capacity(options.ratios.len());
    for (ratio_idx, &ratio) in options.ratios.iter().enumerate() {
        let jobs: Vec<(usize, usize)> = options
            .var_range
            .clone()
            .flat_map(|n| (0..options.trials).map(move |t| (n, t)))
            .collect();
        let run = |&(n_vars, trial): &(usize, usize)| {
            let n_clauses = (n_vars as f64 * ratio) as usize;
            run_trial(options, ratio_idx, n_vars, n_clauses, trial)
        };
        let merge = |a: Result<Tally>, b: Result<Tally>| -> Result<Tally> { Ok(a? + b?) };
        let tally = if options.parallel {
            jobs.par_iter().map(run).reduce(|| Ok(Tally::default()), merge)
        } else {
            jobs.iter().map(run).fold(Ok(Tally::default()), merge)
        }?;

        let result = RatioResult {
            ratio,
            satisfied: tally.satisfied,
            unknown: tally.unknown,
            total: tally.total,
        };
        tracing::info!(
            ratio,
            satisfied = result.satisfied,
            unknown = result.unknown,
            total = result.total,
            "ratio done"
        );
        results.push(result);
    }
    Ok(results)
}
