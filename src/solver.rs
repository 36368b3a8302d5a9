use crate::enumerator;
use crate::evaluator::satisfies;
use crate::*;

/// Solver options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolverOptions {
    /// Give up with [`Solution::Unknown`] after evaluating this many
    /// assignments. `None` searches the whole space.
    pub max_assignments: Option<u64>,
}

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolveStats {
    /// Number of assignments evaluated.
    pub tries: u64,
}

/// Exhaustive solver.
///
/// Tries assignments in [`enumerator::Assignments`] order and returns
/// the first one that satisfies the instance.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    options: SolverOptions,
}

impl Solver {
    /// Create a new solver.
    pub fn new(options: SolverOptions) -> Self {
        Solver { options }
    }

    /// Returns the options the solver was created with.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Decide satisfiability of `instance`.
    pub fn solve(&self, instance: &Instance) -> Solution {
        self.solve_with_stats(instance).0
    }

    /// Decide satisfiability of `instance`, also reporting search counters.
    pub fn solve_with_stats(&self, instance: &Instance) -> (Solution, SolveStats) {
        let mut stats = SolveStats::default();
        let mut model = vec![false; instance.n_vars()];

        let solution = loop {
            if let Some(max) = self.options.max_assignments {
                if stats.tries >= max {
                    break Solution::Unknown;
                }
            }
            stats.tries += 1;
            if satisfies(instance, &model) {
                break Solution::Sat(Assignment::new(model));
            }
            if !enumerator::step(&mut model) {
                break Solution::Unsat;
            }
        };

        tracing::debug!(
            n_vars = instance.n_vars(),
            n_clauses = instance.n_clauses(),
            tries = stats.tries,
            sat = solution.is_sat(),
            "search finished"
        );
        (solution, stats)
    }
}

/// Decide satisfiability of `instance` with default options.
pub fn solve(instance: &Instance) -> Solution {
    Solver::default().solve(instance)
}
