//! `bfsat` decides random 3-SAT instances by brute force.
//!
//! Every total assignment is tried in binary counting order and checked
//! clause by clause, stopping at the first clause that fails. It is a
//! baseline, meant for small instances and for estimating where random
//! 3-SAT goes from mostly satisfiable to mostly unsatisfiable.
//!
//! ## An example
//!
//! ```rust
//! use bfsat::{solve, verify, Instance, Solution};
//!
//! let instance = Instance::from_names(3, &[vec!["x1", "x2", "~x3"], vec!["~x1", "x2"]]).unwrap();
//! match solve(&instance) {
//!     Solution::Sat(model) => assert!(verify(&instance, &model).unwrap()),
//!     other => panic!("expected a model, got {:?}", other),
//! }
//! ```

/// Common types
pub mod common;

/// Total truth assignments
pub mod assignment;

/// CNF instances
pub mod instance;

/// Enumeration of all assignments
pub mod enumerator;

/// Clause-by-clause evaluation of a single assignment
pub mod evaluator;

/// Exhaustive solver
pub mod solver;

/// Independent model checking
pub mod verifier;

/// DIMACS and literal-name parsing
pub mod parser;

/// Random instance generation
pub mod generator;

/// Single runs and phase transition batches
pub mod experiment;

pub use assignment::Assignment;
pub use common::*;
pub use instance::Instance;
pub use solver::{solve, SolveStats, Solver, SolverOptions};
pub use verifier::verify;
