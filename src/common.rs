use crate::assignment::Assignment;
use std::fmt;
use std::ops::Not;

/// A variable, identified by its 1-based index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Var(usize);

impl Var {
    /// Create a variable from its 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0.
    pub fn new(index: usize) -> Self {
        assert!(index > 0, "variable indices start at 1");
        Self(index)
    }

    /// Returns the 1-based index of the variable.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the 0-based slot that can be used to index arrays.
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// Create positive literal from variable.
    pub fn pos(self) -> Lit {
        Lit::new(self, false)
    }

    /// Create negative literal from variable.
    pub fn neg(self) -> Lit {
        Lit::new(self, true)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A literal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    /// Create lit from var and sign
    pub fn new(var: Var, negated: bool) -> Lit {
        Lit { var, negated }
    }

    /// Returns true if literal is signed (i.e. a negated literal).
    pub fn sign(self) -> bool {
        self.negated
    }

    /// Returns the var corresponding to the literal.
    pub fn var(self) -> Var {
        self.var
    }

    /// Returns true if the literal holds when its variable takes `value`.
    #[inline]
    pub fn is_satisfied_by(self, value: bool) -> bool {
        value != self.negated
    }
}

impl Not for Lit {
    type Output = Self;

    /// Returns x for ~x and ~x for x.
    fn not(self) -> Self {
        Lit::new(self.var, !self.negated)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~{}", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

/// A Clause.
#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    /// A vector of literals forming the clause.
    pub lits: Vec<Lit>,
}

impl Clause {
    /// Create a clause from its literals.
    pub fn new(lits: Vec<Lit>) -> Self {
        Clause { lits }
    }

    /// Returns the number of literals in the clause.
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Returns true if the clause has no literals.
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lits.is_empty() {
            return write!(f, "false");
        }
        for (i, lit) in self.lits.iter().enumerate() {
            if i > 0 {
                write!(f, " OR ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

/// Solution to the SAT Formula.
#[derive(Debug, PartialEq)]
pub enum Solution {
    /// The formula is unsatisfiable.
    Unsat,
    /// The formula is satisfiable. A satifying model for the formula.
    Sat(Assignment),
    /// The search budget ran out before every assignment was tried.
    Unknown,
}

impl Solution {
    /// Returns true for `Sat`.
    pub fn is_sat(&self) -> bool {
        matches!(self, Solution::Sat(_))
    }

    /// Returns the satisfying model, if any.
    pub fn model(&self) -> Option<&Assignment> {
        match self {
            Solution::Sat(model) => Some(model),
            _ => None,
        }
    }

    /// Splits into the `(satisfiable, model)` pair, or `None` if the
    /// search was cut short.
    pub fn into_pair(self) -> Option<(bool, Option<Assignment>)> {
        match self {
            Solution::Sat(model) => Some((true, Some(model))),
            Solution::Unsat => Some((false, None)),
            Solution::Unknown => None,
        }
    }
}

/// Errors module.
#[allow(missing_docs)]
pub mod errors {
    error_chain::error_chain! {
        foreign_links {
            Io(std::io::Error);
            ParseIntError(std::num::ParseIntError);
        }

        errors {
            VarOutOfRange(clause: usize, var: usize, n_vars: usize) {
                description("variable index out of range")
                display("clause {} references x{} but the instance has {} variables", clause, var, n_vars)
            }
            EmptyClause(clause: usize) {
                description("empty clause")
                display("clause {} has no literals", clause)
            }
            MissingValue(var: usize) {
                description("assignment has no value for a variable")
                display("assignment has no value for x{}", var)
            }
            DuplicateValue(var: usize) {
                description("assignment gives a variable twice")
                display("assignment gives x{} more than once", var)
            }
            InvalidLiteral(name: String) {
                description("invalid literal name")
                display("invalid literal name '{}'", name)
            }
            TooFewVariables(n_vars: usize, width: usize) {
                description("not enough variables for the clause width")
                display("cannot draw {} distinct variables out of {}", width, n_vars)
            }
            EmptyBatch(reason: String) {
                description("batch has no trials to run")
                display("batch has no trials to run: {}", reason)
            }
            Parse(line: usize, msg: String) {
                description("malformed DIMACS input")
                display("line {}: {}", line, msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_complement() {
        let x = Var::new(3);
        assert_eq!(!x.pos(), x.neg());
        assert_eq!(!!x.pos(), x.pos());
        assert!(x.neg().sign());
        assert_eq!(x.neg().var(), x);
        assert_eq!(x.index(), 2);
    }

    #[test]
    fn test_lit_satisfaction() {
        let x = Var::new(1);
        assert!(x.pos().is_satisfied_by(true));
        assert!(!x.pos().is_satisfied_by(false));
        assert!(x.neg().is_satisfied_by(false));
        assert!(!x.neg().is_satisfied_by(true));
    }

    #[test]
    fn test_display() {
        let clause = Clause::new(vec![Var::new(1).pos(), Var::new(2).pos(), Var::new(3).neg()]);
        assert_eq!(clause.to_string(), "x1 OR x2 OR ~x3");
        assert_eq!(Clause::new(vec![]).to_string(), "false");
    }

    #[test]
    fn test_into_pair_keeps_unknown_apart() {
        let model = Assignment::new(vec![true]);
        assert_eq!(Solution::Sat(model.clone()).into_pair(), Some((true, Some(model))));
        assert_eq!(Solution::Unsat.into_pair(), Some((false, None)));
        assert_eq!(Solution::Unknown.into_pair(), None);
    }

    #[test]
    #[should_panic]
    fn test_var_zero_panics() {
        Var::new(0);
    }
}
