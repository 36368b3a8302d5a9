use crate::errors::*;
use crate::*;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

/// A CNF instance: clauses over the variables `x1..=xN`.
///
/// Every clause is non-empty and only mentions variables in `1..=N`;
/// the constructors reject anything else.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    num_vars: usize,
    clauses: Vec<Clause>,
}

impl Instance {
    /// Create an instance, validating every clause.
    pub fn new(num_vars: usize, clauses: Vec<Clause>) -> Result<Self> {
        for (i, cl) in clauses.iter().enumerate() {
            Self::check_clause(num_vars, i + 1, cl)?;
        }
        Ok(Instance { num_vars, clauses })
    }

    /// Create an instance from clauses written as literal names, e.g.
    /// `[["x1", "x2", "~x3"], ["~x1", "x2"]]`.
    pub fn from_names<C, S>(num_vars: usize, clauses: &[C]) -> Result<Self>
    where
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        let clauses = clauses
            .iter()
            .map(|names| {
                names
                    .as_ref()
                    .iter()
                    .map(|name| parser::parse_lit(name.as_ref()))
                    .collect::<Result<Vec<_>>>()
                    .map(Clause::new)
            })
            .collect::<Result<Vec<_>>>()?;
        Instance::new(num_vars, clauses)
    }

    /// Read instance in DIMACS format from STDIN.
    pub fn new_from_stdin() -> Result<Self> {
        Instance::new_from_buf_reader(&mut io::stdin().lock())
    }

    /// Read instance in DIMACS format from a file.
    pub fn new_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = io::BufReader::new(file);
        Instance::new_from_buf_reader(&mut reader)
    }

    /// Read instance in DIMACS format from buffer reader.
    pub fn new_from_buf_reader<F>(reader: &mut F) -> Result<Self>
    where
        F: io::BufRead,
    {
        parser::parse_dimacs_from_buf_reader(reader)
    }

    fn check_clause(num_vars: usize, clause_no: usize, cl: &Clause) -> Result<()> {
        if cl.is_empty() {
            return Err(ErrorKind::EmptyClause(clause_no).into());
        }
        for lit in &cl.lits {
            let v = lit.var().get();
            if v > num_vars {
                return Err(ErrorKind::VarOutOfRange(clause_no, v, num_vars).into());
            }
        }
        Ok(())
    }

    /// Returns the number of variables in the formula.
    pub fn n_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the number of clauses in the formula.
    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns all clauses in order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cl) in self.clauses.iter().enumerate() {
            writeln!(f, "Clause {}: {}", i + 1, cl)?;
        }
        Ok(())
    }
}
