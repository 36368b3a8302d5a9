use crate::errors::*;
use crate::*;
use std::collections::BTreeMap;
use std::fmt;

/// A total truth assignment over the variables `x1..=xN`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// Create an assignment where `values[i]` is the value of `x(i + 1)`.
    pub fn new(values: Vec<bool>) -> Self {
        Assignment { values }
    }

    /// Build an assignment from `("x<i>", value)` pairs.
    ///
    /// The names must cover `x1..=xk` for some `k` without gaps.
    pub fn from_named<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut given: BTreeMap<usize, bool> = BTreeMap::new();
        for (name, value) in pairs {
            let lit = parser::parse_lit(name.as_ref())?;
            if lit.sign() {
                return Err(ErrorKind::InvalidLiteral(name.as_ref().to_string()).into());
            }
            if given.insert(lit.var().get(), value).is_some() {
                return Err(ErrorKind::DuplicateValue(lit.var().get()).into());
            }
        }
        let mut values = Vec::with_capacity(given.len());
        for (expected, (var, value)) in (1..).zip(given) {
            if var != expected {
                return Err(ErrorKind::MissingValue(expected).into());
            }
            values.push(value);
        }
        Ok(Assignment { values })
    }

    /// Returns the number of variables covered.
    pub fn n_vars(&self) -> usize {
        self.values.len()
    }

    /// Returns the value of `var`, or `None` if it lies outside the domain.
    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.get(var.index()).copied()
    }

    /// Returns the raw values, `x1` first.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Iterate over `(var, value)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (Var::new(i + 1), v))
    }

    /// Iterate over `("x<i>", value)` in index order.
    pub fn named(&self) -> impl Iterator<Item = (String, bool)> + '_ {
        self.iter().map(|(var, v)| (var.to_string(), v))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, v) in self.iter() {
            writeln!(f, "  {} = {}", var, if v { "True" } else { "False" })?;
        }
        Ok(())
    }
}
