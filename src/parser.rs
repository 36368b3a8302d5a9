use crate::errors::*;
use crate::*;
use regex::Regex;
use std::io::BufRead;

/// Parse a literal name: `x<i>` or `~x<i>` with `i >= 1`.
pub fn parse_lit(name: &str) -> Result<Lit> {
    let invalid = || Error::from(ErrorKind::InvalidLiteral(name.to_string()));
    let re_name = Regex::new(r"^(~?)x([1-9]\d*)$").expect("static regex");
    let cap = re_name.captures(name).ok_or_else(invalid)?;
    let index: usize = cap[2].parse().map_err(|_| invalid())?;
    Ok(Lit::new(Var::new(index), !cap[1].is_empty()))
}

impl std::str::FromStr for Lit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_lit(s)
    }
}

/// Parse a DIMACS CNF instance from buffer reader.
///
/// Clauses are terminated by `0` and may span lines. The header's clause
/// count is advisory; the instance holds whatever clauses were read.
pub fn parse_dimacs_from_buf_reader<F>(reader: &mut F) -> Result<Instance>
where
    F: BufRead,
{
    let re_header = Regex::new(r"^p\s+cnf\s+(\d+)\s+(\d+)\s*$").expect("static regex");
    let re_lit = Regex::new(r"^-?\d+$").expect("static regex");

    let mut header: Option<(usize, usize)> = None;
    let mut clauses = vec![];
    let mut cl = vec![];

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('%') {
            // SATLIB benchmarks end with a `%` marker.
            break;
        }
        if line.starts_with('p') {
            if header.is_some() {
                return Err(ErrorKind::Parse(line_no, "duplicate header".into()).into());
            }
            let cap = re_header
                .captures(line)
                .ok_or_else(|| Error::from(ErrorKind::Parse(line_no, format!("bad header '{}'", line))))?;
            header = Some((cap[1].parse()?, cap[2].parse()?));
            continue;
        }
        if header.is_none() {
            return Err(ErrorKind::Parse(line_no, "clause before `p cnf` header".into()).into());
        }
        for token in line.split_whitespace() {
            if !re_lit.is_match(token) {
                return Err(ErrorKind::Parse(line_no, format!("bad literal '{}'", token)).into());
            }
            let l: i64 = token.parse()?;
            if l == 0 {
                clauses.push(Clause::new(std::mem::take(&mut cl)));
            } else {
                let var = Var::new(l.unsigned_abs() as usize);
                cl.push(if l < 0 { var.neg() } else { var.pos() });
            }
        }
    }
    if !cl.is_empty() {
        clauses.push(Clause::new(cl));
    }

    let (n_vars, n_clauses) =
        header.ok_or_else(|| Error::from(ErrorKind::Parse(0, "missing `p cnf` header".into())))?;
    if n_clauses != clauses.len() {
        tracing::warn!(
            expected = n_clauses,
            found = clauses.len(),
            "clause count differs from header"
        );
    }
    Instance::new(n_vars, clauses)
}
