use crate::errors::*;
use crate::*;

/// Returns true if `model` satisfies every clause of `instance`.
///
/// Each clause is scanned literal by literal until one holds; the first
/// clause left unsatisfied ends the evaluation. Fails with `MissingValue`
/// if `model` does not cover all of the instance's variables.
pub fn evaluate(instance: &Instance, model: &Assignment) -> Result<bool> {
    check_covers(instance, model)?;
    Ok(satisfies(instance, model.values()))
}

/// Same verdict as [`evaluate`], but every literal of every clause is
/// looked at before deciding.
pub fn evaluate_exhaustive(instance: &Instance, model: &Assignment) -> Result<bool> {
    check_covers(instance, model)?;
    let model = model.values();
    Ok(instance
        .clauses()
        .iter()
        .map(|Clause { lits: cl }| {
            cl.iter()
                .map(|&lit| lit.is_satisfied_by(model[lit.var().index()]))
                .fold(false, |acc, sat| acc | sat)
        })
        .fold(true, |acc, cla_sat| acc & cla_sat))
}

fn check_covers(instance: &Instance, model: &Assignment) -> Result<()> {
    if model.n_vars() < instance.n_vars() {
        return Err(ErrorKind::MissingValue(model.n_vars() + 1).into());
    }
    Ok(())
}

/// `model[i]` is the value of `x(i + 1)`; it must hold at least
/// `instance.n_vars()` values.
pub(crate) fn satisfies(instance: &Instance, model: &[bool]) -> bool {
    for Clause { lits: cl } in instance.clauses() {
        let mut cla_sat = false;
        for &lit in cl {
            cla_sat = lit.is_satisfied_by(model[lit.var().index()]);
            if cla_sat {
                break;
            }
        }
        if !cla_sat {
            return false;
        }
    }
    true
}
