use crate::errors::*;
use crate::*;

/// Verify that the clauses are satisfied by the input model.
///
/// Fails with `MissingValue` if a clause mentions a variable the
/// assignment does not cover; an unsatisfied clause is `Ok(false)`.
pub fn verify(instance: &Instance, model: &Assignment) -> Result<bool> {
    let mut all_sat = true;
    for Clause { lits: cl } in instance.clauses() {
        let mut cla_sat = false;
        for &lit in cl {
            let var = lit.var();
            let value = model
                .get(var)
                .ok_or_else(|| Error::from(ErrorKind::MissingValue(var.get())))?;
            cla_sat |= lit.is_satisfied_by(value);
        }
        all_sat &= cla_sat;
    }
    Ok(all_sat)
}
