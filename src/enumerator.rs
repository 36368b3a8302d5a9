use crate::Assignment;

/// Advance `model` to the next assignment in binary counting order,
/// `x1` being the most significant bit and `false < true`.
///
/// Returns false, leaving `model` all false again, once the last
/// (all true) assignment has been passed.
#[inline]
pub fn step(model: &mut [bool]) -> bool {
    for v in model.iter_mut().rev() {
        if *v {
            *v = false;
        } else {
            *v = true;
            return true;
        }
    }
    false
}

/// Lazy iterator over all `2^N` total assignments of `N` variables.
///
/// For `N = 2` it yields `FF, FT, TF, TT`. For `N = 0` it yields the
/// empty assignment once. Clone it to restart from the same point.
#[derive(Clone, Debug)]
pub struct Assignments {
    next: Option<Vec<bool>>,
    remaining: Option<u128>,
}

impl Assignments {
    /// Enumerate assignments over `n_vars` variables, starting at all false.
    pub fn new(n_vars: usize) -> Self {
        Assignments {
            next: Some(vec![false; n_vars]),
            remaining: Assignments::total(n_vars),
        }
    }

    /// Total number of assignments, if it fits in a `u128`.
    pub fn total(n_vars: usize) -> Option<u128> {
        if n_vars < 128 {
            Some(1u128 << n_vars)
        } else {
            None
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        let current = self.next.take()?;
        let mut following = current.clone();
        if step(&mut following) {
            self.next = Some(following);
        }
        if let Some(r) = self.remaining.as_mut() {
            *r -= 1;
        }
        Some(Assignment::new(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) if r <= usize::MAX as u128 => (r as usize, Some(r as usize)),
            _ => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Assignments {}
