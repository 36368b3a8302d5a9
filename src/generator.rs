use crate::errors::*;
use crate::*;
use rand::seq::index;
use rand::Rng;

/// Clause width of the instances studied for the phase transition.
pub const WIDTH_3SAT: usize = 3;

/// Generate a random k-SAT instance.
///
/// Each clause draws `width` distinct variables uniformly and negates each
/// one with probability 1/2.
pub fn generate_ksat<R>(rng: &mut R, n_vars: usize, n_clauses: usize, width: usize) -> Result<Instance>
where
    R: Rng + ?Sized,
{
    if width == 0 || n_vars < width {
        return Err(ErrorKind::TooFewVariables(n_vars, width).into());
    }
    let clauses = (0..n_clauses)
        .map(|_| {
            let lits = index::sample(rng, n_vars, width)
                .into_iter()
                .map(|i| Lit::new(Var::new(i + 1), rng.gen::<bool>()))
                .collect();
            Clause::new(lits)
        })
        .collect();
    Instance::new(n_vars, clauses)
}

/// Generate a random 3-SAT instance.
pub fn generate_3sat<R>(rng: &mut R, n_vars: usize, n_clauses: usize) -> Result<Instance>
where
    R: Rng + ?Sized,
{
    generate_ksat(rng, n_vars, n_clauses, WIDTH_3SAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let instance = generate_3sat(&mut rng, 5, 20).unwrap();
        assert_eq!(instance.n_vars(), 5);
        assert_eq!(instance.n_clauses(), 20);
        for cl in instance.clauses() {
            assert_eq!(cl.len(), 3);
            let vars: HashSet<Var> = cl.lits.iter().map(|l| l.var()).collect();
            assert_eq!(vars.len(), 3);
            assert!(vars.iter().all(|v| (1..=5).contains(&v.get())));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = generate_3sat(&mut StdRng::seed_from_u64(42), 8, 30).unwrap();
        let b = generate_3sat(&mut StdRng::seed_from_u64(42), 8, 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_too_few_variables() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_3sat(&mut rng, 2, 1).is_err());
        assert!(generate_ksat(&mut rng, 2, 1, 0).is_err());
        assert_eq!(generate_3sat(&mut rng, 3, 0).unwrap().n_clauses(), 0);
    }

    #[test]
    fn test_uses_both_polarities() {
        let mut rng = StdRng::seed_from_u64(3);
        let instance = generate_ksat(&mut rng, 4, 50, 2).unwrap();
        let negated = instance
            .clauses()
            .iter()
            .flat_map(|cl| cl.lits.iter())
            .filter(|l| l.sign())
            .count();
        assert!(negated > 0 && negated < 100);
    }
}
