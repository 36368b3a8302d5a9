use bfsat::enumerator::Assignments;
use bfsat::evaluator::{evaluate, evaluate_exhaustive};
use bfsat::experiment::{integer_ratios, run_batch, BatchOptions};
use bfsat::generator::{generate_3sat, generate_ksat};
use bfsat::{solve, verify, Assignment, Instance, Solution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

// =============================================================================
// Reference brute force, independent of the library's enumerator/evaluator
// =============================================================================

fn reference_satisfiable(instance: &Instance) -> bool {
    let n = instance.n_vars();
    (0u32..(1 << n)).any(|bits| {
        instance.clauses().iter().all(|cl| {
            cl.lits.iter().any(|lit| {
                let value = bits >> lit.var().index() & 1 == 1;
                value != lit.sign()
            })
        })
    })
}

fn random_instance(rng: &mut StdRng) -> Instance {
    let n_vars = rng.gen_range(1, 9);
    let width = rng.gen_range(1, n_vars.min(4) + 1);
    let n_clauses = rng.gen_range(0, 5 * n_vars);
    generate_ksat(rng, n_vars, n_clauses, width).unwrap()
}

// =============================================================================
// Spec scenarios
// =============================================================================

#[test]
fn test_satisfiable_scenario() {
    let instance = Instance::from_names(3, &[vec!["x1", "x2", "~x3"], vec!["~x1", "x2"]]).unwrap();
    let (sat, model) = solve(&instance).into_pair().unwrap();
    assert!(sat);
    assert!(verify(&instance, &model.unwrap()).unwrap());

    let witness = Assignment::from_named(vec![("x1", true), ("x2", true), ("x3", true)]).unwrap();
    assert!(verify(&instance, &witness).unwrap());
}

#[test]
fn test_unsatisfiable_scenario() {
    let instance = Instance::from_names(1, &[vec!["x1"], vec!["~x1"]]).unwrap();
    assert_eq!(solve(&instance), Solution::Unsat);
    assert_eq!(solve(&instance).into_pair(), Some((false, None)));
}

#[test]
fn test_all_eight_sign_patterns_is_unsat() {
    let mut clauses = vec![];
    for bits in 0..8 {
        clauses.push(
            (1..=3)
                .map(|i| {
                    let neg = if bits >> (i - 1) & 1 == 1 { "~" } else { "" };
                    format!("{}x{}", neg, i)
                })
                .collect::<Vec<_>>(),
        );
    }
    let instance = Instance::from_names(3, &clauses).unwrap();
    assert_eq!(solve(&instance), Solution::Unsat);

    clauses.pop();
    let instance = Instance::from_names(3, &clauses).unwrap();
    // Only the assignment falsifying the dropped clause (~x1 ~x2 ~x3) remains.
    assert_eq!(
        solve(&instance),
        Solution::Sat(Assignment::new(vec![true, true, true]))
    );
}

#[test]
fn test_zero_variables() {
    let instance = Instance::new(0, vec![]).unwrap();
    assert_eq!(Assignments::new(0).count(), 1);
    assert_eq!(solve(&instance), Solution::Sat(Assignment::new(vec![])));
}

// =============================================================================
// Properties over random instances
// =============================================================================

#[test]
fn test_sound_and_complete() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let instance = random_instance(&mut rng);
        let expected = reference_satisfiable(&instance);
        match solve(&instance) {
            Solution::Sat(model) => {
                assert!(expected, "solver found a model for an UNSAT instance");
                assert!(verify(&instance, &model).unwrap());
                assert_eq!(model.n_vars(), instance.n_vars());
            }
            Solution::Unsat => assert!(!expected, "solver missed a model:\n{}", instance),
            Solution::Unknown => panic!("unbounded search cannot give up"),
        }
    }
}

#[test]
fn test_model_is_first_in_enumeration_order() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let instance = random_instance(&mut rng);
        let first = Assignments::new(instance.n_vars()).find(|a| verify(&instance, a).unwrap());
        assert_eq!(solve(&instance).model(), first.as_ref());
    }
}

#[test]
fn test_evaluator_agrees_with_verifier() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let instance = random_instance(&mut rng);
        for a in Assignments::new(instance.n_vars()) {
            let fast = evaluate(&instance, &a).unwrap();
            assert_eq!(fast, evaluate_exhaustive(&instance, &a).unwrap());
            assert_eq!(fast, verify(&instance, &a).unwrap());
        }
    }
}

// =============================================================================
// DIMACS input
// =============================================================================

#[test]
fn test_solve_dimacs_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "c tiny\np cnf 3 3\n1 2 -3 0\n-1 2 0\n-2 0").unwrap();
    let instance = Instance::new_from_file(file.path()).unwrap();
    assert_eq!(instance.n_clauses(), 3);
    let model = solve(&instance).model().cloned().unwrap();
    assert_eq!(model, Assignment::new(vec![false, false, false]));
    assert!(verify(&instance, &model).unwrap());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(Instance::new_from_file("/definitely/not/here.cnf").is_err());
}

// =============================================================================
// Phase transition smoke test
// =============================================================================

#[test]
fn test_satisfiable_fraction_drops_with_ratio() {
    let options = BatchOptions {
        var_range: 3..=10,
        ratios: vec![1.0, 8.0],
        trials: 20,
        seed: 1,
        ..BatchOptions::default()
    };
    let results = run_batch(&options).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].fraction() > 0.9, "{}", results[0]);
    assert!(results[1].fraction() < 0.3, "{}", results[1]);
}

#[test]
fn test_batch_is_reproducible() {
    let options = BatchOptions {
        var_range: 3..=7,
        ratios: integer_ratios(5),
        trials: 3,
        seed: 17,
        ..BatchOptions::default()
    };
    assert_eq!(run_batch(&options).unwrap(), run_batch(&options).unwrap());
}

#[test]
fn test_generated_instances_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(0);
    for n in 3..12 {
        let instance = generate_3sat(&mut rng, n, 4 * n).unwrap();
        assert!(instance
            .clauses()
            .iter()
            .flat_map(|cl| cl.lits.iter())
            .all(|lit| lit.var().get() <= n));
    }
}
