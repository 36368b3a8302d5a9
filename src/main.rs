use bfsat::errors::*;
use bfsat::experiment::{integer_ratios, run_batch, run_single, BatchOptions, Origin, SingleReport};
use bfsat::{Instance, SolverOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(name = "bfsat", about = "Brute-force 3-SAT solver and phase transition explorer")]
struct Opt {
    /// Verbosity level (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Solve one random instance (or a DIMACS file) and print the result
    Single {
        /// Number of variables
        #[structopt(required_unless = "input")]
        n_vars: Option<usize>,
        /// Number of clauses
        #[structopt(required_unless = "input")]
        n_clauses: Option<usize>,
        /// Seed for the instance generator (random if omitted)
        #[structopt(long)]
        seed: Option<u64>,
        /// Solve this DIMACS CNF file instead of a random instance
        #[structopt(long, parse(from_os_str))]
        input: Option<PathBuf>,
        /// Give up after this many assignments
        #[structopt(long)]
        max_assignments: Option<u64>,
    },
    /// Estimate the satisfiable fraction for ratios 1..=max_ratio
    Batch {
        /// Largest variable count; counts run from 3
        max_vars: usize,
        /// Largest clause/variable ratio
        max_ratio: usize,
        /// Trials per variable count and ratio
        trials: usize,
        /// Base seed
        #[structopt(long, default_value = "0")]
        seed: u64,
        /// Run trials on the current thread only
        #[structopt(long)]
        sequential: bool,
        /// Worker threads (0 = one per core)
        #[structopt(long, default_value = "0")]
        threads: usize,
        /// Give up on an instance after this many assignments
        #[structopt(long)]
        max_assignments: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn run(opt: Opt) -> Result<()> {
    match opt.cmd {
        Command::Single {
            n_vars,
            n_clauses,
            seed,
            input,
            max_assignments,
        } => {
            let options = SolverOptions { max_assignments };
            let report = match input {
                Some(path) => {
                    let instance = Instance::new_from_file(&path)
                        .chain_err(|| format!("reading {}", path.display()))?;
                    SingleReport::new(instance, Origin::File(path), &options)?
                }
                None => {
                    let mut rng = match seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                    let n_vars = n_vars.ok_or("missing variable count")?;
                    let n_clauses = n_clauses.ok_or("missing clause count")?;
                    run_single(&mut rng, n_vars, n_clauses, &options)?
                }
            };
            print!("{}", report);
        }
        Command::Batch {
            max_vars,
            max_ratio,
            trials,
            seed,
            sequential,
            threads,
            max_assignments,
        } => {
            if threads > 0 {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()
                    .chain_err(|| "building thread pool")?;
            }
            let options = BatchOptions {
                var_range: 3..=max_vars,
                ratios: integer_ratios(max_ratio),
                trials,
                seed,
                parallel: !sequential,
                solver: SolverOptions { max_assignments },
                ..BatchOptions::default()
            };
            for result in run_batch(&options)? {
                println!("{}", result);
            }
        }
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    init_logging(opt.verbose);

    if let Err(e) = run(opt) {
        eprintln!("Error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
