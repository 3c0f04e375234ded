use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use container_bench::{
    BenchError, DEFAULT_BLOCK_SIZE, SampleData, Timer,
    report::write_csv,
    suite::{ContainerKind, SuiteConfig, run_suite},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "container-bench",
    about = "Times insertion, removal and search across standard containers",
    version,
    rename_all = "kebab-case"
)]
pub struct BenchmarkCmd {
    /// Number of operations accumulated into one size bucket
    #[arg(short = 'b', long = "block-size", default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
    /// Read records from this file instead of standard input
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,
    /// Containers to measure; all of them when omitted
    #[arg(short = 'c', long = "containers", value_enum, num_args = 1..)]
    containers: Vec<ContainerKind>,
    /// Seed for the sample shuffle
    #[arg(long = "seed")]
    seed: Option<u64>,
    /// Emit debug diagnostics
    #[arg(short = 'v', long = "verbose", default_value = "false")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = BenchmarkCmd::parse();
    init_tracing(args.verbose);

    let timer = Timer::with_message("total elapsed time is ");
    let result = run(args);
    timer.finish();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        },
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: BenchmarkCmd) -> Result<(), BenchError> {
    let config = SuiteConfig::new(args.block_size)?.with_containers(args.containers);

    let sample = match &args.input {
        Some(path) => load_sample(BufReader::new(File::open(path)?), args.seed)?,
        None => load_sample(io::stdin().lock(), args.seed)?,
    };
    tracing::info!("loaded {} records", sample.len());

    let matrix = run_suite(&config, &sample)?;

    write_csv(&matrix, BufWriter::new(io::stdout().lock()))?;
    Ok(())
}

fn load_sample<B: io::BufRead>(reader: B, seed: Option<u64>) -> io::Result<SampleData> {
    match seed {
        Some(seed) => SampleData::read_with_rng(reader, &mut StdRng::seed_from_u64(seed)),
        None => SampleData::read(reader),
    }
}
