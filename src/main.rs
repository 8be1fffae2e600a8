//! `cpu-schedule`: runs a process batch through the scheduling policies
//! and prints the reports.
//!
//! Input is either a CSV file (`id,burst,arrival[,priority]` per line) or a
//! seeded random batch (`--generate N`). Set `RUST_LOG` to see scheduler
//! decisions on stderr, e.g. `RUST_LOG=u_cpu_schedule=debug`.

use std::io::{self, BufWriter, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_cpu_schedule::loader::load_file;
use u_cpu_schedule::models::Process;
use u_cpu_schedule::report::{render_all_text, render_json};
use u_cpu_schedule::scheduler::{Policy, DEFAULT_QUANTUM};
use u_cpu_schedule::simulation::{Simulation, SimulationConfig};
use u_cpu_schedule::workload::WorkloadGenerator;
use u_cpu_schedule::{Error, Result};

#[derive(Debug, Parser)]
#[command(name = "cpu-schedule", version, about = "Single-CPU process scheduling simulator")]
struct Cli {
    /// CSV file with one `id,burst,arrival[,priority]` record per line.
    file: Option<PathBuf>,

    /// Round-robin time quantum.
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM.get(), value_parser = clap::value_parser!(u32).range(1..))]
    quantum: u32,

    /// Policy to run; repeat to run several. Runs all when omitted.
    #[arg(short, long = "policy", value_enum)]
    policies: Vec<PolicyArg>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Run the policies on separate threads.
    #[arg(long)]
    parallel: bool,

    /// Generate N random processes instead of reading a file.
    #[arg(short, long, value_name = "N", conflicts_with = "file")]
    generate: Option<usize>,

    /// Seed for `--generate`.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Sjf,
    Priority,
    #[value(alias = "rr")]
    RoundRobin,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fcfs => Policy::Fcfs,
            PolicyArg::Sjf => Policy::Sjf,
            PolicyArg::Priority => Policy::Priority,
            PolicyArg::RoundRobin => Policy::RoundRobin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .compact(),
        )
        .init();
}

fn load(cli: &Cli) -> Result<Vec<Process>> {
    match (&cli.file, cli.generate) {
        (Some(path), _) => load_file(path),
        (None, Some(count)) => Ok(WorkloadGenerator::seeded(cli.seed).generate(count)),
        (None, None) => Err(Error::invalid_arguments(
            "expected a process file or --generate <N>",
        )),
    }
}

fn run(cli: Cli) -> Result<()> {
    let processes = load(&cli)?;

    // clap has already rejected zero
    let quantum = NonZeroU32::new(cli.quantum)
        .ok_or_else(|| Error::invalid_arguments("quantum must be at least 1"))?;
    let config = SimulationConfig::new()
        .with_quantum(quantum)
        .with_policies(cli.policies.iter().copied().map(Policy::from))
        .with_parallel(cli.parallel);

    let outcomes = Simulation::new(processes, config)?.run();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        Format::Text => render_all_text(&mut out, &outcomes)?,
        Format::Json => render_json(&mut out, &outcomes)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
