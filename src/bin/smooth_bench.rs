//! Time every box-smoothing strategy over a worker-count sweep.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin smooth-bench
//! cargo run --release --bin smooth-bench -- --dim 2000 --halfwidth 3 --max-workers 8
//! ```

use anyhow::Context;
use box_smoother::harness::{run_benchmark, BenchConfig};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "smooth-bench")]
#[command(about = "Benchmark serial and parallel box smoothing strategies")]
struct Args {
    /// Grid side length.
    #[arg(long, default_value_t = 6000)]
    dim: usize,

    /// Kernel half-width (window side is 2h+1).
    #[arg(long, default_value_t = 2)]
    halfwidth: usize,

    /// Largest worker count in the 1, 2, 4, ... sweep.
    #[arg(long, default_value_t = 32)]
    max_workers: usize,

    /// Skip the cache warm-up pass.
    #[arg(long)]
    no_warmup: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    let config = BenchConfig {
        dim: args.dim,
        halfwidth: args.halfwidth,
        max_workers: args.max_workers,
        warmup: !args.no_warmup,
    };
    info!("Configuration: {:?}", config);

    let timings = run_benchmark(&config).context("Benchmark failed")?;

    let mut current_workers = None;
    for timing in &timings {
        if timing.workers.is_some() && timing.workers != current_workers {
            current_workers = timing.workers;
            if let Some(n) = current_workers {
                println!("Threads = {n}");
            }
        }
        println!("{timing}");
    }

    Ok(())
}
