// MPS-CHECK - tensor stack and Metal backend diagnostic
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use mps_check::config::accelerator;
use mps_check::log_debug;
use mps_check::probe::{self, MetalProbe, RunOptions};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Metal device ordinal to probe
    #[arg(long, default_value_t = accelerator::DEFAULT_ORDINAL)]
    ordinal: usize,

    /// Exit with an error when the Metal device is not found
    #[arg(long)]
    require_accelerator: bool,

    /// Print a JSON report after the tensors
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    log_debug!("=== MPS-CHECK STARTED (ordinal {}) ===", args.ordinal);

    let probe = MetalProbe::new(args.ordinal);
    let options = RunOptions {
        require_accelerator: args.require_accelerator,
        json: args.json,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = probe::run(&mut out, &probe, &options);
    out.flush()?;

    result.map(|_| ())
}
