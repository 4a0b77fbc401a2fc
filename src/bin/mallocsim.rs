use mallocsim::*;

use anyhow::Context;
use clap::Parser;

/// A contiguous-memory allocation simulator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the free-region list
    #[arg(value_parser = clap::value_parser!(PathBuf))]
    memory: PathBuf,

    /// Path to the process request list
    #[arg(value_parser = clap::value_parser!(PathBuf))]
    requests: PathBuf,

    /// Placement policies to simulate, one run and one output file each
    #[arg(value_enum, num_args = 1.., required = true)]
    policies: Vec<Policy>,
}

fn main() -> anyhow::Result<()> {
    let cli = Args::parse();
    let regions = read_regions(&cli.memory)
        .with_context(|| format!("reading region list from {}", cli.memory.display()))?;
    let requests = read_requests(&cli.requests)
        .with_context(|| format!("reading request list from {}", cli.requests.display()))?;

    let total = Instant::now();
    for (policy, log) in simulate(&cli.policies, &regions, &requests) {
        let mut rendered = log.iter().join("\n");
        rendered.push('\n');
        let dest = PathBuf::from(format!("{policy}output.data"));
        std::fs::write(&dest, rendered)
            .with_context(|| format!("writing log to {}", dest.display()))?;
        println!("{policy}: {} log lines -> {}", log.len(), dest.display());
    }
    println!(
        "Simulation time was {} microseconds.",
        total.elapsed().as_micros()
    );

    Ok(())
}
