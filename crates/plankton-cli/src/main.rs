use anyhow::{Context, Result};
use clap::Parser;
use plankton_core::{Field, SimConfig};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Run a plankton field simulation and emit a JSON run summary.
#[derive(Parser, Debug)]
#[command(name = "plankton", version)]
struct Args {
    /// JSON file with a `SimConfig`; missing keys fall back to defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the field side length.
    #[arg(long)]
    size: Option<usize>,
    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 100)]
    ticks: usize,
    /// Record metrics every N ticks.
    #[arg(long, default_value_t = 10)]
    sample_every: usize,
    /// Print the field to stderr every N ticks (0 disables).
    #[arg(long, default_value_t = 0)]
    dump_every: usize,
    /// Write the summary here instead of stdout.
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(size) = args.size {
        config.field_size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("invalid simulation config")?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;

    let mut field = Field::from_config(&config).context("building field")?;
    let seeded = field.populate(&config).context("seeding field")?;
    info!(
        size = config.field_size,
        seed = config.seed,
        light = seeded.light,
        phytoplankton = seeded.phytoplankton,
        zooplankton = seeded.zooplankton,
        "field seeded"
    );

    if args.dump_every > 0 {
        eprint!("{field}");
    }
    let dump_every = args.dump_every;
    let summary = field
        .try_run_experiment_with_observer(args.ticks, args.sample_every, |field| {
            if dump_every > 0 && field.tick() % dump_every as u64 == 0 {
                eprint!("{field}");
            }
        })
        .context("running experiment")?;

    let json = serde_json::to_string_pretty(&summary)?;
    match &args.summary {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("writing summary {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
