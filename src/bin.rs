use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use pv_plant::{
    deg_to_rad, init_logging, run_sweep, LogLevel, ModuleMount, Plant, PlantResult,
    SimulationConfig, SweepReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Layout {
    Uniform,
    Flattened,
}

/// Sweeps the light source across the sky and prints plant output.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Inputs {
    /// JSON simulation config; overrides --layout when given
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Layout::Flattened)]
    layout: Layout,

    /// Orientation of every mount in the uniform layout, in degrees
    #[arg(long, default_value_t = 90.0, allow_hyphen_values = true)]
    orientation_deg: f64,

    /// Print the full sweep report as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

fn load(args: &Inputs) -> PlantResult<(SimulationConfig, Plant)> {
    match &args.config {
        Some(path) => {
            let config = SimulationConfig::from_path(path)?;
            let plant = config.plant.build()?;
            Ok((config, plant))
        }
        None => {
            let plant = match args.layout {
                Layout::Uniform => {
                    Plant::uniform(ModuleMount::oriented(deg_to_rad(args.orientation_deg)))
                }
                Layout::Flattened => Plant::flattened_layout(),
            };
            Ok((SimulationConfig::default(), plant))
        }
    }
}

fn print_report(plant: &Plant, report: &SweepReport) {
    for line in plant.report() {
        println!("  {}", line);
    }
    for s in &report.samples {
        println!("{}", s);
    }
    println!(
        "mean={:.2} std_dev={:.2} peak={:.2} energy={:.2}",
        report.stats.mean, report.stats.std_dev, report.stats.peak, report.stats.energy
    );
}

fn run(args: &Inputs) -> PlantResult<()> {
    let (mut config, plant) = load(args)?;
    if let Some(level) = args.log_level {
        config.log.level = level;
    }
    init_logging(&config.log);

    let probe = config.probe.build();
    let report = run_sweep(&plant, &probe, &config.sweep)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&plant, &report);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Inputs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pv_sweep: {}", e);
            ExitCode::FAILURE
        }
    }
}
