//! Print an activity report for one record
//! Usage: cargo run --bin steptrack_report -- "<record>" [weight_kg] [height_m]

use steptrack::config::TrackerConfig;
use steptrack::tools::activity::record_report;
use tracing_subscriber::EnvFilter;

fn parse_arg(args: &[String], index: usize, name: &str) -> Result<Option<f64>, String> {
    args.get(index)
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| format!("{} must be a number, got {:?}", name, s))
        })
        .transpose()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("steptrack=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(record) = args.get(1) else {
        eprintln!("Usage: steptrack_report <record> [weight_kg] [height_m]");
        eprintln!("  record: \"steps,duration\" or \"steps,activity,duration\"");
        std::process::exit(2);
    };

    let config = TrackerConfig::from_env()?;
    let profile = config.profile_or_default(
        parse_arg(&args, 2, "weight_kg")?,
        parse_arg(&args, 3, "height_m")?,
    );

    let report = record_report(record, &profile)?;

    print!("{}", report);
    Ok(())
}
