use tracing::info;

use sqmean::api::compute_from_paths;
use sqmean::types::OutputFormat;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    info!("Numbers file: {:?}", args.numbers);
    if let Some(weights) = &args.weights {
        info!("Weights file: {:?}", weights);
    }

    let summary = compute_from_paths(&args.numbers, args.weights.as_deref())?;

    match args.format {
        OutputFormat::Text => println!("{}", summary.result),
        OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
    }

    Ok(())
}
