use tracing_subscriber::EnvFilter;

use autocrop::{CropParams, CropReport, crop_with_params};

use super::args::CliArgs;

pub const USAGE: &str = "Usage: autocrop <image_path>";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Crop the requested image and print exactly one outcome line.
///
/// Crop failures are reported on stdout like any other outcome and do not
/// produce an error return.
pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let Some(input) = args.input else {
        println!("{}", USAGE);
        return Ok(());
    };

    let params = CropParams {
        output: args.output,
    };
    let result = crop_with_params(&input, &params);
    let report = CropReport::from_result(&input, &result);

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.to_line());
    }

    Ok(())
}
