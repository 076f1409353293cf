use clap::Parser;
use deform_map_painter::cli::{self, CliArgs};
use deform_map_painter::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init(if args.verbose { "debug" } else { "info" });

    info!("Starting deform_map_painter...");
    info!("Texture: {}x{}, mode: {:?}", args.width, args.height, args.mode);
    info!(
        "Scan: {}",
        if args.full_scan {
            "full"
        } else {
            "bounded"
        }
    );

    match cli::run(&args) {
        Ok(path) => {
            info!("Deformation map saved");
            println!("{}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Painting failed: {:#}", e);
            Err(e)
        }
    }
}
