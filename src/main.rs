use anyhow::Result;
use clap::Parser;
use tracelink::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tracelink: error: {e:#}");
            std::process::exit(2);
        }
    };

    // Routes log::info!() etc. to /tmp/tracelink_debug.log; DEBUG_LEVEL
    // overrides the flag, which overrides the config file.
    tracelink::debug::init_log_bridge(cli.effective_log_level(&config));
    log::info!("Starting tracelink filter");

    cli::run(&cli, &config)
}
