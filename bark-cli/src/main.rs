mod config;

use anyhow::Result;
use clap::Parser;
use config::{load_options, Overrides};
use dotenv::dotenv;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show bark's styled log output", long_about = None)]
struct Args {
    /// Options file (toml, yaml or json). BARK_* variables apply on top.
    #[arg(short, long)]
    config: Option<String>,

    /// Show debug messages
    #[arg(short, long)]
    debug: bool,

    #[arg(long)]
    info_hex: Option<String>,

    #[arg(long)]
    warn_hex: Option<String>,

    #[arg(long)]
    error_hex: Option<String>,

    #[arg(long)]
    debug_hex: Option<String>,

    /// Timestamp layout, e.g. "15:04:05" or "2006-01-02 15:04"
    #[arg(short, long)]
    time_format: Option<String>,

    /// Pause on a debug breakpoint until Enter is pressed
    #[arg(long)]
    wait: bool,

    /// Also route `tracing` events through bark's formatter
    #[arg(long)]
    tracing: bool,

    /// Finish with a fatal message and exit status 1
    #[arg(long)]
    fatal: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            info_hex: self.info_hex.clone(),
            warn_hex: self.warn_hex.clone(),
            error_hex: self.error_hex.clone(),
            debug_hex: self.debug_hex.clone(),
            time_format: self.time_format.clone(),
        }
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let options = args.overrides().apply(load_options(args.config.as_deref())?);

    bark::init(options.clone());
    bark::set_debug_level(args.debug);

    bark::info("Everything is running smoothly");
    bark::warn!("Disk usage at {}%", 91);
    bark::error("Could not reach the update server");
    bark::debug!("Effective time layout: {:?}", options.merge().time_format());

    if args.wait {
        bark::debug_and_wait("Paused before shutdown");
    }

    if args.tracing {
        bark::setup_tracing(options, args.debug)?;
        tracing::info!(source = "tracing", "Events share the same style");
        tracing::debug!("Visible with --debug");
    }

    if args.fatal {
        let err = bark::new_error!("unrecoverable state after {} steps", 3);
        bark::fatal(&err.message());
    }

    Ok(())
}
