//! Broadcasts the Eddystone-URL configured in an INI file, or stops
//! advertising when no URL is configured.

use clap::Parser;
use rustybeacon::{open_device, BeaconConfig, Error};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_STATUS_HELP: &str = "\
Exit status:
  0  advertising configured
  1  configuration file missing or malformed
  2  invalid command line arguments
  3  URL cannot be encoded, or no usable controller
  4  a controller command failed";

/// Eddystone-URL beacon over raw HCI
#[derive(Parser, Debug)]
#[clap(version, after_help = EXIT_STATUS_HELP)]
struct Opts {
    /// INI file with an `url` key in its `[eddystone]` section
    config: PathBuf,

    /// Controller index (hciN); defaults to the first controller that is up
    #[clap(short, long)]
    device: Option<u16>,
}

fn run(opts: &Opts) -> Result<(), Error> {
    let config = BeaconConfig::load(&opts.config)?;
    let mut device = open_device(opts.device)?;

    match config.url {
        Some(url) => {
            rustybeacon::set_eddystone_url(&mut device, &url)?;
            log::info!("eddystone transmitting {}...", url);
        }
        None => {
            rustybeacon::disable_advertising(&mut device)?;
            log::info!("disabled...");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
