//! Command-line entry point for the Fieldlink device agent.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use fieldlink_api::build_registry;
use fieldlink_core::{AgentConfig, FileParameterStore};
use fieldlink_system::{
    Buzzer, BuzzerPattern, LedColor, LedStatus, NetworkInfo, PinDriver, Power, ShellRunner,
    StatusLed, application_version, value_or_error,
};

/// Fieldlink device agent - cloud direct methods for field devices.
#[derive(Parser, Debug)]
#[command(name = "fieldlink")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the agent configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wireless interface to report, overriding the configuration.
    #[arg(short, long)]
    interface: Option<String>,

    /// Emit JSON-formatted logs.
    #[arg(long)]
    json_logging: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(json: bool, verbose: bool) {
    let default_directive = if verbose { "fieldlink=debug" } else { "fieldlink=info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    if json {
        // JSON format for production/container environments
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        // Human-readable format for development
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.json_logging, args.verbose);

    let mut config = AgentConfig::load(args.config.as_deref())?;
    if let Some(interface) = args.interface {
        config.interface = interface;
    }

    let runner = Arc::new(ShellRunner);
    let pins = Arc::new(PinDriver::new(runner.clone()));
    if let Err(err) = pins.initialize() {
        warn!(%err, "status indicators not initialized");
    }

    let mut led = StatusLed::new(pins.clone());
    let buzzer = Buzzer::new(pins);

    // Starting up: blinking orange until the agent is ready.
    led.set_status(LedStatus::blinking(LedColor::Orange));

    let version = value_or_error(application_version(&config.manifest_path));
    info!(%version, "fieldlink agent starting");

    let network = NetworkInfo::new(runner.clone());
    info!(
        ssid = %value_or_error(network.wireless_ssid()),
        address = %value_or_error(network.wireless_address(&config.interface)),
        interface = %config.interface,
        "wireless connection"
    );

    let store = Arc::new(FileParameterStore::open(&config.parameters_path)?);
    let power = Power::new(runner);
    let registry = build_registry(store, power);
    info!(methods = ?registry.names(), "direct methods registered");

    // Ready: steady green, short beep.
    led.set_status(LedStatus::steady(LedColor::Green));
    buzzer.beep(BuzzerPattern::Short);
    info!("fieldlink agent ready");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    led.set_status(LedStatus::steady(LedColor::Off));
    buzzer.beep(BuzzerPattern::Off);

    Ok(())
}
