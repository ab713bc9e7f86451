mod cli;
mod config;
mod monitor;
mod probe;
mod report;
mod system;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{Config, load_config};
use crate::monitor::{
    EvaluationResult, MetricsProvider, SnmpTarget, SnmpWalkProvider, Status, SystemClock,
};
use crate::probe::{ProbeError, ProbeSettings, run_probe, with_watchdog};

fn init_json_logging(default_filter: &str) {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

async fn check<P, F>(cli: &Cli, connect: F) -> Result<EvaluationResult, ProbeError>
where
    P: MetricsProvider,
    F: FnOnce(SnmpTarget) -> P,
{
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let schedule = config.exclusion_schedule()?;
    if !schedule.is_empty() {
        log::info!("exclusion_schedule_loaded windows={}", schedule.window_count());
    }

    let settings = ProbeSettings {
        thresholds: cli.thresholds(&config.thresholds),
        schedule,
    };
    let mut provider = connect(cli.snmp_target()?);

    run_probe(&settings, &mut provider, SystemClock).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(error) => {
            let _ = error.print();
            println!("UNKNOWN: invalid arguments ({})", error.kind());
            return ExitCode::from(Status::Unknown.exit_code() as u8);
        }
    };

    init_json_logging(cli.log_filter());

    let (status, line) = report::outcome(
        with_watchdog(
            cli.timeout,
            check(&cli, |target| SnmpWalkProvider::new(target, cli.timeout)),
        )
        .await,
    );

    println!("{}", line);
    ExitCode::from(status.exit_code() as u8)
}
