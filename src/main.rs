use clap::{Parser, Subcommand};
use modern_clock::config::{self, Config};
use modern_clock::time_source::SystemTimeSource;
use modern_clock::{commands, tui};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Log file value that disables logging
const NO_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "modern-clock", version)]
#[command(about = "Clock and stopwatch for the terminal", long_about = "Clock and stopwatch for the terminal\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Log filter, e.g. "debug" or "modern_clock::tui=trace" (overrides config)
    #[arg(short = 'L', long, global = true)]
    log_level: Option<String>,

    /// Log file path; /dev/null disables logging (overrides config)
    #[arg(short = 'F', long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current local time and date
    Clock,
    /// Format millisecond counts as MM:SS.CC stopwatch readings
    Format {
        /// Milliseconds to format (e.g., 61005)
        #[arg(required = true)]
        millis: Vec<u64>,
    },
    /// Display current configuration
    Config,
}

impl Cli {
    /// Log filter and file, command line first, then config
    fn log_settings<'a>(&'a self, config: &'a Config) -> (&'a str, &'a str) {
        (
            self.log_level.as_deref().unwrap_or(&config.log_level),
            self.log_file.as_deref().unwrap_or(&config.log_file),
        )
    }
}

/// Filter used when the configured directive does not parse
const FALLBACK_LOG_FILTER: &str = "info";

/// Parse a log filter directive, falling back to `info`
fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log level {:?} ({}), using {}", directive, e, FALLBACK_LOG_FILTER);
        EnvFilter::new(FALLBACK_LOG_FILTER)
    })
}

/// Send tracing output to `log_file`, filtered by `filter`
///
/// Failures are reported on stderr and leave logging off.
fn init_logging(filter: &str, log_file: &str) {
    let filter = log_filter(filter);

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn print_config(cfg: &Config) {
    match config::get_config_path() {
        Some(path) => println!(
            "Configuration File: {} (Exists: {})",
            path.display(),
            if path.exists() { "yes" } else { "no" }
        ),
        None => println!("Configuration File: unable to determine config path"),
    }

    println!();
    println!("log_level = {:?}", cfg.log_level);
    println!("log_file = {:?}", cfg.log_file);
    println!("time_format = {:?}", cfg.time_format);
    println!("date_format = {:?}", cfg.date_format);
    println!("clock_refresh_ms = {}", cfg.clock_refresh_ms);
    println!("stopwatch_tick_ms = {}", cfg.stopwatch_tick_ms);
    println!();
    println!("[display]");
    let display = &cfg.display;
    for (key, color) in [
        ("selection_fg", display.selection_fg),
        ("start_fg", display.start_fg),
        ("stop_fg", display.stop_fg),
        ("dim_fg", display.dim_fg),
        ("error_fg", display.error_fg),
    ] {
        println!("{} = \"{}\"", key, color);
    }
}

fn execute_command(config: &Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Clock => commands::clock::run(config, &SystemTimeSource),
        Commands::Format { millis } => commands::format::run(&millis),
        Commands::Config => {
            print_config(config);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // A broken config file still lets the program start on defaults
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(format!("Config error: {:#}", e))),
    };

    let (log_filter, log_file) = cli.log_settings(&config);
    if log_file != NO_LOG_FILE {
        init_logging(log_filter, log_file);
    }
    if let Some(message) = &config_error {
        tracing::error!("{}", message);
    }

    let Some(command) = cli.command else {
        if let Err(e) = tui::run(config, Arc::new(SystemTimeSource), config_error).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Some(message) = &config_error {
        eprintln!("{}", message);
    }

    if let Err(e) = execute_command(&config, command) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
