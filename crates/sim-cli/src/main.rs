mod cli;
mod commands;
mod config;
mod source;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sim_core::SimError;

fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr so the report on stdout stays clean.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let result = commands::load_config(cli.config.as_ref()).and_then(|config| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match &cli.command {
            cli::Commands::Scan(args) => commands::scan(args, config, &mut out),
            cli::Commands::Pair(args) => commands::pair(args, config, &mut out),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(err: &SimError) -> i32 {
    match err {
        SimError::Config(_) | SimError::Yaml(_) => 2,
        SimError::NoDocuments { .. } => 3,
        SimError::InputUnreadable { .. } | SimError::NotADirectory(_) => 4,
        _ => 1,
    }
}
