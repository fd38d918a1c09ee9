//! check_bareos - Bareos catalog monitoring plugin
//!
//! Checks job, tape and backup state in the Bareos catalog and reports it
//! in the monitoring plugin format.

use check_bareos::cli::args::{generate_completions, Cli, Commands, OutputFormat};
use check_bareos::cli::output::print_output;
use check_bareos::cli::{init_logging, usage_result};
use check_bareos::commands::run_check;
use check_bareos::config::{Config, ConfigBuilder};
use check_bareos::domain::CheckResult;
use check_bareos::error::AppError;
use clap::Parser;

fn main() {
    // Parse CLI arguments; usage errors are reported as UNKNOWN
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_result(&e) {
            Some(result) => finish(&result, OutputFormat::default()),
            None => e.exit(),
        },
    };

    if let Commands::Completions { shell } = &cli.command {
        generate_completions(*shell);
        return;
    }

    let config = build_config(&cli);

    // The config file may turn on verbose output, so the logger waits for it
    let verbose = config.as_ref().map_or(cli.verbose, |c| c.general.verbose);
    init_logging(verbose);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            finish(&CheckResult::unknown(e.to_string()), cli.format.unwrap_or_default());
        }
    };

    let result = run_check(&cli.command, &config).unwrap_or_else(|e| {
        log::error!("{}", e);
        CheckResult::unknown(e.to_string())
    });

    finish(&result, config.general.format);
}

fn build_config(cli: &Cli) -> Result<Config, AppError> {
    let db = &cli.database;
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_format(cli.format)
        .with_host(db.host.clone())
        .with_port(db.port)
        .with_user(db.user.clone())
        .with_password(db.password.clone())
        .with_database(db.database.clone())
        .with_connect_timeout(db.connect_timeout)
        .build();
    Ok(config)
}

fn finish(result: &CheckResult, format: OutputFormat) -> ! {
    if let Err(e) = print_output(result, format) {
        log::error!("Failed to write output: {}", e);
    }
    std::process::exit(result.exit_code());
}
