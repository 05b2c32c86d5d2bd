//! tera-render-ctl: render Tera templates from the shell through `tera_render`.

mod cli;
mod cli_config;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config carries the default log filter, so it is read before logging starts.
    let loaded = cli_config::load_cli_config(cli.config.as_deref());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&loaded.config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    loaded.report();
    let config = &loaded.config;

    let result = match cli.command {
        Command::Render(args) => commands::handle_render_command(args, config),
        Command::Batch(args) => commands::handle_batch_command(args, config),
        Command::Info => commands::handle_info_command(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}
