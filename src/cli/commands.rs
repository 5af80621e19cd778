//! Command dispatch

use std::io::Write;
use std::sync::Arc;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::FetchService;
use crate::application::{ApplicationError, OutputOptions};
use crate::cli::args::{Cli, Commands, ConfigCommands, FetchArgs};
use crate::cli::error::CliResult;
use crate::config::{config_path, Settings};
use crate::domain::DEFAULT_OUT_DIR;

/// Run the parsed command, writing command output to `out`.
///
/// `out` is flushed before returning; a failed flush is an error.
pub fn execute_command(cli: &Cli, out: &mut dyn Write) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Fetch(args)) => {
            // Source check must not depend on settings
            args.to_request(DEFAULT_OUT_DIR).validate()?;
            let settings = Settings::load(cli.config.as_deref())?;
            cmd_fetch(args, settings, out)?
        }
        Some(Commands::Config { command }) => cmd_config(cli, command, out)?,
        Some(Commands::Completion { shell }) => cmd_completion(*shell, out)?,
        None => cmd_help(out)?,
    }
    out.flush().map_err(|e| io_err("flush output", e))?;
    Ok(())
}

#[instrument(skip(settings, out))]
fn cmd_fetch(args: &FetchArgs, settings: Settings, out: &mut dyn Write) -> CliResult<()> {
    let request = args.to_request(&settings.out_dir);
    let options = OutputOptions::from(&args.output);
    let service = FetchService::new(Arc::new(settings));
    let format = service.run(&request, &options, out)?;
    debug!("cmd_fetch: rendered as {}", format);
    Ok(())
}

#[instrument(skip(cli, out))]
fn cmd_config(cli: &Cli, command: &ConfigCommands, out: &mut dyn Write) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            write!(out, "{}", settings.to_toml()?).map_err(|e| io_err("write config", e))?;
        }
        ConfigCommands::Path => match config_path(cli.config.as_deref()) {
            Some(path) => {
                writeln!(out, "{}", path.display()).map_err(|e| io_err("write config path", e))?
            }
            None => writeln!(out, "no config directory available")
                .map_err(|e| io_err("write config path", e))?,
        },
    }
    Ok(())
}

fn cmd_completion(shell: clap_complete::Shell, out: &mut dyn Write) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    // generate panics on write errors, so render into memory first
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut script);
    out.write_all(&script).map_err(|e| io_err("write completions", e))?;
    Ok(())
}

fn cmd_help(out: &mut dyn Write) -> CliResult<()> {
    let help = Cli::command().render_help();
    write!(out, "{}", help).map_err(|e| io_err("write help", e))?;
    Ok(())
}

fn io_err(context: &str, source: std::io::Error) -> ApplicationError {
    ApplicationError::io(context, source)
}
