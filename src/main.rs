use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use min_triangle_path::cli::{self, Cli, CliError};
use min_triangle_path::{exitcode, logging};

fn try_main() -> Result<u8> {
    let cli = Cli::parse();
    let input = cli::open_input(cli.input.as_deref())?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let status = cli::run(&cli, input, &mut writer).context("failed to compute minimal path")?;
    writer.flush().context("failed to flush output")?;

    Ok(status)
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            let status = if let Some(cli_error) = err.downcast_ref::<CliError>() {
                cli_error.exit_code()
            } else if err.downcast_ref::<io::Error>().is_some() {
                exitcode::IOERR
            } else {
                exitcode::SOFTWARE
            };
            error!(error = %format!("{err:#}"), status, "run failed");
            ExitCode::from(status)
        }
    }
}
