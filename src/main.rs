use cidr_tools::{commands, config, CliOpt};
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = config::init() {
        eprintln!("{} initializing logging: {e}", "Warning".yellow());
    }

    let opt = match CliOpt::try_parse() {
        Ok(opt) => opt,
        Err(e) => {
            if let Err(print_err) = e.print() {
                log::warn!("failed to print usage: {print_err}");
            }
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    log::info!("#Start main() {:?}", opt.command);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::run(&opt.command, &mut out).and_then(|ok| {
        out.flush()?;
        Ok(ok)
    });

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::debug!("command failed: {e}");
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
