#![allow(clippy::uninlined_format_args)]

mod args;
mod commands;
mod constants;
mod error;
mod fs;
mod hashing;
mod object;
mod utils;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

pub use constants::*;
pub use error::{Error, Result};

use commands::Output;

fn run(args: &args::Args) -> anyhow::Result<()> {
    let work_tree = utils::path::absolute_path(&args.work_tree)
        .context("could not resolve the work tree path")?;
    log::debug!("using work tree {:?}", work_tree);

    let output = commands::execute_command(&args.command, &work_tree)?;

    let mut stdout = std::io::stdout().lock();
    match output {
        Output::Message(message) if message.is_empty() => {}
        Output::Message(message) => writeln!(stdout, "{}", message)?,
        Output::Bytes(bytes) => stdout.write_all(&bytes)?,
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // a missing .env file is fine, the environment alone is enough
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = args::Args::parse_from(wild::args());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {:?}", "error:".red().bold(), error);
            ExitCode::FAILURE
        }
    }
}
