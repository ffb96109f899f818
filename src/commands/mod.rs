mod cat_file;
mod hash_object;
mod init;
mod ls_tree;
mod write_tree;

use std::path::Path;

use anyhow::{Context, Result};

use cat_file::{CatFileMode, cat_file};
use hash_object::hash_object;
use init::init;
use ls_tree::ls_tree;
use write_tree::write_tree;

use crate::args::Command;
use crate::fs::Repository;

/// What a command wants printed on success.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    /// Text, printed with a trailing newline if it is not empty
    Message(String),
    /// Raw bytes, printed exactly as they are
    Bytes(Vec<u8>),
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        Output::Message(value)
    }
}

/// Calls the corresponding function to perform every command variant.
///
/// # Errors
///
/// This function will fail if there is no repository in `work_tree` (except for `init`) or if
/// the executed command returns an error.
pub fn execute_command(command: &Command, work_tree: &Path) -> Result<Output> {
    if !Repository::exists(work_tree) && matches!(command, Command::Init) {
        // Only command that can be executed without a repository already existing
        return init(work_tree).map(Output::from);
    }
    let repository = Repository::open(work_tree).context("could not open repository")?;

    match command {
        Command::Init => init(work_tree).map(Output::from), // always returns an "already a repository"
        Command::HashObject { write, file } => {
            hash_object(&repository, file, *write).map(Output::from)
        }
        Command::CatFile {
            pretty,
            kind,
            size,
            hash,
        } => {
            // clap makes sure exactly one of the flags is set
            let mode = match (*pretty, *kind, *size) {
                (true, _, _) => CatFileMode::Pretty,
                (_, true, _) => CatFileMode::Kind,
                _ => CatFileMode::Size,
            };
            cat_file(&repository, hash, mode)
        }
        Command::LsTree {
            name_only,
            recursive,
            hash,
        } => ls_tree(&repository, hash, *name_only, *recursive).map(Output::from),
        Command::WriteTree => write_tree(&repository).map(Output::from),
    }
}
