use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::Constants;

/// Contains the commands passed to the program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Runs as if started in this directory instead of the current one
    #[arg(short = 'C', long, global = true, env = Constants::WORK_TREE_ENV, default_value = ".")]
    pub work_tree: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// A list of subcommands the program can perform
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates a new, empty repository
    Init,

    /// Computes the object hash of a file, optionally storing it as a blob
    HashObject {
        /// Actually writes the object into the object database
        #[arg(short)]
        write: bool,
        /// File to hash
        file: PathBuf,
    },

    /// Shows the content, type or size of a stored object
    #[command(group(ArgGroup::new("output").required(true).args(["pretty", "kind", "size"])))]
    CatFile {
        /// Prints the object content
        #[arg(short = 'p')]
        pretty: bool,
        /// Prints the object type
        #[arg(short = 't')]
        kind: bool,
        /// Prints the object size
        #[arg(short = 's')]
        size: bool,
        /// Hash of the object to show
        hash: String,
    },

    /// Lists the entries of a tree object
    LsTree {
        /// Shows only the entry names
        #[arg(long)]
        name_only: bool,
        /// Lists the files of every subtree, with their whole path
        #[arg(short)]
        recursive: bool,
        /// Hash of the tree to list
        hash: String,
    },

    /// Creates a tree object from the current work tree
    WriteTree,
}
