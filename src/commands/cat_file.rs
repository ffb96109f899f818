use std::str::FromStr;

use anyhow::{Context, Result};

use crate::commands::Output;
use crate::fs::Repository;
use crate::hashing::Hash;
use crate::Error;
use crate::object::{ObjectType, blob, tree};

/// Which part of the object `cat_file` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// The content of a blob or the listing of a tree
    Pretty,
    Kind,
    Size,
}

pub fn cat_file(repository: &Repository, hash: &str, mode: CatFileMode) -> Result<Output> {
    let hash = Hash::from_str(hash).context("object hash was invalid")?;

    let store = repository.store();

    let output = match mode {
        CatFileMode::Pretty => match blob::read_blob(store, &hash) {
            Ok(data) => Output::Bytes(data),
            Err(Error::WrongKind {
                found: ObjectType::Tree,
                ..
            }) => {
                let entries = tree::read_tree(store, &hash)
                    .with_context(|| format!("could not read tree {}", hash))?;
                let lines: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
                Output::Message(lines.join("\n"))
            }
            Err(e) => return Err(e).with_context(|| format!("could not read blob {}", hash)),
        },
        CatFileMode::Kind | CatFileMode::Size => {
            let object = store
                .get(&hash)
                .with_context(|| format!("could not read object {}", hash))?;
            if mode == CatFileMode::Kind {
                Output::Message(object.kind.to_string())
            } else {
                Output::Message(object.data.len().to_string())
            }
        }
    };

    Ok(output)
}
