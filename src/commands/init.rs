use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::Constants;
use crate::fs::Repository;

/// Creates a new repository inside `work_tree`.
///
/// # Errors
///
/// This function will fail if any of the operations related with the creation of directories and
/// files fail.
pub fn init(work_tree: &Path) -> Result<String> {
    if Repository::exists(work_tree) {
        return Ok("The directory is already a repository".into());
    }

    for p in [
        Constants::repository_path(work_tree),
        Constants::objects_path(work_tree),
        Constants::refs_path(work_tree),
    ] {
        fs::create_dir_all(&p)
            .with_context(|| format!("could not create repository subdirectory {:?}", p))?;
    }

    // creating default head file
    fs::write(Constants::head_path(work_tree), Constants::default_head_content())
        .context("could not write to HEAD when initializing")?;

    log::info!("initialized repository in {:?}", Constants::repository_path(work_tree));
    Ok("Initialized repository".into())
}
