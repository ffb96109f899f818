use std::path::{Path, PathBuf};

pub struct Constants;

impl Constants {
    pub const REPOSITORY_FOLDER_NAME: &str = ".git";
    pub const OBJECTS_FOLDER_NAME: &str = "objects";
    pub const REFS_FOLDER_NAME: &str = "refs";
    pub const HEAD_FILE_NAME: &str = "HEAD";
    pub const HEAD_CONTENT_HEADER: &str = "ref: ";
    pub const HEADS_FOLDER_NAME: &str = "heads";
    pub const DEFAULT_BRANCH_NAME: &str = "main";
    pub const WORK_TREE_ENV: &str = "GITC_WORK_TREE";

    /// The location of the .git folder inside `work_tree`
    pub fn repository_path(work_tree: &Path) -> PathBuf {
        work_tree.join(Constants::REPOSITORY_FOLDER_NAME)
    }

    pub fn objects_path(work_tree: &Path) -> PathBuf {
        Constants::repository_path(work_tree).join(Constants::OBJECTS_FOLDER_NAME)
    }

    pub fn refs_path(work_tree: &Path) -> PathBuf {
        Constants::repository_path(work_tree).join(Constants::REFS_FOLDER_NAME)
    }

    pub fn head_path(work_tree: &Path) -> PathBuf {
        Constants::repository_path(work_tree).join(Constants::HEAD_FILE_NAME)
    }

    pub fn default_head_content() -> String {
        format!(
            "{}{}/{}/{}\n",
            Constants::HEAD_CONTENT_HEADER,
            Constants::REFS_FOLDER_NAME,
            Constants::HEADS_FOLDER_NAME,
            Constants::DEFAULT_BRANCH_NAME
        )
    }
}
