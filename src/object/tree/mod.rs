pub mod builder;
#[allow(clippy::module_inception)]
mod tree;
pub mod utils;

pub use builder::write_tree;
pub use tree::{Mode, TreeEntry, as_payload, from_payload, read_tree};
