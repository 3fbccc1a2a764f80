pub mod collection;
pub mod config;
pub mod discovery;
pub mod error;
pub mod git;
pub mod layout;
pub mod picker;
pub mod progress;
pub mod render;
pub mod repo;
pub mod shell_exec;
pub mod status;
pub mod styling;

pub use collection::Collection;
pub use error::GitzError;
pub use repo::{RepoSeed, Repository};
pub use status::StatusSnapshot;
