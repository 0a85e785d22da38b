// Domain Layer - Result shapes crossing the binding boundary

pub mod command;
pub mod file;

// Re-exports
pub use command::CommandOutput;
pub use file::{FileContents, PathKind, ReadOptions, TextEncoding};
