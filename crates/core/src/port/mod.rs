// Port Layer - Interfaces for the host adapters

pub mod command_runner;
pub mod file_store;

// Re-exports
pub use command_runner::CommandRunner;
pub use file_store::FileStore;
