// Hostio Infrastructure - System Adapters
// Implements: FileStore, CommandRunner

pub mod file_store_impl;
pub mod shell_runner;

pub use file_store_impl::TokioFileStore;
pub use shell_runner::ShellRunner;
