// Hostio Core - Result Types & Ports
// NO infrastructure dependencies - tokio-backed adapters live in infra-system

pub mod domain;
pub mod error;
pub mod port;

pub use error::{HostIoError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
