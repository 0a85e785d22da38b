// Command Runner Port
// Abstraction over the host's process-spawning facility

use async_trait::async_trait;

use crate::domain::CommandOutput;
use crate::error::Result;

/// Command Runner trait
///
/// Implementations:
/// - ShellRunner (infra-system): spawns the system shell
/// - MockCommandRunner (below): scripted behavior for tests
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command string through the system shell and capture its
    /// output. Resolves exactly once. No timeout: a hanging command
    /// never resolves.
    ///
    /// # Errors
    /// - `HostIoError::SpawnFailed` if the shell cannot be started
    /// - `HostIoError::CommandFailed` on non-zero exit or signal death
    async fn run(&self, command: &str) -> Result<CommandOutput>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::HostIoError;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Always succeed with fixed output
        Success(CommandOutput),
        /// Always fail with message
        Fail(String),
    }

    /// Mock Command Runner for testing
    pub struct MockCommandRunner {
        behavior: Arc<Mutex<MockBehavior>>,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockCommandRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn new_success(stdout: impl Into<String>) -> Self {
            Self::new(MockBehavior::Success(CommandOutput {
                stdout: stdout.into(),
                stderr: String::new(),
            }))
        }

        pub fn new_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::Fail(message.into()))
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl CommandRunner for MockCommandRunner {
        async fn run(&self, _command: &str) -> Result<CommandOutput> {
            *self.call_count.lock().unwrap() += 1;

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Success(output) => Ok(output),
                MockBehavior::Fail(msg) => Err(HostIoError::SpawnFailed(msg)),
            }
        }
    }
}
