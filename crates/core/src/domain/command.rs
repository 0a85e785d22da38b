// Command Result Model

use serde::{Deserialize, Serialize};

/// Captured output of a command that exited zero.
///
/// Both streams are fully buffered until process exit and decoded
/// lossily to text. Produced once per successful execution, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}
