use std::fmt;

/// Errors reported synchronously to the caller of a failing command.
///
/// Every variant leaves the kernel in its last-known-good state.
#[derive(Clone, Debug, PartialEq)]
pub enum KernelError {
    /// A body payload failed validation. `index` is the position inside an
    /// `initialize` batch (0 for a single spawn).
    InvalidBody { index: usize, reason: String },
    /// Malformed or unknown command payload.
    InvalidCommand(String),
    /// Solver parameters outside their allowed domain.
    InvalidConfig(String),
    /// The worker thread owning the kernel has exited.
    WorkerDisconnected,
}

impl KernelError {
    pub(crate) fn invalid_body(index: usize, reason: impl Into<String>) -> Self {
        KernelError::InvalidBody { index, reason: reason.into() }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidBody { index, reason } => {
                write!(f, "invalid body #{}: {}", index, reason)
            }
            KernelError::InvalidCommand(msg) => write!(f, "invalid command: {}", msg),
            KernelError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            KernelError::WorkerDisconnected => write!(f, "kernel worker disconnected"),
        }
    }
}

impl std::error::Error for KernelError {}

impl From<serde_json::Error> for KernelError {
    fn from(e: serde_json::Error) -> Self {
        KernelError::InvalidCommand(e.to_string())
    }
}
