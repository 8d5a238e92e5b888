//! Error types for the exit-time deletion registry.

use thiserror::Error;

/// Errors surfaced to callers of the registry.
///
/// Per-path deletion failures during a drain are not represented here; they
/// are recorded in [`DrainReport`](crate::DrainReport) and never propagated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
	/// The registry has started draining; new paths can no longer be honored.
	#[error("shutdown in progress")]
	ShutdownInProgress,

	/// The termination hook could not be installed.
	#[error("failed to install termination hook: {0}")]
	HookInstall(String),
}

/// Result alias for registry operations.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
