//! Process-wide delete-on-exit handle.
//!
//! [`install`] schedules an [`AtExitHook`] that drains [`registry`] when the
//! process exits. Atexit handlers run newest first, so only cleanup hooks
//! installed after the drain hook are guaranteed to run before it. Call
//! [`install`] first thing in `main` to make the drain run last; otherwise
//! the first [`delete_on_exit`] installs it lazily, and any handler installed
//! before that point runs after the drain and can no longer register paths.
//!
//! ```no_run
//! fn main() -> Result<(), sweep_registry::RegistryError> {
//! 	sweep_registry::global::install()?;
//! 	// ... install other exit handlers, run the application ...
//! 	Ok(())
//! }
//! ```

use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::error::Result;
use crate::hook::{AtExitHook, TerminationHook};
use crate::registry::ExitDeletionRegistry;

static REGISTRY: OnceLock<ExitDeletionRegistry> = OnceLock::new();
static HOOK_INSTALLED: Mutex<bool> = Mutex::new(false);

/// The process-wide registry.
///
/// Application code should not call [`ExitDeletionRegistry::drain`] on it;
/// the exit hook does that.
pub fn registry() -> &'static ExitDeletionRegistry {
	REGISTRY.get_or_init(ExitDeletionRegistry::new)
}

/// Installs the exit hook that drains [`registry`]. Idempotent.
///
/// # Errors
///
/// [`RegistryError::HookInstall`](crate::RegistryError::HookInstall) when
/// the hook cannot be installed; a later call retries.
pub fn install() -> Result<()> {
	ensure_hook(&HOOK_INSTALLED, &AtExitHook)?;
	registry();
	Ok(())
}

/// Schedules `path` for deletion when the process exits normally.
///
/// Installs the exit hook through [`install`] if that has not happened yet.
///
/// # Errors
///
/// Fails when the exit hook cannot be installed, or when the process is
/// already past the point where pending paths were deleted. In both cases
/// the caller has to remove the file itself.
pub fn delete_on_exit(path: impl AsRef<Path>) -> Result<()> {
	install()?;
	registry().register(path)
}

/// Cancels a pending [`delete_on_exit`] for `path`. Never fails.
pub fn cancel_delete_on_exit(path: impl AsRef<Path>) {
	if let Some(registry) = REGISTRY.get() {
		registry.deregister(path);
	}
}

/// Installs the drain callback through `hook`, at most once per process.
///
/// A failed install is not remembered, so the next call retries.
fn ensure_hook(flag: &Mutex<bool>, hook: &impl TerminationHook) -> Result<()> {
	let mut installed = flag.lock();
	if !*installed {
		hook.install(drain_at_exit)?;
		*installed = true;
		tracing::debug!("installed delete-on-exit hook");
	}
	Ok(())
}

extern "C" fn drain_at_exit() {
	let Some(registry) = REGISTRY.get() else {
		return;
	};
	// Unwinding out of an atexit handler aborts the process.
	let _ = std::panic::catch_unwind(AssertUnwindSafe(|| registry.drain()));
}
