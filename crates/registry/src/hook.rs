//! Termination notification.
//!
//! The drain has to run once, as late as possible during normal process
//! exit. [`AtExitHook`] gets there through the C runtime's `atexit` list:
//! handlers run in reverse order of installation, and handlers added while
//! the list is already being run are still invoked.

use crate::error::{RegistryError, Result};

/// Callback signature accepted by a [`TerminationHook`].
pub type ExitCallback = extern "C" fn();

/// Something that runs a callback once when the process terminates normally.
pub trait TerminationHook {
	/// Arranges for `callback` to run at termination.
	///
	/// # Errors
	///
	/// [`RegistryError::HookInstall`] when the callback cannot be scheduled.
	fn install(&self, callback: ExitCallback) -> Result<()>;
}

/// Installs callbacks with `libc::atexit`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtExitHook;

impl TerminationHook for AtExitHook {
	fn install(&self, callback: ExitCallback) -> Result<()> {
		// SAFETY: `callback` is a plain function pointer with 'static lifetime.
		let rc = unsafe { libc::atexit(callback) };
		if rc != 0 {
			return Err(RegistryError::HookInstall(format!("atexit returned {rc}")));
		}
		Ok(())
	}
}
