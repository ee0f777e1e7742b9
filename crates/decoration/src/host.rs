//! Host editor capabilities.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};

use crate::document::TextDocument;

/// What the decoration core needs from the editor.
pub trait Host {
	/// Documents shown in currently visible editors.
	fn visible_documents(&self) -> Vec<Arc<dyn TextDocument>>;

	/// Shows an error notification to the user.
	fn show_error_message(&self, message: &str);
}

/// Callback run once a timer elapses.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Single-shot timers.
///
/// Timers cannot be cancelled; callbacks must stay harmless if they fire
/// after whatever scheduled them is gone.
pub trait Timer: Send + Sync {
	fn set_timeout(&self, delay: Duration, callback: TimerCallback);
}

/// [`Timer`] backed by a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioTimer {
	handle: Handle,
}

impl TokioTimer {
	pub fn new(handle: Handle) -> Self {
		Self { handle }
	}

	/// Uses the runtime the caller is running on.
	pub fn current() -> Result<Self, TryCurrentError> {
		Handle::try_current().map(Self::new)
	}
}

impl Timer for TokioTimer {
	fn set_timeout(&self, delay: Duration, callback: TimerCallback) {
		// Deadline is fixed now, not when the task is first polled.
		let deadline = tokio::time::Instant::now() + delay;
		self.handle.spawn(async move {
			tokio::time::sleep_until(deadline).await;
			callback();
		});
	}
}
