//! Rate limit for user-facing error messages.
//!
//! One failing grammar can break every open document of that language at
//! once. The throttle shows the first error and drops the rest until the
//! cooldown elapses.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::host::{Host, Timer};

/// Time between two user-visible error messages.
pub const ERROR_COOLDOWN: Duration = Duration::from_millis(3000);

/// Edge-triggered gate in front of [`Host::show_error_message`].
#[derive(Clone)]
pub struct ErrorThrottle {
	enabled: Arc<AtomicBool>,
	cooldown: Duration,
	timer: Arc<dyn Timer>,
}

impl fmt::Debug for ErrorThrottle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ErrorThrottle")
			.field("enabled", &self.is_enabled())
			.field("cooldown", &self.cooldown)
			.finish()
	}
}

impl ErrorThrottle {
	pub fn new(timer: Arc<dyn Timer>) -> Self {
		Self::with_cooldown(timer, ERROR_COOLDOWN)
	}

	pub fn with_cooldown(timer: Arc<dyn Timer>, cooldown: Duration) -> Self {
		Self {
			enabled: Arc::new(AtomicBool::new(true)),
			cooldown,
			timer,
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled.load(Ordering::Acquire)
	}

	pub fn cooldown(&self) -> Duration {
		self.cooldown
	}

	/// Shows `message` unless another one was shown within the cooldown.
	///
	/// Returns true if the message reached the user.
	pub fn report(&self, host: &dyn Host, message: &str) -> bool {
		if !self.enabled.swap(false, Ordering::AcqRel) {
			debug!(message, "decoration.throttle.suppressed");
			return false;
		}

		host.show_error_message(message);

		let enabled = Arc::clone(&self.enabled);
		self.timer.set_timeout(
			self.cooldown,
			Box::new(move || enabled.store(true, Ordering::Release)),
		);
		true
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::host::TokioTimer;
	use crate::test_helpers::{FakeHost, ManualTimer};

	#[test]
	fn first_report_is_shown() {
		let host = FakeHost::new();
		let timer = Arc::new(ManualTimer::new());
		let throttle = ErrorThrottle::new(timer.clone());

		assert!(throttle.report(&host, "boom"));
		assert_eq!(host.errors(), vec!["boom".to_string()]);
		assert!(!throttle.is_enabled());
		assert_eq!(timer.pending_delays(), vec![ERROR_COOLDOWN]);
	}

	#[test]
	fn reports_during_cooldown_are_dropped() {
		let host = FakeHost::new();
		let timer = Arc::new(ManualTimer::new());
		let throttle = ErrorThrottle::new(timer.clone());

		assert!(throttle.report(&host, "one"));
		assert!(!throttle.report(&host, "two"));
		assert!(!throttle.report(&host, "three"));

		assert_eq!(host.errors(), vec!["one".to_string()]);
		// Only the shown message schedules a re-enable.
		assert_eq!(timer.pending_delays().len(), 1);
	}

	#[test]
	fn cooldown_reenables_reporting() {
		let host = FakeHost::new();
		let timer = Arc::new(ManualTimer::new());
		let throttle = ErrorThrottle::new(timer.clone());

		throttle.report(&host, "one");
		assert_eq!(timer.fire_all(), 1);
		assert!(throttle.is_enabled());

		assert!(throttle.report(&host, "two"));
		assert_eq!(host.errors(), vec!["one".to_string(), "two".to_string()]);
	}

	#[test]
	fn clones_share_state() {
		let host = FakeHost::new();
		let throttle = ErrorThrottle::new(Arc::new(ManualTimer::new()));
		let other = throttle.clone();

		assert!(throttle.report(&host, "one"));
		assert!(!other.report(&host, "two"));
	}

	#[tokio::test(flavor = "current_thread", start_paused = true)]
	async fn tokio_timer_edge_trigger() {
		let host = FakeHost::new();
		let timer = Arc::new(TokioTimer::current().unwrap());
		let throttle = ErrorThrottle::new(timer);

		for i in 0..3 {
			throttle.report(&host, &format!("error {i}"));
			tokio::time::advance(Duration::from_millis(40)).await;
		}
		assert_eq!(host.errors().len(), 1);

		tokio::time::advance(ERROR_COOLDOWN).await;
		for _ in 0..4 {
			tokio::task::yield_now().await;
		}
		assert!(throttle.is_enabled());

		assert!(throttle.report(&host, "error 3"));
		assert_eq!(host.errors(), vec!["error 0".to_string(), "error 3".to_string()]);
	}

	#[tokio::test(flavor = "current_thread", start_paused = true)]
	async fn tokio_timer_waits_full_cooldown() {
		let host = FakeHost::new();
		let throttle = ErrorThrottle::new(Arc::new(TokioTimer::current().unwrap()));

		throttle.report(&host, "one");
		tokio::time::advance(ERROR_COOLDOWN - Duration::from_millis(1)).await;
		for _ in 0..4 {
			tokio::task::yield_now().await;
		}
		assert!(!throttle.is_enabled());
		assert!(!throttle.report(&host, "two"));
	}
}
