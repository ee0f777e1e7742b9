//! Common utilities for decoration lifecycle tests.

use std::sync::Arc;

use pairlight_decoration::test_helpers::{FakeHost, RecordingFactory};
use pairlight_decoration::{
	DocumentDecorationManager, ErrorThrottle, GrammarCatalog, GrammarGate, Timer,
};

pub type TestManager = DocumentDecorationManager<RecordingFactory>;

/// Builds a manager over the default grammar catalog.
pub fn manager(timer: Arc<dyn Timer>) -> (Arc<FakeHost>, TestManager) {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	let host = Arc::new(FakeHost::new());
	let mgr = DocumentDecorationManager::new(
		host.clone(),
		RecordingFactory::new(),
		GrammarGate::new(Arc::new(GrammarCatalog::new())),
		ErrorThrottle::new(timer),
	);
	(host, mgr)
}
