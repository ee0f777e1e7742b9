//! In-process fakes for the host, timers and engines.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use pairlight_config::DecorationSettings;
use pairlight_primitives::{ContentChange, Url};
use parking_lot::Mutex;
use ropey::{Rope, RopeSlice};

use crate::document::TextDocument;
use crate::engine::{DecorationEngine, EngineError, EngineFactory};
use crate::host::{Host, Timer, TimerCallback};

/// A document with fixed content.
#[derive(Debug, Clone)]
pub struct FakeDocument {
	uri: Url,
	language_id: String,
	text: Rope,
	line_count: usize,
}

impl FakeDocument {
	/// Creates a document whose line count follows its text.
	///
	/// # Panics
	///
	/// Panics if `uri` does not parse.
	pub fn new(uri: &str, language_id: &str, text: &str) -> Self {
		let text = Rope::from_str(text);
		Self {
			uri: Url::parse(uri).expect("test uri must parse"),
			language_id: language_id.to_string(),
			line_count: text.len_lines(),
			text,
		}
	}

	/// Overrides the reported line count.
	pub fn with_line_count(mut self, line_count: usize) -> Self {
		self.line_count = line_count;
		self
	}

	pub fn with_language(mut self, language_id: &str) -> Self {
		self.language_id = language_id.to_string();
		self
	}
}

impl TextDocument for FakeDocument {
	fn uri(&self) -> &Url {
		&self.uri
	}

	fn line_count(&self) -> usize {
		self.line_count
	}

	fn language_id(&self) -> &str {
		&self.language_id
	}

	fn text(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}
}

/// Host with a settable list of visible documents that records error messages.
#[derive(Default)]
pub struct FakeHost {
	visible: Mutex<Vec<Arc<dyn TextDocument>>>,
	errors: Mutex<Vec<String>>,
}

impl FakeHost {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_visible(&self, documents: Vec<Arc<dyn TextDocument>>) {
		*self.visible.lock() = documents;
	}

	pub fn errors(&self) -> Vec<String> {
		self.errors.lock().clone()
	}
}

impl Host for FakeHost {
	fn visible_documents(&self) -> Vec<Arc<dyn TextDocument>> {
		self.visible.lock().clone()
	}

	fn show_error_message(&self, message: &str) {
		self.errors.lock().push(message.to_string());
	}
}

/// Timer that only fires when told to.
#[derive(Default)]
pub struct ManualTimer {
	pending: Mutex<Vec<(Duration, TimerCallback)>>,
}

impl ManualTimer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn pending_delays(&self) -> Vec<Duration> {
		self.pending.lock().iter().map(|(delay, _)| *delay).collect()
	}

	/// Runs every scheduled callback and returns how many ran.
	pub fn fire_all(&self) -> usize {
		let pending = std::mem::take(&mut *self.pending.lock());
		let count = pending.len();
		for (_, callback) in pending {
			callback();
		}
		count
	}
}

impl Timer for ManualTimer {
	fn set_timeout(&self, delay: Duration, callback: TimerCallback) {
		self.pending.lock().push((delay, callback));
	}
}

/// Everything a [`RecordingEngine`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
	Created { engine: usize, uri: String, grammar: String },
	FullUpdate { engine: usize },
	Changes { engine: usize, changes: Vec<ContentChange> },
	Disposed { engine: usize },
}

pub type EngineLog = Arc<Mutex<Vec<EngineEvent>>>;

/// Engine that appends every call to a shared log.
#[derive(Debug)]
pub struct RecordingEngine {
	pub id: usize,
	pub settings: DecorationSettings,
	log: EngineLog,
}

impl DecorationEngine for RecordingEngine {
	fn trigger_update_decorations(&mut self, _document: &dyn TextDocument) {
		self.log.lock().push(EngineEvent::FullUpdate { engine: self.id });
	}

	fn on_did_change_text_document(&mut self, _document: &dyn TextDocument, changes: &[ContentChange]) {
		self.log.lock().push(EngineEvent::Changes {
			engine: self.id,
			changes: changes.to_vec(),
		});
	}

	fn dispose(&mut self) {
		self.log.lock().push(EngineEvent::Disposed { engine: self.id });
	}
}

/// Factory producing [`RecordingEngine`]s with sequential ids.
#[derive(Default)]
pub struct RecordingFactory {
	created: AtomicUsize,
	log: EngineLog,
	fail_next: Mutex<Vec<EngineError>>,
}

impl RecordingFactory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of engines built so far.
	pub fn created(&self) -> usize {
		self.created.load(Ordering::SeqCst)
	}

	pub fn log(&self) -> Vec<EngineEvent> {
		self.log.lock().clone()
	}

	pub fn clear_log(&self) {
		self.log.lock().clear();
	}

	/// Makes the next `create` call fail with `error`.
	pub fn fail_next(&self, error: EngineError) {
		self.fail_next.lock().push(error);
	}
}

impl EngineFactory for RecordingFactory {
	type Engine = RecordingEngine;

	fn create(
		&self,
		document: &dyn TextDocument,
		settings: DecorationSettings,
	) -> Result<RecordingEngine, EngineError> {
		if let Some(err) = self.fail_next.lock().pop() {
			return Err(err);
		}

		let id = self.created.fetch_add(1, Ordering::SeqCst) + 1;
		self.log.lock().push(EngineEvent::Created {
			engine: id,
			uri: document.uri().to_string(),
			grammar: settings.grammar_id.clone(),
		});
		Ok(RecordingEngine {
			id,
			settings,
			log: Arc::clone(&self.log),
		})
	}
}
