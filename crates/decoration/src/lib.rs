//! Bracket decoration lifecycle.
//!
//! [`DocumentDecorationManager`] owns one decoration engine per open document.
//! Engines are built lazily the first time a document is seen, reused for every
//! later event, and torn down when the document closes or the settings change.
//!
//! # Architecture
//!
//! * [`document`]: the host's document view and the validity gate
//! * [`host`]: host capabilities (visible documents, messages, timers)
//! * [`throttle`]: rate limit for user-facing error messages
//! * [`engine`]: the per-document engine seam
//! * [`manager`]: registry and event routing

pub mod document;
pub mod engine;
pub mod error;
pub mod host;
pub mod manager;
#[doc(hidden)]
pub mod test_helpers;
pub mod throttle;

pub use document::{SUPPORTED_SCHEMES, TextDocument, is_valid_document};
pub use engine::{DecorationEngine, EngineError, EngineFactory};
pub use error::DecorationError;
pub use host::{Host, Timer, TimerCallback, TokioTimer};
pub use manager::{DocumentDecorationManager, ERROR_PREFIX};
pub use pairlight_config::{DecorationConfig, DecorationSettings};
pub use pairlight_language::{GrammarCatalog, GrammarGate, TokenizerCore};
pub use pairlight_primitives::{ContentChange, DocumentKey, Position, Range, Url};
pub use throttle::{ERROR_COOLDOWN, ErrorThrottle};
