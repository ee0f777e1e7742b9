//! Grammar resolution for bracket decorations.
//!
//! # Architecture
//!
//! * [`ids`]: editor language id to tokenizer grammar id mapping
//! * [`tokenizer`]: the tokenizer capability and its in-memory catalog
//! * [`gate`]: grow-only availability set with one-shot external loading
//! * [`bridge`]: bridging loaders for grammars that are not built in
//! * [`grammar`]: grammar definitions and errors

pub mod bridge;
pub mod gate;
pub mod grammar;
pub mod ids;
pub mod tokenizer;

pub use gate::{GrammarGate, GrammarLoader};
pub use grammar::{GrammarDef, GrammarError};
pub use ids::grammar_id_for;
pub use tokenizer::{BUILTIN_GRAMMARS, GrammarCatalog, TokenizerCore};
