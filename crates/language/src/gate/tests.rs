use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;

use super::*;
use crate::{GrammarCatalog, GrammarDef};

static FLAKY_CALLS: AtomicUsize = AtomicUsize::new(0);

fn catalog() -> Arc<GrammarCatalog> {
	Arc::new(GrammarCatalog::new())
}

#[test]
fn builtin_grammar_short_circuits() {
	let mut gate = GrammarGate::new(catalog());
	let before = gate.available_count();
	assert_eq!(gate.ensure_available("jsx"), Ok(true));
	assert_eq!(gate.available_count(), before);
}

#[test]
fn unknown_grammar_is_rejected_without_side_effects() {
	let mut gate = GrammarGate::new(catalog());
	let before = gate.available_count();
	assert_eq!(gate.ensure_available("no-such-grammar"), Ok(false));
	assert_eq!(gate.available_count(), before);
	assert!(!gate.is_available("no-such-grammar"));
}

#[test]
fn loadable_grammar_becomes_available() {
	let core = catalog();
	let mut gate = GrammarGate::new(core.clone());
	assert!(gate.is_loadable("vue"));
	assert!(!gate.is_available("vue"));

	assert_eq!(gate.ensure_available("vue"), Ok(true));
	assert!(gate.is_available("vue"));
	assert!(core.contains("vue"));
}

#[test]
fn loader_runs_once() {
	fn counting(core: &dyn TokenizerCore) -> Result<(), GrammarError> {
		FLAKY_CALLS.fetch_add(1, Ordering::SeqCst);
		core.register_grammar(GrammarDef::new("counted", "markup"))
	}

	let mut gate = GrammarGate::with_loaders(catalog(), [("counted", counting as GrammarLoader)]);
	for _ in 0..3 {
		assert_eq!(gate.ensure_available("counted"), Ok(true));
	}
	assert_eq!(FLAKY_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn loader_failure_propagates_and_is_retried() {
	let core = Arc::new(GrammarCatalog::with_grammars(["javascript", "css"]));
	let mut gate = GrammarGate::new(core.clone());

	assert!(matches!(
		gate.ensure_available("vue"),
		Err(GrammarError::MissingBase { .. })
	));
	assert!(!gate.is_available("vue"));

	// Once the base grammar shows up the next attempt succeeds.
	core.register_grammar(GrammarDef::new("markup", "css")).unwrap();
	assert_eq!(gate.ensure_available("vue"), Ok(true));
}

#[test]
fn availability_is_monotonic() {
	let mut gate = GrammarGate::new(catalog());
	gate.ensure_available("vue").unwrap();
	let count = gate.available_count();

	gate.ensure_available("no-such-grammar").unwrap();
	gate.ensure_available("rust").unwrap();
	gate.ensure_available("vue").unwrap();

	assert!(gate.is_available("vue"));
	assert_eq!(gate.available_count(), count);
}

#[test]
fn grammar_registered_behind_the_gate_is_accepted() {
	let core = catalog();
	let mut gate = GrammarGate::new(core.clone());
	crate::bridge::load_vue(&*core).unwrap();

	assert_eq!(gate.ensure_available("vue"), Ok(true));
	assert_eq!(gate.ensure_available("vue"), Ok(true));
	assert!(gate.is_available("vue"));
}

#[test]
fn two_gates_share_one_core() {
	let core = catalog();
	let mut first = GrammarGate::new(core.clone());
	let mut second = GrammarGate::new(core.clone());

	assert_eq!(first.ensure_available("vue"), Ok(true));
	assert_eq!(second.ensure_available("vue"), Ok(true));
}
