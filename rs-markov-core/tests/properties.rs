//! Property-based tests for chain construction and generation.
//!
//! Verifies:
//! - Determinism for a fixed seed
//! - Output length and starter laws
//! - Transition fidelity of emitted characters
//! - Empty-table fallback

use proptest::prelude::*;

use rs_markov_core::{Seed, build, generate};

fn corpus() -> impl Strategy<Value = String> {
	"[ab c.éZ]{0,60}"
}

proptest! {
	#[test]
	fn fixed_seed_is_deterministic(text in corpus(), order in 0usize..5, length in 0usize..120, seed in any::<u64>(), starter in "[abc]{0,6}") {
		let chain = build(&text, order);
		prop_assert_eq!(
			generate(&chain, length, Seed::Fixed(seed), &starter),
			generate(&chain, length, Seed::Fixed(seed), &starter)
		);
	}

	#[test]
	fn length_contract(text in corpus(), order in 1usize..5, length in 0usize..120, seed in any::<u64>()) {
		let chain = build(&text, order);
		prop_assume!(!chain.is_empty());
		let output = generate(&chain, length, Seed::Fixed(seed), "");
		prop_assert_eq!(output.chars().count(), length);
	}

	#[test]
	fn starter_laws(text in corpus(), order in 0usize..5, length in 0usize..40, seed in any::<u64>(), starter in "[a-z ]{0,20}") {
		let chain = build(&text, order);
		let output = generate(&chain, length, Seed::Fixed(seed), &starter);
		if starter.chars().count() < length {
			prop_assert!(output.starts_with(&starter));
		} else {
			let truncated: String = starter.chars().take(length).collect();
			prop_assert_eq!(output, truncated);
		}
	}

	#[test]
	fn successors_follow_their_state(text in corpus(), order in 1usize..5) {
		let chain = build(&text, order);
		for state in chain.states() {
			for next in state.successors() {
				let pattern = format!("{}{}", state.key(), next);
				prop_assert!(text.contains(&pattern));
			}
		}
	}

	#[test]
	fn emitted_chars_follow_the_cursor(text in corpus(), order in 1usize..4, seed in any::<u64>()) {
		// Doubling the text gives its last window a successor, so the walk
		// never restarts and the cursor stays equal to the output tail
		prop_assume!(text.chars().count() >= order);
		let chain = build(&format!("{text}{text}"), order);
		let chars: Vec<char> = generate(&chain, 80, Seed::Fixed(seed), "").chars().collect();
		for i in order..chars.len() {
			let window: String = chars[i - order..i].iter().collect();
			let successors = chain.successors(&window);
			prop_assert!(successors.is_some(), "walk left the chain at '{}'", window);
			prop_assert!(successors.unwrap_or_default().contains(&chars[i]));
		}
	}

	#[test]
	fn order_beyond_corpus_falls_back_to_starter(text in "[a-z]{0,8}", extra in 0usize..4, length in 0usize..20, starter in "[a-z]{0,10}") {
		let order = text.chars().count() + extra;
		let chain = build(&text, order);
		prop_assert!(chain.is_empty());
		let truncated: String = starter.chars().take(length).collect();
		prop_assert_eq!(generate(&chain, length, Seed::Fixed(0), &starter), truncated);
	}
}
