//! Top-level module for the Markov chain text generator.
//!
//! This module provides:
//! - The transition table of a fixed-order chain (`Chain`)
//! - Internal state management (`State`)
//! - Generation parameters (`GenerationInput`, `Seed`)
//! - The generation walk itself (`Generator`)

/// Transition table built from a corpus.
///
/// Maps every window of `order` characters to the characters observed
/// right after it.
pub mod chain;

/// Walks a `Chain` to produce text of a requested length.
///
/// Handles starter seeding, dead ends and degenerate chains.
pub mod generator;

/// Generation parameters: target length, seed and starter text.
pub mod generation_input;

/// A single state of the chain (window and successors).
///
/// Supports uniform sampling of the next character.
pub mod state;
