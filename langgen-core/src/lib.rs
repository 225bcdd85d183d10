//! Procedural naming-language generation library.
//!
//! This crate synthesizes small fictional languages and draws names from them:
//! - Phoneme inventories, syllable templates and restriction rules
//! - Syllable construction with rejection filtering and spelling
//! - Per-category morpheme and word pools kept disjoint across categories
//! - Name composition under length and substring-uniqueness constraints
//!
//! A `Language` owns its configuration, its random source and every cache
//! it builds; nothing is shared between instances.

/// Core generation model.
///
/// Exposes the `Language` generator and the configuration types it is built from.
pub mod model;

/// Stock phoneme inventories, templates and spelling presets.
pub mod sources;

/// Configuration errors.
pub mod error;
