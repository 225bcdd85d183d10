//! Top-level module for the language generation system.
//!
//! This module provides:
//! - Seeded random draws (`Sampler`)
//! - Phonology configuration (`PhonemeClasses`, `SyllableStructure`,
//!   restrictions, `Orthography`)
//! - Syllable and alphabet generation (`Phonology`)
//! - Word shape and name bounds (`LanguageSettings`)
//! - The stateful generator (`Language`)

/// Weighted index and integer draws from an owned pseudorandom source.
pub mod sampler;

/// Phoneme classes and syllable structure templates.
pub mod phonemes;

/// Rules rejecting raw syllables.
pub mod restriction;

/// Character-level spelling of raw phoneme strings.
pub mod orthography;

/// Syllable construction, spelling and alphabet reporting.
pub mod phonology;

/// Word and name shaping parameters.
pub mod settings;

/// Morpheme and word pools, and name composition.
///
/// Holds all generated state of a language; it only ever grows.
pub mod language;

pub use language::{Language, LanguageSummary, Mode};
pub use orthography::Orthography;
pub use phonemes::{PhonemeClasses, Slot, SyllableStructure};
pub use phonology::Phonology;
pub use restriction::{PatternRestriction, RepeatedPhoneme, Restriction, RestrictionSet};
pub use sampler::Sampler;
pub use settings::LanguageSettings;
