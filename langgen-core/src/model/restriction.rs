use std::fmt;

use log::debug;
use regex::Regex;

use crate::error::ConfigError;
use super::phonemes::PhonemeClasses;

/// A rule rejecting raw (unspelled) syllables.
///
/// Rules are evaluated in order and the first match rejects the syllable.
pub trait Restriction: fmt::Debug + Send + Sync {
	fn matches(&self, raw: &str) -> bool;
}

impl Restriction for Regex {
	fn matches(&self, raw: &str) -> bool {
		self.is_match(raw)
	}
}

/// Rejects any syllable holding the same character twice in a row.
#[derive(Clone, Copy, Debug, Default)]
pub struct RepeatedPhoneme;

impl Restriction for RepeatedPhoneme {
	fn matches(&self, raw: &str) -> bool {
		let mut chars = raw.chars();
		let Some(mut previous) = chars.next() else {
			return false;
		};
		for c in chars {
			if c == previous {
				return true;
			}
			previous = c;
		}
		false
	}
}

/// A regular expression over raw syllables with phoneme class shortcuts.
///
/// `\X`, where `X` is the label of a defined class, stands for any token
/// of that class. The expansion cannot be escaped; `\\X` is a literal
/// backslash followed by `X`.
#[derive(Clone, Debug)]
pub struct PatternRestriction {
	source: String,
	regex: Regex,
}

impl PatternRestriction {
	/// Expands class shortcuts against `phonemes` and compiles the result.
	///
	/// # Errors
	/// Returns `InvalidRestriction` if the expanded pattern does not compile.
	pub fn new(pattern: &str, phonemes: &PhonemeClasses) -> Result<Self, ConfigError> {
		let expanded = expand_classes(pattern, phonemes);
		let regex = Regex::new(&expanded).map_err(|source| ConfigError::InvalidRestriction {
			pattern: pattern.to_owned(),
			source,
		})?;
		Ok(Self { source: pattern.to_owned(), regex })
	}

	/// The pattern as written, before class expansion.
	pub fn source(&self) -> &str {
		&self.source
	}
}

impl Restriction for PatternRestriction {
	fn matches(&self, raw: &str) -> bool {
		self.regex.is_match(raw)
	}
}

fn expand_classes(pattern: &str, phonemes: &PhonemeClasses) -> String {
	let mut expanded = String::with_capacity(pattern.len());
	let mut chars = pattern.chars();

	while let Some(c) = chars.next() {
		if c != '\\' {
			expanded.push(c);
			continue;
		}
		match chars.next() {
			Some(label) => match phonemes.get(label) {
				Some(tokens) => {
					let alternatives: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
					expanded.push_str("(?:");
					expanded.push_str(&alternatives.join("|"));
					expanded.push(')');
				}
				None => {
					expanded.push('\\');
					expanded.push(label);
				}
			},
			None => expanded.push('\\'),
		}
	}

	expanded
}

/// Named restriction presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestrictionSet {
	None,
	DoubleSounds,
	DoublesAndHardClusters,
}

impl RestrictionSet {
	pub fn name(self) -> &'static str {
		match self {
			RestrictionSet::None => "None",
			RestrictionSet::DoubleSounds => "Double sounds",
			RestrictionSet::DoublesAndHardClusters => "Doubles and hard clusters",
		}
	}

	/// Builds the rules of this preset for a given inventory.
	pub fn compile(self, phonemes: &PhonemeClasses) -> Result<Vec<Box<dyn Restriction>>, ConfigError> {
		debug!("compiling restriction set {:?}", self.name());
		let mut rules: Vec<Box<dyn Restriction>> = Vec::new();
		match self {
			RestrictionSet::None => {}
			RestrictionSet::DoubleSounds => rules.push(Box::new(RepeatedPhoneme)),
			RestrictionSet::DoublesAndHardClusters => {
				rules.push(Box::new(PatternRestriction::new("[sʃf][sʃ]", phonemes)?));
				rules.push(Box::new(PatternRestriction::new("ʃq", phonemes)?));
				rules.push(Box::new(RepeatedPhoneme));
				rules.push(Box::new(PatternRestriction::new("rl|lr|rw|wr|ww", phonemes)?));
			}
		}
		Ok(rules)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn inventory() -> PhonemeClasses {
		let mut phonemes = PhonemeClasses::new();
		phonemes.insert_chars('C', "ptk").unwrap();
		phonemes.insert_chars('V', "ai").unwrap();
		phonemes
	}

	#[test]
	fn repeated_phoneme() {
		assert!(RepeatedPhoneme.matches("paat"));
		assert!(RepeatedPhoneme.matches("ʃʃa"));
		assert!(!RepeatedPhoneme.matches("pata"));
		assert!(!RepeatedPhoneme.matches(""));
	}

	#[test]
	fn class_shortcuts_expand() {
		let rule = PatternRestriction::new(r"\V\V", &inventory()).unwrap();
		assert!(rule.matches("kai"));
		assert!(!rule.matches("kat"));
		assert_eq!(rule.source(), r"\V\V");
	}

	#[test]
	fn unknown_escapes_pass_through() {
		let rule = PatternRestriction::new(r"^\w{4}", &inventory()).unwrap();
		assert!(rule.matches("pata"));
		assert!(!rule.matches("pat"));
	}

	#[test]
	fn invalid_pattern_is_reported() {
		let err = PatternRestriction::new("(", &inventory()).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidRestriction { .. }));
	}

	#[test]
	fn hard_clusters_preset() {
		let rules = RestrictionSet::DoublesAndHardClusters.compile(&inventory()).unwrap();
		let rejected = |raw: &str| rules.iter().any(|r| r.matches(raw));
		assert!(rejected("asʃa"));
		assert!(!rejected("kala"));
		assert!(rejected("arla"));
		assert!(rejected("tatta"));
		assert!(rejected("aʃqa"));
		assert!(rejected("awra"));
		assert!(RestrictionSet::None.compile(&inventory()).unwrap().is_empty());
	}
}
