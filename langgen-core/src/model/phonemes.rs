use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Marker following a slot in a structure template to make it optional.
pub const OPTIONAL_MARKER: char = '?';

/// Labelled phoneme inventories.
///
/// Each class maps a single-character label (`C`, `V`, `S`, `F`, `L`...)
/// to an ordered list of tokens. Order matters: sampling is skewed toward
/// the front of the list.
///
/// # Invariants
/// - No class is empty
/// - No label is the optional marker
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PhonemeClasses {
	classes: BTreeMap<char, Vec<String>>,
}

impl PhonemeClasses {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the tokens of a class, replacing any previous content.
	///
	/// # Errors
	/// - `InvalidLabel` if `label` is the optional marker or whitespace
	/// - `EmptyClass` if `tokens` is empty
	pub fn insert<I, S>(&mut self, label: char, tokens: I) -> Result<(), ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		if label == OPTIONAL_MARKER || label.is_whitespace() {
			return Err(ConfigError::InvalidLabel(label));
		}
		let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
		if tokens.is_empty() {
			return Err(ConfigError::EmptyClass(label));
		}
		self.classes.insert(label, tokens);
		Ok(())
	}

	/// Sets a class from a string where every character is one token.
	pub fn insert_chars(&mut self, label: char, phonemes: &str) -> Result<(), ConfigError> {
		self.insert(label, phonemes.chars().map(String::from))
	}

	pub fn get(&self, label: char) -> Option<&[String]> {
		self.classes.get(&label).map(Vec::as_slice)
	}

	pub fn contains(&self, label: char) -> bool {
		self.classes.contains_key(&label)
	}

	pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
		self.classes.keys().copied()
	}
}

/// One position of a syllable template.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
	pub class: char,
	pub optional: bool,
}

/// Ordered slot template, e.g. `CVV?C`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyllableStructure {
	slots: Vec<Slot>,
}

impl SyllableStructure {
	pub fn slots(&self) -> &[Slot] {
		&self.slots
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

impl Default for SyllableStructure {
	fn default() -> Self {
		Self {
			slots: "CVC"
				.chars()
				.map(|class| Slot { class, optional: false })
				.collect(),
		}
	}
}

impl FromStr for SyllableStructure {
	type Err = ConfigError;

	/// Parses a template: every character is a class label, and a `?`
	/// right after a label marks that slot optional.
	fn from_str(template: &str) -> Result<Self, Self::Err> {
		let invalid = || ConfigError::InvalidStructure(template.to_owned());
		let mut slots: Vec<Slot> = Vec::new();
		let mut marked = false;

		for c in template.chars() {
			if c == OPTIONAL_MARKER {
				match slots.last_mut() {
					Some(slot) if !marked => {
						slot.optional = true;
						marked = true;
					}
					_ => return Err(invalid()),
				}
			} else if c.is_whitespace() {
				return Err(invalid());
			} else {
				slots.push(Slot { class: c, optional: false });
				marked = false;
			}
		}

		if slots.is_empty() {
			return Err(invalid());
		}
		Ok(Self { slots })
	}
}

impl fmt::Display for SyllableStructure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for slot in &self.slots {
			write!(f, "{}", slot.class)?;
			if slot.optional {
				write!(f, "{OPTIONAL_MARKER}")?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_optional_slots() {
		let structure: SyllableStructure = "S?CVC?".parse().unwrap();
		let optional: Vec<bool> = structure.slots().iter().map(|s| s.optional).collect();
		assert_eq!(optional, vec![true, false, false, true]);
		assert_eq!(structure.to_string(), "S?CVC?");
		assert_eq!(structure.len(), 4);
	}

	#[test]
	fn rejects_malformed_templates() {
		for template in ["", "?CV", "CV??", "C V"] {
			assert!(
				matches!(template.parse::<SyllableStructure>(), Err(ConfigError::InvalidStructure(_))),
				"{template:?} should be rejected"
			);
		}
	}

	#[test]
	fn empty_class_is_rejected() {
		let mut classes = PhonemeClasses::new();
		assert!(matches!(classes.insert_chars('C', ""), Err(ConfigError::EmptyClass('C'))));
		assert!(matches!(classes.insert_chars('?', "a"), Err(ConfigError::InvalidLabel('?'))));
		assert!(!classes.contains('C'));
	}

	#[test]
	fn insert_chars_splits_tokens() {
		let mut classes = PhonemeClasses::new();
		classes.insert_chars('C', "ptʃ").unwrap();
		assert_eq!(classes.get('C').unwrap(), ["p", "t", "ʃ"]);
	}
}
