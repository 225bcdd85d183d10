use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sources::{SpellingPreset, default_spelling};

/// Character-level spelling of raw phoneme strings.
///
/// Lookup order for every character: consonant map, vowel map, the
/// built-in default map, then the character itself.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Orthography {
	consonants: BTreeMap<char, String>,
	vowels: BTreeMap<char, String>,
}

impl Orthography {
	pub fn new(consonants: BTreeMap<char, String>, vowels: BTreeMap<char, String>) -> Self {
		Self { consonants, vowels }
	}

	/// Builds an orthography from a consonant and a vowel preset.
	pub fn from_presets(consonants: &SpellingPreset, vowels: &SpellingPreset) -> Self {
		let collect = |preset: &SpellingPreset| {
			preset.1.iter().map(|(c, s)| (*c, (*s).to_owned())).collect::<BTreeMap<_, _>>()
		};
		Self::new(collect(consonants), collect(vowels))
	}

	pub fn spell_char(&self, c: char) -> String {
		if let Some(s) = self.consonants.get(&c).or_else(|| self.vowels.get(&c)) {
			return s.clone();
		}
		match default_spelling(c) {
			Some(s) => s.to_owned(),
			None => c.to_string(),
		}
	}

	pub fn spell(&self, raw: &str) -> String {
		raw.chars().map(|c| self.spell_char(c)).collect()
	}
}
