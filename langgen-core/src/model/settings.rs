use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Word and name shaping parameters of a language.
///
/// # Responsibilities
/// - Bound the syllable count of words (`minsyll`, `maxsyll`)
/// - Bound the length of accepted names (`minchar`, `maxchar`)
/// - Hold the name joiner and the morphology switch
///
/// # Invariants
/// - `minsyll <= maxsyll`
/// - `minchar <= maxchar`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LanguageSettings {
	minsyll: usize,
	maxsyll: usize,
	minchar: usize,
	maxchar: usize,

	/// Separator placed between the parts of a multi-word name.
	pub joiner: String,

	/// Whether morphemes are pooled and reused per category.
	/// When off, every morpheme request yields a fresh syllable.
	pub morphology: bool,
}

impl Default for LanguageSettings {
	fn default() -> Self {
		Self {
			minsyll: 2,
			maxsyll: 4,
			minchar: 5,
			maxchar: 12,
			joiner: " ".to_owned(),
			morphology: false,
		}
	}
}

impl LanguageSettings {
	/// Returns `(minsyll, maxsyll)`.
	pub fn syllable_range(&self) -> (usize, usize) {
		(self.minsyll, self.maxsyll)
	}

	/// Returns `(minchar, maxchar)`.
	pub fn name_length(&self) -> (usize, usize) {
		(self.minchar, self.maxchar)
	}

	/// Sets the syllable count bounds used when building words.
	///
	/// The count is drawn below a ceiling that is itself drawn in
	/// `[minsyll, maxsyll]`, so `maxsyll` is never reached and a
	/// `maxsyll` below 2 only ever yields empty words.
	///
	/// # Errors
	/// Returns `InvalidRange` if `minsyll > maxsyll`.
	pub fn set_syllable_range(&mut self, minsyll: usize, maxsyll: usize) -> Result<(), ConfigError> {
		if minsyll > maxsyll {
			return Err(ConfigError::InvalidRange { what: "syllable", min: minsyll, max: maxsyll });
		}
		if maxsyll < 2 {
			warn!("maxsyll {maxsyll} < 2: every generated word will be empty");
		}
		self.minsyll = minsyll;
		self.maxsyll = maxsyll;
		Ok(())
	}

	/// Sets the accepted name length bounds, in characters, inclusive.
	///
	/// # Errors
	/// Returns `InvalidRange` if `minchar > maxchar`.
	pub fn set_name_length(&mut self, minchar: usize, maxchar: usize) -> Result<(), ConfigError> {
		if minchar > maxchar {
			return Err(ConfigError::InvalidRange { what: "name length", min: minchar, max: maxchar });
		}
		self.minchar = minchar;
		self.maxchar = maxchar;
		Ok(())
	}
}
