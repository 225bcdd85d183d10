use log::{debug, trace};

use crate::error::ConfigError;
use crate::sources::{
	CONSONANT_ORTHOGRAPHIES, CONSONANT_SETS, FINAL_SETS, LIQUID_SETS, Preset, SIBILANT_SETS,
	SYLLABLE_STRUCTURES, VOWEL_ORTHOGRAPHIES, VOWEL_SETS,
};
use super::orthography::Orthography;
use super::phonemes::{PhonemeClasses, SyllableStructure};
use super::restriction::{Restriction, RestrictionSet};
use super::sampler::Sampler;

/// Default skew applied when drawing phonemes from a class.
pub const DEFAULT_EXPONENT: f64 = 2.0;

/// Everything needed to produce a single spelled syllable.
///
/// # Responsibilities
/// - Assemble raw syllables from the structure template
/// - Reject raw syllables matching any restriction
/// - Spell accepted syllables (and the alphabet) through the orthography
///
/// # Invariants
/// - Every class referenced by `structure` is defined and non-empty
#[derive(Debug)]
pub struct Phonology {
	phonemes: PhonemeClasses,
	structure: SyllableStructure,
	restrictions: Vec<Box<dyn Restriction>>,
	/// `None` disables spelling: raw syllables are returned verbatim.
	orthography: Option<Orthography>,
	exponent: f64,
}

impl Phonology {
	/// Creates a phonology without restrictions nor orthography.
	///
	/// # Errors
	/// Returns `UndefinedClass` if the structure uses a label missing from `phonemes`.
	pub fn new(phonemes: PhonemeClasses, structure: SyllableStructure) -> Result<Self, ConfigError> {
		if let Some(slot) = structure.slots().iter().find(|slot| !phonemes.contains(slot.class)) {
			return Err(ConfigError::UndefinedClass(slot.class));
		}
		debug!("phonology configured: structure {structure}, classes {:?}", phonemes.labels().collect::<String>());
		Ok(Self {
			phonemes,
			structure,
			restrictions: Vec::new(),
			orthography: None,
			exponent: DEFAULT_EXPONENT,
		})
	}

	/// The stock inventory with default spelling enabled.
	pub fn orthographic() -> Result<Self, ConfigError> {
		let mut phonemes = PhonemeClasses::new();
		phonemes.insert_chars('C', "ptkmnls")?;
		phonemes.insert_chars('V', "aeiou")?;
		phonemes.insert_chars('S', "s")?;
		phonemes.insert_chars('F', "mn")?;
		phonemes.insert_chars('L', "rl")?;
		Ok(Self::new(phonemes, SyllableStructure::default())?.with_orthography(Some(Orthography::default())))
	}

	/// Draws a whole phonology from the stock tables.
	///
	/// Each class comes from a weighted draw over its presets, with its
	/// token order shuffled afterwards; the structure is drawn uniformly;
	/// spelling presets are drawn with the same weighting as classes.
	pub fn random(sampler: &mut Sampler) -> Result<Self, ConfigError> {
		let mut phonemes = PhonemeClasses::new();
		let tables: [(char, &[Preset]); 5] = [
			('C', CONSONANT_SETS),
			('V', VOWEL_SETS),
			('L', LIQUID_SETS),
			('S', SIBILANT_SETS),
			('F', FINAL_SETS),
		];
		for (label, presets) in tables {
			let Some((name, inventory)) = sampler.choose_weighted(presets, DEFAULT_EXPONENT) else {
				continue;
			};
			trace!("class {label}: {name}");
			let mut tokens: Vec<String> = inventory.chars().map(String::from).collect();
			sampler.shuffle(&mut tokens);
			phonemes.insert(label, tokens)?;
		}

		let template = sampler.choose_weighted(SYLLABLE_STRUCTURES, 1.0).copied().unwrap_or("CVC");
		let structure: SyllableStructure = template.parse()?;
		let restrictions = RestrictionSet::DoublesAndHardClusters.compile(&phonemes)?;

		let consonants = sampler.choose_weighted(CONSONANT_ORTHOGRAPHIES, DEFAULT_EXPONENT);
		let vowels = sampler.choose_weighted(VOWEL_ORTHOGRAPHIES, DEFAULT_EXPONENT);
		let orthography = match (consonants, vowels) {
			(Some(c), Some(v)) => {
				debug!("orthography: {} / {}", c.0, v.0);
				Orthography::from_presets(c, v)
			}
			_ => Orthography::default(),
		};

		Ok(Self::new(phonemes, structure)?
			.with_restrictions(restrictions)
			.with_orthography(Some(orthography)))
	}

	pub fn with_restrictions(mut self, restrictions: Vec<Box<dyn Restriction>>) -> Self {
		self.restrictions = restrictions;
		self
	}

	pub fn push_restriction<R: Restriction + 'static>(&mut self, restriction: R) {
		self.restrictions.push(Box::new(restriction));
	}

	pub fn with_orthography(mut self, orthography: Option<Orthography>) -> Self {
		self.orthography = orthography;
		self
	}

	pub fn with_exponent(mut self, exponent: f64) -> Self {
		self.exponent = exponent;
		self
	}

	pub fn phonemes(&self) -> &PhonemeClasses {
		&self.phonemes
	}

	pub fn structure(&self) -> &SyllableStructure {
		&self.structure
	}

	pub fn orthography(&self) -> Option<&Orthography> {
		self.orthography.as_ref()
	}

	pub fn exponent(&self) -> f64 {
		self.exponent
	}

	/// Generates a new spelled syllable.
	///
	/// The whole syllable is rebuilt until no restriction matches its raw
	/// form. There is no attempt cap: a rule set rejecting every possible
	/// syllable never returns.
	pub fn build_syllable(&self, sampler: &mut Sampler) -> String {
		loop {
			let mut raw = String::new();
			for slot in self.structure.slots() {
				if slot.optional && sampler.chance(0.5) {
					continue;
				}
				let Some(tokens) = self.phonemes.get(slot.class) else {
					continue;
				};
				if let Some(token) = sampler.choose_weighted(tokens, self.exponent) {
					raw.push_str(token);
				}
			}

			if let Some(rule) = self.restrictions.iter().find(|rule| rule.matches(&raw)) {
				trace!("syllable {raw:?} rejected by {rule:?}");
				continue;
			}
			return self.spell(&raw);
		}
	}

	/// Spells a raw string, or returns it unchanged when spelling is off.
	pub fn spell(&self, raw: &str) -> String {
		match &self.orthography {
			Some(orthography) => orthography.spell(raw),
			None => raw.to_owned(),
		}
	}

	/// Space-separated, sorted and deduplicated tokens reachable from the
	/// structure, spelled.
	pub fn alphabet(&self) -> String {
		let mut tokens: Vec<&str> = self
			.structure
			.slots()
			.iter()
			.filter_map(|slot| self.phonemes.get(slot.class))
			.flatten()
			.map(String::as_str)
			.collect();
		tokens.sort_unstable();
		tokens.dedup();
		self.spell(&tokens.join(" "))
	}
}
