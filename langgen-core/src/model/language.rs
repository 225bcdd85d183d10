use std::collections::HashMap;

use log::{debug, trace};
use serde::Serialize;

use crate::error::ConfigError;
use crate::sources::JOINERS;
use super::phonemes::PhonemeClasses;
use super::phonology::Phonology;
use super::sampler::Sampler;
use super::settings::LanguageSettings;

/// Category of unscoped morphemes, words and names.
pub const DEFAULT_KEY: &str = "";
/// Morpheme category of the genitive particle.
pub const GENITIVE_KEY: &str = "of";
/// Morpheme category of the definite article.
pub const DEFINITE_KEY: &str = "the";

/// Chance that a name is a single word rather than two.
const SINGLE_WORD_CHANCE: f64 = 0.5;
/// Chance that each word of a two-word name takes the requested category.
const SCOPED_WORD_CHANCE: f64 = 0.6;
/// Chance that two words are joined directly rather than through the genitive.
const DIRECT_JOIN_CHANCE: f64 = 0.5;
/// Chance that a name is prefixed with the definite article.
const DEFINITE_CHANCE: f64 = 0.1;

/// How a new language is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Stock inventory and structure with spelling enabled; no morpheme pooling.
	Orthographic,
	/// Inventory, structure, spelling and word shape all drawn at random.
	Random,
}

/// A generated language and everything it has produced so far.
///
/// # Responsibilities
/// - Pool morphemes and words per category, reusing them across calls
/// - Keep every morpheme and word unique to a single category
/// - Compose names within the length bounds, never nested in one another
///
/// # Invariants
/// - No morpheme (resp. word) value lives in two category pools
/// - No accepted name is a substring of another accepted name
/// - Caches only grow; the genitive and definite morphemes never change once drawn
///
/// Every generation loop retries until it succeeds, without a cap.
/// Over-restrictive rules, saturated pools or tight length bounds make
/// these calls spin forever rather than fail.
#[derive(Debug)]
pub struct Language {
	phonology: Phonology,
	settings: LanguageSettings,
	sampler: Sampler,
	morphemes: HashMap<String, Vec<String>>,
	words: HashMap<String, Vec<String>>,
	names: Vec<String>,
	genitive: Option<String>,
	definite: Option<String>,
}

/// Serializable overview of a language's configuration.
#[derive(Serialize, Clone, Debug)]
pub struct LanguageSummary {
	pub structure: String,
	pub phonemes: PhonemeClasses,
	pub spelled: bool,
	pub exponent: f64,
	pub settings: LanguageSettings,
	pub alphabet: String,
	pub names: usize,
}

impl Language {
	/// Creates a language seeded from entropy.
	pub fn new(mode: Mode) -> Result<Self, ConfigError> {
		Self::with_sampler(mode, Sampler::from_entropy())
	}

	/// Creates a reproducible language.
	pub fn from_seed(mode: Mode, seed: u64) -> Result<Self, ConfigError> {
		Self::with_sampler(mode, Sampler::from_seed(seed))
	}

	/// Creates a language in `mode`, drawing any random configuration from `sampler`.
	pub fn with_sampler(mode: Mode, mut sampler: Sampler) -> Result<Self, ConfigError> {
		let (phonology, settings) = match mode {
			Mode::Orthographic => (Phonology::orthographic()?, LanguageSettings::default()),
			Mode::Random => {
				let phonology = Phonology::random(&mut sampler)?;
				let settings = Self::random_settings(&phonology, &mut sampler)?;
				(phonology, settings)
			}
		};
		debug!("new {mode:?} language: structure {}, settings {settings:?}", phonology.structure());
		Ok(Self::from_parts(phonology, settings, sampler))
	}

	/// Assembles a language from an explicit configuration.
	pub fn from_parts(phonology: Phonology, settings: LanguageSettings, sampler: Sampler) -> Self {
		Self {
			phonology,
			settings,
			sampler,
			morphemes: HashMap::new(),
			words: HashMap::new(),
			names: Vec::new(),
			genitive: None,
			definite: None,
		}
	}

	/// Word shape and joiner for full-random languages.
	///
	/// Short structures (fewer than 3 slots) get one more minimum syllable.
	fn random_settings(phonology: &Phonology, sampler: &mut Sampler) -> Result<LanguageSettings, ConfigError> {
		let mut settings = LanguageSettings::default();

		let mut minsyll = sampler.random_range(1, 3);
		if phonology.structure().len() < 3 {
			minsyll += 1;
		}
		let maxsyll = sampler.random_range(minsyll + 1, 7);
		settings.set_syllable_range(minsyll, maxsyll)?;

		let joiners: Vec<char> = JOINERS.chars().collect();
		if let Some(joiner) = sampler.choose_weighted(&joiners, 1.0) {
			settings.joiner = joiner.to_string();
		}
		settings.morphology = true;

		Ok(settings)
	}

	pub fn phonology(&self) -> &Phonology {
		&self.phonology
	}

	pub fn settings(&self) -> &LanguageSettings {
		&self.settings
	}

	/// Names accepted so far, oldest first.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// The genitive morpheme, once a name has been requested.
	pub fn genitive(&self) -> Option<&str> {
		self.genitive.as_deref()
	}

	/// The definite morpheme, once a name has been requested.
	pub fn definite(&self) -> Option<&str> {
		self.definite.as_deref()
	}

	/// Returns a morpheme of category `key` (`""` for unscoped).
	///
	/// With morphology off, a fresh syllable is returned every time.
	/// Otherwise an index is drawn over the pool plus some slack: hitting
	/// the pool reuses a morpheme, overshooting builds a new one. New
	/// morphemes already present in any pool are discarded and the draw
	/// restarts. The unscoped pool gets far more slack than named ones, so
	/// named categories settle into reuse almost at once.
	pub fn get_morpheme(&mut self, key: &str) -> String {
		if !self.settings.morphology {
			return self.phonology.build_syllable(&mut self.sampler);
		}

		let slack = if key.is_empty() { 10 } else { 1 };
		loop {
			let pool = self.morphemes.get(key).map_or(&[][..], Vec::as_slice);
			let n = self.sampler.below(pool.len() + slack);
			if let Some(morpheme) = pool.get(n) {
				return morpheme.clone();
			}

			let morpheme = self.phonology.build_syllable(&mut self.sampler);
			if contains_anywhere(&self.morphemes, &morpheme) {
				trace!("morpheme {morpheme:?} already pooled, retrying");
				continue;
			}
			self.morphemes.entry(key.to_owned()).or_default().push(morpheme.clone());
			return morpheme;
		}
	}

	/// Builds a new word whose last morpheme belongs to category `key`.
	///
	/// The syllable count is drawn below a ceiling that is itself drawn in
	/// `[minsyll, maxsyll]`: short words dominate and a count of zero
	/// (an empty word) is possible.
	pub fn build_word(&mut self, key: &str) -> String {
		let (minsyll, maxsyll) = self.settings.syllable_range();
		let ceiling = self.sampler.random_range(minsyll, maxsyll + 1);
		let count = self.sampler.below(ceiling);

		let mut word = String::new();
		for i in 0..count {
			let category = if i + 1 == count { key } else { DEFAULT_KEY };
			word.push_str(&self.get_morpheme(category));
		}
		word
	}

	/// Returns a word of category `key`, pooled like `get_morpheme`.
	pub fn get_word(&mut self, key: &str) -> String {
		let slack = if key.is_empty() { 3 } else { 2 };
		loop {
			let pool = self.words.get(key).map_or(&[][..], Vec::as_slice);
			let n = self.sampler.below(pool.len() + slack);
			if let Some(word) = pool.get(n) {
				return word.clone();
			}

			let word = self.build_word(key);
			if contains_anywhere(&self.words, &word) {
				trace!("word {word:?} already pooled, retrying");
				continue;
			}
			self.words.entry(key.to_owned()).or_default().push(word.clone());
			return word;
		}
	}

	/// Generates a new name for category `key`.
	///
	/// A name is one capitalized word, or two distinct capitalized words
	/// joined directly or around the genitive, sometimes preceded by the
	/// definite article. Candidates outside the length bounds, or nested in
	/// (or containing) an earlier name, are discarded.
	pub fn make_name(&mut self, key: &str) -> String {
		let genitive = self.fixed_morpheme(Affix::Genitive);
		let definite = self.fixed_morpheme(Affix::Definite);
		let joiner = self.settings.joiner.clone();
		let (minchar, maxchar) = self.settings.name_length();

		loop {
			let mut name = if self.sampler.chance(SINGLE_WORD_CHANCE) {
				capitalize(&self.get_word(key))
			} else {
				let first = self.scoped_word(key);
				let second = self.scoped_word(key);
				if first == second {
					continue;
				}
				if self.sampler.chance(DIRECT_JOIN_CHANCE) {
					[first, second].join(joiner.as_str())
				} else {
					[first.as_str(), genitive.as_str(), second.as_str()].join(joiner.as_str())
				}
			};

			if self.sampler.chance(DEFINITE_CHANCE) {
				name = [definite.as_str(), name.as_str()].join(joiner.as_str());
			}

			let len = name.chars().count();
			if len < minchar || len > maxchar {
				trace!("name {name:?} rejected: length {len} outside [{minchar}, {maxchar}]");
				continue;
			}
			if self.names.iter().any(|n| n.contains(name.as_str()) || name.contains(n.as_str())) {
				trace!("name {name:?} rejected: overlaps an earlier name");
				continue;
			}

			self.names.push(name.clone());
			return name;
		}
	}

	/// The spelled alphabet of the language.
	pub fn get_alphabet(&self) -> String {
		self.phonology.alphabet()
	}

	pub fn describe(&self) -> LanguageSummary {
		LanguageSummary {
			structure: self.phonology.structure().to_string(),
			phonemes: self.phonology.phonemes().clone(),
			spelled: self.phonology.orthography().is_some(),
			exponent: self.phonology.exponent(),
			settings: self.settings.clone(),
			alphabet: self.get_alphabet(),
			names: self.names.len(),
		}
	}

	/// Capitalized word in `key` with probability 0.6, unscoped otherwise.
	fn scoped_word(&mut self, key: &str) -> String {
		let category = if self.sampler.chance(SCOPED_WORD_CHANCE) { key } else { DEFAULT_KEY };
		capitalize(&self.get_word(category))
	}

	/// Draws the genitive or definite morpheme on first use, then keeps it.
	fn fixed_morpheme(&mut self, affix: Affix) -> String {
		let slot = match affix {
			Affix::Genitive => &self.genitive,
			Affix::Definite => &self.definite,
		};
		if let Some(morpheme) = slot {
			return morpheme.clone();
		}

		let morpheme = self.get_morpheme(affix.key());
		match affix {
			Affix::Genitive => self.genitive = Some(morpheme.clone()),
			Affix::Definite => self.definite = Some(morpheme.clone()),
		}
		morpheme
	}
}

#[derive(Clone, Copy)]
enum Affix {
	Genitive,
	Definite,
}

impl Affix {
	fn key(self) -> &'static str {
		match self {
			Affix::Genitive => GENITIVE_KEY,
			Affix::Definite => DEFINITE_KEY,
		}
	}
}

fn contains_anywhere(pools: &HashMap<String, Vec<String>>, value: &str) -> bool {
	pools.values().any(|pool| pool.iter().any(|v| v == value))
}

/// Uppercases the first character.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn language(seed: u64, morphology: bool) -> Language {
		let mut phonemes = PhonemeClasses::new();
		phonemes.insert_chars('C', "ptkmnls").unwrap();
		phonemes.insert_chars('V', "aeiou").unwrap();
		let phonology = Phonology::new(phonemes, "CVC".parse().unwrap()).unwrap();
		let mut settings = LanguageSettings::default();
		settings.morphology = morphology;
		Language::from_parts(phonology, settings, Sampler::from_seed(seed))
	}

	#[test]
	fn capitalize_first_char() {
		assert_eq!(capitalize("kala"), "Kala");
		assert_eq!(capitalize("ʃa"), "Ʃa");
		assert_eq!(capitalize("‘ana"), "‘ana");
		assert_eq!(capitalize("éma"), "Éma");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn morphology_off_bypasses_pools() {
		let mut lang = language(1, false);
		for _ in 0..20 {
			lang.get_morpheme("place");
		}
		assert!(lang.morphemes.is_empty());
	}

	#[test]
	fn named_morpheme_pools_saturate_into_reuse() {
		let mut lang = language(2, true);
		let values: Vec<String> = (0..200).map(|_| lang.get_morpheme("place")).collect();
		let distinct: HashSet<&String> = values.iter().collect();
		assert!(distinct.len() < values.len() / 2, "{} distinct of {}", distinct.len(), values.len());
		assert_eq!(distinct.len(), lang.morphemes["place"].len());
	}

	#[test]
	fn unscoped_pool_keeps_growing_longer() {
		let mut lang = language(3, true);
		for _ in 0..100 {
			lang.get_morpheme(DEFAULT_KEY);
			lang.get_morpheme("person");
		}
		assert!(lang.morphemes[DEFAULT_KEY].len() > lang.morphemes["person"].len());
	}

	#[test]
	fn word_pools_are_disjoint() {
		let mut lang = language(4, true);
		for _ in 0..150 {
			lang.get_word("river");
			lang.get_word("town");
			lang.get_word(DEFAULT_KEY);
		}
		let mut seen = HashSet::new();
		for pool in lang.words.values() {
			for word in pool {
				assert!(seen.insert(word.clone()), "{word:?} pooled twice");
			}
		}
	}

	#[test]
	fn affixes_are_drawn_once() {
		let mut lang = language(5, true);
		assert!(lang.genitive().is_none());
		lang.make_name("place");
		let genitive = lang.genitive().map(str::to_owned);
		let definite = lang.definite().map(str::to_owned);
		assert!(genitive.is_some() && definite.is_some());
		for _ in 0..20 {
			lang.make_name("place");
		}
		assert_eq!(lang.genitive().map(str::to_owned), genitive);
		assert_eq!(lang.definite().map(str::to_owned), definite);
	}

	struct NameParts<'a> {
		definite: bool,
		genitive: bool,
		words: Vec<&'a str>,
	}

	/// Splits a name on the joiner and checks it is `[definite] w1 [[genitive] w2]`
	/// with capitalized, distinct words.
	fn parse_name<'a>(name: &'a str, joiner: &str, genitive: &str, definite: &str) -> NameParts<'a> {
		let mut parts: Vec<&str> = name.split(joiner).collect();
		let prefixed = parts.first() == Some(&definite);
		if prefixed {
			parts.remove(0);
		}
		let linked = parts.len() == 3;
		if linked {
			assert_eq!(parts.remove(1), genitive, "{name:?}");
		}
		assert!((1..=2).contains(&parts.len()), "{name:?} has {} words", parts.len());
		for word in &parts {
			assert!(word.chars().next().is_none_or(char::is_uppercase), "{name:?}: {word:?} is not capitalized");
		}
		if let [first, second] = parts[..] {
			assert_ne!(first, second, "{name:?} repeats a word");
		}
		NameParts { definite: prefixed, genitive: linked, words: parts }
	}

	#[test]
	fn names_are_recorded() {
		let mut lang = language(6, true);
		let names: Vec<String> = (0..10).map(|_| lang.make_name("city")).collect();
		assert_eq!(lang.names(), names.as_slice());

		let genitive = lang.genitive().unwrap().to_owned();
		let definite = lang.definite().unwrap().to_owned();
		for name in &names {
			parse_name(name, " ", &genitive, &definite);
		}
	}

	#[test]
	fn names_use_the_joiner_and_affixes() {
		let mut lang = language(11, true);
		lang.settings.joiner = "-".to_owned();
		lang.settings.set_name_length(5, 20).unwrap();
		let names: Vec<String> = (0..80).map(|_| lang.make_name("city")).collect();

		let genitive = lang.genitive().unwrap().to_owned();
		let definite = lang.definite().unwrap().to_owned();
		assert_ne!(genitive, definite);

		let parsed: Vec<NameParts> = names.iter().map(|n| parse_name(n, "-", &genitive, &definite)).collect();
		assert!(names.iter().all(|n| !n.contains(' ')), "{names:?}");
		assert!(parsed.iter().any(|p| p.definite), "no definite prefix in {names:?}");
		assert!(parsed.iter().any(|p| p.genitive), "no genitive link in {names:?}");
		assert!(parsed.iter().any(|p| p.words.len() == 2 && !p.genitive), "no direct join in {names:?}");
		assert!(parsed.iter().any(|p| p.words.len() == 1), "no single word in {names:?}");
	}

	#[test]
	fn same_seed_same_names() {
		let mut a = Language::from_seed(Mode::Random, 99).unwrap();
		let mut b = Language::from_seed(Mode::Random, 99).unwrap();
		for _ in 0..10 {
			assert_eq!(a.make_name("place"), b.make_name("place"));
		}
	}

	#[test]
	fn random_settings_respect_short_structures() {
		for seed in 0..100 {
			let lang = Language::from_seed(Mode::Random, seed).unwrap();
			let (minsyll, maxsyll) = lang.settings().syllable_range();
			let short = lang.phonology().structure().len() < 3;
			let floor = if short { 2 } else { 1 };
			assert!((floor..floor + 2).contains(&minsyll), "seed {seed}: minsyll {minsyll}");
			assert!(maxsyll > minsyll && maxsyll < 7, "seed {seed}: maxsyll {maxsyll}");
			assert!([" ", "-"].contains(&lang.settings().joiner.as_str()));
			assert!(lang.settings().morphology);
		}
	}

	#[test]
	fn orthographic_mode() {
		let mut lang = Language::from_seed(Mode::Orthographic, 8).unwrap();
		assert!(!lang.settings().morphology);
		assert!(lang.phonology().orthography().is_some());
		assert_eq!(lang.get_alphabet(), "a e i k l m n o p s t u");
		let name = lang.make_name(DEFAULT_KEY);
		assert!((5..=12).contains(&name.chars().count()));
	}

	#[test]
	fn summary_serializes() {
		let mut lang = language(10, true);
		lang.make_name("place");
		let summary = lang.describe();
		assert_eq!(summary.structure, "CVC");
		assert_eq!(summary.names, 1);
		let json = serde_json::to_value(&summary).unwrap();
		assert_eq!(json["settings"]["joiner"], " ");
		assert_eq!(json["alphabet"], "a e i k l m n o p s t u");
	}
}
