//! Stock inventories, templates and spelling presets.
//!
//! Full-random languages draw from these tables. The consonant and vowel
//! tables are ordered so that the weighted draw favours the simpler
//! inventories near the top.

pub type Preset = (&'static str, &'static str);
pub type SpellingPreset = (&'static str, &'static [(char, &'static str)]);

pub const CONSONANT_SETS: &[Preset] = &[
	("Minimal", "ptkmnls"),
	("English-ish", "ptkbdgmnlrsʃzʒʧ"),
	("Pirahã (very simple)", "ptkmnh"),
	("Hawaiian-ish", "hklmnpwʔ"),
	("Greenlandic-ish", "ptkqvsgrmnŋlj"),
	("Arabic-ish", "tksʃdbqɣxmnlrwj"),
	("Arabic-lite", "tkdgmnsʃ"),
	("English-lite", "ptkbdgmnszʒʧhjw"),
	("Japanese-ish", "ksztdnhbpmyrw"),
];

pub const SIBILANT_SETS: &[Preset] = &[
	("Just s", "s"),
	("s ʃ", "sʃ"),
	("s ʃ f", "sʃf"),
];

pub const LIQUID_SETS: &[Preset] = &[
	("r l", "rl"),
	("Just r", "r"),
	("Just l", "l"),
	("w j", "wj"),
	("r l w j", "rlwj"),
];

pub const FINAL_SETS: &[Preset] = &[
	("m n", "mn"),
	("s k", "sk"),
	("m n ŋ", "mnŋ"),
	("s ʃ z ʒ", "sʃzʒ"),
	("Just n", "n"),
];

pub const VOWEL_SETS: &[Preset] = &[
	("Standard 5-vowel", "aeiou"),
	("3-vowel a i u", "aiu"),
	("Extra A E I", "aeiouAEI"),
	("Extra U", "aeiouU"),
	("5-vowel a i u A I", "aiuAI"),
	("3-vowel e o u", "eou"),
	("Extra A O U", "aeiouAOU"),
];

pub const SYLLABLE_STRUCTURES: &[&str] = &[
	"CVC", "CVV?C", "CVVC?", "CVC?", "CV", "VC", "CVF", "C?VC", "CVF?",
	"CL?VC", "CL?VF", "S?CVC", "S?CVF", "S?CVC?", "C?VF", "C?VC?", "C?VF?",
	"C?L?VC", "VC", "CVL?C?", "C?VL?C", "C?VLC?",
];

pub const CONSONANT_ORTHOGRAPHIES: &[SpellingPreset] = &[
	("Default", &[]),
	("Slavic", &[('ʃ', "š"), ('ʒ', "ž"), ('ʧ', "č"), ('ʤ', "ǧ"), ('j', "j")]),
	("German", &[('ʃ', "sch"), ('ʒ', "zh"), ('ʧ', "tsch"), ('ʤ', "dz"), ('j', "j"), ('x', "ch")]),
	("French", &[('ʃ', "ch"), ('ʒ', "j"), ('ʧ', "tch"), ('ʤ', "dj"), ('x', "kh")]),
	("Chinese (pinyin)", &[('ʃ', "x"), ('ʧ', "q"), ('ʤ', "j")]),
	("Japanese (romanji)", &[('ʃ', "sh")]),
];

pub const VOWEL_ORTHOGRAPHIES: &[SpellingPreset] = &[
	("Ácutes", &[]),
	("Ümlauts", &[('A', "ä"), ('E', "ë"), ('I', "ï"), ('O', "ö"), ('U', "ü")]),
	("Welsh", &[('A', "â"), ('E', "ê"), ('I', "y"), ('O', "ô"), ('U', "w")]),
	("Diphthongs", &[('A', "au"), ('E', "ei"), ('I', "ie"), ('O', "ou"), ('U', "oo")]),
	("Doubles", &[('A', "aa"), ('E', "ee"), ('I', "ii"), ('O', "oo"), ('U', "uu")]),
];

/// Joiners for multi-word names; a space is three times as likely as a hyphen.
pub const JOINERS: &str = "   -";

/// Fallback spelling applied after the consonant and vowel maps.
pub fn default_spelling(c: char) -> Option<&'static str> {
	let spelled = match c {
		'ʃ' => "sh",
		'ʒ' => "zh",
		'ʧ' => "ch",
		'ʤ' => "j",
		'ŋ' => "ng",
		'j' => "y",
		'x' => "kh",
		'ɣ' => "gh",
		'ʔ' => "‘",
		'A' => "á",
		'E' => "é",
		'I' => "í",
		'O' => "ó",
		'U' => "ú",
		_ => return None,
	};
	Some(spelled)
}
