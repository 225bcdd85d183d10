use langgen_core::model::language::DEFAULT_KEY;
use langgen_core::model::{Language, Mode, PhonemeClasses, Phonology, RestrictionSet, Sampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Draw a whole language at random: inventory, syllable structure,
    // spelling and word shape. Use `from_seed` for a reproducible one.
    let mut language = Language::new(Mode::Random)?;

    println!("Structure: {}", language.phonology().structure());
    println!("Alphabet: {}", language.get_alphabet());
    println!("Syllables per word: {:?}", language.settings().syllable_range());

    // Words and names can be scoped by any category key.
    // Words of the same category tend to share their last morpheme.
    for key in ["river", "mountain", DEFAULT_KEY] {
        let words: Vec<String> = (0..5).map(|_| language.get_word(key)).collect();
        println!("Words ({key:?}): {}", words.join(", "));
    }

    // Names never nest in one another and stay within the length bounds
    for i in 0..10 {
        println!("Generated name {}: {}", i + 1, language.make_name("city"));
    }

    // The genitive and definite particles are fixed after the first name
    println!("Genitive: {:?}, definite: {:?}", language.genitive(), language.definite());

    // A hand-built phonology: three stops, two vowels, optional final nasal
    let mut phonemes = PhonemeClasses::new();
    phonemes.insert_chars('C', "ptk")?;
    phonemes.insert_chars('V', "ai")?;
    phonemes.insert_chars('N', "mn")?;
    let restrictions = RestrictionSet::DoubleSounds.compile(&phonemes)?;
    let phonology = Phonology::new(phonemes, "CVN?".parse()?)?.with_restrictions(restrictions);

    let mut sampler = Sampler::from_seed(2024);
    let syllables: Vec<String> = (0..8).map(|_| phonology.build_syllable(&mut sampler)).collect();
    println!("Custom syllables: {}", syllables.join(" "));

    // Orthography-only language: stock inventory, no morpheme pooling
    let mut plain = Language::from_seed(Mode::Orthographic, 7)?;
    println!("Orthographic name: {}", plain.make_name(DEFAULT_KEY));

    Ok(())
}
