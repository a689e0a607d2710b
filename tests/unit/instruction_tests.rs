/*!
 * Tests for translation directive construction
 */

use tagasalin::app_config::Tone;
use tagasalin::translation::{InstructionBuilder, TranslationOptions};

/// Test that options carry their tone and glossary into the directive
#[test]
fn test_fromOptions_withFormalToneAndGlossary_shouldCarryBothIntoDirective() {
    let options = TranslationOptions::new(
        Tone::Formal,
        vec!["Blue Butterfly".to_string(), "Manila Bay".to_string()],
        "test-model",
        4000,
    )
    .unwrap();

    let directive = InstructionBuilder::from_options(&options).build();

    assert!(directive.contains("magalang at pormal"));
    assert!(directive.contains("“Blue Butterfly”"));
    assert!(directive.contains("“Manila Bay”"));
}

/// Test that glossary terms are rendered in the order given
#[test]
fn test_withGlossary_shouldPreserveTermOrder() {
    let directive = InstructionBuilder::new(Tone::Informal)
        .with_glossary(&[
            "Zebra".to_string(),
            "Apple".to_string(),
            "Manila Bay".to_string(),
        ])
        .build();

    let zebra = directive.find("“Zebra”").unwrap();
    let apple = directive.find("“Apple”").unwrap();
    let manila = directive.find("“Manila Bay”").unwrap();

    assert!(zebra < apple);
    assert!(apple < manila);
}

/// Test that the fixed rules of the directive are always present
#[test]
fn test_build_shouldContainCoreRules() {
    let directive = InstructionBuilder::new(Tone::Informal).build();

    // Persona and goal
    assert!(directive.contains("propesyonal"));
    // Preservation rule for names, numbers, URLs and the like
    assert!(directive.contains("Panatilihin"));
    // Output must be the translation alone
    assert!(directive.contains("pagsasalin lamang ang ilalabas"));
    // Closing line asking for one complete translation
    assert!(directive.contains("Isang kumpletong salin sa Tagalog"));
}

/// Test that the same options render the same directive on every call
#[test]
fn test_fromOptions_calledTwice_shouldRenderIdenticalDirectives() {
    let options = TranslationOptions::new(
        Tone::Informal,
        vec!["Jeet Kune Do".to_string()],
        "test-model",
        4000,
    )
    .unwrap();

    let first = InstructionBuilder::from_options(&options).build();
    let second = InstructionBuilder::from_options(&options).build();

    assert_eq!(first, second);
}
