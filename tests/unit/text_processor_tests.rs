/*!
 * Tests for paragraph splitting and chunk assembly
 */

use tagasalin::errors::TranslationError;
use tagasalin::text_processor::{word_count, Chunk, Paragraph, TextDocument, PARAGRAPH_SEPARATOR};

use crate::common::{document_from, paragraph_of};

/// Test that blank-line separated paragraphs split in input order
#[test]
fn test_parse_withBlankLineSeparatedParagraphs_shouldSplitInOrder() {
    let input = "First paragraph.\n\nSecond paragraph.\n\nThird paragraph.";

    let document = TextDocument::parse(input).unwrap();

    assert_eq!(document.paragraphs.len(), 3);
    assert_eq!(document.paragraphs[0].text, "First paragraph.");
    assert_eq!(document.paragraphs[1].text, "Second paragraph.");
    assert_eq!(document.paragraphs[2].text, "Third paragraph.");
}

/// Test that a longer run of blank lines is still a single paragraph break
#[test]
fn test_parse_withExcessBlankLines_shouldTreatRunAsOneBreak() {
    let input = "First.\n\n\n\nSecond.\n\n\nThird.";

    let document = TextDocument::parse(input).unwrap();

    assert_eq!(document.paragraphs.len(), 3);
}

/// Test that single newlines stay inside their paragraph
#[test]
fn test_parse_withSingleNewlines_shouldKeepParagraphTogether() {
    let input = "Line one\nline two\nline three";

    let document = TextDocument::parse(input).unwrap();

    assert_eq!(document.paragraphs.len(), 1);
    assert!(document.paragraphs[0].text.contains('\n'));
    assert_eq!(document.paragraphs[0].word_count, 6);
}

/// Test that Windows line endings are normalized before splitting
#[test]
fn test_parse_withCrlfLineEndings_shouldNormalize() {
    let input = "First line\r\nsecond line\r\n\r\nNext paragraph";

    let document = TextDocument::parse(input).unwrap();

    assert_eq!(document.paragraphs.len(), 2);
    assert_eq!(document.paragraphs[0].text, "First line\nsecond line");
    assert!(!document.paragraphs[0].text.contains('\r'));
}

/// Test that empty and whitespace-only inputs are rejected
#[test]
fn test_parse_withEmptyInput_shouldReturnEmptyInputError() {
    assert!(matches!(
        TextDocument::parse(""),
        Err(TranslationError::EmptyInput)
    ));
    assert!(matches!(
        TextDocument::parse("   \n\t \n\n  "),
        Err(TranslationError::EmptyInput)
    ));
}

/// Test that leading and trailing blank lines do not create empty paragraphs
#[test]
fn test_parse_withSurroundingBlankLines_shouldTrimDocument() {
    let input = "\n\nOnly paragraph\n\n";

    let document = TextDocument::parse(input).unwrap();

    assert_eq!(document.paragraphs.len(), 1);
    assert_eq!(document.paragraphs[0].text, "Only paragraph");
}

/// Test per-paragraph trimming of surrounding whitespace
#[test]
fn test_parse_withWhitespaceAroundParagraphs_shouldTrimEachParagraph() {
    let input = "  First paragraph  \n\n\t Second paragraph \t";

    let document = TextDocument::parse(input).unwrap();

    assert_eq!(document.paragraphs[0].text, "First paragraph");
    assert_eq!(document.paragraphs[1].text, "Second paragraph");
}

/// Test word counting over mixed whitespace
#[test]
fn test_wordCount_withMixedWhitespace_shouldCountTokens() {
    assert_eq!(word_count("one two  three\tfour\nfive"), 5);
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("   "), 0);
}

/// Test that a paragraph computes its own word count
#[test]
fn test_paragraph_new_shouldComputeWordCount() {
    let paragraph = Paragraph::new("maraming salamat sa inyong lahat");

    assert_eq!(paragraph.word_count, 5);
}

/// Test that a paragraph displays as its bare text
#[test]
fn test_paragraph_display_shouldRenderBareText() {
    let paragraph = Paragraph::new("Magandang umaga sa inyong lahat.");

    assert_eq!(paragraph.to_string(), "Magandang umaga sa inyong lahat.");
    assert_eq!(format!("{}", paragraph), paragraph.text);
}

/// Test that a paragraph overflowing the budget starts a new chunk
#[test]
fn test_splitIntoChunks_withBudgetOverflow_shouldStartNewChunk() {
    let input = document_from(&[&paragraph_of(3000), &paragraph_of(2500)]);
    let document = TextDocument::parse(&input).unwrap();

    let chunks = document.split_into_chunks(4000);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].word_count, 3000);
    assert_eq!(chunks[1].word_count, 2500);
    assert_eq!(chunks[0].paragraph_count, 1);
    assert_eq!(chunks[1].paragraph_count, 1);
}

/// Test greedy packing of consecutive paragraphs under the budget
#[test]
fn test_splitIntoChunks_withParagraphsFittingBudget_shouldPackGreedily() {
    let input = document_from(&[&paragraph_of(1500), &paragraph_of(2000), &paragraph_of(1000)]);
    let document = TextDocument::parse(&input).unwrap();

    let chunks = document.split_into_chunks(4000);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].paragraph_count, 2);
    assert_eq!(chunks[0].word_count, 3500);
    assert_eq!(chunks[1].paragraph_count, 1);
    assert_eq!(chunks[1].word_count, 1000);
}

/// Test that a chunk may land exactly on the budget
#[test]
fn test_splitIntoChunks_withExactBudgetFit_shouldKeepParagraphInChunk() {
    let input = document_from(&[&paragraph_of(2500), &paragraph_of(1500)]);
    let document = TextDocument::parse(&input).unwrap();

    let chunks = document.split_into_chunks(4000);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].word_count, 4000);
    assert_eq!(chunks[0].paragraph_count, 2);
}

/// Test that an oversized paragraph becomes its own overshooting chunk
#[test]
fn test_splitIntoChunks_withOversizedParagraph_shouldGiveItOwnChunk() {
    let input = paragraph_of(5000);
    let document = TextDocument::parse(&input).unwrap();

    let chunks = document.split_into_chunks(4000);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].word_count, 5000);
    assert_eq!(chunks[0].paragraph_count, 1);
    assert_eq!(chunks[0].text, input);
}

/// Test that an oversized paragraph does not drag its neighbors along
#[test]
fn test_splitIntoChunks_withOversizedParagraphBetweenSmallOnes_shouldIsolateIt() {
    let input = document_from(&[&paragraph_of(1000), &paragraph_of(5000), &paragraph_of(1000)]);
    let document = TextDocument::parse(&input).unwrap();

    let chunks = document.split_into_chunks(4000);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].word_count, 1000);
    assert_eq!(chunks[1].word_count, 5000);
    assert_eq!(chunks[1].paragraph_count, 1);
    assert_eq!(chunks[2].word_count, 1000);
}

/// Test that chunking is a lossless, order-preserving partition
#[test]
fn test_splitIntoChunks_shouldPreserveEveryParagraphInOrder() {
    let input = document_from(&["alpha beta", "gamma delta epsilon", "zeta"]);
    let document = TextDocument::parse(&input).unwrap();

    let chunks = document.split_into_chunks(3);

    // Indices are contiguous from zero
    for (position, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.index, position);
    }

    // Every paragraph landed in exactly one chunk
    let total_paragraphs: usize = chunks.iter().map(|chunk| chunk.paragraph_count).sum();
    assert_eq!(total_paragraphs, document.paragraphs.len());

    // Rejoining the chunk texts reproduces the parsed input
    let rejoined = chunks
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR);
    assert_eq!(rejoined, input);
}

/// Test that a budget larger than the document yields a single chunk
#[test]
fn test_splitIntoChunks_withBudgetLargerThanDocument_shouldProduceSingleChunk() {
    let input = document_from(&[&paragraph_of(10), &paragraph_of(20), &paragraph_of(30)]);
    let document = TextDocument::parse(&input).unwrap();

    let chunks = document.split_into_chunks(4000);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].paragraph_count, 3);
    assert_eq!(chunks[0].word_count, 60);
    assert_eq!(chunks[0].text, input);
}

/// Test chunk construction from consecutive paragraphs
#[test]
fn test_chunk_fromParagraphs_shouldJoinWithBlankLine() {
    let paragraphs = vec![Paragraph::new("First part"), Paragraph::new("Second part")];

    let chunk = Chunk::from_paragraphs(7, &paragraphs);

    assert_eq!(chunk.index, 7);
    assert_eq!(chunk.text, "First part\n\nSecond part");
    assert_eq!(chunk.word_count, 4);
    assert_eq!(chunk.paragraph_count, 2);
}
