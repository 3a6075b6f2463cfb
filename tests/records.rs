//! End-to-end tests: seeded generation through rendering to output files.

use adm_core::escape::{REMOVE_QUOTE, REPLACE_BRACES, SET_QUOTE};
use adm_core::FormatMode;
use adm_encoder::EncoderOptions;
use adm_gen::{open_output, RecordAssembler, RecordOptions};
use adm_generator::{GeneratorConfig, Shares, ValueGenerator};
use proptest::prelude::*;
use std::io::Write;

fn assembler(seed: u64, shares: Shares, max_depth: usize, pretty: bool) -> RecordAssembler {
    let generator = ValueGenerator::new(GeneratorConfig {
        shares,
        max_depth,
        ..Default::default()
    })
    .unwrap();
    RecordAssembler::new(
        generator,
        seed,
        RecordOptions::default(),
        EncoderOptions::new(pretty, FormatMode::LoadDataset),
    )
    .unwrap()
}

/// Every bracket outside a string literal closes the one most recently
/// opened.
fn is_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    let mut in_string = false;
    for c in text.chars() {
        match c {
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' | '[' => stack.push(c),
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty() && !in_string
}

#[test]
fn test_same_seed_same_output() {
    let mut first = assembler(42, Shares::new(6, 1, 3), 3, false);
    let mut second = assembler(42, Shares::new(6, 1, 3), 3, false);

    for _ in 0..25 {
        assert_eq!(
            first.next_rendered().unwrap(),
            second.next_rendered().unwrap()
        );
    }
}

#[test]
fn test_file_output_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.adm");

    let mut writer = open_output(Some(&path)).unwrap();
    let metrics = assembler(7, Shares::default(), 2, false)
        .write_records(&mut writer, 50)
        .unwrap();
    writer.flush().unwrap();
    drop(writer);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(metrics.records_written, 50);
    assert_eq!(metrics.bytes_written, content.len() as u64);

    let mut expected = assembler(7, Shares::default(), 2, false);
    for line in content.lines() {
        assert_eq!(line, expected.next_rendered().unwrap());
    }
}

#[test]
fn test_pretty_records_are_multi_line() {
    let mut assembler = assembler(3, Shares::new(1, 0, 0), 1, true);
    let record = assembler.next_rendered().unwrap();
    assert!(record.starts_with("{\n    \""));
    assert!(record.ends_with("\n}"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rendered_records_are_well_formed(
        seed in any::<u64>(),
        derived in 0u32..=6,
        max_depth in 0usize..=4,
    ) {
        let shares = Shares::new(2, 1, derived);
        let compact = assembler(seed, shares, max_depth, false).next_rendered().unwrap();
        let pretty = assembler(seed, shares, max_depth, true).next_rendered().unwrap();

        for marker in [REMOVE_QUOTE, SET_QUOTE, REPLACE_BRACES] {
            prop_assert!(!compact.contains(marker));
            prop_assert!(!pretty.contains(marker));
        }
        prop_assert!(is_balanced(&compact), "unbalanced: {}", compact);
        prop_assert!(is_balanced(&pretty), "unbalanced: {}", pretty);

        let squeezed: String = pretty.chars().filter(|c| !c.is_whitespace()).collect();
        let compact_squeezed: String = compact.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(squeezed, compact_squeezed);
    }
}
