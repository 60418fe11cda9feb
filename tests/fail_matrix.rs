
use _fixtures::{sample_bytes, MINIMAL_CONFIG, PLONKY2_CONFIG, TWO_ROUND_CONFIG};
use plonk_fri_transcript::config::{SectionSpan, TranscriptConfig, TranscriptConfigBuilder};
use plonk_fri_transcript::fri::{LeafGroup, LeafPart};
use plonk_fri_transcript::proof::deserialize_proof;
use plonk_fri_transcript::ser::{DecodeError, FormatMismatch, Section};

fn configs() -> [&'static TranscriptConfig; 3] {
    [&*MINIMAL_CONFIG, &*TWO_ROUND_CONFIG, &*PLONKY2_CONFIG]
}

fn prefix_spans(config: &TranscriptConfig) -> Vec<SectionSpan> {
    config
        .layout()
        .into_iter()
        .filter(|span| {
            matches!(
                span.section,
                Section::FriQuery {
                    part: LeafPart::LengthPrefix,
                    ..
                }
            )
        })
        .collect()
}

#[test]
fn truncation_at_every_boundary_is_out_of_bounds() {
    for config in configs() {
        let bytes = sample_bytes(config, 1);
        for span in config.layout().into_iter().filter(|span| span.len > 0) {
            let cut = span.end() - 1;
            let err = deserialize_proof(&bytes[..cut], config).unwrap_err();
            assert!(err.is_out_of_bounds(), "cut at {cut}: {err}");
            assert_eq!(err.section(), Some(span.section), "cut at {cut}");
        }
    }
}

#[test]
fn every_shorter_prefix_fails() {
    let config = &*TWO_ROUND_CONFIG;
    let bytes = sample_bytes(config, 2);
    for len in 0..bytes.len() {
        let err = deserialize_proof(&bytes[..len], config).unwrap_err();
        assert!(err.is_out_of_bounds(), "len {len}: {err}");
    }
}

#[test]
fn dropping_the_last_byte_hits_public_inputs() {
    let config = &*MINIMAL_CONFIG;
    let bytes = sample_bytes(config, 3);
    let err = deserialize_proof(&bytes[..bytes.len() - 1], config).unwrap_err();
    assert_eq!(
        err,
        DecodeError::OutOfBounds {
            section: Section::PublicInputs,
            offset: bytes.len() - 8,
            requested: 8,
            remaining: 7,
        }
    );
}

#[test]
fn trailing_byte_is_a_format_mismatch() {
    for config in configs() {
        let mut bytes = sample_bytes(config, 4);
        bytes.push(0);
        let err = deserialize_proof(&bytes, config).unwrap_err();
        assert_eq!(
            err,
            DecodeError::FormatMismatch(FormatMismatch::TrailingBytes {
                consumed: config.proof_size(),
                remaining: 1,
            })
        );
    }
}

#[test]
fn mutated_length_prefix_names_round_and_group() {
    for config in configs() {
        let bytes = sample_bytes(config, 5);
        let spans = prefix_spans(config);
        assert_eq!(spans.len(), config.fri().num_query_rounds * 6);
        for span in spans {
            let Section::FriQuery { round, group, .. } = span.section else {
                unreachable!("filtered to query prefixes");
            };
            let expected = config.fri().leaf(group).proof_depth;
            assert_eq!(usize::from(bytes[span.offset]), expected);

            let mut tampered = bytes.clone();
            tampered[span.offset] = bytes[span.offset].wrapping_add(1);
            let err = deserialize_proof(&tampered, config).unwrap_err();
            assert_eq!(
                err,
                DecodeError::FormatMismatch(FormatMismatch::LengthPrefix {
                    round,
                    group,
                    expected,
                    actual: tampered[span.offset],
                })
            );
        }
    }
}

#[test]
fn every_wrong_prefix_value_is_rejected() {
    let config = &*MINIMAL_CONFIG;
    let bytes = sample_bytes(config, 6);
    let span = prefix_spans(config)[0];
    for value in (0..=u8::MAX).filter(|value| *value != 1) {
        let mut tampered = bytes.clone();
        tampered[span.offset] = value;
        let err = deserialize_proof(&tampered, config).unwrap_err();
        assert!(err.is_format_mismatch(), "prefix {value}: {err}");
    }
}

#[test]
fn empty_buffer_fails_on_the_first_section() {
    let err = deserialize_proof(&[], &MINIMAL_CONFIG).unwrap_err();
    assert_eq!(
        err,
        DecodeError::OutOfBounds {
            section: Section::WiresCap,
            offset: 0,
            requested: 32,
            remaining: 0,
        }
    );
}

#[test]
fn huge_commit_round_count_fails_on_the_cursor() {
    let config = TranscriptConfigBuilder {
        num_fri_commit_round: usize::MAX / 64,
        fri_commit_merkle_cap_height: 1,
        ..TranscriptConfigBuilder::new()
    }
    .build()
    .expect("size still fits");
    let err = deserialize_proof(&[0u8; 100], &config).unwrap_err();
    assert_eq!(
        err,
        DecodeError::OutOfBounds {
            section: Section::FriCommitPhaseCaps { round: 3 },
            offset: 96,
            requested: 32,
            remaining: 4,
        }
    );
}

#[test]
fn huge_query_round_count_fails_on_the_cursor() {
    let config = TranscriptConfigBuilder {
        num_fri_query_round: usize::MAX / 1024,
        num_fri_query_step0_v: 1,
        ..TranscriptConfigBuilder::new()
    }
    .build()
    .expect("size still fits");
    assert_eq!(config.query_round_size(), 22);

    // Zero-depth groups expect a zero prefix, so whole rounds decode until the
    // buffer runs dry inside step0 of round 47662.
    let bytes = vec![0u8; 1 << 20];
    let err = deserialize_proof(&bytes, &config).unwrap_err();
    assert_eq!(
        err,
        DecodeError::OutOfBounds {
            section: Section::FriQuery {
                round: 47_662,
                group: LeafGroup::Step0,
                part: LeafPart::Values,
            },
            offset: 1_048_568,
            requested: 16,
            remaining: 8,
        }
    );
}
