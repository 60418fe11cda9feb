use super::TranscriptConfig;
use crate::fri::{LeafGroup, LeafPart};
use crate::proof::OpeningCategory;
use crate::ser::Section;

/// Location of one section inside a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub offset: usize,
    pub len: usize,
}

impl SectionSpan {
    /// Offset one past the last byte of the section.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

struct SpanWriter {
    offset: usize,
    spans: Vec<SectionSpan>,
}

impl SpanWriter {
    fn push(&mut self, section: Section, len: usize) {
        self.spans.push(SectionSpan {
            section,
            offset: self.offset,
            len,
        });
        self.offset += len;
    }
}

/// Enumerates the wire layout. Only called on validated configurations, whose
/// total size is known to fit.
pub(super) fn section_spans(config: &TranscriptConfig) -> Vec<SectionSpan> {
    let sizes = config.sizes();
    let caps = config.caps();
    let fri = config.fri();
    let mut writer = SpanWriter {
        offset: 0,
        spans: Vec::new(),
    };

    writer.push(Section::WiresCap, caps.wires * sizes.hash);
    writer.push(
        Section::PlonkZsPartialProductsCap,
        caps.plonk_zs_partial_products * sizes.hash,
    );
    writer.push(Section::QuotientPolysCap, caps.quotient_polys * sizes.hash);

    for category in OpeningCategory::ALL {
        writer.push(
            Section::Openings(category),
            config.openings().get(category) * sizes.ext_field,
        );
    }

    for round in 0..fri.num_commit_rounds {
        writer.push(
            Section::FriCommitPhaseCaps { round },
            fri.commit_cap_height * sizes.hash,
        );
    }

    for round in 0..fri.num_query_rounds {
        for group in LeafGroup::ALL {
            let shape = fri.leaf(group);
            let section = |part| Section::FriQuery { round, group, part };
            writer.push(
                section(LeafPart::Values),
                shape.values * sizes.value_width(group),
            );
            writer.push(section(LeafPart::LengthPrefix), sizes.length_prefix);
            writer.push(section(LeafPart::Proof), shape.proof_depth * sizes.hash);
        }
    }

    writer.push(Section::FriFinalPoly, fri.final_poly_len * sizes.ext_field);
    writer.push(Section::FriPowWitness, sizes.field);
    writer.push(
        Section::PublicInputs,
        config.num_public_inputs() * sizes.field,
    );
    writer.spans
}
