use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plonk_fri_transcript::circuit::CircuitInputs;
use plonk_fri_transcript::config::{TranscriptConfig, TranscriptConfigBuilder};
use plonk_fri_transcript::fri::LeafPart;
use plonk_fri_transcript::proof::{deserialize_proof, serialize_proof};
use plonk_fri_transcript::ser::Section;

fn plonky2_config(query_rounds: usize) -> TranscriptConfig {
    TranscriptConfigBuilder {
        num_wires_cap: 16,
        num_plonk_zs_partial_products_cap: 16,
        num_quotient_polys_cap: 16,
        num_openings_constants: 4,
        num_openings_plonk_sigmas: 80,
        num_openings_wires: 135,
        num_openings_plonk_zs: 2,
        num_openings_plonk_zs_next: 2,
        num_openings_partial_products: 18,
        num_openings_quotient_polys: 16,
        num_fri_commit_round: 2,
        fri_commit_merkle_cap_height: 16,
        num_fri_query_round: query_rounds,
        num_fri_query_init_constants_sigmas_v: 84,
        num_fri_query_init_constants_sigmas_p: 8,
        num_fri_query_init_wires_v: 135,
        num_fri_query_init_wires_p: 8,
        num_fri_query_init_zs_partial_v: 20,
        num_fri_query_init_zs_partial_p: 8,
        num_fri_query_init_quotient_v: 16,
        num_fri_query_init_quotient_p: 8,
        num_fri_query_step0_v: 8,
        num_fri_query_step0_p: 5,
        num_fri_query_step1_v: 8,
        num_fri_query_step1_p: 2,
        num_fri_final_poly_ext_v: 8,
        num_public_inputs: 4,
        ..TranscriptConfigBuilder::new()
    }
    .build()
    .expect("valid config")
}

/// Patterned transcript with every length prefix set to its configured depth.
fn make_transcript(config: &TranscriptConfig) -> Vec<u8> {
    let mut bytes: Vec<u8> = (0..config.proof_size()).map(|i| (i % 251) as u8).collect();
    for span in config.layout() {
        if let Section::FriQuery {
            group,
            part: LeafPart::LengthPrefix,
            ..
        } = span.section
        {
            bytes[span.offset] = config.fri().leaf(group).proof_depth as u8;
        }
    }
    bytes
}

fn bench_deserialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_proof");
    for rounds in [1usize, 28, 84] {
        let config = plonky2_config(rounds);
        let bytes = make_transcript(&config);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &bytes, |b, bytes| {
            b.iter(|| black_box(deserialize_proof(bytes, &config).expect("decode")));
        });
    }
    group.finish();
}

fn bench_encode_and_render(c: &mut Criterion) {
    let config = plonky2_config(28);
    let proof = deserialize_proof(&make_transcript(&config), &config).expect("decode");
    let mut group = c.benchmark_group("proof_outputs");

    group.bench_function("serialize_proof", |b| {
        b.iter(|| black_box(serialize_proof(&proof, &config).expect("encode")));
    });

    group.bench_function("circuit_inputs", |b| {
        b.iter(|| black_box(CircuitInputs::from_proof(&proof).expect("render")));
    });

    group.finish();
}

criterion_group!(benches, bench_deserialize, bench_encode_and_render);
criterion_main!(benches);
