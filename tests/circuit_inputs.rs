
use _fixtures::{minimal_builder, sample_proof, MINIMAL_CONFIG, TWO_ROUND_CONFIG};
use plonk_fri_transcript::circuit::{CircuitError, CircuitInputs};
use plonk_fri_transcript::config::TranscriptConfigBuilder;
use plonk_fri_transcript::field::FieldElement;
use plonk_fri_transcript::merkle::{Digest, MerkleCap};

#[test]
fn elements_render_as_decimal_limbs() {
    let mut proof = sample_proof(&MINIMAL_CONFIG, 1);
    proof.wires_cap = MerkleCap(vec![Digest::new(vec![1; 32])]);
    proof.opening_proof.pow_witness = FieldElement::new(vec![51; 8]);
    proof.public_inputs = vec![FieldElement::new(vec![52; 8])];

    let inputs = CircuitInputs::from_proof(&proof).expect("render");
    assert_eq!(inputs.wires_cap, vec![vec!["72340172838076673".to_string(); 4]]);
    assert_eq!(inputs.fri_pow_witness, "3689348814741910323");
    assert_eq!(inputs.public_inputs, vec!["3761688987579986996".to_string()]);
    assert!(inputs.openings_constants.iter().all(|ext| ext.len() == 2));
}

#[test]
fn query_groups_are_indexed_by_round() {
    let config = &*TWO_ROUND_CONFIG;
    let proof = sample_proof(config, 2);
    let inputs = CircuitInputs::from_proof(&proof).expect("render");

    assert_eq!(inputs.fri_commit_phase_merkle_caps.len(), 2);
    assert!(inputs
        .fri_commit_phase_merkle_caps
        .iter()
        .all(|cap| cap.len() == 2 && cap.iter().all(|digest| digest.len() == 4)));

    assert_eq!(inputs.fri_query_init_wires_v.len(), 2);
    assert!(inputs.fri_query_init_wires_v.iter().all(|values| values.len() == 3));
    assert!(inputs.fri_query_init_quotient_p.iter().all(|path| path.len() == 2));
    assert!(inputs.fri_query_step0_v.iter().all(|values| values.len() == 2));
    assert!(inputs.fri_query_step0_p.iter().all(|path| path.len() == 3));
    assert!(inputs.fri_query_step1_p.iter().all(|path| path.is_empty()));
    assert_ne!(inputs.fri_query_init_wires_v[0], inputs.fri_query_init_wires_v[1]);

    let first = &proof.opening_proof.query_round_proofs[0];
    let limb: [u8; 8] = first.wires.values[0].as_ref().try_into().expect("8 bytes");
    assert_eq!(inputs.fri_query_init_wires_v[0][0], u64::from_le_bytes(limb).to_string());
    assert_eq!(CircuitInputs::from_proof(&proof).expect("render"), inputs);
}

#[test]
fn json_uses_circuit_key_names() {
    let proof = sample_proof(&MINIMAL_CONFIG, 3);
    let json = CircuitInputs::from_proof(&proof)
        .and_then(|inputs| inputs.to_json())
        .expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 26);
    for key in [
        "wires_cap",
        "openings_plonk_zs_next",
        "fri_commit_phase_merkle_caps",
        "fri_query_init_constants_sigmas_v",
        "fri_query_init_zs_partial_p",
        "fri_query_step1_v",
        "fri_final_poly_ext_v",
        "fri_pow_witness",
        "public_inputs",
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert!(object["fri_pow_witness"].is_string());

    let back: CircuitInputs = serde_json::from_str(&json).expect("parse back");
    assert_eq!(back.public_inputs.len(), 1);
}

#[test]
fn narrow_field_elements_cannot_be_rendered() {
    let config = TranscriptConfigBuilder {
        field_size: 4,
        ..minimal_builder()
    }
    .build()
    .expect("config");
    let proof = sample_proof(&config, 4);
    let err = CircuitInputs::from_proof(&proof).unwrap_err();
    assert!(matches!(
        err,
        CircuitError::LimbWidth {
            element: "field element",
            width: 4,
        }
    ));
}
