use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plonk_fri_transcript::artifacts::load_proof_artifact;
use plonk_fri_transcript::config::TranscriptConfig;
use plonk_fri_transcript::proof::{deserialize_proof, OpeningCategory, Proof};
use plonk_fri_transcript::CircuitInputs;

/// Decode a packed proof transcript and summarise its contents.
#[derive(Debug, Parser)]
#[command(name = "transcript-inspect", version)]
struct Cli {
    /// Transcript layout (`conf.json`).
    #[arg(long, value_name = "FILE")]
    config: PathBuf,

    /// Proof document (`proof.json`, a JSON array of base64 strings).
    #[arg(long, value_name = "FILE")]
    proof: PathBuf,

    /// Transcript to decode when the document holds several.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Write verifier-circuit inputs as JSON to this path.
    #[arg(long, value_name = "FILE")]
    circuit_out: Option<PathBuf>,

    /// Print the byte layout derived from the configuration.
    #[arg(long)]
    layout: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config_json = fs::read_to_string(&cli.config)
        .with_context(|| format!("failed to read {}", cli.config.display()))?;
    let config = TranscriptConfig::from_json(&config_json)
        .with_context(|| format!("invalid configuration in {}", cli.config.display()))?;
    info!(proof_size = config.proof_size(), "loaded transcript configuration");

    if cli.layout {
        print_layout(&config);
    }

    let proof_json = fs::read_to_string(&cli.proof)
        .with_context(|| format!("failed to read {}", cli.proof.display()))?;
    let bytes = load_proof_artifact(&proof_json, cli.index)?;
    let proof = deserialize_proof(bytes.as_slice(), &config)
        .with_context(|| format!("transcript {} does not match the configuration", cli.index))?;
    info!(len = bytes.len(), "decoded transcript");

    print_summary(&proof);

    if let Some(path) = cli.circuit_out {
        let json = CircuitInputs::from_proof(&proof)?.to_json()?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote circuit inputs");
    }
    Ok(())
}

fn print_layout(config: &TranscriptConfig) {
    for span in config.layout() {
        if span.len == 0 {
            continue;
        }
        println!("{:>10} {:>8}  {}", span.offset, span.len, span.section);
    }
    println!("{:>10} {:>8}  total", config.proof_size(), "");
}

fn print_summary(proof: &Proof) {
    let fri = &proof.opening_proof;
    println!("wires_cap                      {} digests", proof.wires_cap.len());
    println!(
        "plonk_zs_partial_products_cap  {} digests",
        proof.plonk_zs_partial_products_cap.len()
    );
    println!("quotient_polys_cap             {} digests", proof.quotient_polys_cap.len());
    for category in OpeningCategory::ALL {
        println!(
            "openings.{:<22} {} elements",
            category.name(),
            proof.openings.get(category).len()
        );
    }
    println!("fri commit rounds              {}", fri.commit_phase_merkle_caps.len());
    println!("fri query rounds               {}", proof.num_query_rounds());
    println!("fri final poly                 {} coefficients", fri.final_poly.len());
    println!("fri pow witness                {:?}", proof.pow_witness());
    println!("public inputs                  {}", proof.public_inputs.len());
}
