// File: crates/demo/src/main.rs
// Summary: Renders the default chart to target/out/ts_hist.png, optionally from a fixed seed.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tshist_core::{Pipeline, PipelineConfig};

fn main() -> Result<()> {
    // Optional seed from CLI; without one every run looks different.
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>().with_context(|| format!("seed must be an integer, got '{s}'")))
        .transpose()?;

    let mut rng = match seed {
        Some(seed) => {
            println!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let pipeline = Pipeline::new(PipelineConfig::default())?;
    let png = pipeline.render_png(&mut rng)?;
    let (w, h) = png.dimensions();

    let out = PathBuf::from("target/out/ts_hist.png");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&out, png.bytes()).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} ({}x{}, {} bytes)", out.display(), w, h, png.len());
    Ok(())
}
