use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tshist_core::{Histogram, Pipeline, PipelineConfig, RenderOptions, SineNoise};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 20_000usize] {
        group.bench_function(format!("ts_hist_{n}"), |b| {
            let render = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            let pipeline = Pipeline::new(PipelineConfig { samples: n, render, ..PipelineConfig::default() })
                .expect("valid config");
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| -> Result<()> {
                let png = pipeline.render_png(&mut rng)?;
                black_box(png);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let series = SineNoise::new(100_000).synthesize(&mut StdRng::seed_from_u64(2)).expect("series");
    let values: Vec<f64> = series.ys().collect();
    c.bench_function("histogram_100k_30", |b| {
        b.iter(|| black_box(Histogram::compute(black_box(&values), 30)))
    });
}

criterion_group!(benches, bench_pipeline, bench_histogram);
criterion_main!(benches);
