//! Benchmark for ingestion and star map rendering.

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use starfield_viz::ingest::Session;
use starfield_viz::plots::StarMap;

fn synthetic_catalog(rows: usize) -> Vec<u8> {
    let mut data = b"id,hip,proper,ra,dec,dist,mag,spect,x,y,z\n".to_vec();
    let classes = ["O9", "B5V", "A1V", "F8", "G2V", "K0III", "M4.5Ve", ""];
    for i in 0..rows {
        let class = classes[i % classes.len()];
        let line = format!(
            "{i},{},,{:.6},{:.6},{:.3},{:.2},{class},{:.6},{:.6},{:.6}\n",
            i + 1,
            (i % 24) as f64 * 0.997,
            (i % 180) as f64 - 90.0,
            (i % 1000) as f64 * 1.5,
            (i % 15) as f64 - 1.5,
            (i as f64).sin() * 100.0,
            (i as f64).cos() * 100.0,
            (i as f64 * 0.5).sin() * 100.0,
        );
        data.extend_from_slice(line.as_bytes());
    }
    data
}

fn ingest_feed_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_feed");
    let data = synthetic_catalog(20_000);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk_size in [512, 16 * 1024, 256 * 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &chunk_size, |b, &size| {
            b.iter(|| {
                let mut session = Session::new();
                for chunk in data.chunks(size) {
                    session.feed(black_box(chunk));
                }
                session.finish()
            });
        });
    }

    group.finish();
}

fn star_map_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("star_map_render");

    for rows in [1_000, 10_000] {
        let mut session = Session::new();
        session.feed(&synthetic_catalog(rows));
        let map = StarMap::new().columns("x", "z", "spect");

        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| map.to_canvas(black_box(&session)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, ingest_feed_benchmark, star_map_render_benchmark);
criterion_main!(benches);
