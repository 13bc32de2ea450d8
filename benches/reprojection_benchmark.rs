use criterion::{black_box, criterion_group, criterion_main, Criterion};

use segy2segy::processors::{CoordinateTransformer, EpsgTransformer};
use segy2segy::utils::scaling;

// Raw centimetre coordinates around ED50 / UTM zone 29N
fn create_test_coordinates(count: usize) -> Vec<(i32, i32)> {
    (0..count)
        .map(|i| {
            (
                43_000_000 + (i as i32) * 2_500,
                460_000_000 + (i as i32) * 1_250,
            )
        })
        .collect()
}

fn benchmark_scaling(c: &mut Criterion) {
    let coords = create_test_coordinates(10_000);

    c.bench_function("decode_encode_round_trip_10k", |b| {
        b.iter(|| {
            for &(x, y) in &coords {
                let real_x = scaling::decode(black_box(x), -100);
                let real_y = scaling::decode(black_box(y), -100);
                black_box(scaling::encode(real_x, -100).unwrap());
                black_box(scaling::encode(real_y, -100).unwrap());
            }
        })
    });
}

fn benchmark_transform(c: &mut Criterion) {
    let transformer = EpsgTransformer::new(23029, 23030).unwrap();
    let coords = create_test_coordinates(1_000);

    c.bench_function("utm_zone_shift_1k_points", |b| {
        b.iter(|| {
            for &(x, y) in &coords {
                let real_x = scaling::decode(x, -100);
                let real_y = scaling::decode(y, -100);
                black_box(transformer.transform(real_x, real_y).unwrap());
            }
        })
    });
}

criterion_group!(benches, benchmark_scaling, benchmark_transform);
criterion_main!(benches);
