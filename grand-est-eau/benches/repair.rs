//! Benchmarks de la réparation d'encodage

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use grand_est_eau::export::to_pretty_bytes;
use grand_est_eau::feature::collection;
use grand_est_eau::repair::{apply, decode_lossy, repair_bytes};
use grand_est_eau::synth::synthetic_piezometres;

/// GeoJSON réaliste corrompu (UTF-8 relu en Windows-1252)
fn corrupted_collection() -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let fc = collection(synthetic_piezometres(&mut rng));
    let clean = String::from_utf8(to_pretty_bytes(&fc).unwrap()).unwrap();

    let (broken, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(clean.as_bytes());
    broken.into_owned().into_bytes()
}

fn bench_table(c: &mut Criterion) {
    let data = corrupted_collection();
    let text = String::from_utf8(data).unwrap();

    c.bench_function("apply_table", |b| b.iter(|| apply(black_box(&text))));
}

fn bench_decode(c: &mut Criterion) {
    let mut data = corrupted_collection();
    data.extend_from_slice(b"\xE9\xFF");

    c.bench_function("decode_lossy", |b| b.iter(|| decode_lossy(black_box(&data))));
}

fn bench_repair(c: &mut Criterion) {
    let data = corrupted_collection();

    c.bench_function("repair_bytes", |b| b.iter(|| repair_bytes(black_box(&data))));
}

criterion_group!(benches, bench_table, bench_decode, bench_repair);
criterion_main!(benches);
