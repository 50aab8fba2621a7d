//! Benchmarks for Enigma machine operations.
//!
//! Measures machine construction, single-letter encoding and string
//! throughput for three- and four-rotor machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Enigma, RotorConfig};

/// Plug pairs used across all benchmarks.
const BENCH_PLUGS: [&str; 10] = ["AT", "BL", "DF", "GJ", "HM", "NW", "OP", "QY", "RZ", "VX"];

/// Message lengths for the throughput group.
const MESSAGE_SIZES: [usize; 4] = [16, 256, 4096, 65536];

fn m3_rotors() -> Vec<RotorConfig> {
    vec![
        RotorConfig::new("I", 1, 'A'),
        RotorConfig::new("II", 1, 'A'),
        RotorConfig::new("III", 1, 'A'),
    ]
}

fn m4_rotors() -> Vec<RotorConfig> {
    vec![
        RotorConfig::new("Beta", 1, 'A'),
        RotorConfig::new("II", 1, 'N'),
        RotorConfig::new("IV", 1, 'J'),
        RotorConfig::new("I", 22, 'V'),
    ]
}

/// Benchmarks `Enigma::new()`: registry lookups, wiring parsing and
/// plugboard validation.
fn bench_construction(c: &mut Criterion) {
    let rotors = m4_rotors();
    c.bench_function("construct_m4", |b| {
        b.iter(|| Enigma::new(black_box(&rotors), black_box("B-Thin"), &BENCH_PLUGS).unwrap());
    });
}

/// Benchmarks a single `encode_char()` call.
///
/// The machine is built once and its rotors advance naturally between
/// iterations, so the double-step path is exercised periodically.
fn bench_encode_char(c: &mut Criterion) {
    let mut machine = Enigma::new(&m3_rotors(), "B", &BENCH_PLUGS).unwrap();

    let mut group = c.benchmark_group("encode_char");
    group.throughput(Throughput::Elements(1));
    group.bench_function("m3", |b| {
        b.iter(|| machine.encode_char(black_box('Q')));
    });
    group.finish();
}

/// Benchmarks `encode_string()` throughput across message sizes.
fn bench_encode_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_string");

    for &size in MESSAGE_SIZES.iter() {
        let text: String = (0..size).map(|i| (b'A' + (i % 26) as u8) as char).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("m4", size), &text, |b, text| {
            let mut machine = Enigma::new(&m4_rotors(), "B-Thin", &BENCH_PLUGS).unwrap();
            b.iter(|| machine.encode_string(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_encode_char,
    bench_encode_string
);
criterion_main!(benches);
