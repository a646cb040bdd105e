//! Benchmarks for sawtooth wavetable tiling.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_synth::dsp::oscillator::{sawtooth, Sawtooth};

use crate::{SAMPLE_RATE, SIGNAL_SIZES};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in SIGNAL_SIZES {
        let duration = size as f64 / SAMPLE_RATE as f64;

        // Table built once, only tiling measured
        let saw = Sawtooth::new(440.0, SAMPLE_RATE).unwrap();
        group.bench_with_input(BenchmarkId::new("tile", size), &size, |b, _| {
            b.iter(|| saw.render(black_box(duration)).unwrap())
        });

        // Low note: long table, few repeats
        group.bench_with_input(BenchmarkId::new("a0", size), &size, |b, _| {
            b.iter(|| sawtooth(black_box(27.5), black_box(duration), SAMPLE_RATE).unwrap())
        });

        // High note: short table, many repeats
        group.bench_with_input(BenchmarkId::new("c8", size), &size, |b, _| {
            b.iter(|| sawtooth(black_box(4186.0), black_box(duration), SAMPLE_RATE).unwrap())
        });
    }

    group.finish();
}
