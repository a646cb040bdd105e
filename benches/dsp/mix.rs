//! Benchmarks for mixing, normalizing and quantizing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_synth::dsp::{mix, quantize};
use saavy_synth::Signal;

use crate::SIGNAL_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in SIGNAL_SIZES {
        // Four voices, like the demo chord
        let voices: Vec<Signal> = (0..4)
            .map(|v| {
                (0..size)
                    .map(|i| (i as f64 * 0.01 * (v + 1) as f64).sin())
                    .collect()
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("sum_4", size), &size, |b, _| {
            b.iter(|| mix::mix(black_box(&voices)).unwrap())
        });

        let mixed = mix::mix(&voices).unwrap();
        group.bench_with_input(BenchmarkId::new("normalize", size), &size, |b, _| {
            b.iter(|| mix::normalize(black_box(&mixed)).unwrap())
        });

        let normalized = mix::normalize(&mixed).unwrap();
        group.bench_with_input(BenchmarkId::new("quantize", size), &size, |b, _| {
            b.iter(|| quantize::quantize(black_box(&normalized)))
        });
    }

    group.finish();
}
