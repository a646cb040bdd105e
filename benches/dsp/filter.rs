//! Benchmarks for the cascaded Butterworth low-pass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_synth::dsp::filter::{FilterSpec, LowPassFilter};

use crate::{SAMPLE_RATE, SIGNAL_SIZES};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in SIGNAL_SIZES {
        // Sawtooth-like ramp
        let input: Vec<f64> = (0..size)
            .map(|i| ((i % 100) as f64 / 100.0) * 2.0 - 1.0)
            .collect();

        for order in [2, 4, 8] {
            let mut filter = LowPassFilter::new(FilterSpec {
                order,
                cutoff_hz: 1000.0,
                sample_rate: SAMPLE_RATE,
            })
            .unwrap();
            let id = BenchmarkId::new(format!("order_{order}"), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| filter.apply(black_box(&input)))
            });
        }

        // Coefficient design on its own
        group.bench_with_input(BenchmarkId::new("design", size), &size, |b, _| {
            b.iter(|| {
                LowPassFilter::new(FilterSpec {
                    order: 4,
                    cutoff_hz: black_box(1000.0),
                    sample_rate: SAMPLE_RATE,
                })
                .unwrap()
            })
        });
    }

    group.finish();
}
