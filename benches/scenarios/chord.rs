//! Benchmarks for rendering whole chords through the pipeline.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_synth::{ChordRenderer, NoteLength, Pitch, RenderRequest, SynthConfig};

use crate::{SAMPLE_RATE, SIGNAL_SIZES};

fn pitches(names: &[&str]) -> Vec<Pitch> {
    names.iter().map(|n| n.parse().unwrap()).collect()
}

pub fn bench_chord(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/chord");
    let renderer = ChordRenderer::new(SynthConfig::default()).unwrap();

    for &size in SIGNAL_SIZES {
        let length = NoteLength::Seconds(size as f64 / SAMPLE_RATE as f64);

        // === DEMO: F7 chord through a 1 kHz low-pass ===
        let demo = RenderRequest::new(pitches(&["F4", "A4", "C4", "Eb4"]), length).cutoff(1000.0);
        group.bench_with_input(BenchmarkId::new("demo_filtered", size), &size, |b, _| {
            b.iter(|| renderer.render(black_box(&demo)).unwrap())
        });

        // === DRY: same chord, no filter ===
        let dry = RenderRequest::new(pitches(&["F4", "A4", "C4", "Eb4"]), length);
        group.bench_with_input(BenchmarkId::new("demo_dry", size), &size, |b, _| {
            b.iter(|| renderer.render(black_box(&dry)).unwrap())
        });

        // === WIDE: eight voices across the keyboard ===
        let wide = RenderRequest::new(
            pitches(&["A0", "E2", "C3", "G3", "E4", "B4", "D6", "C8"]),
            length,
        )
        .cutoff(4000.0);
        group.bench_with_input(BenchmarkId::new("eight_voices", size), &size, |b, _| {
            b.iter(|| renderer.render(black_box(&wide)).unwrap())
        });
    }

    group.finish();
}
