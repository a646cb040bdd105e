//! Benchmarks for end-to-end renders.

mod chord;

pub use chord::bench_chord;
