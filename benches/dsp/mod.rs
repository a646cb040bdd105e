//! Benchmarks for individual pipeline stages.

mod filter;
mod mix;
mod oscillator;

pub use filter::bench_filter;
pub use mix::bench_mix;
pub use oscillator::bench_oscillator;
