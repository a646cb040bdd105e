//! saavy_synth - render a sawtooth chord to WAV
//!
//! Run with: cargo run -- F4 A4 C4 Eb4 --cutoff 1000

mod args;

use args::Command;
use color_eyre::eyre::WrapErr;
use saavy_synth::{ChordRenderer, RenderRequest, SynthConfig};
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = match args::parse(std::env::args().skip(1))? {
        Command::Render(options) => options,
        Command::Help => {
            println!("{}", args::USAGE);
            return Ok(());
        }
    };

    let config = SynthConfig::default().sample_rate(options.sample_rate);
    let renderer = ChordRenderer::new(config)?;

    let mut request = RenderRequest::new(options.pitches.clone(), options.note_length());
    request.cutoff_hz = options.cutoff_hz;

    let pcm = renderer
        .render_to_file(&request, &options.out)
        .wrap_err_with(|| format!("failed to render {}", options.out.display()))?;

    let seconds = pcm.len() as f64 / config.sample_rate as f64;
    println!(
        "Wrote {} ({} samples, {:.2} s)",
        options.out.display(),
        pcm.len(),
        seconds
    );
    Ok(())
}
