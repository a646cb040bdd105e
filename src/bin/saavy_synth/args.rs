//! Command-line options.

use std::path::PathBuf;

use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use saavy_synth::{NoteLength, Pitch};

pub const USAGE: &str = "\
Usage: saavy_synth [OPTIONS] [PITCH...]

Render a sawtooth chord to a mono 16-bit WAV file.

Pitches use scientific notation (C4, Eb4, F#3). Default chord: F4 A4 C4 Eb4.

Options:
  --bpm <BPM>            Tempo in beats per minute [default: 120]
  --beats <BEATS>        Note length in beats [default: 4]
  --seconds <SECONDS>    Note length in seconds (overrides --bpm/--beats)
  --cutoff <HZ>          Low-pass cutoff frequency [default: 1000]
  --no-filter            Skip the low-pass filter
  --sample-rate <HZ>     Output sample rate [default: 44100]
  --out <PATH>           Output file [default: chord.wav]
  -h, --help             Print this help";

const DEFAULT_CHORD: [&str; 4] = ["F4", "A4", "C4", "Eb4"];

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub pitches: Vec<Pitch>,
    pub bpm: f64,
    pub beats: f64,
    pub seconds: Option<f64>,
    pub cutoff_hz: Option<f64>,
    pub sample_rate: u32,
    pub out: PathBuf,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Render(Options),
    Help,
}

impl Options {
    pub fn note_length(&self) -> NoteLength {
        match self.seconds {
            Some(seconds) => NoteLength::Seconds(seconds),
            None => NoteLength::Beats {
                beats: self.beats,
                bpm: self.bpm,
            },
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pitches: Vec::new(),
            bpm: 120.0,
            beats: 4.0,
            seconds: None,
            cutoff_hz: Some(1000.0),
            sample_rate: saavy_synth::config::DEFAULT_SAMPLE_RATE,
            out: PathBuf::from("chord.wav"),
        }
    }
}

fn value<T>(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .next()
        .ok_or_else(|| eyre!("{flag} expects a value"))?;
    raw.parse()
        .wrap_err_with(|| format!("invalid value '{raw}' for {flag}"))
}

/// Parse arguments, program name already stripped.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--bpm" => options.bpm = value(&arg, &mut args)?,
            "--beats" => options.beats = value(&arg, &mut args)?,
            "--seconds" => options.seconds = Some(value(&arg, &mut args)?),
            "--cutoff" => options.cutoff_hz = Some(value(&arg, &mut args)?),
            "--no-filter" => options.cutoff_hz = None,
            "--sample-rate" => options.sample_rate = value(&arg, &mut args)?,
            "--out" => options.out = value(&arg, &mut args)?,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            pitch => options.pitches.push(
                pitch
                    .parse()
                    .wrap_err_with(|| format!("invalid pitch '{pitch}'"))?,
            ),
        }
    }

    if options.pitches.is_empty() {
        options.pitches = DEFAULT_CHORD
            .iter()
            .map(|p| p.parse())
            .collect::<saavy_synth::Result<_>>()?;
    }

    Ok(Command::Render(options))
}
