use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::SynthConfig;
use crate::error::{Result, SynthError};

/*
Equal-Tempered Pitch Table
==========================

Equal temperament splits the octave into 12 semitones that all share the
same frequency ratio:

    ratio = 2^(1/12) ≈ 1.059463

so twelve steps up multiplies the frequency by exactly 2 (one octave).

Building the Table
------------------

The table is built for a single reference octave (octave 4, the one holding
middle C and A440). Each pitch class is counted in semitones from A:

    frequency(i) = 440 × 2^((i − 9) / 12)      i = 0 (C) .. 11 (B), A = 9

  C4  261.63   C#4/Db4 277.18   D4  293.66   D#4/Eb4 311.13
  E4  329.63   F4      349.23   F#4/Gb4 369.99   G4  392.00
  G#4/Ab4 415.30   A4  440.00   A#4/Bb4 466.16   B4  493.88

Enharmonic spellings (C# and Db) are two names for one key, so both names
are inserted with the same value.

Other Octaves
-------------

Moving up or down an octave doubles or halves the frequency:

    frequency(note, octave) = table[note] × 2^(octave − 4)

Multiplying by a power of two only changes the float exponent, so the
octave doubling law holds exactly, not just approximately.

Piano Range
-----------

An 88-key piano runs from A0 (27.5 Hz) to C8 (4186 Hz):

  octave 0: only A0, A#0/Bb0, B0 exist
  octave 8: only C8 exists

Anything else in octaves 0 and 8 is rejected as out of range.
*/

/// Lowest and highest octave in scientific pitch notation on a piano.
pub const MIN_OCTAVE: i32 = 0;
pub const MAX_OCTAVE: i32 = 8;

/// Chromatic scale from C; compound symbols list enharmonic aliases.
const CHROMATIC: [&str; 12] = [
    "C", // C4 is "middle C"
    "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab",
    "A", // A4 is "A440"
    "A#/Bb", "B",
];

/// One of the 12 pitch classes. Flats parse to the matching sharp.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    /// Semitones above C (C = 0, B = 11).
    pub fn semitone(self) -> usize {
        self as usize
    }

    /// Every accepted spelling, sharp first.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        CHROMATIC[self.semitone()].split('/')
    }

    /// Canonical spelling (sharps for black keys).
    pub fn symbol(self) -> &'static str {
        self.aliases().next().unwrap_or_default()
    }

    /// Whether a key with this name exists in `octave` on an 88-key piano.
    pub fn on_piano(self, octave: i32) -> bool {
        match octave {
            MIN_OCTAVE => matches!(self, NoteName::A | NoteName::As | NoteName::B),
            MAX_OCTAVE => self == NoteName::C,
            _ => (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave),
        }
    }
}

impl FromStr for NoteName {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        NoteName::ALL
            .into_iter()
            .find(|name| name.aliases().any(|alias| alias == s))
            .ok_or_else(|| SynthError::InvalidNote(s.to_string()))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A note name plus octave, e.g. `Eb4`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub note: NoteName,
    pub octave: i32,
}

impl Pitch {
    pub fn new(note: NoteName, octave: i32) -> Self {
        Self { note, octave }
    }
}

impl FromStr for Pitch {
    type Err = SynthError;

    /// Parses scientific pitch notation. The octave is not range-checked here;
    /// that happens when the pitch is resolved.
    fn from_str(s: &str) -> Result<Self> {
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| SynthError::InvalidNote(s.to_string()))?;
        let (note, octave) = s.split_at(split);
        let note = note.parse()?;
        let octave = octave
            .parse()
            .map_err(|_| SynthError::InvalidNote(s.to_string()))?;
        Ok(Self { note, octave })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

/// Note-to-frequency lookup for the reference octave.
///
/// Built once and only read afterwards; share it by reference.
#[derive(Debug, Clone)]
pub struct PitchTable {
    frequencies: HashMap<&'static str, (NoteName, f64)>,
    reference_octave: i32,
}

impl PitchTable {
    pub fn new(config: &SynthConfig) -> Self {
        let a_index = NoteName::A.semitone() as f64;
        let mut frequencies = HashMap::with_capacity(17);

        for name in NoteName::ALL {
            let offset = name.semitone() as f64 - a_index;
            let frequency = config.reference_frequency * 2f64.powf(offset / 12.0);
            for alias in name.aliases() {
                frequencies.insert(alias, (name, frequency));
            }
        }

        Self {
            frequencies,
            reference_octave: config.reference_octave,
        }
    }

    /// Frequency of `note` in the reference octave, if the symbol is known.
    pub fn get(&self, note: &str) -> Option<f64> {
        self.frequencies.get(note).map(|&(_, frequency)| frequency)
    }

    /// Number of symbols in the table, aliases included.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency in Hz of `note` in `octave`, restricted to the 88 piano keys.
    pub fn resolve(&self, note: &str, octave: i32) -> Result<f64> {
        let &(name, base) = self
            .frequencies
            .get(note)
            .ok_or_else(|| SynthError::InvalidNote(note.to_string()))?;

        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(SynthError::InvalidOctave(octave));
        }
        if !name.on_piano(octave) {
            return Err(SynthError::OutOfRange {
                note: note.to_string(),
                octave,
            });
        }

        Ok(base * 2f64.powi(octave - self.reference_octave))
    }

    pub fn resolve_pitch(&self, pitch: &Pitch) -> Result<f64> {
        self.resolve(pitch.note.symbol(), pitch.octave)
    }
}

impl Default for PitchTable {
    fn default() -> Self {
        Self::new(&SynthConfig::default())
    }
}
