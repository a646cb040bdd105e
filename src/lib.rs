pub mod config;
pub mod dsp; // Oscillator, filter, mix and quantize stages
pub mod error;
pub mod io;
pub mod render; // Pitch → PCM pipeline driver
pub mod sequencing; // Note names, pitch table, tempo
pub mod signal;

pub use config::SynthConfig;
pub use error::{Result, SynthError};
pub use render::{ChordRenderer, RenderRequest};
pub use sequencing::{NoteLength, NoteName, Pitch, PitchTable};
pub use signal::{PcmBuffer, Signal};
