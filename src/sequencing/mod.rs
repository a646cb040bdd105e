//! Musical input: note names, pitch lookup and tempo.

pub mod notes;
pub mod tempo;

pub use notes::{NoteName, Pitch, PitchTable};
pub use tempo::{beats_to_seconds, NoteLength};
