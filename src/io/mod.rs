// Purpose - external interfaces, file formats

pub mod wav;

pub use wav::{encode_wav, read_wav, write_wav};
