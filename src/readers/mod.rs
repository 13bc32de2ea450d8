pub mod segy_reader;

pub use segy_reader::{BinaryHeader, SegyReader};
