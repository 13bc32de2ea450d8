pub mod segy_writer;

pub use segy_writer::{FieldPatch, SegyWriter};
