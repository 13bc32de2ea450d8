use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SegyError>;

#[derive(Error, Debug)]
pub enum SegyError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("EPSG:{0} is not a known reference system")]
    UnknownSrs(u32),

    #[error("EPSG:{code} has an unusable projection definition: {message}")]
    InvalidProjection { code: u32, message: String },

    #[error("Coordinate transform failed: {0}")]
    Transform(String),

    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Not a valid SEG-Y file: {0}")]
    InvalidFormat(String),

    #[error("Unsupported sample format code: {0}")]
    UnsupportedSampleFormat(i16),

    #[error("Truncated SEG-Y file: {0}")]
    Truncated(String),

    #[error("Coordinate {0} does not fit a 32-bit header field")]
    CoordinateOverflow(f64),

    #[error("{failed} of {total} files failed")]
    BatchFailed { failed: usize, total: usize },
}
