use std::path::PathBuf;

use crate::models::CoordinateField;

/// How the coordinate scalar is obtained for each trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingMode {
    /// Use the scalar stored in each trace header (bytes 71-72).
    Header,
    /// Use a fixed scalar for every trace, ignoring the stored value.
    /// The value follows the SEG-Y sign convention, e.g. -100 divides
    /// stored coordinates by 100 on read.
    Forced(i16),
}

impl ScalingMode {
    /// Resolve the scalar to apply to a trace given the stored header value.
    pub fn effective_scalar(self, stored: i16) -> i16 {
        match self {
            ScalingMode::Header => stored,
            ScalingMode::Forced(scalar) => scalar,
        }
    }
}

/// Settings shared by every file in a run: where coordinates come from,
/// where they go, and how they are scaled and reprojected.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub source_srs: u32,
    pub target_srs: u32,
    pub source_field: CoordinateField,
    pub target_field: CoordinateField,
    pub scaling: ScalingMode,
}

impl Default for JobSpec {
    fn default() -> Self {
        // ED50 / UTM zone 29N to zone 30N, source field to ensemble field
        Self {
            source_srs: 23029,
            target_srs: 23030,
            source_field: CoordinateField::Source,
            target_field: CoordinateField::Cdp,
            scaling: ScalingMode::Header,
        }
    }
}

/// One file to process: an input path and the output path resolved for it.
#[derive(Debug, Clone)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileJob {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }
}
