pub mod batch;
pub mod reprojector;

pub use batch::{resolve_input_files, BatchProcessor, BatchSummary, FileOutcome};
pub use reprojector::{CoordinateTransformer, EpsgTransformer, Reprojector, TraceStats};
