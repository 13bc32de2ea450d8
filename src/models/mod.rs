pub mod field;
pub mod job;

pub use field::{CoordinateField, RawCoordinate};
pub use job::{FileJob, JobSpec, ScalingMode};
