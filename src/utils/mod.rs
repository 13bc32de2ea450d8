pub mod filename;
pub mod progress;
pub mod scaling;

pub use filename::{is_segy_file, suffixed_output_path};
pub use progress::ProgressReporter;
