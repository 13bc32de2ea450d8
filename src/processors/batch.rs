use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SegyError};
use crate::models::{CoordinateField, FileJob, JobSpec, ScalingMode};
use crate::processors::{EpsgTransformer, Reprojector, TraceStats};
use crate::readers::SegyReader;
use crate::utils::progress::ProgressReporter;
use crate::utils::filename::is_segy_file;
use crate::writers::SegyWriter;

/// Resolve an input path to the list of files to process.
///
/// A file resolves to itself. A directory is scanned (non-recursively) for
/// `.sgy`/`.segy` files, optionally required to contain `filter` in their
/// name, and sorted by file name for a stable processing order.
pub fn resolve_input_files(input: &Path, filter: Option<&str>) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(SegyError::InvalidArgument(format!(
            "input is not a file or directory: {}",
            input.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_segy_file(&path) {
            continue;
        }
        if let Some(pattern) = filter {
            match path.file_name().and_then(|name| name.to_str()) {
                Some(name) if name.contains(pattern) => {}
                _ => continue,
            }
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        return Err(SegyError::InvalidArgument(format!(
            "no matching SEG-Y files found in directory: {}",
            input.display()
        )));
    }

    Ok(files)
}

/// What happened to one file of the batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: std::result::Result<TraceStats, SegyError>,
}

impl FileOutcome {
    fn input_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// Collected outcomes of a run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Reprojection Report ===\n");
        summary.push_str(&format!("Files processed: {}\n", self.processed()));
        summary.push_str(&format!("Files failed: {}\n", self.failed()));

        let skipped: usize = self
            .outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|stats| stats.skipped)
            .sum();
        if skipped > 0 {
            summary.push_str(&format!("Traces skipped: {}\n", skipped));
        }

        if self.failed() > 0 {
            summary.push_str("\nFailures:\n");
            for (i, outcome) in self
                .outcomes
                .iter()
                .filter(|o| o.result.is_err())
                .enumerate()
            {
                if let Err(error) = &outcome.result {
                    summary.push_str(&format!("  {}. {}: {}\n", i + 1, outcome.input_name(), error));
                }
            }
        }

        summary
    }
}

/// Sequential driver over a batch of file jobs. One file is opened, fully
/// processed and closed before the next begins; a failed file is recorded
/// and the batch moves on.
pub struct BatchProcessor {
    transformer: EpsgTransformer,
    source_field: CoordinateField,
    target_field: CoordinateField,
    scaling: ScalingMode,
}

impl BatchProcessor {
    /// Build the processor for a run. Reference-system resolution happens
    /// here, so a bad EPSG code aborts before any file is touched.
    pub fn new(spec: &JobSpec) -> Result<Self> {
        Ok(Self {
            transformer: EpsgTransformer::new(spec.source_srs, spec.target_srs)?,
            source_field: spec.source_field,
            target_field: spec.target_field,
            scaling: spec.scaling,
        })
    }

    /// Process a single file into a freshly created output.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<TraceStats> {
        let reader = SegyReader::open(input)?;
        let writer = SegyWriter::create(output)?;
        let reprojector = Reprojector::new(
            &self.transformer,
            self.source_field,
            self.target_field,
            self.scaling,
        );
        reprojector.reproject(&reader, writer)
    }

    /// Run every job, reporting a line per file as it completes.
    pub fn run(&self, jobs: &[FileJob], progress: Option<&ProgressReporter>) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for job in jobs {
            let result = self.process_file(&job.input, &job.output);

            let outcome = FileOutcome {
                input: job.input.clone(),
                output: job.output.clone(),
                result,
            };

            if let Some(progress) = progress {
                match &outcome.result {
                    Ok(stats) if stats.skipped > 0 => progress.println(&format!(
                        "  ok {} ({} traces, {} skipped)",
                        outcome.input_name(),
                        stats.traces,
                        stats.skipped
                    )),
                    Ok(stats) => progress.println(&format!(
                        "  ok {} ({} traces)",
                        outcome.input_name(),
                        stats.traces
                    )),
                    Err(error) => {
                        progress.println(&format!("  failed {}: {}", outcome.input_name(), error))
                    }
                }
                progress.increment(1);
            }

            summary.outcomes.push(outcome);
        }

        summary
    }
}
