use tracing::Level;

use crate::cli::args::Cli;
use crate::error::{Result, SegyError};
use crate::models::{FileJob, JobSpec, ScalingMode};
use crate::processors::{resolve_input_files, BatchProcessor};
use crate::utils::filename::suffixed_output_path;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let spec = JobSpec {
        source_srs: cli.source_srs,
        target_srs: cli.target_srs,
        source_field: cli.source_field,
        target_field: cli.target_field,
        scaling: if cli.force_scaling {
            ScalingMode::Forced(cli.scaler)
        } else {
            ScalingMode::Header
        },
    };

    let jobs = build_jobs(&cli)?;

    // Both reference systems must resolve before any file is touched
    let processor = BatchProcessor::new(&spec)?;

    println!(
        "Reprojecting {} -> {} coordinates, EPSG:{} -> EPSG:{}",
        spec.source_field, spec.target_field, spec.source_srs, spec.target_srs
    );

    let progress = if jobs.len() > 1 {
        ProgressReporter::files(jobs.len() as u64, cli.quiet)
    } else {
        ProgressReporter::spinner("Reprojecting...", cli.quiet)
    };

    let summary = processor.run(&jobs, Some(&progress));
    progress.finish();

    println!("\n{}", summary.generate_summary());

    if summary.failed() > 0 {
        Err(SegyError::BatchFailed {
            failed: summary.failed(),
            total: summary.total(),
        })
    } else {
        Ok(())
    }
}

/// Pair every resolved input with its output path, enforcing the
/// output-naming rules for each mode.
fn build_jobs(cli: &Cli) -> Result<Vec<FileJob>> {
    if let Some(suffix) = &cli.suffix {
        if suffix.is_empty() {
            return Err(SegyError::InvalidArgument(
                "suffix must not be empty".to_string(),
            ));
        }
    }

    if cli.input.is_file() {
        let output = match (&cli.output, &cli.suffix) {
            (Some(output), None) => output.clone(),
            (None, Some(suffix)) => {
                suffixed_output_path(&cli.input, suffix, cli.output_dir.as_deref())
            }
            _ => {
                return Err(SegyError::InvalidArgument(
                    "provide an output path (-o) or a suffix (-s); files are never overwritten"
                        .to_string(),
                ))
            }
        };
        return Ok(vec![FileJob::new(cli.input.clone(), output)]);
    }

    // Directory mode. A fixed output name would make every file collide,
    // so only suffix naming is allowed.
    if cli.output.is_some() {
        return Err(SegyError::InvalidArgument(
            "-o only applies to a single file; use a suffix (-s) in directory mode".to_string(),
        ));
    }
    let suffix = cli.suffix.as_deref().ok_or_else(|| {
        SegyError::InvalidArgument(
            "directory mode requires a suffix (-s) for output file names".to_string(),
        )
    })?;

    let files = resolve_input_files(&cli.input, cli.filter.as_deref())?;
    Ok(files
        .into_iter()
        .map(|input| {
            let output = suffixed_output_path(&input, suffix, cli.output_dir.as_deref());
            FileJob::new(input, output)
        })
        .collect())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // try_init: tests may install a subscriber more than once
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_single_file_requires_output_or_suffix() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("line.sgy");
        fs::write(&input, b"x").unwrap();

        let cli = parse(&["segy2segy", input.to_str().unwrap()]);
        let err = build_jobs(&cli).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_file_with_explicit_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("line.sgy");
        fs::write(&input, b"x").unwrap();

        let cli = parse(&["segy2segy", input.to_str().unwrap(), "-o", "/tmp/out.sgy"]);
        let jobs = build_jobs(&cli).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].output, PathBuf::from("/tmp/out.sgy"));
    }

    #[test]
    fn test_single_file_with_suffix() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("line.sgy");
        fs::write(&input, b"x").unwrap();

        let cli = parse(&["segy2segy", input.to_str().unwrap(), "-s", "_utm30"]);
        let jobs = build_jobs(&cli).unwrap();
        assert_eq!(jobs[0].output, dir.path().join("line_utm30.sgy"));
    }

    #[test]
    fn test_directory_mode_requires_suffix() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.sgy"), b"x").unwrap();

        let cli = parse(&["segy2segy", dir.path().to_str().unwrap()]);
        let err = build_jobs(&cli).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgument(_)));
    }

    #[test]
    fn test_directory_mode_rejects_explicit_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.sgy"), b"x").unwrap();

        let cli = parse(&[
            "segy2segy",
            dir.path().to_str().unwrap(),
            "-o",
            "/tmp/out.sgy",
        ]);
        let err = build_jobs(&cli).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgument(_)));
    }

    #[test]
    fn test_directory_mode_builds_suffixed_jobs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.sgy"), b"x").unwrap();
        fs::write(dir.path().join("b.sgy"), b"x").unwrap();

        let cli = parse(&["segy2segy", dir.path().to_str().unwrap(), "-s", "_new"]);
        let jobs = build_jobs(&cli).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].output, dir.path().join("a_new.sgy"));
        assert_eq!(jobs[1].output, dir.path().join("b_new.sgy"));
    }

    #[test]
    fn test_empty_suffix_is_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("line.sgy");
        fs::write(&input, b"x").unwrap();

        let cli = parse(&["segy2segy", input.to_str().unwrap(), "-s", ""]);
        let err = build_jobs(&cli).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgument(_)));
    }
}
