use clap::Parser;
use std::path::PathBuf;

use crate::models::CoordinateField;

#[derive(Debug, Parser)]
#[command(name = "segy2segy")]
#[command(about = "Reproject coordinates stored in SEG-Y trace headers")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Input SEG-Y file or directory")]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        conflicts_with = "suffix",
        help = "Output file path (single-file mode only; existing files are never overwritten)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Suffix inserted before the extension to build output file names"
    )]
    pub suffix: Option<String>,

    #[arg(
        long = "s_srs",
        default_value_t = 23029,
        help = "EPSG code of the input reference system"
    )]
    pub source_srs: u32,

    #[arg(
        long = "t_srs",
        default_value_t = 23030,
        help = "EPSG code of the output reference system"
    )]
    pub target_srs: u32,

    #[arg(
        long = "s_coord",
        value_enum,
        ignore_case = true,
        default_value = "source",
        help = "Trace header field holding the input coordinates"
    )]
    pub source_field: CoordinateField,

    #[arg(
        long = "t_coord",
        value_enum,
        ignore_case = true,
        default_value = "cdp",
        help = "Trace header field receiving the output coordinates"
    )]
    pub target_field: CoordinateField,

    #[arg(
        long = "force-scaling",
        alias = "fs",
        help = "Scale coordinates with the --scaler value instead of the stored scalar"
    )]
    pub force_scaling: bool,

    #[arg(
        long = "scaler",
        alias = "sc",
        default_value_t = 1,
        allow_negative_numbers = true,
        help = "Coordinate scalar used with --force-scaling (SEG-Y convention, e.g. -100 divides by 100 on read)"
    )]
    pub scaler: i16,

    #[arg(
        long,
        help = "Only process directory entries whose file name contains this substring"
    )]
    pub filter: Option<String>,

    #[arg(
        long = "output-dir",
        help = "Directory for suffixed output files [default: alongside each input]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Suppress progress output")]
    pub quiet: bool,
}
