//! Read-only access to the trace headers of a SEG-Y file.
//!
//! The file is memory-mapped and left untouched; only the handful of header
//! fields this tool cares about are ever interpreted. Sample data is opaque
//! bytes whose length must be known to find the next trace.

use byteorder::{BigEndian, ByteOrder};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::error::{Result, SegyError};
use crate::models::{CoordinateField, RawCoordinate};

pub const TEXTUAL_HEADER_LEN: usize = 3200;
pub const BINARY_HEADER_LEN: usize = 400;
pub const TRACE_HEADER_LEN: usize = 240;
const EXTENDED_HEADER_LEN: usize = 3200;

// Byte offsets within the 400-byte binary file header
const SAMPLE_INTERVAL_OFFSET: usize = 16;
const SAMPLES_PER_TRACE_OFFSET: usize = 20;
const SAMPLE_FORMAT_OFFSET: usize = 24;
const FIXED_LENGTH_FLAG_OFFSET: usize = 302;
const EXTENDED_HEADER_COUNT_OFFSET: usize = 304;

// Byte offsets within the 240-byte trace header
const COORDINATE_SCALAR_OFFSET: usize = 70;
const TRACE_SAMPLES_OFFSET: usize = 114;

/// The subset of the binary file header needed to walk the trace section.
#[derive(Debug, Clone)]
pub struct BinaryHeader {
    pub sample_interval: u16,
    pub samples_per_trace: u16,
    pub sample_format: i16,
    pub fixed_length_traces: bool,
    pub extended_header_count: u16,
}

impl BinaryHeader {
    /// Parse the 400-byte binary file header.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let extended = BigEndian::read_i16(&bytes[EXTENDED_HEADER_COUNT_OFFSET..]);
        if extended < 0 {
            return Err(SegyError::InvalidFormat(
                "variable extended textual header count (-1) is not supported".to_string(),
            ));
        }

        Ok(Self {
            sample_interval: BigEndian::read_u16(&bytes[SAMPLE_INTERVAL_OFFSET..]),
            samples_per_trace: BigEndian::read_u16(&bytes[SAMPLES_PER_TRACE_OFFSET..]),
            sample_format: BigEndian::read_i16(&bytes[SAMPLE_FORMAT_OFFSET..]),
            fixed_length_traces: BigEndian::read_i16(&bytes[FIXED_LENGTH_FLAG_OFFSET..]) != 0,
            extended_header_count: extended as u16,
        })
    }

    /// Sample width implied by the format code. The samples themselves are
    /// never decoded, but their width locates the next trace header.
    pub fn bytes_per_sample(&self) -> Result<usize> {
        match self.sample_format {
            1 | 2 | 4 | 5 | 10 => Ok(4),
            3 | 11 => Ok(2),
            6 | 9 | 12 => Ok(8),
            7 | 15 => Ok(3),
            8 | 16 => Ok(1),
            other => Err(SegyError::UnsupportedSampleFormat(other)),
        }
    }
}

#[derive(Debug)]
enum SegyData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl std::ops::Deref for SegyData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            SegyData::Mapped(map) => map,
            SegyData::Owned(vec) => vec,
        }
    }
}

/// A parsed-enough SEG-Y file: the raw bytes plus an index of where every
/// trace header starts.
#[derive(Debug)]
pub struct SegyReader {
    data: SegyData,
    binary_header: BinaryHeader,
    trace_offsets: Vec<usize>,
}

impl SegyReader {
    /// Memory-map a SEG-Y file and index its traces.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        // Safety: the map is read-only and the file is not expected to be
        // mutated by other processes while a job holds it.
        let map = unsafe { Mmap::map(&file)? };
        Self::with_data(SegyData::Mapped(map))
    }

    /// Build a reader over an in-memory byte buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::with_data(SegyData::Owned(bytes))
    }

    fn with_data(data: SegyData) -> Result<Self> {
        if data.len() < TEXTUAL_HEADER_LEN + BINARY_HEADER_LEN {
            return Err(SegyError::InvalidFormat(format!(
                "file is {} bytes, shorter than the {}-byte SEG-Y file header",
                data.len(),
                TEXTUAL_HEADER_LEN + BINARY_HEADER_LEN
            )));
        }

        let binary_header =
            BinaryHeader::parse(&data[TEXTUAL_HEADER_LEN..TEXTUAL_HEADER_LEN + BINARY_HEADER_LEN])?;
        let bytes_per_sample = binary_header.bytes_per_sample()?;

        let mut cursor = TEXTUAL_HEADER_LEN
            + BINARY_HEADER_LEN
            + EXTENDED_HEADER_LEN * binary_header.extended_header_count as usize;
        if cursor > data.len() {
            return Err(SegyError::Truncated(format!(
                "{} extended textual headers do not fit the file",
                binary_header.extended_header_count
            )));
        }

        let mut trace_offsets = Vec::new();
        while cursor < data.len() {
            if cursor + TRACE_HEADER_LEN > data.len() {
                return Err(SegyError::Truncated(format!(
                    "trace header at byte {} runs past end of file",
                    cursor
                )));
            }

            let header = &data[cursor..cursor + TRACE_HEADER_LEN];
            // Per-trace sample count wins when set; older files leave it 0
            // and rely on the binary file header.
            let trace_samples = BigEndian::read_u16(&header[TRACE_SAMPLES_OFFSET..]);
            let samples = if trace_samples > 0 {
                trace_samples
            } else {
                binary_header.samples_per_trace
            };

            let data_len = samples as usize * bytes_per_sample;
            if cursor + TRACE_HEADER_LEN + data_len > data.len() {
                return Err(SegyError::Truncated(format!(
                    "trace {} sample data runs past end of file",
                    trace_offsets.len()
                )));
            }

            trace_offsets.push(cursor);
            cursor += TRACE_HEADER_LEN + data_len;
        }

        Ok(Self {
            data,
            binary_header,
            trace_offsets,
        })
    }

    pub fn binary_header(&self) -> &BinaryHeader {
        &self.binary_header
    }

    pub fn trace_count(&self) -> usize {
        self.trace_offsets.len()
    }

    /// The complete file contents, for pass-through copying.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    fn trace_header(&self, index: usize) -> &[u8] {
        let start = self.trace_offsets[index];
        &self.data[start..start + TRACE_HEADER_LEN]
    }

    /// The coordinate scalar stored in a trace header (bytes 71-72).
    pub fn coordinate_scalar(&self, index: usize) -> i16 {
        BigEndian::read_i16(&self.trace_header(index)[COORDINATE_SCALAR_OFFSET..])
    }

    /// The raw integer coordinate pair stored in a given field of a trace.
    pub fn raw_coordinate(&self, index: usize, field: CoordinateField) -> RawCoordinate {
        let header = self.trace_header(index);
        RawCoordinate {
            x: BigEndian::read_i32(&header[field.x_offset()..]),
            y: BigEndian::read_i32(&header[field.y_offset()..]),
        }
    }

    /// Absolute byte offsets of a field's X and Y slots within the file.
    pub fn field_offsets(&self, index: usize, field: CoordinateField) -> (usize, usize) {
        let start = self.trace_offsets[index];
        (start + field.x_offset(), start + field.y_offset())
    }
}
