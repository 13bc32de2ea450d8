//! Write a patched copy of a SEG-Y file.
//!
//! The writer never interprets the format: it reproduces the input bytes
//! verbatim and splices new big-endian integers into the requested header
//! slots. Output files are always created fresh, never overwritten.

use byteorder::{BigEndian, ByteOrder};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SegyError};

/// A 4-byte signed integer to splice in at an absolute byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPatch {
    pub offset: usize,
    pub value: i32,
}

impl FieldPatch {
    pub fn new(offset: usize, value: i32) -> Self {
        Self { offset, value }
    }
}

#[derive(Debug)]
pub struct SegyWriter {
    inner: BufWriter<File>,
    path: PathBuf,
}

impl SegyWriter {
    /// Open the destination for writing. An existing file at `path` is an
    /// error; data is never clobbered.
    pub fn create(path: &Path) -> Result<Self> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => Ok(Self {
                inner: BufWriter::new(file),
                path: path.to_path_buf(),
            }),
            Err(error) if error.kind() == ErrorKind::AlreadyExists => {
                Err(SegyError::OutputExists(path.to_path_buf()))
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `data` with `patches` applied. Patches must be ordered by
    /// ascending offset and must not overlap; the per-trace loop that
    /// produces them emits them in file order.
    pub fn write_patched(mut self, data: &[u8], patches: &[FieldPatch]) -> Result<()> {
        let mut cursor = 0;
        for patch in patches {
            debug_assert!(patch.offset >= cursor && patch.offset + 4 <= data.len());
            self.inner.write_all(&data[cursor..patch.offset])?;
            let mut buf = [0u8; 4];
            BigEndian::write_i32(&mut buf, patch.value);
            self.inner.write_all(&buf)?;
            cursor = patch.offset + 4;
        }
        self.inner.write_all(&data[cursor..])?;
        self.inner.flush()?;
        Ok(())
    }
}
