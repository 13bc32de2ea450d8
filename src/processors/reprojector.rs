use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::warn;

use crate::error::{Result, SegyError};
use crate::models::{CoordinateField, ScalingMode};
use crate::readers::SegyReader;
use crate::utils::scaling;
use crate::writers::{FieldPatch, SegyWriter};

/// The narrow seam in front of the geodesy library. Anything that can map an
/// (x, y) pair between two reference systems can stand in here, including
/// test fakes.
pub trait CoordinateTransformer {
    fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)>;
}

/// EPSG-code-driven transformer backed by proj4rs, with projection strings
/// looked up in the crs-definitions registry.
#[derive(Debug)]
pub struct EpsgTransformer {
    source: Proj,
    target: Proj,
    source_geographic: bool,
    target_geographic: bool,
    identity: bool,
}

impl EpsgTransformer {
    /// Resolve both reference systems up front. An unknown or unusable code
    /// fails here, before any file is touched.
    pub fn new(source_srs: u32, target_srs: u32) -> Result<Self> {
        let (source, source_geographic) = resolve_epsg(source_srs)?;
        let (target, target_geographic) = resolve_epsg(target_srs)?;

        Ok(Self {
            source,
            target,
            source_geographic,
            target_geographic,
            identity: source_srs == target_srs,
        })
    }
}

fn resolve_epsg(code: u32) -> Result<(Proj, bool)> {
    let def = u16::try_from(code)
        .ok()
        .and_then(crs_definitions::from_code)
        .ok_or(SegyError::UnknownSrs(code))?;

    let proj = Proj::from_proj_string(def.proj4).map_err(|e| SegyError::InvalidProjection {
        code,
        message: format!("{:?}", e),
    })?;

    Ok((proj, def.proj4.contains("+proj=longlat")))
}

impl CoordinateTransformer for EpsgTransformer {
    fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        if self.identity {
            return Ok((x, y));
        }

        // proj4rs works in radians for geographic reference systems
        let (x_in, y_in) = if self.source_geographic {
            (x.to_radians(), y.to_radians())
        } else {
            (x, y)
        };

        let mut point = (x_in, y_in, 0.0);
        transform(&self.source, &self.target, &mut point)
            .map_err(|e| SegyError::Transform(format!("({}, {}): {:?}", x, y, e)))?;

        let (x_out, y_out) = if self.target_geographic {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        if !x_out.is_finite() || !y_out.is_finite() {
            return Err(SegyError::Transform(format!(
                "non-finite result for ({}, {})",
                x, y
            )));
        }

        Ok((x_out, y_out))
    }
}

/// Per-file outcome counters.
#[derive(Debug, Clone, Copy)]
pub struct TraceStats {
    pub traces: usize,
    pub skipped: usize,
}

/// Runs the decode -> transform -> encode loop over every trace of one file
/// and writes the patched copy.
pub struct Reprojector<'a, T: CoordinateTransformer> {
    transformer: &'a T,
    source_field: CoordinateField,
    target_field: CoordinateField,
    scaling: ScalingMode,
}

impl<'a, T: CoordinateTransformer> Reprojector<'a, T> {
    pub fn new(
        transformer: &'a T,
        source_field: CoordinateField,
        target_field: CoordinateField,
        scaling: ScalingMode,
    ) -> Self {
        Self {
            transformer,
            source_field,
            target_field,
            scaling,
        }
    }

    /// Reproject every trace of `reader` into `writer`. A trace whose
    /// coordinates cannot be transformed or re-encoded is left untouched in
    /// the copy and counted, not fatal for the file.
    pub fn reproject(&self, reader: &SegyReader, writer: SegyWriter) -> Result<TraceStats> {
        let mut patches = Vec::with_capacity(reader.trace_count() * 2);
        let mut skipped = 0;

        for index in 0..reader.trace_count() {
            match self.reproject_trace(reader, index) {
                Ok((x_patch, y_patch)) => {
                    patches.push(x_patch);
                    patches.push(y_patch);
                }
                Err(error) => {
                    warn!(trace = index, %error, "skipping trace, coordinates left unchanged");
                    skipped += 1;
                }
            }
        }

        writer.write_patched(reader.bytes(), &patches)?;

        Ok(TraceStats {
            traces: reader.trace_count(),
            skipped,
        })
    }

    fn reproject_trace(
        &self,
        reader: &SegyReader,
        index: usize,
    ) -> Result<(FieldPatch, FieldPatch)> {
        let scalar = self
            .scaling
            .effective_scalar(reader.coordinate_scalar(index));
        let raw = reader.raw_coordinate(index, self.source_field);

        let x = scaling::decode(raw.x, scalar);
        let y = scaling::decode(raw.y, scalar);
        let (x_new, y_new) = self.transformer.transform(x, y)?;

        let (x_offset, y_offset) = reader.field_offsets(index, self.target_field);
        Ok((
            FieldPatch::new(x_offset, scaling::encode(x_new, scalar)?),
            FieldPatch::new(y_offset, scaling::encode(y_new, scalar)?),
        ))
    }
}
