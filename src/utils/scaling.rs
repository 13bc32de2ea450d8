//! Coordinate scalar arithmetic.
//!
//! SEG-Y packs real-valued coordinates into integer header fields using the
//! scalar at trace header bytes 71-72: a positive scalar multiplies the
//! stored integer on read, a negative scalar divides by its magnitude, and
//! 0 or 1 means the value is stored as-is. Writing applies the reciprocal.

use crate::error::{Result, SegyError};

/// Multiplier applied to a stored integer to recover the real coordinate.
///
/// A scalar of 0 is treated as "no scaling"; some files lack a proper
/// definition of the scalar.
pub fn read_multiplier(scalar: i16) -> f64 {
    let s = f64::from(scalar);
    if s == 0.0 {
        1.0
    } else if s < 0.0 {
        1.0 / -s
    } else {
        s
    }
}

/// Multiplier applied to a real coordinate to produce the stored integer.
pub fn write_multiplier(scalar: i16) -> f64 {
    1.0 / read_multiplier(scalar)
}

/// Recover the real-valued coordinate from a stored header integer.
pub fn decode(raw: i32, scalar: i16) -> f64 {
    f64::from(raw) * read_multiplier(scalar)
}

/// Convert a real-valued coordinate back to a storable header integer,
/// rounding to the nearest integer.
pub fn encode(real: f64, scalar: i16) -> Result<i32> {
    let value = (real * write_multiplier(scalar)).round();
    if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(SegyError::CoordinateOverflow(value))
    }
}
