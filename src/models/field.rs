use clap::ValueEnum;

/// Conventional positions of a coordinate pair in the 240-byte SEG-Y trace
/// header. Each field is a pair of 4-byte big-endian signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoordinateField {
    /// Source coordinates, trace header bytes 73-80
    Source,
    /// Group (receiver) coordinates, trace header bytes 81-88
    Group,
    /// Ensemble (CDP) coordinates, trace header bytes 181-188
    Cdp,
}

impl CoordinateField {
    /// Zero-based byte offset of the X slot within the trace header.
    pub fn x_offset(self) -> usize {
        match self {
            CoordinateField::Source => 72,
            CoordinateField::Group => 80,
            CoordinateField::Cdp => 180,
        }
    }

    /// Zero-based byte offset of the Y slot within the trace header.
    pub fn y_offset(self) -> usize {
        self.x_offset() + 4
    }
}

impl std::fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CoordinateField::Source => "source",
            CoordinateField::Group => "group",
            CoordinateField::Cdp => "cdp",
        };
        write!(f, "{}", name)
    }
}

/// A coordinate pair exactly as stored in a trace header, before the
/// coordinate scalar is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCoordinate {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_offsets() {
        assert_eq!(CoordinateField::Source.x_offset(), 72);
        assert_eq!(CoordinateField::Source.y_offset(), 76);
        assert_eq!(CoordinateField::Group.x_offset(), 80);
        assert_eq!(CoordinateField::Group.y_offset(), 84);
        assert_eq!(CoordinateField::Cdp.x_offset(), 180);
        assert_eq!(CoordinateField::Cdp.y_offset(), 184);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(CoordinateField::Source.to_string(), "source");
        assert_eq!(CoordinateField::Cdp.to_string(), "cdp");
    }
}
