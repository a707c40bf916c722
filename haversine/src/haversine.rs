use std::fmt::{Debug, Formatter};

/// Two (longitude, latitude) points in degrees: x in [-180, 180], y in [-90, 90].
#[derive(Clone, Copy, PartialEq)]
pub struct CoordinatePair {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl CoordinatePair {
    /// Reads a group of four values in document order: x0, y0, x1, y1.
    pub const fn of_values(values: [f64; 4]) -> CoordinatePair {
        let [x0, y0, x1, y1] = values;
        CoordinatePair { x0, y0, x1, y1 }
    }
}

impl Debug for CoordinatePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "x0: {} ({:?}), y0: {} ({:?}), x1: {} ({:?}), y1: {} ({:?})",
            self.x0,
            self.x0.to_be_bytes(),
            self.y0,
            self.y0.to_be_bytes(),
            self.x1,
            self.x1.to_be_bytes(),
            self.y1,
            self.y1.to_be_bytes()
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HaversineData {
    pub pairs: Vec<CoordinatePair>,
}
