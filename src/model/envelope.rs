use crate::common::vec2d::Vec2D;
use serde::{Deserialize, Serialize};

/// Vertex of the certified mass/CG polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    /// Centering in mm from the datum.
    pub centering: f64,
    /// Mass in kg.
    pub mass: f64,
}

impl EnvelopePoint {
    pub fn new(centering: f64, mass: f64) -> Self { Self { centering, mass } }
}

impl From<EnvelopePoint> for Vec2D<f64> {
    fn from(point: EnvelopePoint) -> Self { Vec2D::new(point.centering, point.mass) }
}

impl From<(f64, f64)> for EnvelopePoint {
    fn from(tuple: (f64, f64)) -> Self { Self::new(tuple.0, tuple.1) }
}
