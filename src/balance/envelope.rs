use crate::common::vec2d::Vec2D;
use crate::event;
use crate::model::Glider;
use geo::{Coord, Intersects, Line, LineString, Polygon};

fn coord(v: Vec2D<f64>) -> Coord<f64> { Coord { x: v.x(), y: v.y() } }

/// Tests whether `point` lies inside the polygon or on its boundary.
///
/// The vertices are taken in order, the last one closing back onto the first. A single
/// vertex only contains itself and two vertices only the segment between them.
///
/// # Arguments
/// - `vertices`: The polygon boundary, `x` = centering in mm, `y` = mass in kg.
/// - `point`: The `(cg, mass)` point to classify.
///
/// # Returns
/// - `true` if the point is within or on the polygon, `false` otherwise and for an empty polygon.
pub fn polygon_contains(vertices: &[Vec2D<f64>], point: Vec2D<f64>) -> bool {
    if !point.is_finite() {
        return false;
    }
    let p = coord(point);
    match vertices {
        [] => false,
        [single] => coord(*single) == p,
        [a, b] => Line::new(coord(*a), coord(*b)).intersects(&p),
        _ => {
            let ring = LineString::from(vertices.iter().copied().map(coord).collect::<Vec<_>>());
            Polygon::new(ring, vec![]).intersects(&p)
        }
    }
}

impl Glider {
    /// The certified envelope as polygon vertices, in storage order.
    pub fn envelope_polygon(&self) -> Vec<Vec2D<f64>> { self.envelope().iter().copied().map(Vec2D::from).collect() }

    /// Whether `(cg, mass)` lies within the certified mass/CG envelope, boundary included.
    pub fn is_within_envelope(&self, cg: f64, mass: f64) -> bool {
        let within = polygon_contains(&self.envelope_polygon(), Vec2D::new(cg, mass));
        event!("{}: ({cg} mm, {mass} kg) within envelope: {within}", self.registration());
        within
    }
}
