use glam::{DVec2, dvec2};
use std::f64::consts::PI;

use super::{NodeShape, UP};
use crate::geometry;
use crate::render::{Outline, ShapeRenderer};
use crate::types::{NodeBounds, Points};

/// A straight-edged outline defined by a unit-square template.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    name: String,
    points: Points,
}

impl PolygonShape {
    pub fn new(name: impl Into<String>, points: impl Into<Points>) -> Self {
        Self {
            name: name.into(),
            points: points.into(),
        }
    }
}

impl NodeShape for PolygonShape {
    fn name(&self) -> &str {
        &self.name
    }

    fn points(&self) -> Option<&[DVec2]> {
        Some(&self.points)
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer, bounds: &NodeBounds) {
        renderer.node_shape(&Outline::Polygon(&self.points), bounds);
    }

    fn intersect_line(&self, bounds: &NodeBounds, toward: DVec2, padding: f64) -> Vec<DVec2> {
        geometry::polygon_intersect_line(
            toward,
            &self.points,
            bounds.center,
            bounds.half_size(),
            padding,
        )
    }

    fn check_point(&self, point: DVec2, padding: f64, bounds: &NodeBounds) -> bool {
        geometry::point_inside_polygon(
            point,
            &self.points,
            bounds.center,
            bounds.width,
            bounds.height,
            UP,
            padding,
        )
    }
}

/// Ten-point star: outer pentagon vertices alternating with an inner
/// pentagon rotated by a fifth of a turn, fitted to the unit square.
///
/// `inner_scale` multiplies the regular pentagram inner radius.
pub fn star_points(inner_scale: f64) -> Vec<DVec2> {
    let inner_radius = 0.5 * (3.0 - 5f64.sqrt()) * inner_scale;
    let outer = geometry::generate_unit_ngon_points(5, 0.0);
    let inner = geometry::generate_unit_ngon_points(5, PI / 5.0);

    let star = outer
        .iter()
        .zip(&inner)
        .flat_map(|(o, i)| [*o, *i * inner_radius])
        .collect();
    geometry::fit_polygon_to_square(star)
}

/// Hand-authored templates for the builtins that are not regular n-gons.
pub(crate) mod templates {
    use super::*;

    pub fn diamond() -> Vec<DVec2> {
        vec![dvec2(0.0, 1.0), dvec2(1.0, 0.0), dvec2(0.0, -1.0), dvec2(-1.0, 0.0)]
    }

    pub fn vee() -> Vec<DVec2> {
        vec![
            dvec2(-1.0, -1.0),
            dvec2(0.0, -0.333),
            dvec2(1.0, -1.0),
            dvec2(0.0, 1.0),
        ]
    }

    pub fn rhomboid() -> Vec<DVec2> {
        vec![dvec2(-1.0, -1.0), dvec2(0.333, -1.0), dvec2(1.0, 1.0), dvec2(-0.333, 1.0)]
    }
}
