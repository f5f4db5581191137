use glam::DVec2;

use super::NodeShape;
use crate::geometry;
use crate::render::{Outline, ShapeRenderer};
use crate::types::{NodeBounds, Points};

/// Top-left, top-right, bottom-right, bottom-left
const QUADRANTS: [DVec2; 4] = [
    DVec2::new(-1.0, -1.0),
    DVec2::new(1.0, -1.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(-1.0, 1.0),
];

/// Rectangle with quarter-circle corners.
///
/// The radius is a quarter of the smaller side, capped at `max_radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRectangleShape {
    points: Points,
    max_radius: f64,
}

impl RoundRectangleShape {
    pub fn new(points: impl Into<Points>, max_radius: f64) -> Self {
        Self {
            points: points.into(),
            max_radius,
        }
    }

    pub fn radius(&self, bounds: &NodeBounds) -> f64 {
        geometry::round_rectangle_radius_capped(bounds.width, bounds.height, self.max_radius)
    }

    /// Axis-aligned box around the center, closed.
    fn box_contains(point: DVec2, bounds: &NodeBounds, width: f64, height: f64) -> bool {
        let d = (point - bounds.center).abs();
        d.x <= width / 2.0 && d.y <= height / 2.0
    }
}

impl NodeShape for RoundRectangleShape {
    fn name(&self) -> &str {
        "roundrectangle"
    }

    fn points(&self) -> Option<&[DVec2]> {
        Some(&self.points)
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer, bounds: &NodeBounds) {
        renderer.node_shape(
            &Outline::RoundRectangle {
                radius: self.radius(bounds),
            },
            bounds,
        );
    }

    fn intersect_line(&self, bounds: &NodeBounds, toward: DVec2, padding: f64) -> Vec<DVec2> {
        geometry::round_rectangle_intersect_line_with_radius(
            toward,
            bounds.center,
            bounds.width,
            bounds.height,
            padding,
            self.radius(bounds),
        )
    }

    fn check_point(&self, point: DVec2, padding: f64, bounds: &NodeBounds) -> bool {
        let r = self.radius(bounds);
        let (w, h) = (bounds.width, bounds.height);

        // Straight sides move out by `padding`, corner circles grow by it
        if Self::box_contains(point, bounds, w + 2.0 * padding, h - 2.0 * r)
            || Self::box_contains(point, bounds, w - 2.0 * r, h + 2.0 * padding)
        {
            return true;
        }

        let reach = r + padding;
        let offset = bounds.half_size() - r;
        QUADRANTS.iter().any(|q| {
            let corner_center = bounds.center + *q * offset;
            point.distance_squared(corner_center) <= reach * reach
        })
    }
}
