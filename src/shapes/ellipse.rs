use glam::DVec2;

use super::NodeShape;
use crate::geometry;
use crate::render::{Outline, ShapeRenderer};
use crate::types::NodeBounds;

/// Ellipse inscribed in the node bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EllipseShape;

impl EllipseShape {
    pub fn new() -> Self {
        Self
    }
}

impl NodeShape for EllipseShape {
    fn name(&self) -> &str {
        "ellipse"
    }

    fn points(&self) -> Option<&[DVec2]> {
        None
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer, bounds: &NodeBounds) {
        renderer.node_shape(&Outline::Ellipse, bounds);
    }

    fn intersect_line(&self, bounds: &NodeBounds, toward: DVec2, padding: f64) -> Vec<DVec2> {
        let semi = bounds.half_size() + padding;
        geometry::intersect_line_ellipse(toward, bounds.center, semi.x, semi.y)
            .into_iter()
            .collect()
    }

    fn check_point(&self, point: DVec2, padding: f64, bounds: &NodeBounds) -> bool {
        let d = (point - bounds.center) / (bounds.half_size() + padding);
        d.length_squared() <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn boundary_point_is_inside() {
        let b = NodeBounds::from_center(10.0, 10.0, 100.0, 60.0);
        assert!(EllipseShape.check_point(dvec2(60.0, 10.0), 0.0, &b));
        assert!(!EllipseShape.check_point(dvec2(60.5, 10.0), 0.0, &b));
        assert!(EllipseShape.check_point(dvec2(60.5, 10.0), 1.0, &b));
    }

    #[test]
    fn bounding_box_corner_is_outside() {
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 60.0);
        assert!(!EllipseShape.check_point(dvec2(49.0, 29.0), 0.0, &b));
    }

    #[test]
    fn clip_lands_on_padded_axis() {
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 60.0);
        let hits = EllipseShape.intersect_line(&b, dvec2(0.0, -200.0), 5.0);
        assert_eq!(hits.len(), 1);
        assert!((hits[0] - dvec2(0.0, -35.0)).length() < 1e-9);
    }

    #[test]
    fn clip_from_center_is_empty() {
        let b = NodeBounds::from_center(3.0, 4.0, 10.0, 10.0);
        assert!(EllipseShape.intersect_line(&b, b.center, 0.0).is_empty());
    }
}
