use glam::{DVec2, dvec2};

use super::{CornerSet, NodeShape, UP};
use crate::geometry;
use crate::render::{Outline, ShapeRenderer};
use crate::types::{NodeBounds, Points};

/// One chamfered corner, clockwise.
///
/// `edge_a` and `edge_b` are where the chamfer meets the two sides; `apex`
/// closes the cut-off triangle on the inside of the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutCorner {
    pub edge_a: DVec2,
    pub edge_b: DVec2,
    pub apex: DVec2,
}

impl CutCorner {
    pub fn triangle(&self) -> [DVec2; 3] {
        [self.edge_a, self.edge_b, self.apex]
    }
}

/// Rectangle with each corner cut off by a straight chamfer.
#[derive(Debug, Clone, PartialEq)]
pub struct CutRectangleShape {
    points: Points,
    corner_length: f64,
}

impl CutRectangleShape {
    pub fn new(points: impl Into<Points>, corner_length: f64) -> Self {
        Self {
            points: points.into(),
            corner_length,
        }
    }

    pub fn corner_length(&self) -> f64 {
        self.corner_length
    }

    /// Chamfer triangles for a node occupying `bounds`.
    pub fn corners(&self, bounds: &NodeBounds) -> CornerSet<CutCorner> {
        let cl = self.corner_length;
        let (min, max) = (bounds.min(), bounds.max());

        CornerSet {
            top_left: CutCorner {
                edge_a: dvec2(min.x, min.y + cl),
                edge_b: dvec2(min.x + cl, min.y),
                apex: dvec2(min.x + cl, min.y + cl),
            },
            top_right: CutCorner {
                edge_a: dvec2(max.x - cl, min.y),
                edge_b: dvec2(max.x, min.y + cl),
                apex: dvec2(max.x - cl, min.y + cl),
            },
            bottom_right: CutCorner {
                edge_a: dvec2(max.x, max.y - cl),
                edge_b: dvec2(max.x - cl, max.y),
                apex: dvec2(max.x - cl, max.y - cl),
            },
            bottom_left: CutCorner {
                edge_a: dvec2(min.x + cl, max.y),
                edge_b: dvec2(min.x, max.y - cl),
                apex: dvec2(min.x + cl, max.y - cl),
            },
        }
    }

    /// The eight chamfer endpoints as one absolute polygon
    fn octagon(&self, bounds: &NodeBounds) -> Vec<DVec2> {
        self.corners(bounds)
            .iter()
            .flat_map(|c| [c.edge_a, c.edge_b])
            .collect()
    }
}

impl NodeShape for CutRectangleShape {
    fn name(&self) -> &str {
        "cutrectangle"
    }

    fn points(&self) -> Option<&[DVec2]> {
        Some(&self.points)
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer, bounds: &NodeBounds) {
        renderer.node_shape(&Outline::CutRectangle(self.corners(bounds)), bounds);
    }

    fn intersect_line(&self, bounds: &NodeBounds, toward: DVec2, padding: f64) -> Vec<DVec2> {
        let octagon = self.octagon(&bounds.padded(padding));
        geometry::polygon_intersect_line_absolute(toward, &octagon, bounds.center)
    }

    fn check_point(&self, point: DVec2, padding: f64, bounds: &NodeBounds) -> bool {
        let inset = 2.0 * self.corner_length;
        let hbox = bounds.with_size(bounds.width, bounds.height - inset);
        let vbox = bounds.with_size(bounds.width - inset, bounds.height);
        for b in [hbox, vbox] {
            if geometry::point_inside_polygon(
                point,
                &self.points,
                b.center,
                b.width,
                b.height,
                UP,
                padding,
            ) {
                return true;
            }
        }

        self.corners(&bounds.padded(padding))
            .iter()
            .any(|c| geometry::point_inside_polygon_points(point, &c.triangle()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn shape() -> CutRectangleShape {
        CutRectangleShape::new(
            geometry::generate_unit_ngon_points_fit_to_square(4, 0.0),
            defaults::CUT_CORNER_LENGTH,
        )
    }

    #[test]
    fn chamfer_excludes_outer_corner() {
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 100.0);
        assert!(!shape().check_point(dvec2(-49.0, -49.0), 0.0, &b));
        assert!(shape().check_point(dvec2(-45.0, -45.0), 0.0, &b));
        assert!(shape().check_point(dvec2(49.0, 0.0), 0.0, &b));
    }

    #[test]
    fn diagonal_clip_hits_chamfer() {
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 100.0);
        let hits = shape().intersect_line(&b, dvec2(200.0, 200.0), 0.0);
        assert_eq!(hits.len(), 1);
        assert!((hits[0] - dvec2(46.0, 46.0)).length() < 1e-9);
    }

    #[test]
    fn corners_run_clockwise() {
        let b = NodeBounds::from_center(50.0, 50.0, 100.0, 100.0);
        let corners = shape().corners(&b);
        assert_eq!(corners.top_left.edge_a, dvec2(0.0, 8.0));
        assert_eq!(corners.top_right.edge_b, dvec2(100.0, 8.0));
        assert_eq!(corners.bottom_left.apex, dvec2(8.0, 92.0));
    }

    #[test]
    fn svg_outline_has_eight_vertices() {
        let mut r = crate::render::SvgPathRenderer::new();
        shape().draw(&mut r, &NodeBounds::from_center(50.0, 50.0, 100.0, 100.0));
        insta::assert_snapshot!(
            r.paths()[0].to_string(),
            @"M0,8 L8,0 L92,0 L100,8 L100,92 L92,100 L8,100 L0,92 Z"
        );
    }
}
