use glam::{DVec2, dvec2};

use super::{CornerSet, NodeShape, UP};
use crate::geometry;
use crate::render::{Outline, ShapeRenderer};
use crate::types::{NodeBounds, Points};

/// Roots this far outside `[0, 1]` still count as on the curve.
const CURVE_PARAM_SLACK: f64 = 1e-9;

/// Which side of a corner curve is the node interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveSide {
    /// Interior lies below the curve
    Top,
    /// Interior lies above the curve
    Bottom,
}

/// A quadratic Bezier corner, clockwise from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveCorner {
    pub start: DVec2,
    pub control: DVec2,
    pub end: DVec2,
    pub side: CurveSide,
}

impl CurveCorner {
    /// Curve parameter where the curve passes `point.x`, provided `point`
    /// lies in the box spanned by the curve's endpoints.
    pub fn param_at(&self, point: DVec2) -> Option<f64> {
        let (lo, hi) = (self.start.min(self.end), self.start.max(self.end));
        if !(lo.x <= point.x && point.x <= hi.x && lo.y <= point.y && point.y <= hi.y) {
            return None;
        }

        let [a, b, c] =
            geometry::bezier_pts_to_quad_coeff(self.start.x, self.control.x, self.end.x);
        geometry::solve_quadratic(a, b, c, point.x)
            .into_iter()
            .find(|t| (-CURVE_PARAM_SLACK..=1.0 + CURVE_PARAM_SLACK).contains(t))
            .map(|t| t.clamp(0.0, 1.0))
    }

    pub fn y_at(&self, t: f64) -> f64 {
        geometry::qbezier_at(self.start.y, self.control.y, self.end.y, t)
    }

    /// Whether `point` is on the interior side of this corner curve.
    pub fn contains(&self, point: DVec2) -> bool {
        let Some(t) = self.param_at(point) else {
            return false;
        };
        let curve_y = self.y_at(t);
        match self.side {
            CurveSide::Top => curve_y <= point.y,
            CurveSide::Bottom => point.y <= curve_y,
        }
    }
}

/// Rectangle whose corners bulge out along quadratic curves.
#[derive(Debug, Clone, PartialEq)]
pub struct BarrelShape {
    points: Points,
    fractions: [f64; 2],
}

impl BarrelShape {
    pub fn new(points: impl Into<Points>, fractions: [f64; 2]) -> Self {
        Self {
            points: points.into(),
            fractions,
        }
    }

    /// `[near, far]` curve fractions
    pub fn fractions(&self) -> [f64; 2] {
        self.fractions
    }

    /// Corner curves for a node occupying `bounds`.
    pub fn corners(&self, bounds: &NodeBounds) -> CornerSet<CurveCorner> {
        let [near, far] = self.fractions;
        let (w, h) = (bounds.width, bounds.height);
        let (min, max) = (bounds.min(), bounds.max());

        CornerSet {
            top_left: CurveCorner {
                start: dvec2(min.x, min.y + near * h),
                control: dvec2(min.x + near * w, min.y),
                end: dvec2(min.x + far * w, min.y),
                side: CurveSide::Top,
            },
            top_right: CurveCorner {
                start: dvec2(max.x - far * w, min.y),
                control: dvec2(max.x - near * w, min.y),
                end: dvec2(max.x, min.y + near * h),
                side: CurveSide::Top,
            },
            bottom_right: CurveCorner {
                start: dvec2(max.x, max.y - near * h),
                control: dvec2(max.x - near * w, max.y),
                end: dvec2(max.x - far * w, max.y),
                side: CurveSide::Bottom,
            },
            bottom_left: CurveCorner {
                start: dvec2(min.x + far * w, max.y),
                control: dvec2(min.x + near * w, max.y),
                end: dvec2(min.x, max.y - near * h),
                side: CurveSide::Bottom,
            },
        }
    }
}

impl NodeShape for BarrelShape {
    fn name(&self) -> &str {
        "barrel"
    }

    fn points(&self) -> Option<&[DVec2]> {
        Some(&self.points)
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer, bounds: &NodeBounds) {
        renderer.node_shape(&Outline::Barrel(self.corners(bounds)), bounds);
    }

    /// Clips against the polygon through every corner's control points, so
    /// hits near a corner sit slightly outside the drawn curve.
    fn intersect_line(&self, bounds: &NodeBounds, toward: DVec2, padding: f64) -> Vec<DVec2> {
        let outline: Vec<DVec2> = self
            .corners(&bounds.padded(padding))
            .iter()
            .flat_map(|c| [c.start, c.control, c.end])
            .collect();
        geometry::polygon_intersect_line_absolute(toward, &outline, bounds.center)
    }

    fn check_point(&self, point: DVec2, padding: f64, bounds: &NodeBounds) -> bool {
        let [near, far] = self.fractions;
        let padded = bounds.padded(padding);
        let (w, h) = (padded.width, padded.height);

        // The inset boxes and the corner curves tile the padded outline
        let hbox = padded.with_size(w, h - 2.0 * near * h);
        let vbox = padded.with_size(w - 2.0 * far * w, h);
        for b in [hbox, vbox] {
            if geometry::point_inside_polygon(
                point,
                &self.points,
                b.center,
                b.width,
                b.height,
                UP,
                0.0,
            ) {
                return true;
            }
        }

        self.corners(&padded).iter().any(|c| c.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn shape() -> BarrelShape {
        BarrelShape::new(
            geometry::generate_unit_ngon_points_fit_to_square(4, 0.0),
            defaults::BARREL_FRACTIONS,
        )
    }

    #[test]
    fn center_inside_far_point_outside() {
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 60.0);
        assert!(shape().check_point(DVec2::ZERO, 0.0, &b));
        assert!(!shape().check_point(dvec2(1000.0, 0.0), 0.0, &b));
    }

    #[test]
    fn corner_curve_decides_near_corner() {
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 60.0);
        // Below the top-left curve
        assert!(shape().check_point(dvec2(-45.0, -28.0), 0.0, &b));
        // Above it, inside the bounding box
        assert!(!shape().check_point(dvec2(-49.0, -29.0), 0.0, &b));
        assert!(!shape().check_point(dvec2(-50.0, -30.0), 0.0, &b));
    }

    #[test]
    fn padded_side_box_stops_at_the_padded_curve() {
        // Padding 6 gives a 112x72 outline whose top-left curve starts at
        // (-56, -32.4); the unpadded inset box grown by 6 reached y = -33
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 60.0);
        assert!(!shape().check_point(dvec2(-55.9, -32.9), 6.0, &b));
        assert!(shape().check_point(dvec2(-55.9, -32.3), 6.0, &b));
    }

    #[test]
    fn curve_param_solves_for_x() {
        let corners = shape().corners(&NodeBounds::from_center(0.0, 0.0, 100.0, 60.0));
        let t = corners.top_left.param_at(dvec2(-45.0, -28.0));
        assert!((t.unwrap_or(f64::NAN) - 1.0 / 3.0).abs() < 1e-9);
        assert!(corners.top_left.param_at(dvec2(0.0, 0.0)).is_none());
    }

    #[test]
    fn clip_on_straight_side() {
        let b = NodeBounds::from_center(0.0, 0.0, 100.0, 60.0);
        let hits = shape().intersect_line(&b, dvec2(200.0, 0.0), 0.0);
        assert_eq!(hits.len(), 1);
        assert!((hits[0] - dvec2(50.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn svg_outline_uses_quadratic_corners() {
        let mut r = crate::render::SvgPathRenderer::new();
        shape().draw(&mut r, &NodeBounds::from_center(50.0, 30.0, 100.0, 60.0));
        insta::assert_snapshot!(
            r.paths()[0].to_string(),
            @"M0,3 Q5,0 25,0 L75,0 Q95,0 100,3 L100,57 Q95,60 75,60 L25,60 Q5,60 0,57 Z"
        );
    }
}
