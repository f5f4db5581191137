//! Drawing seam between shapes and an output backend.
//!
//! Shapes describe their outline as an [`Outline`] and hand it to a
//! [`ShapeRenderer`] together with the node bounds. The crate ships an SVG
//! path backend; other backends implement the trait themselves.

use glam::DVec2;

use crate::path::PathData;
use crate::shapes::{CornerSet, CurveCorner, CutCorner};
use crate::types::NodeBounds;

/// The geometry a shape asks a renderer to trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline<'a> {
    /// Closed polygon through unit-square template points
    Polygon(&'a [DVec2]),
    /// Ellipse inscribed in the bounds
    Ellipse,
    /// Rectangle with quarter-circle corners of `radius`
    RoundRectangle { radius: f64 },
    /// Rectangle with straight chamfers, absolute coordinates
    CutRectangle(CornerSet<CutCorner>),
    /// Rectangle with quadratic-curve corners, absolute coordinates
    Barrel(CornerSet<CurveCorner>),
}

/// A backend that can trace node outlines.
pub trait ShapeRenderer {
    fn node_shape(&mut self, outline: &Outline<'_>, bounds: &NodeBounds);
}

/// Collects one SVG path per drawn node.
#[derive(Debug, Default, Clone)]
pub struct SvgPathRenderer {
    paths: Vec<PathData>,
}

impl SvgPathRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> &[PathData] {
        &self.paths
    }

    pub fn last(&self) -> Option<&PathData> {
        self.paths.last()
    }

    pub fn into_paths(self) -> Vec<PathData> {
        self.paths
    }
}

impl ShapeRenderer for SvgPathRenderer {
    fn node_shape(&mut self, outline: &Outline<'_>, bounds: &NodeBounds) {
        let path = match outline {
            Outline::Polygon(points) => polygon_path(points, bounds),
            Outline::Ellipse => ellipse_path(bounds),
            Outline::RoundRectangle { radius } => round_rectangle_path(bounds, *radius),
            Outline::CutRectangle(corners) => cut_rectangle_path(corners),
            Outline::Barrel(corners) => barrel_path(corners),
        };
        self.paths.push(path);
    }
}

fn polygon_path(points: &[DVec2], bounds: &NodeBounds) -> PathData {
    let mut placed = points.iter().map(|p| bounds.place(*p));
    let Some(first) = placed.next() else {
        return PathData::new();
    };
    placed.fold(PathData::new().move_to(first), PathData::line_to).z()
}

fn ellipse_path(bounds: &NodeBounds) -> PathData {
    let DVec2 { x: rx, y: ry } = bounds.half_size();
    let (left, right) = (bounds.center.x - rx, bounds.center.x + rx);
    let cy = bounds.center.y;
    PathData::new()
        .m(left, cy)
        .a(rx, ry, 0.0, true, true, right, cy)
        .a(rx, ry, 0.0, true, true, left, cy)
        .z()
}

/// Clockwise from the start of the top edge.
fn round_rectangle_path(bounds: &NodeBounds, radius: f64) -> PathData {
    let (min, max) = (bounds.min(), bounds.max());
    let r = radius;
    PathData::new()
        .m(min.x + r, min.y)
        .l(max.x - r, min.y)
        .a(r, r, 0.0, false, true, max.x, min.y + r)
        .l(max.x, max.y - r)
        .a(r, r, 0.0, false, true, max.x - r, max.y)
        .l(min.x + r, max.y)
        .a(r, r, 0.0, false, true, min.x, max.y - r)
        .l(min.x, min.y + r)
        .a(r, r, 0.0, false, true, min.x + r, min.y)
        .z()
}

fn cut_rectangle_path(corners: &CornerSet<CutCorner>) -> PathData {
    let mut path = PathData::new().move_to(corners.top_left.edge_a);
    for (i, corner) in corners.iter().enumerate() {
        if i > 0 {
            path = path.line_to(corner.edge_a);
        }
        path = path.line_to(corner.edge_b);
    }
    path.z()
}

fn barrel_path(corners: &CornerSet<CurveCorner>) -> PathData {
    let mut path = PathData::new().move_to(corners.top_left.start);
    for (i, corner) in corners.iter().enumerate() {
        if i > 0 {
            path = path.line_to(corner.start);
        }
        path = path.quad_to(corner.control, corner.end);
    }
    path.z()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn draw(outline: Outline<'_>, bounds: NodeBounds) -> String {
        let mut r = SvgPathRenderer::new();
        r.node_shape(&outline, &bounds);
        r.last().map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn diamond_polygon_path() {
        let diamond = [dvec2(0.0, 1.0), dvec2(1.0, 0.0), dvec2(0.0, -1.0), dvec2(-1.0, 0.0)];
        let d = draw(
            Outline::Polygon(&diamond),
            NodeBounds::from_center(50.0, 50.0, 100.0, 100.0),
        );
        insta::assert_snapshot!(d, @"M50,100 L100,50 L50,0 L0,50 Z");
    }

    #[test]
    fn ellipse_path_is_two_arcs() {
        let d = draw(Outline::Ellipse, NodeBounds::from_center(50.0, 50.0, 100.0, 60.0));
        insta::assert_snapshot!(d, @"M0,50 A50,30 0 1,1 100,50 A50,30 0 1,1 0,50 Z");
    }

    #[test]
    fn round_rectangle_path_runs_clockwise() {
        let d = draw(
            Outline::RoundRectangle { radius: 8.0 },
            NodeBounds::from_center(50.0, 50.0, 100.0, 60.0),
        );
        insta::assert_snapshot!(d.replace(" L", "\nL"), @r"
        M8,20
        L92,20 A8,8 0 0,1 100,28
        L100,72 A8,8 0 0,1 92,80
        L8,80 A8,8 0 0,1 0,72
        L0,28 A8,8 0 0,1 8,20 Z
        ");
    }

    #[test]
    fn empty_polygon_draws_empty_path() {
        let mut r = SvgPathRenderer::new();
        r.node_shape(&Outline::Polygon(&[]), &NodeBounds::default());
        assert_eq!(r.paths().len(), 1);
        assert!(r.paths()[0].is_empty());
    }
}
