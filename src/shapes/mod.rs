//! Node shape types
//!
//! Each shape is its own type that knows how to:
//! - Draw its outline through a [`ShapeRenderer`]
//! - Find where an edge aimed at the node center crosses the outline
//! - Decide whether a point lies within the (padded) outline

mod barrel;
mod cut_rectangle;
mod ellipse;
mod polygon;
mod round_rectangle;

pub use barrel::{BarrelShape, CurveCorner, CurveSide};
pub use cut_rectangle::{CutCorner, CutRectangleShape};
pub use ellipse::EllipseShape;
pub use polygon::{PolygonShape, star_points};
pub(crate) use polygon::templates as polygon_templates;
pub use round_rectangle::RoundRectangleShape;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::render::ShapeRenderer;
use crate::types::NodeBounds;

/// Operations common to every node outline, dispatched from [`Shape`] to its
/// variants by [`enum_dispatch`].
///
/// `padding` grows the outline outward by that distance on every side. A
/// larger padding never shrinks the accepted region.
#[enum_dispatch]
pub trait NodeShape {
    /// Registry name, e.g. `"diamond"` or `"polygon-0$-1$1$1$-1$1"`
    fn name(&self) -> &str;

    /// Unit-square template vertices, when the shape has them
    fn points(&self) -> Option<&[DVec2]>;

    /// Trace the outline for a node occupying `bounds`.
    fn draw(&self, renderer: &mut dyn ShapeRenderer, bounds: &NodeBounds);

    /// Crossing points of the segment from `toward` to the node center with
    /// the padded outline. Empty when `toward` is the center or lies inside.
    fn intersect_line(&self, bounds: &NodeBounds, toward: DVec2, padding: f64) -> Vec<DVec2>;

    /// Whether `point` lies within the outline grown by `padding`.
    /// Points on the boundary count as inside.
    fn check_point(&self, point: DVec2, padding: f64, bounds: &NodeBounds) -> bool;
}

/// Any node outline the registry can hand out.
#[enum_dispatch(NodeShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(PolygonShape),
    Ellipse(EllipseShape),
    RoundRectangle(RoundRectangleShape),
    CutRectangle(CutRectangleShape),
    Barrel(BarrelShape),
}

/// One value per rectangle corner, clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSet<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T> CornerSet<T> {
    /// Corners in drawing order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.top_left, &self.top_right, &self.bottom_right, &self.bottom_left].into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CornerSet<U> {
        CornerSet {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }
}

/// Screen-up: templates are authored with `(0, -1)` pointing at the top edge.
pub(crate) const UP: DVec2 = DVec2::NEG_Y;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_set_iterates_clockwise() {
        let set = CornerSet {
            top_left: 0,
            top_right: 1,
            bottom_right: 2,
            bottom_left: 3,
        };
        let order: Vec<_> = set.iter().copied().collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_eq!(set.map(|i| i * 10).bottom_left, 30);
    }

    #[test]
    fn shape_enum_dispatches_name() {
        let shape = Shape::from(EllipseShape::new());
        assert_eq!(shape.name(), "ellipse");
        assert!(shape.points().is_none());
    }
}
