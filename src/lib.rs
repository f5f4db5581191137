//! Node outline shapes for graph rendering.
//!
//! Every shape answers three questions for a node placed at some
//! [`NodeBounds`]:
//!
//! - [`NodeShape::draw`]: trace the outline through a [`ShapeRenderer`]
//! - [`NodeShape::intersect_line`]: where an edge aimed at the node center
//!   meets the (padded) outline
//! - [`NodeShape::check_point`]: whether a point hits the (padded) outline
//!
//! Shapes live in a [`ShapeRegistry`], which builds the built-ins once and
//! caches custom polygons so repeated point lists share one descriptor.
//!
//! ```
//! use glam::dvec2;
//! use nodeshapes::{NodeBounds, NodeShape, ShapeRegistry};
//!
//! let registry = ShapeRegistry::new();
//! let diamond = registry.shape("diamond")?;
//! let node = NodeBounds::from_center(0.0, 0.0, 40.0, 40.0);
//!
//! assert!(diamond.check_point(dvec2(0.0, 0.0), 0.0, &node));
//! let clip = diamond.intersect_line(&node, dvec2(100.0, 0.0), 0.0);
//! assert!(!clip.is_empty());
//! # Ok::<(), nodeshapes::ShapeError>(())
//! ```

pub mod config;
pub mod defaults;
pub mod errors;
pub mod geometry;
mod log;
pub mod path;
pub mod registry;
pub mod render;
pub mod shapes;
pub mod types;

pub use config::ShapeConfig;
pub use errors::ShapeError;
pub use path::PathData;
pub use registry::ShapeRegistry;
pub use render::{Outline, ShapeRenderer, SvgPathRenderer};
pub use shapes::{
    BarrelShape, CornerSet, CurveCorner, CurveSide, CutCorner, CutRectangleShape, EllipseShape,
    NodeShape, PolygonShape, RoundRectangleShape, Shape,
};
pub use types::{NodeBounds, Points};
