//! Error types with diagnostic codes using miette
//!
//! Shape queries themselves never fail; these errors come from building
//! custom polygons, looking up shapes by name and validating configuration.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the shape registry and its configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("polygon point list has an odd number of coordinates ({count})")]
    #[diagnostic(
        code(nodeshapes::polygon::odd_coordinate_count),
        help("points are flat x, y pairs: [x0, y0, x1, y1, ...]")
    )]
    OddCoordinateCount { count: usize },

    #[error("polygon needs at least 3 vertices, got {vertices}")]
    #[diagnostic(code(nodeshapes::polygon::too_few_vertices))]
    TooFewVertices { vertices: usize },

    #[error("polygon coordinate {index} is not finite ({value})")]
    #[diagnostic(
        code(nodeshapes::polygon::non_finite),
        help("template coordinates live on the unit square [-1, 1] x [-1, 1]")
    )]
    NonFiniteCoordinate { index: usize, value: f64 },

    #[error("unknown shape: {name}")]
    #[diagnostic(code(nodeshapes::registry::unknown_shape), help("known shapes: {known}"))]
    UnknownShape { name: String, known: String },

    #[error("invalid shape configuration: {field} = {value}")]
    #[diagnostic(code(nodeshapes::config::invalid), help("{reason}"))]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_shape_message_names_the_shape() {
        let err = ShapeError::UnknownShape {
            name: "blob".to_string(),
            known: "ellipse, triangle".to_string(),
        };
        assert_eq!(err.to_string(), "unknown shape: blob");
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("known shapes: ellipse, triangle"));
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = ShapeError::TooFewVertices { vertices: 2 };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("nodeshapes::polygon::too_few_vertices"));
    }
}
