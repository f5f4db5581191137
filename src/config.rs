//! Tunable shape constants.

use crate::defaults;
use crate::errors::ShapeError;
use crate::geometry;

/// Constants used when the registry builds its shapes.
///
/// `ShapeConfig::default()` reproduces the stock outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    /// Cap on the rounded rectangle corner radius
    pub max_round_corner_radius: f64,
    /// Chamfer length of the cut rectangle
    pub cut_corner_length: f64,
    /// Barrel curve fractions `[near, far]`, see [`defaults::BARREL_FRACTIONS`]
    pub barrel_fractions: [f64; 2],
    /// Inner radius scale of the built-in star
    pub star_inner_radius_scale: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            max_round_corner_radius: defaults::MAX_ROUND_CORNER_RADIUS,
            cut_corner_length: geometry::cut_rectangle_corner_length(),
            barrel_fractions: defaults::BARREL_FRACTIONS,
            star_inner_radius_scale: defaults::STAR_INNER_RADIUS_SCALE,
        }
    }
}

impl ShapeConfig {
    pub fn with_max_round_corner_radius(mut self, radius: f64) -> Self {
        self.max_round_corner_radius = radius;
        self
    }

    pub fn with_cut_corner_length(mut self, length: f64) -> Self {
        self.cut_corner_length = length;
        self
    }

    pub fn with_barrel_fractions(mut self, near: f64, far: f64) -> Self {
        self.barrel_fractions = [near, far];
        self
    }

    pub fn with_star_inner_radius_scale(mut self, scale: f64) -> Self {
        self.star_inner_radius_scale = scale;
        self
    }

    /// Reject values that would produce a degenerate outline.
    pub fn validate(&self) -> Result<(), ShapeError> {
        non_negative("max_round_corner_radius", self.max_round_corner_radius)?;
        non_negative("cut_corner_length", self.cut_corner_length)?;
        positive("star_inner_radius_scale", self.star_inner_radius_scale)?;

        let [near, far] = self.barrel_fractions;
        positive("barrel_fractions[0]", near)?;
        positive("barrel_fractions[1]", far)?;
        // The far point must lie past the control point and both corners of
        // one edge must not overlap.
        if far <= near {
            return Err(ShapeError::InvalidConfig {
                field: "barrel_fractions[1]",
                value: far,
                reason: "must be greater than barrel_fractions[0]",
            });
        }
        if far > 0.5 {
            return Err(ShapeError::InvalidConfig {
                field: "barrel_fractions[1]",
                value: far,
                reason: "must be at most 0.5",
            });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::InvalidConfig {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ShapeError::InvalidConfig {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ShapeError> {
    non_negative(field, value)?;
    if value == 0.0 {
        return Err(ShapeError::InvalidConfig {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ShapeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_corner_sizes_match_geometry() {
        let config = ShapeConfig::default();
        assert_eq!(config.cut_corner_length, geometry::cut_rectangle_corner_length());
        assert_eq!(
            geometry::round_rectangle_radius_capped(100.0, 100.0, config.max_round_corner_radius),
            geometry::round_rectangle_radius(100.0, 100.0)
        );
    }

    #[test]
    fn rejects_negative_corner_length() {
        let err = ShapeConfig::default()
            .with_cut_corner_length(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidConfig {
                field: "cut_corner_length",
                ..
            }
        ));
    }

    #[test]
    fn rejects_nan_radius() {
        let err = ShapeConfig::default()
            .with_max_round_corner_radius(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidConfig {
                reason: "must be finite",
                ..
            }
        ));
    }

    #[test]
    fn rejects_inverted_barrel_fractions() {
        let err = ShapeConfig::default()
            .with_barrel_fractions(0.3, 0.1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidConfig {
                field: "barrel_fractions[1]",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_star_scale() {
        assert!(
            ShapeConfig::default()
                .with_star_inner_radius_scale(0.0)
                .validate()
                .is_err()
        );
    }
}
