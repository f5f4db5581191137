//! Default shape constants (in the same units as node width/height)

/// Upper bound on a rounded rectangle's corner radius
pub const MAX_ROUND_CORNER_RADIUS: f64 = 8.0;

/// Length cut off each corner of a cut rectangle, along both edges
pub const CUT_CORNER_LENGTH: f64 = 8.0;

/// Barrel corner curve fractions `[near, far]`. Each corner curve leaves the
/// side `near * height` from the corner, bends around a control point
/// `near * width` in, and meets the top/bottom edge `far * width` in.
pub const BARREL_FRACTIONS: [f64; 2] = [0.05, 0.25];

/// Inner star radius relative to the outer radius before fitting.
/// `0.5 * (3 - sqrt 5)` is the regular pentagram ratio; the scale fattens it.
pub const STAR_INNER_RADIUS_SCALE: f64 = 1.57;

/// Parameter tolerance when deciding whether two segments cross
pub const SEGMENT_PARAM_TOLERANCE: f64 = 0.001;
