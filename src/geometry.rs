//! Geometry primitives the shapes are built from.
//!
//! Everything here works in screen coordinates (y grows downward) on
//! `glam::DVec2`. Functions are pure; degenerate input propagates NaN
//! rather than being guarded, except where noted.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DVec2, dvec2};

use crate::defaults;

// ============================================================================
// Templates
// ============================================================================

/// Vertices of a regular `sides`-gon on the unit circle.
///
/// Odd polygons point straight up; even ones sit on a flat bottom edge.
/// `rotation` is added to the start angle (radians, counter-clockwise).
pub fn generate_unit_ngon_points(sides: usize, rotation: f64) -> Vec<DVec2> {
    let increment = 2.0 * PI / sides as f64;
    let start = if sides % 2 == 0 {
        FRAC_PI_2 + increment / 2.0
    } else {
        FRAC_PI_2
    } + rotation;

    (0..sides)
        .map(|i| {
            let angle = start + i as f64 * increment;
            dvec2(angle.cos(), -angle.sin())
        })
        .collect()
}

/// Stretch a template so its bounding box is 2 units wide and tall, then
/// shift it down so it does not poke above `y = -1`.
pub fn fit_polygon_to_square(mut points: Vec<DVec2>) -> Vec<DVec2> {
    if points.is_empty() {
        return points;
    }

    let (min, max) = extent(&points);
    let scale = dvec2(2.0 / (max.x - min.x), 2.0 / (max.y - min.y));
    for p in points.iter_mut() {
        *p *= scale;
    }

    let top = extent(&points).0.y.min(min.y);
    if top < -1.0 {
        let shift = -1.0 - top;
        for p in points.iter_mut() {
            p.y += shift;
        }
    }
    points
}

pub fn generate_unit_ngon_points_fit_to_square(sides: usize, rotation: f64) -> Vec<DVec2> {
    fit_polygon_to_square(generate_unit_ngon_points(sides, rotation))
}

fn extent(points: &[DVec2]) -> (DVec2, DVec2) {
    points.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(lo, hi), p| (lo.min(*p), hi.max(*p)),
    )
}

// ============================================================================
// Corner sizes
// ============================================================================

/// Rounded rectangle corner radius with the stock cap.
pub fn round_rectangle_radius(width: f64, height: f64) -> f64 {
    round_rectangle_radius_capped(width, height, defaults::MAX_ROUND_CORNER_RADIUS)
}

/// A quarter of the smaller side, never more than `cap`.
pub fn round_rectangle_radius_capped(width: f64, height: f64, cap: f64) -> f64 {
    (width / 4.0).min(height / 4.0).min(cap)
}

/// Stock chamfer length of a cut rectangle corner.
pub fn cut_rectangle_corner_length() -> f64 {
    defaults::CUT_CORNER_LENGTH
}

// ============================================================================
// Containment
// ============================================================================

/// Point-in-polygon on absolute vertices.
///
/// Casts a ray downward from `p` and counts edge crossings. Each vertex is
/// owned by exactly one of its two edges (half-open x range), and points
/// lying on an edge count as inside.
pub fn point_inside_polygon_points(p: DVec2, points: &[DVec2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut crossings = 0usize;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];

        if on_segment(p, a, b) {
            return true;
        }
        if (a.x > p.x) == (b.x > p.x) {
            continue;
        }

        let y = (p.x - a.x) / (b.x - a.x) * (b.y - a.y) + a.y;
        if y > p.y {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

fn on_segment(p: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = p - a;
    let scale = ab.length_squared().max(f64::MIN_POSITIVE);
    if ab.perp_dot(ap).abs() > 1e-9 * scale.sqrt() {
        return false;
    }
    let t = ab.dot(ap) / scale;
    (0.0..=1.0).contains(&t)
}

/// Point-in-polygon on a unit-square template.
///
/// The template is rotated so that `up` maps to `(0, -1)`, scaled to
/// `width x height`, moved to `center` and grown outward by `padding`.
pub fn point_inside_polygon(
    p: DVec2,
    template: &[DVec2],
    center: DVec2,
    width: f64,
    height: f64,
    up: DVec2,
    padding: f64,
) -> bool {
    let (sin, cos) = (-up_angle(up)).sin_cos();
    let half = dvec2(width / 2.0, height / 2.0);

    let placed: Vec<DVec2> = template
        .iter()
        .map(|b| dvec2(b.x * cos - b.y * sin, b.y * cos + b.x * sin) * half + center)
        .collect();

    if padding > 0.0 {
        point_inside_polygon_points(p, &join_lines(&expand_polygon(&placed, padding)))
    } else {
        point_inside_polygon_points(p, &placed)
    }
}

/// Rotation that takes `up` onto screen-up. Zero for `(0, -1)`.
fn up_angle(up: DVec2) -> f64 {
    let angle = (up.y / up.x).atan();
    if up.x < 0.0 {
        angle + FRAC_PI_2
    } else {
        -angle - FRAC_PI_2
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Offset every edge of a closed polygon outward by `pad`.
///
/// Returns one `(start, end)` line per edge. The outward side is taken from
/// the polygon's winding, so either vertex order grows the outline.
pub fn expand_polygon(points: &[DVec2], pad: f64) -> Vec<(DVec2, DVec2)> {
    let n = points.len();
    let winding = if signed_area(points) >= 0.0 { 1.0 } else { -1.0 };

    (0..n)
        .map(|i| {
            let current = points[i];
            let next = points[(i + 1) % n];
            let d = next - current;
            let normal = dvec2(d.y, -d.x).normalize_or_zero() * winding;
            (current + normal * pad, next + normal * pad)
        })
        .collect()
}

/// Re-join offset edges: vertex `i` is where line `i` meets line `i + 1`.
pub fn join_lines(lines: &[(DVec2, DVec2)]) -> Vec<DVec2> {
    let n = lines.len();
    (0..n)
        .map(|i| {
            let (a1, a2) = lines[i];
            let (b1, b2) = lines[(i + 1) % n];
            // Collinear neighbours share their endpoint
            finite_lines_intersect(a1, a2, b1, b2, true).unwrap_or(a2)
        })
        .collect()
}

/// Shoelace area, positive when the vertices run clockwise on screen.
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

// ============================================================================
// Intersections
// ============================================================================

/// Intersection of segment `p1-p2` with segment `p3-p4`.
///
/// With `infinite` set, both are treated as unbounded lines. Collinear
/// overlapping segments report an endpoint of the overlap. A zero-length
/// first segment never intersects.
pub fn finite_lines_intersect(
    p1: DVec2,
    p2: DVec2,
    p3: DVec2,
    p4: DVec2,
    infinite: bool,
) -> Option<DVec2> {
    let d13 = p1 - p3;
    let d21 = p2 - p1;
    let d43 = p4 - p3;
    if d21 == DVec2::ZERO {
        return None;
    }

    let ua_t = d43.x * d13.y - d43.y * d13.x;
    let ub_t = d21.x * d13.y - d21.y * d13.x;
    let u_b = d43.y * d21.x - d43.x * d21.y;

    if u_b != 0.0 {
        let ua = ua_t / u_b;
        let ub = ub_t / u_b;
        let lo = -defaults::SEGMENT_PARAM_TOLERANCE;
        let hi = 1.0 + defaults::SEGMENT_PARAM_TOLERANCE;
        let within = (lo..=hi).contains(&ua) && (lo..=hi).contains(&ub);
        return (infinite || within).then(|| p1 + d21 * ua);
    }

    if ua_t != 0.0 && ub_t != 0.0 {
        // Parallel, not collinear
        return None;
    }

    if within_box(p4, p1, p2) {
        Some(p4)
    } else if within_box(p3, p1, p2) {
        Some(p3)
    } else if within_box(p2, p3, p4) {
        Some(p2)
    } else {
        None
    }
}

fn within_box(q: DVec2, a: DVec2, b: DVec2) -> bool {
    let (lo, hi) = (a.min(b), a.max(b));
    lo.x <= q.x && q.x <= hi.x && lo.y <= q.y && q.y <= hi.y
}

/// Crossings of the segment `toward -> center` with a template polygon
/// scaled by `half_size`, moved to `center` and padded outward.
pub fn polygon_intersect_line(
    toward: DVec2,
    template: &[DVec2],
    center: DVec2,
    half_size: DVec2,
    padding: f64,
) -> Vec<DVec2> {
    let placed: Vec<DVec2> = template.iter().map(|p| *p * half_size + center).collect();

    if padding > 0.0 {
        let expanded = join_lines(&expand_polygon(&placed, padding));
        polygon_intersect_line_absolute(toward, &expanded, center)
    } else {
        polygon_intersect_line_absolute(toward, &placed, center)
    }
}

/// Crossings of the segment `toward -> center` with absolute polygon edges,
/// in edge order.
pub fn polygon_intersect_line_absolute(
    toward: DVec2,
    points: &[DVec2],
    center: DVec2,
) -> Vec<DVec2> {
    if toward == center {
        return Vec::new();
    }

    let n = points.len();
    (0..n)
        .filter_map(|i| {
            finite_lines_intersect(toward, center, points[i], points[(i + 1) % n], false)
        })
        .collect()
}

/// Where the ray from `center` toward `toward` leaves an axis-aligned ellipse.
///
/// `None` when `toward` lies inside the ellipse (including the center).
pub fn intersect_line_ellipse(toward: DVec2, center: DVec2, rx: f64, ry: f64) -> Option<DVec2> {
    let disp = center - toward;
    let len = (disp / dvec2(rx, ry)).length();
    let beyond = len - 1.0;
    if !(beyond >= 0.0) {
        return None;
    }
    Some(disp * (beyond / len) + toward)
}

/// Crossings of segment `a-b` with a circle, nearest to `a` first.
pub fn intersect_line_circle(a: DVec2, b: DVec2, center: DVec2, radius: f64) -> Vec<DVec2> {
    let d = b - a;
    let f = a - center;

    let qa = d.dot(d);
    if qa == 0.0 {
        return Vec::new();
    }
    let qb = 2.0 * f.dot(d);
    let qc = f.dot(f) - radius * radius;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return Vec::new();
    }

    let root = disc.sqrt();
    let t1 = (-qb + root) / (2.0 * qa);
    let t2 = (-qb - root) / (2.0 * qa);
    let (near, far) = (t1.min(t2), t1.max(t2));

    let mut hits = Vec::with_capacity(2);
    for t in [near, far] {
        if (0.0..=1.0).contains(&t) && hits.last() != Some(&(a + d * t)) {
            hits.push(a + d * t);
        }
    }
    hits
}

/// Rounded rectangle crossing with the stock radius.
pub fn round_rectangle_intersect_line(
    toward: DVec2,
    center: DVec2,
    width: f64,
    height: f64,
    padding: f64,
) -> Vec<DVec2> {
    let radius = round_rectangle_radius(width, height);
    round_rectangle_intersect_line_with_radius(toward, center, width, height, padding, radius)
}

/// Crossing of `toward -> center` with a padded rounded rectangle.
///
/// Straight edges are tried first (top, right, bottom, left), then the
/// corner arcs; an arc hit only counts on its own quadrant.
pub fn round_rectangle_intersect_line_with_radius(
    toward: DVec2,
    center: DVec2,
    width: f64,
    height: f64,
    padding: f64,
    radius: f64,
) -> Vec<DVec2> {
    if toward == center {
        return Vec::new();
    }

    let (hw, hh) = (width / 2.0, height / 2.0);
    let (r, p) = (radius, padding);
    let (cx, cy) = (center.x, center.y);

    // Straight runs keep their unpadded length; padding only pushes them out
    let edges = [
        (dvec2(cx - hw + r, cy - hh - p), dvec2(cx + hw - r, cy - hh - p)),
        (dvec2(cx + hw + p, cy - hh + r), dvec2(cx + hw + p, cy + hh - r)),
        (dvec2(cx - hw + r, cy + hh + p), dvec2(cx + hw - r, cy + hh + p)),
        (dvec2(cx - hw - p, cy - hh + r), dvec2(cx - hw - p, cy + hh - r)),
    ];
    for (start, end) in edges {
        if let Some(hit) = finite_lines_intersect(toward, center, start, end, false) {
            return vec![hit];
        }
    }

    // Top-left, top-right, bottom-right, bottom-left
    let quadrants = [dvec2(-1.0, -1.0), dvec2(1.0, -1.0), dvec2(1.0, 1.0), dvec2(-1.0, 1.0)];
    for q in quadrants {
        let arc_center = center + q * dvec2(hw - r, hh - r);
        let Some(&hit) = intersect_line_circle(toward, center, arc_center, r + p).first() else {
            continue;
        };
        let rel = (hit - arc_center) * q;
        if rel.x >= 0.0 && rel.y >= 0.0 {
            return vec![hit];
        }
    }

    Vec::new()
}

// ============================================================================
// Quadratic curves
// ============================================================================

/// Power-basis coefficients `(a, b, c)` of a quadratic Bezier coordinate.
pub fn bezier_pts_to_quad_coeff(p0: f64, p1: f64, p2: f64) -> [f64; 3] {
    [p0 - 2.0 * p1 + p2, 2.0 * (p1 - p0), p0]
}

/// Real roots of `a t^2 + b t + c = target`.
pub fn solve_quadratic(a: f64, b: f64, c: f64, target: f64) -> Vec<f64> {
    if a.abs() < f64::EPSILON {
        if b == 0.0 {
            return Vec::new();
        }
        return vec![(target - c) / b];
    }

    let disc = b * b - 4.0 * a * (c - target);
    if disc < 0.0 {
        return Vec::new();
    }
    let root = disc.sqrt();
    vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
}

pub fn qbezier_at(p0: f64, p1: f64, p2: f64, t: f64) -> f64 {
    let s = 1.0 - t;
    s * s * p0 + 2.0 * s * t * p1 + t * t * p2
}
