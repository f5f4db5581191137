//! SVG path data builder.
//!
//! A small fluent API (`m`, `l`, `q`, `a`, `z`) whose `Display` output is a
//! path `d` attribute. Numbers are printed with six significant figures.

use std::fmt;

use glam::{DVec2, dvec2};

const SIG_FIGS: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo {
        control: DVec2,
        to: DVec2,
    },
    Arc {
        radii: DVec2,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

/// An SVG path under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(dvec2(x, y)));
        self
    }

    /// Quadratic Bezier to `(x, y)` through control `(cx, cy)`
    pub fn q(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: dvec2(cx, cy),
            to: dvec2(x, y),
        });
        self
    }

    /// Elliptical arc to `(x, y)`
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            radii: dvec2(rx, ry),
            rotation,
            large_arc,
            sweep,
            to: dvec2(x, y),
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Point variants, for callers that already hold `DVec2`s
    pub fn move_to(self, p: DVec2) -> Self {
        self.m(p.x, p.y)
    }

    pub fn line_to(self, p: DVec2) -> Self {
        self.l(p.x, p.y)
    }

    pub fn quad_to(self, control: DVec2, to: DVec2) -> Self {
        self.q(control.x, control.y, to.x, to.y)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M{}", fmt_point(p))?,
                PathCommand::LineTo(p) => write!(f, "L{}", fmt_point(p))?,
                PathCommand::QuadTo { control, to } => {
                    write!(f, "Q{} {}", fmt_point(control), fmt_point(to))?
                }
                PathCommand::Arc {
                    radii,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A{} {} {},{} {}",
                    fmt_point(radii),
                    fmt_num(rotation),
                    u8::from(large_arc),
                    u8::from(sweep),
                    fmt_point(to)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Format a number with six significant figures, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(50.0), "50");
        assert_eq!(fmt_num(1_000_000.0), "1000000");
        assert_eq!(fmt_num(47.656854249), "47.6569");
        assert_eq!(fmt_num(-0.5), "-0.5");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(99.999999), "100");
    }

    #[test]
    fn path_commands_render_in_order() {
        let d = PathData::new()
            .m(0.0, 0.0)
            .l(10.0, 0.0)
            .q(15.0, 0.0, 15.0, 5.0)
            .a(5.0, 5.0, 0.0, false, true, 10.0, 10.0)
            .z();
        assert_eq!(d.len(), 5);
        assert_eq!(d.to_string(), "M0,0 L10,0 Q15,0 15,5 A5,5 0 0,1 10,10 Z");
    }

    #[test]
    fn empty_path_renders_nothing() {
        let d = PathData::new();
        assert!(d.is_empty());
        assert_eq!(d.to_string(), "");
    }
}
