//! Print where an edge from a far point gets clipped by every built-in shape.
//!
//! Run with `RUST_LOG=nodeshapes=debug cargo run --example clip --features tracing`
//! to see registry events.

use glam::dvec2;
use nodeshapes::{NodeBounds, NodeShape, ShapeRegistry, SvgPathRenderer};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = ShapeRegistry::new();
    let node = NodeBounds::from_center(0.0, 0.0, 120.0, 80.0);
    let toward = dvec2(300.0, 180.0);
    let padding = 2.0;

    for name in registry.builtin_names() {
        let shape = registry.shape(name)?;
        let hits = shape.intersect_line(&node, toward, padding);
        let clip = hits
            .iter()
            .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{name:>15}: {clip}");
    }

    // Custom polygons are cached by their point list
    let arrow = [-1.0, -0.5, 0.3, -0.5, 1.0, 0.0, 0.3, 0.5, -1.0, 0.5];
    let custom = registry.resolve("polygon", Some(&arrow[..]))?;
    let mut renderer = SvgPathRenderer::new();
    custom.draw(&mut renderer, &node);
    for path in renderer.paths() {
        println!("{}: {path}", custom.name());
    }

    Ok(())
}
