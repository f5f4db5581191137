//! Shape registry: the built-in outlines plus a cache of custom polygons.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use glam::DVec2;

use crate::config::ShapeConfig;
use crate::errors::ShapeError;
use crate::geometry;
use crate::log::{debug, warn};
use crate::shapes::{
    BarrelShape, CutRectangleShape, EllipseShape, PolygonShape, RoundRectangleShape, Shape,
    polygon_templates as templates, star_points,
};
use crate::types::{Points, pairs_to_points};

/// Prefix of every custom polygon name
pub const CUSTOM_POLYGON_PREFIX: &str = "polygon-";

/// Owns every shape descriptor.
///
/// Built-ins are created once in [`ShapeRegistry::new`]. Custom polygons are
/// created on first use by [`ShapeRegistry::make_polygon`] and kept for the
/// registry's lifetime, so identical point lists always yield the same
/// `Arc`.
#[derive(Debug)]
pub struct ShapeRegistry {
    config: ShapeConfig,
    builtins: HashMap<&'static str, Arc<Shape>>,
    order: Vec<&'static str>,
    custom: RwLock<HashMap<String, Arc<Shape>>>,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeRegistry {
    /// Registry with the stock constants.
    pub fn new() -> Self {
        Self::build(ShapeConfig::default())
    }

    pub fn with_config(config: ShapeConfig) -> Result<Self, ShapeError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ShapeConfig) -> Self {
        let unit_box: Points = geometry::generate_unit_ngon_points_fit_to_square(4, 0.0).into();
        let polygon = |name: &'static str, points: Vec<DVec2>| -> (&'static str, Arc<Shape>) {
            (name, Arc::new(PolygonShape::new(name, points).into()))
        };
        let ngon = |name: &'static str, sides: usize| {
            polygon(name, geometry::generate_unit_ngon_points_fit_to_square(sides, 0.0))
        };

        let rectangle = Arc::new(Shape::from(PolygonShape::new("rectangle", unit_box.clone())));
        let round_rectangle =
            RoundRectangleShape::new(unit_box.clone(), config.max_round_corner_radius);

        let entries: Vec<(&'static str, Arc<Shape>)> = vec![
            ("ellipse", Arc::new(EllipseShape::new().into())),
            ngon("triangle", 3),
            ("rectangle", rectangle.clone()),
            ("square", rectangle),
            ("roundrectangle", Arc::new(round_rectangle.into())),
            (
                "cutrectangle",
                Arc::new(CutRectangleShape::new(unit_box.clone(), config.cut_corner_length).into()),
            ),
            ("barrel", Arc::new(BarrelShape::new(unit_box, config.barrel_fractions).into())),
            polygon("diamond", templates::diamond()),
            ngon("pentagon", 5),
            ngon("hexagon", 6),
            ngon("heptagon", 7),
            ngon("octagon", 8),
            polygon("star", star_points(config.star_inner_radius_scale)),
            polygon("vee", templates::vee()),
            polygon("rhomboid", templates::rhomboid()),
        ];

        let order: Vec<&'static str> = entries.iter().map(|(name, _)| *name).collect();
        let builtins: HashMap<_, _> = entries.into_iter().collect();
        debug!(shapes = order.len(), "built node shape registry");

        Self {
            config,
            builtins,
            order,
            custom: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Built-in names in registration order
    pub fn builtin_names(&self) -> &[&'static str] {
        &self.order
    }

    /// Look up a built-in or an already-created custom polygon.
    pub fn get(&self, name: &str) -> Option<Arc<Shape>> {
        if let Some(shape) = self.builtins.get(name) {
            return Some(shape.clone());
        }
        self.custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn shape(&self, name: &str) -> Result<Arc<Shape>, ShapeError> {
        self.get(name).ok_or_else(|| ShapeError::UnknownShape {
            name: name.to_string(),
            known: self.order.join(", "),
        })
    }

    /// Shared descriptor for a custom polygon given as flat `[x0, y0, ...]`
    /// unit-square coordinates.
    ///
    /// The same coordinate list always returns the same `Arc`.
    pub fn make_polygon(&self, points: &[f64]) -> Result<Arc<Shape>, ShapeError> {
        if let Err(err) = validate_polygon_points(points) {
            warn!(error = %err, "rejected custom polygon");
            return Err(err);
        }

        let name = custom_polygon_name(points);
        if let Some(shape) = self
            .custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&name)
        {
            debug!(%name, "custom polygon cache hit");
            return Ok(shape.clone());
        }

        let mut custom = self.custom.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have inserted it between the two locks
        let shape = custom
            .entry(name)
            .or_insert_with_key(|name| {
                debug!(%name, "caching custom polygon");
                Arc::new(PolygonShape::new(name.as_str(), pairs_to_points(points)).into())
            })
            .clone();
        Ok(shape)
    }

    /// Resolve a node's shape: `"polygon"` with a point list goes through
    /// [`make_polygon`](Self::make_polygon), everything else is a name lookup.
    pub fn resolve(
        &self,
        name: &str,
        custom_points: Option<&[f64]>,
    ) -> Result<Arc<Shape>, ShapeError> {
        match (name, custom_points) {
            ("polygon", Some(points)) => self.make_polygon(points),
            _ => self.shape(name),
        }
    }

    /// Number of distinct custom polygons created so far
    pub fn custom_polygon_count(&self) -> usize {
        self.custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn validate_polygon_points(points: &[f64]) -> Result<(), ShapeError> {
    if points.len() % 2 != 0 {
        return Err(ShapeError::OddCoordinateCount {
            count: points.len(),
        });
    }
    if points.len() < 6 {
        return Err(ShapeError::TooFewVertices {
            vertices: points.len() / 2,
        });
    }
    if let Some((index, &value)) = points.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ShapeError::NonFiniteCoordinate { index, value });
    }
    Ok(())
}

/// `polygon-` followed by the coordinates in JavaScript number form,
/// joined by `$`.
pub fn custom_polygon_name(points: &[f64]) -> String {
    let mut buf = ryu_js::Buffer::new();
    let mut name = String::from(CUSTOM_POLYGON_PREFIX);
    for (i, &v) in points.iter().enumerate() {
        if i > 0 {
            name.push('$');
        }
        // -0 prints as 0
        let v = if v == 0.0 { 0.0 } else { v };
        name.push_str(buf.format_finite(v));
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::NodeShape;

    const TRIANGLE: [f64; 6] = [0.0, -1.0, 1.0, 1.0, -1.0, 1.0];

    #[test]
    fn builtins_registered_in_order() {
        let reg = ShapeRegistry::new();
        assert_eq!(
            reg.builtin_names(),
            &[
                "ellipse",
                "triangle",
                "rectangle",
                "square",
                "roundrectangle",
                "cutrectangle",
                "barrel",
                "diamond",
                "pentagon",
                "hexagon",
                "heptagon",
                "octagon",
                "star",
                "vee",
                "rhomboid",
            ]
        );
        for name in reg.builtin_names() {
            assert!(reg.get(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn square_aliases_rectangle() {
        let reg = ShapeRegistry::new();
        let (square, rect) = (reg.shape("square").unwrap(), reg.shape("rectangle").unwrap());
        assert!(Arc::ptr_eq(&square, &rect));
        assert_eq!(square.name(), "rectangle");
    }

    #[test]
    fn polygon_name_uses_js_numbers() {
        assert_eq!(custom_polygon_name(&TRIANGLE), "polygon-0$-1$1$1$-1$1");
        assert_eq!(custom_polygon_name(&[-0.0, 0.5, 1e21]), "polygon-0$0.5$1e+21");
    }

    #[test]
    fn make_polygon_caches_by_points() {
        let reg = ShapeRegistry::new();
        let a = reg.make_polygon(&TRIANGLE).unwrap();
        let b = reg.make_polygon(&TRIANGLE).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(reg.custom_polygon_count(), 1);

        let c = reg.make_polygon(&[0.0, -1.0, 1.0, 1.0, -1.0, 0.9]).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(reg.custom_polygon_count(), 2);

        let by_name = reg.get("polygon-0$-1$1$1$-1$1").unwrap();
        assert!(Arc::ptr_eq(&a, &by_name));
    }

    #[test]
    fn make_polygon_rejects_bad_points() {
        let reg = ShapeRegistry::new();
        assert_eq!(
            reg.make_polygon(&[0.0, 1.0, 2.0]),
            Err(ShapeError::OddCoordinateCount { count: 3 })
        );
        assert_eq!(
            reg.make_polygon(&[0.0, 1.0, 1.0, 0.0]),
            Err(ShapeError::TooFewVertices { vertices: 2 })
        );
        assert!(matches!(
            reg.make_polygon(&[0.0, 1.0, f64::NAN, 0.0, 1.0, 1.0]),
            Err(ShapeError::NonFiniteCoordinate { index: 2, .. })
        ));
        assert_eq!(reg.custom_polygon_count(), 0);
    }

    #[test]
    fn resolve_routes_polygon_with_points() {
        let reg = ShapeRegistry::new();
        let custom = reg.resolve("polygon", Some(&TRIANGLE[..])).unwrap();
        assert_eq!(custom.name(), "polygon-0$-1$1$1$-1$1");
        assert_eq!(reg.resolve("diamond", None).unwrap().name(), "diamond");
        assert!(matches!(
            reg.resolve("polygon", None),
            Err(ShapeError::UnknownShape { .. })
        ));
    }

    #[test]
    fn with_config_validates() {
        let bad = ShapeConfig::default().with_cut_corner_length(f64::INFINITY);
        assert!(ShapeRegistry::with_config(bad).is_err());

        let config = ShapeConfig::default().with_cut_corner_length(4.0);
        let reg = ShapeRegistry::with_config(config).unwrap();
        match &*reg.shape("cutrectangle").unwrap() {
            Shape::CutRectangle(cut) => assert_eq!(cut.corner_length(), 4.0),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeRegistry>();
    }
}
