//! Core-Shape Generator — the central emblem
//!
//! Size grows with stage (`25 + 4 * stage`) and every vertex uses the same
//! pulse offset, so the whole shape breathes in sync.

use super::geometry::{diamond_points, regular_polygon, star_points, Point};
use super::palette::Palette;
use super::svg::{Element, Primitive};
use crate::error::Result;
use crate::evolution::EvolutionStage;
use crate::genome::CoreGeometry;

pub const BASE_SIZE: f64 = 25.0;
pub const SIZE_PER_STAGE: f64 = 4.0;

/// Cross bar thickness relative to the pulsed radius
const CROSS_THICKNESS: f64 = 0.3;

pub fn core_size(stage: EvolutionStage) -> f64 {
    BASE_SIZE + stage.number() as f64 * SIZE_PER_STAGE
}

/// Generated emblem geometry, unstyled
#[derive(Debug, Clone, PartialEq)]
pub struct CoreShape {
    pub geometry: CoreGeometry,
    /// Effective radius, size plus pulse
    pub radius: f64,
    pub primitives: Vec<Primitive>,
}

impl CoreShape {
    pub fn generate(
        geometry: CoreGeometry,
        stage: EvolutionStage,
        pulse_offset: f64,
        center: Point,
    ) -> Self {
        let radius = core_size(stage) + pulse_offset;
        Self {
            geometry,
            radius,
            primitives: shape_primitives(geometry, &center, radius),
        }
    }

    /// Filled emblem: primary fill, glow outline
    pub fn to_element(&self, palette: &Palette) -> Result<Element> {
        let mut group = Element::new("g")
            .attr("class", "core")
            .attr("fill", palette.primary.css())
            .attr("fill-opacity", "0.85")
            .attr("stroke", palette.glow.css())
            .attr("stroke-width", "2")
            .attr("stroke-linejoin", "round");
        for primitive in &self.primitives {
            group = group.child(primitive.to_element()?);
        }
        Ok(group)
    }
}

/// Primitives for a geometry at a given radius
pub fn shape_primitives(geometry: CoreGeometry, center: &Point, radius: f64) -> Vec<Primitive> {
    match geometry {
        CoreGeometry::Circle => vec![Primitive::Circle {
            center: *center,
            radius,
        }],
        CoreGeometry::Diamond => vec![Primitive::Polygon(diamond_points(center, radius))],
        CoreGeometry::Hexagon => vec![Primitive::Polygon(regular_polygon(center, radius, 6))],
        CoreGeometry::Octagon => vec![Primitive::Polygon(regular_polygon(center, radius, 8))],
        CoreGeometry::Star => vec![Primitive::Polygon(star_points(center, radius))],
        CoreGeometry::Triangle => vec![Primitive::Polygon(regular_polygon(center, radius, 3))],
        CoreGeometry::Pentagon => vec![Primitive::Polygon(regular_polygon(center, radius, 5))],
        CoreGeometry::Cross => {
            let thickness = radius * CROSS_THICKNESS;
            vec![
                Primitive::Rect {
                    origin: Point::new(center.x - radius, center.y - thickness / 2.0),
                    width: radius * 2.0,
                    height: thickness,
                },
                Primitive::Rect {
                    origin: Point::new(center.x - thickness / 2.0, center.y - radius),
                    width: thickness,
                    height: radius * 2.0,
                },
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Point {
        Point::new(200.0, 200.0)
    }

    #[test]
    fn test_size_grows_with_stage() {
        assert_eq!(core_size(EvolutionStage::Spark), 29.0);
        assert_eq!(core_size(EvolutionStage::Nexus), 41.0);
    }

    #[test]
    fn test_vertex_counts() {
        let expected = [
            (CoreGeometry::Diamond, 4),
            (CoreGeometry::Hexagon, 6),
            (CoreGeometry::Octagon, 8),
            (CoreGeometry::Star, 10),
            (CoreGeometry::Triangle, 3),
            (CoreGeometry::Pentagon, 5),
        ];
        for (geometry, n) in expected {
            let shape = CoreShape::generate(geometry, EvolutionStage::Spark, 0.0, center());
            match &shape.primitives[..] {
                [Primitive::Polygon(pts)] => assert_eq!(pts.len(), n, "{:?}", geometry),
                other => panic!("unexpected primitives for {:?}: {:?}", geometry, other),
            }
        }
    }

    #[test]
    fn test_circle_and_cross() {
        let circle = CoreShape::generate(CoreGeometry::Circle, EvolutionStage::Pulse, 1.5, center());
        assert_eq!(
            circle.primitives,
            vec![Primitive::Circle { center: center(), radius: 34.5 }]
        );

        let cross = CoreShape::generate(CoreGeometry::Cross, EvolutionStage::Spark, 1.0, center());
        assert_eq!(cross.primitives.len(), 2);
        match &cross.primitives[0] {
            Primitive::Rect { width, height, .. } => {
                assert!((width - 60.0).abs() < 1e-9);
                assert!((height - 9.0).abs() < 1e-9);
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_pulse_moves_every_vertex() {
        let still = CoreShape::generate(CoreGeometry::Hexagon, EvolutionStage::Flow, 0.0, center());
        let pulsed = CoreShape::generate(CoreGeometry::Hexagon, EvolutionStage::Flow, 2.0, center());
        assert_eq!(pulsed.radius - still.radius, 2.0);
        let (Primitive::Polygon(a), Primitive::Polygon(b)) = (&still.primitives[0], &pulsed.primitives[0]) else {
            panic!("expected polygons");
        };
        for (p, q) in a.iter().zip(b) {
            let grown = (q - center()).norm() - (p - center()).norm();
            assert!((grown - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_element_styling() {
        let shape = CoreShape::generate(CoreGeometry::Star, EvolutionStage::Spark, 0.0, center());
        let palette = Palette::for_record(
            &crate::genome::TraitRecord::from_raw(crate::genome::RawTraitRecord {
                id: 1,
                birth_time: 0,
                core_geometry: 4,
                pathway_pattern: 0,
                particle_system: 0,
                network_density: 1,
                mutation_intensity: 0,
                is_enhanced_genesis: false,
            })
            .unwrap(),
            EvolutionStage::Spark,
        );
        let el = shape.to_element(&palette).unwrap();
        assert_eq!(el.get_attr("class"), Some("core"));
        assert_eq!(el.get_attr("fill"), Some(palette.primary.css().as_str()));
        assert_eq!(el.child_count(), 1);
    }
}
