//! Pathway Generator — strokes radiating from the core
//!
//! `3 + density` pathways sit at even angles, rotated together by the
//! animation offset. Each one runs from `35 + 2.5 * stage` to `65 + 5 * stage`.

use super::geometry::{lerp, normal, polar_rad, Point};
use super::palette::Palette;
use super::svg::{Element, Primitive};
use crate::error::Result;
use crate::evolution::EvolutionStage;
use crate::genome::{NetworkDensity, PathwayPattern};
use std::f64::consts::PI;

/// Angular offset of the curved control point, in radians
const CURVE_CONTROL_OFFSET: f64 = 0.8;
const SPIRAL_STEPS: usize = 10;
const SPIRAL_SWEEP: f64 = 1.5 * PI;
/// Perpendicular displacement of the fractal joint
const FRACTAL_OFFSET: f64 = 8.0;
const WAVE_STEPS: usize = 8;
const WAVE_PERIODS: f64 = 3.0;
const WAVE_AMPLITUDE: f64 = 4.0;

pub const STROKE_OPACITY: &str = "0.7";

pub fn path_count(density: NetworkDensity) -> usize {
    3 + density.get() as usize
}

pub fn start_radius(stage: EvolutionStage) -> f64 {
    35.0 + stage.number() as f64 * 2.5
}

pub fn end_radius(stage: EvolutionStage) -> f64 {
    65.0 + stage.number() as f64 * 5.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pathway {
    pub index: usize,
    /// Final angle including the animation offset, in degrees
    pub angle_deg: f64,
    pub primitive: Primitive,
}

/// Generate every pathway for the given traits
pub fn generate_pathways(
    pattern: PathwayPattern,
    density: NetworkDensity,
    stage: EvolutionStage,
    angle_offset_deg: f64,
    center: Point,
) -> Vec<Pathway> {
    let count = path_count(density);
    let r0 = start_radius(stage);
    let r1 = end_radius(stage);
    (0..count)
        .map(|i| {
            let angle_deg = i as f64 * (360.0 / count as f64) + angle_offset_deg;
            Pathway {
                index: i,
                angle_deg,
                primitive: pathway_primitive(pattern, &center, angle_deg.to_radians(), r0, r1),
            }
        })
        .collect()
}

fn pathway_primitive(pattern: PathwayPattern, center: &Point, angle: f64, r0: f64, r1: f64) -> Primitive {
    let from = polar_rad(center, r0, angle);
    let to = polar_rad(center, r1, angle);
    match pattern {
        PathwayPattern::Linear => Primitive::Line { from, to },
        PathwayPattern::Curved => Primitive::Quadratic {
            from,
            control: polar_rad(center, (r0 + r1) / 2.0, angle + CURVE_CONTROL_OFFSET),
            to,
        },
        PathwayPattern::Spiral => Primitive::Polyline(
            (0..=SPIRAL_STEPS)
                .map(|j| {
                    let t = j as f64 / SPIRAL_STEPS as f64;
                    polar_rad(center, lerp(r0, r1, t), angle + t * SPIRAL_SWEEP)
                })
                .collect(),
        ),
        PathwayPattern::Fractal => {
            let mid = polar_rad(center, (r0 + r1) / 2.0, angle) + normal(angle) * FRACTAL_OFFSET;
            Primitive::Polyline(vec![from, mid, to])
        }
        PathwayPattern::Wave => {
            let n = normal(angle);
            Primitive::Polyline(
                (0..=WAVE_STEPS)
                    .map(|j| {
                        let t = j as f64 / WAVE_STEPS as f64;
                        let base = polar_rad(center, lerp(r0, r1, t), angle);
                        base + n * (WAVE_AMPLITUDE * (t * WAVE_PERIODS * 2.0 * PI).sin())
                    })
                    .collect(),
            )
        }
    }
}

/// Group of pathway strokes in the secondary color
pub fn pathways_element(pathways: &[Pathway], palette: &Palette) -> Result<Element> {
    let mut group = Element::new("g")
        .attr("class", "pathways")
        .attr("fill", "none")
        .attr("stroke", palette.secondary.css())
        .attr("stroke-opacity", STROKE_OPACITY)
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round");
    for pathway in pathways {
        group = group.child(pathway.primitive.to_element()?.attr("class", "pathway"));
    }
    Ok(group)
}
