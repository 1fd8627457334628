//! Particle-Field Generator — small shapes orbiting the core
//!
//! Count is `8 + 2 * density`. Orbit radius, speed and size cycle with the
//! particle index; position and opacity are driven by the frame counter.

use super::geometry::{diamond_points, polar, regular_polygon, star_points, Point};
use super::palette::Palette;
use super::svg::{fmt_num, Element, Primitive};
use crate::error::Result;
use crate::genome::{NetworkDensity, ParticleSystem};

pub fn particle_count(density: NetworkDensity) -> usize {
    8 + density.get() as usize * 2
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub position: Point,
    pub orbit_radius: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    fn at(index: usize, count: usize, frame: u64, center: &Point) -> Self {
        let i = index as f64;
        let frame = frame as f64;
        let orbit_radius = 80.0 + (index % 3) as f64 * 10.0;
        let speed = 0.5 + (index % 4) as f64 * 0.3;
        let angle = i * (360.0 / count as f64) + frame * speed;
        Self {
            index,
            position: polar(center, orbit_radius, angle),
            orbit_radius,
            size: 1.5 + (index % 3) as f64 * 0.5,
            opacity: 0.5 + 0.3 * (frame * 0.05 + i).sin(),
        }
    }
}

pub fn generate_particles(density: NetworkDensity, frame: u64, center: Point) -> Vec<Particle> {
    let count = particle_count(density);
    (0..count)
        .map(|index| Particle::at(index, count, frame, &center))
        .collect()
}

/// Small-scale version of the core polygon construction
pub fn particle_primitive(system: ParticleSystem, center: &Point, size: f64) -> Primitive {
    match system {
        ParticleSystem::Circle => Primitive::Circle {
            center: *center,
            radius: size,
        },
        ParticleSystem::Square => Primitive::Rect {
            origin: Point::new(center.x - size, center.y - size),
            width: size * 2.0,
            height: size * 2.0,
        },
        ParticleSystem::Triangle => Primitive::Polygon(regular_polygon(center, size * 1.2, 3)),
        ParticleSystem::Diamond => Primitive::Polygon(diamond_points(center, size * 1.2)),
        ParticleSystem::Star => Primitive::Polygon(star_points(center, size * 1.5)),
        ParticleSystem::Hexagon => Primitive::Polygon(regular_polygon(center, size, 6)),
    }
}

/// Background layer of accent-colored particles
pub fn particles_element(system: ParticleSystem, particles: &[Particle], palette: &Palette) -> Result<Element> {
    let mut group = Element::new("g")
        .attr("class", "particles")
        .attr("fill", palette.accent.css());
    for particle in particles {
        let shape = particle_primitive(system, &particle.position, particle.size)
            .to_element()?
            .attr("class", "particle")
            .attr("fill-opacity", fmt_num(particle.opacity)?);
        group = group.child(shape);
    }
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Point {
        Point::new(200.0, 200.0)
    }

    #[test]
    fn test_counts() {
        for d in 1..=5u32 {
            let density = NetworkDensity::new(d).unwrap();
            assert_eq!(generate_particles(density, 0, center()).len(), 8 + 2 * d as usize);
        }
    }

    #[test]
    fn test_orbit_and_size_cycle() {
        let particles = generate_particles(NetworkDensity::new(2).unwrap(), 0, center());
        let radii: Vec<f64> = particles.iter().take(4).map(|p| p.orbit_radius).collect();
        assert_eq!(radii, vec![80.0, 90.0, 100.0, 80.0]);
        let sizes: Vec<f64> = particles.iter().take(3).map(|p| p.size).collect();
        assert_eq!(sizes, vec![1.5, 2.0, 2.5]);
        for p in &particles {
            assert!(((p.position - center()).norm() - p.orbit_radius).abs() < 1e-9);
            assert!(p.opacity >= 0.2 && p.opacity <= 0.8);
        }
    }

    #[test]
    fn test_frame_moves_particles() {
        let density = NetworkDensity::new(1).unwrap();
        let a = generate_particles(density, 0, center());
        let b = generate_particles(density, 30, center());
        assert_ne!(a[0].position, b[0].position);
        assert_eq!(a, generate_particles(density, 0, center()));
    }

    #[test]
    fn test_primitive_per_system() {
        let c = center();
        assert!(matches!(particle_primitive(ParticleSystem::Circle, &c, 2.0), Primitive::Circle { .. }));
        assert!(matches!(particle_primitive(ParticleSystem::Square, &c, 2.0), Primitive::Rect { .. }));
        for (system, n) in [
            (ParticleSystem::Triangle, 3),
            (ParticleSystem::Diamond, 4),
            (ParticleSystem::Star, 10),
            (ParticleSystem::Hexagon, 6),
        ] {
            match particle_primitive(system, &c, 2.0) {
                Primitive::Polygon(pts) => assert_eq!(pts.len(), n),
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
