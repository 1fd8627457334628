//! Shared vertex math for every generator
//!
//! Angles are in degrees unless a name says otherwise; 0° points right and
//! -90° points up, matching the SVG y-down coordinate system.

use nalgebra::{Point2, Rotation2, Vector2};

pub type Point = Point2<f64>;

/// Point at `radius` from `center` along `angle_deg`
pub fn polar(center: &Point, radius: f64, angle_deg: f64) -> Point {
    polar_rad(center, radius, angle_deg.to_radians())
}

pub fn polar_rad(center: &Point, radius: f64, angle_rad: f64) -> Point {
    center + unit(angle_rad) * radius
}

/// Unit vector for an angle in radians
pub fn unit(angle_rad: f64) -> Vector2<f64> {
    Rotation2::new(angle_rad) * Vector2::x()
}

/// Unit normal (90° counter-clockwise in math terms) of the direction `angle_rad`
pub fn normal(angle_rad: f64) -> Vector2<f64> {
    unit(angle_rad + std::f64::consts::FRAC_PI_2)
}

/// Regular `sides`-gon with vertex k at `k * 360/sides - 90` degrees
pub fn regular_polygon(center: &Point, radius: f64, sides: usize) -> Vec<Point> {
    let step = 360.0 / sides as f64;
    (0..sides)
        .map(|k| polar(center, radius, k as f64 * step - 90.0))
        .collect()
}

/// Ten-point star alternating `outer` and `outer * 0.4` at 36° steps
pub fn star_points(center: &Point, outer: f64) -> Vec<Point> {
    let inner = outer * 0.4;
    (0..10)
        .map(|k| {
            let r = if k % 2 == 0 { outer } else { inner };
            polar(center, r, k as f64 * 36.0 - 90.0)
        })
        .collect()
}

/// Square rotated 45°: top, right, bottom, left
pub fn diamond_points(center: &Point, radius: f64) -> Vec<Point> {
    vec![
        Point::new(center.x, center.y - radius),
        Point::new(center.x + radius, center.y),
        Point::new(center.x, center.y + radius),
        Point::new(center.x - radius, center.y),
    ]
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
