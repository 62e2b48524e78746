//! Geometry value types.
//!
//! Vectors come straight from `nalgebra`; only the angle and ray types
//! needed by the world snapshot live here.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

pub type Vec2 = nalgebra::Vector2<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;

/// An orientation in radians, normalized to `(-pi, pi]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f32);

impl Angle {
    pub fn from_rad(rad: f32) -> Self {
        let mut wrapped = rad % (2.0 * PI);
        if wrapped > PI {
            wrapped -= 2.0 * PI;
        } else if wrapped <= -PI {
            wrapped += 2.0 * PI;
        }
        Self(wrapped)
    }

    pub fn from_deg(deg: f32) -> Self {
        Self::from_rad(deg.to_radians())
    }

    /// Heading of a vector; a zero vector has heading zero.
    pub fn of(v: &Vec2) -> Self {
        Self::from_rad(v.y.atan2(v.x))
    }

    pub fn rad(self) -> f32 {
        self.0
    }

    pub fn deg(self) -> f32 {
        self.0.to_degrees()
    }

    pub fn unit(self) -> Vec2 {
        Vec2::new(self.0.cos(), self.0.sin())
    }
}

/// Half-line starting at `origin` and pointing along `heading`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub heading: Angle,
}

impl Ray {
    pub fn new(origin: Vec2, heading: Angle) -> Self {
        Self { origin, heading }
    }

    pub fn point_at(&self, distance: f32) -> Vec2 {
        self.origin + self.heading.unit() * distance
    }

    /// Closest point of the ray to `p`; clamps to the origin for points behind it.
    pub fn closest_point(&self, p: &Vec2) -> Vec2 {
        let t = (p - self.origin).dot(&self.heading.unit()).max(0.0);
        self.point_at(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_wraps_into_half_open_range() {
        assert!((Angle::from_deg(270.0).deg() - -90.0).abs() < 1e-3);
        assert!((Angle::from_deg(-300.0).deg() - 60.0).abs() < 1e-3);
        assert!((Angle::from_deg(45.0).deg() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn ray_projects_points() {
        let ray = Ray::new(Vec2::new(0.0, 0.0), Angle::from_deg(0.0));
        let p = ray.closest_point(&Vec2::new(100.0, 50.0));
        assert!((p - Vec2::new(100.0, 0.0)).norm() < 1e-3);

        let behind = ray.closest_point(&Vec2::new(-100.0, 50.0));
        assert!(behind.norm() < 1e-3);
    }
}
