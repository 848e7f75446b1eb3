//! SDF primitive shapes.
//!
//! Unlike mesh-oriented SDF libraries these primitives carry their world
//! placement inline, mirroring the uniform-driven scene description the
//! renderer is fed each frame.

use glam::Vec3;

use crate::field::Sdf;

/// Sphere with an explicit world-space center
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Sdf for Sphere {
    fn distance(&self, p: Vec3) -> f32 {
        (p - self.center).length() - self.radius
    }
}

/// Axis-aligned box with rounded edges; `radius = 0` gives a sharp box
#[derive(Debug, Clone, Copy)]
pub struct RoundedBox {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub radius: f32,
}

impl RoundedBox {
    pub fn new(center: Vec3, half_extents: Vec3, radius: f32) -> Self {
        Self {
            center,
            half_extents,
            radius,
        }
    }
}

impl Sdf for RoundedBox {
    fn distance(&self, p: Vec3) -> f32 {
        let q = (p - self.center).abs() - self.half_extents;
        q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0) - self.radius
    }
}

/// Infinite plane; `offset` shifts it along the normal
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self {
            normal: normal.try_normalize().unwrap_or(Vec3::Y),
            offset,
        }
    }

    /// Ground plane through the origin (Y = 0)
    pub fn ground() -> Self {
        Self::new(Vec3::Y, 0.0)
    }
}

impl Sdf for Plane {
    fn distance(&self, p: Vec3) -> f32 {
        p.dot(self.normal) + self.offset
    }
}
