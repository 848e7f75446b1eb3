//! Field evaluation traits and the distance/color sample they produce.
//!
//! Negative distances are inside, positive distances are outside, zero is
//! exactly on the surface. For sphere tracing to converge the distance must
//! never overestimate the true distance to the nearest surface; the smooth
//! operators in [`crate::ops`] can locally exceed that bound inside blend
//! regions, which is an accepted approximation.

use glam::Vec3;

/// A shape that can report its signed distance from a point.
pub trait Sdf: Send + Sync {
    /// Signed distance from `p` to the surface (negative inside).
    fn distance(&self, p: Vec3) -> f32;
}

/// A distance estimate paired with the color of the surface that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub distance: f32,
    pub color: Vec3,
}

impl Sample {
    pub fn new(distance: f32, color: Vec3) -> Self {
        Self { distance, color }
    }
}

/// A complete scene: distance plus surface color at any world-space point.
///
/// The marcher consumes only the distance; the shading stage reads the color
/// once a ray has converged onto a surface.
pub trait Field: Send + Sync {
    fn sample(&self, p: Vec3) -> Sample;

    /// Distance-only evaluation, used by the primary march and by the
    /// secondary shadow and occlusion marches.
    fn distance(&self, p: Vec3) -> f32 {
        self.sample(p).distance
    }
}
