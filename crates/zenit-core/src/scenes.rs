//! The two stock scenes rendered by the pipeline.
//!
//! Both expose the same [`Field`] capability, so the camera, marcher, and
//! shading stages are shared; only the field content differs.

use glam::{Quat, Vec3};

use crate::field::{Field, Sample, Sdf};
use crate::primitives::{Plane, RoundedBox, Sphere};

/// Rounded box blended into a sphere, the result carved to a spherical
/// bound by a smooth intersection. The box spins about +Y with the
/// animation phase.
#[derive(Debug, Clone)]
pub struct BlendScene {
    pub block: RoundedBox,
    pub bulge: Sphere,
    pub bound: Sphere,
    /// Blend width of the box/sphere union
    pub union_k: f32,
    /// Blend width of the bounding intersection
    pub intersect_k: f32,
    pub color: Vec3,
    spin: Quat,
}

impl Default for BlendScene {
    fn default() -> Self {
        Self {
            block: RoundedBox::new(Vec3::ZERO, Vec3::splat(0.9), 0.2),
            bulge: Sphere::new(Vec3::new(0.0, 0.9, 0.0), 0.8),
            bound: Sphere::new(Vec3::ZERO, 1.4),
            union_k: 0.35,
            intersect_k: 0.3,
            color: Vec3::new(0.85, 0.25, 0.2),
            spin: Quat::IDENTITY,
        }
    }
}

impl BlendScene {
    /// Snapshot the animation phase (degrees of box rotation about +Y)
    /// for the coming frame.
    pub fn with_phase(mut self, degrees: f32) -> Self {
        // Points rotate opposite to the shape.
        self.spin = Quat::from_rotation_y(-degrees.to_radians());
        self
    }
}

impl Field for BlendScene {
    fn sample(&self, p: Vec3) -> Sample {
        let local = self.block.center + self.spin * (p - self.block.center);
        let block = Sample::new(self.block.distance(local), self.color);
        let bulge = Sample::new(self.bulge.distance(p), self.color);
        let bound = Sample::new(self.bound.distance(p), self.color);

        block
            .smooth_union(bulge, self.union_k)
            .smooth_intersect(bound, self.intersect_k)
    }
}

/// Ring of palette-colored spheres resting on a ground plane.
///
/// The ring carries one sphere per palette entry; the animation phase
/// rotates the arrangement, so colors stay glued to their spheres while the
/// ring spins.
#[derive(Debug, Clone)]
pub struct OrbitScene {
    pub ring_radius: f32,
    pub sphere_radius: f32,
    /// Angular step between consecutive spheres, degrees
    pub step_deg: f32,
    /// Blend width of the chained sphere union
    pub smooth: f32,
    pub palette: [Vec3; 8],
    /// Palette multiplier, clamped to [0, 4] at evaluation
    pub color_intensity: f32,
    pub ground_color: Vec3,
    ground: Plane,
    centers: [Vec3; 8],
}

impl Default for OrbitScene {
    fn default() -> Self {
        let scene = Self {
            ring_radius: 2.0,
            sphere_radius: 0.45,
            step_deg: 45.0,
            smooth: 0.25,
            palette: [
                Vec3::new(0.95, 0.35, 0.20),
                Vec3::new(0.95, 0.60, 0.20),
                Vec3::new(0.90, 0.85, 0.30),
                Vec3::new(0.45, 0.85, 0.40),
                Vec3::new(0.25, 0.75, 0.75),
                Vec3::new(0.25, 0.50, 0.90),
                Vec3::new(0.45, 0.30, 0.85),
                Vec3::new(0.80, 0.30, 0.70),
            ],
            color_intensity: 1.0,
            ground_color: Vec3::new(0.88, 0.88, 0.85),
            ground: Plane::ground(),
            centers: [Vec3::ZERO; 8],
        };
        scene.with_phase(0.0)
    }
}

impl OrbitScene {
    /// Snapshot the animation phase (degrees of ring rotation) for the
    /// coming frame. Sphere centers are fixed here so per-sample evaluation
    /// stays trigonometry-free.
    pub fn with_phase(mut self, degrees: f32) -> Self {
        for (i, center) in self.centers.iter_mut().enumerate() {
            let angle = (degrees + self.step_deg * i as f32).to_radians();
            *center = Vec3::new(
                angle.cos() * self.ring_radius,
                self.sphere_radius,
                angle.sin() * self.ring_radius,
            );
        }
        self
    }

    fn sphere_sample(&self, p: Vec3, index: usize, intensity: f32) -> Sample {
        let sphere = Sphere::new(self.centers[index], self.sphere_radius);
        Sample::new(sphere.distance(p), self.palette[index] * intensity)
    }
}

impl Field for OrbitScene {
    fn sample(&self, p: Vec3) -> Sample {
        let intensity = self.color_intensity.clamp(0.0, 4.0);

        let mut spheres = self.sphere_sample(p, 0, intensity);
        for i in 1..self.centers.len() {
            spheres = spheres.smooth_union(self.sphere_sample(p, i, intensity), self.smooth);
        }

        let ground = Sample::new(self.ground.distance(p), self.ground_color);
        spheres.union(ground)
    }
}
