//! Camera state and per-pixel ray generation.

use glam::{Mat4, Vec3};

/// A world-space ray with unit direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized here so the marcher can treat `t` as world
    /// distance; a degenerate direction falls back to -Z.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A look-at camera; refreshed every frame from live inputs
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera is looking at
    pub target: Vec3,
    /// Up vector (usually Y-up)
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Far limit for the primary march
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, -5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_deg: 60.0,
            aspect: 16.0 / 9.0,
            far: 200.0,
        }
    }
}

impl Camera {
    /// Create a camera looking at a target from a position
    pub fn look_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Default::default()
        }
    }

    /// Camera-to-world transform (inverse of the view matrix)
    pub fn cam_to_world(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up).inverse()
    }

    /// Build the per-frame ray generator: the four view-frustum corner
    /// directions, transformed into world space once, then bilinearly
    /// interpolated per pixel.
    pub fn rays(&self) -> RayGenerator {
        let fov_scale = (self.fov_deg * 0.5).to_radians().tan();
        let right = Vec3::X * fov_scale * self.aspect;
        let up = Vec3::Y * fov_scale;

        // Camera space looks down -Z; corners ordered BL, BR, TR, TL.
        let corners = [
            -Vec3::Z - right - up,
            -Vec3::Z + right - up,
            -Vec3::Z + right + up,
            -Vec3::Z - right + up,
        ];

        let cam_to_world = self.cam_to_world();
        RayGenerator {
            origin: cam_to_world.w_axis.truncate(),
            corners: corners.map(|c| cam_to_world.transform_vector3(c)),
        }
    }
}

/// Frustum basis snapshot for one frame.
///
/// Interpolating the world-space corners is equivalent to interpolating in
/// camera space and transforming afterwards, since the transform is linear
/// on directions.
#[derive(Debug, Clone, Copy)]
pub struct RayGenerator {
    origin: Vec3,
    /// World-space corner directions: BL, BR, TR, TL
    corners: [Vec3; 4],
}

impl RayGenerator {
    /// Ray through normalized screen coordinates (u, v) in [0, 1]²,
    /// u rightward, v upward.
    pub fn ray(&self, u: f32, v: f32) -> Ray {
        let [bl, br, tr, tl] = self.corners;
        let bottom = bl.lerp(br, u);
        let top = tl.lerp(tr, u);
        Ray::new(self.origin, bottom.lerp(top, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO);
        let ray = camera.rays().ray(0.5, 0.5);

        assert_relative_eq!(ray.origin.z, -5.0, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn corner_rays_spread_by_fov() {
        let mut camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z);
        camera.fov_deg = 90.0;
        camera.aspect = 1.0;
        let rays = camera.rays();

        // tan(45°) = 1, so the top-right corner direction is (1, 1, -1).
        let tr = rays.ray(1.0, 1.0).direction;
        let expected = Vec3::new(1.0, 1.0, -1.0).normalize();
        assert_relative_eq!(tr.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(tr.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(tr.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn interpolation_is_consistent_with_corners() {
        let camera = Camera::default();
        let rays = camera.rays();

        let mid_bottom = rays.ray(0.5, 0.0).direction;
        let bl = rays.ray(0.0, 0.0).direction;
        let br = rays.ray(1.0, 0.0).direction;

        // Midpoint of the bottom edge lies in the plane of its corners.
        let expected = (bl + br).normalize();
        assert_relative_eq!(mid_bottom.dot(expected), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn ray_directions_are_unit_length() {
        let camera = Camera::default();
        let rays = camera.rays();

        for (u, v) in [(0.0, 0.0), (0.25, 0.75), (1.0, 0.5)] {
            assert_relative_eq!(rays.ray(u, v).direction.length(), 1.0, epsilon = 1e-5);
        }
    }
}
