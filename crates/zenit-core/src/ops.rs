//! Boolean composition of distance fields.
//!
//! The smooth operators use polynomial blending; `k` is the width of the
//! blend region, and `k <= 0` degrades to the hard operator.

use crate::field::Sample;

/// Hard union: the nearer surface wins.
pub fn union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Smooth union with blend width `k`. Converges to `min(d1, d2)` as `k`
/// approaches zero.
pub fn smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_union_parts(d1, d2, k).0
}

/// Smooth intersection, the symmetric counterpart of [`smooth_union`].
/// Converges to `max(d1, d2)` as `k` approaches zero.
pub fn smooth_intersect(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_intersect_parts(d1, d2, k).0
}

// Both parts functions return (distance, h) where h is the interpolation
// weight of d1; the scene evaluator reuses h to blend surface colors.

fn smooth_union_parts(d1: f32, d2: f32, k: f32) -> (f32, f32) {
    if k <= f32::EPSILON {
        return if d1 < d2 { (d1, 1.0) } else { (d2, 0.0) };
    }
    let h = (0.5 + 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    (lerp(d2, d1, h) - k * h * (1.0 - h), h)
}

fn smooth_intersect_parts(d1: f32, d2: f32, k: f32) -> (f32, f32) {
    if k <= f32::EPSILON {
        return if d1 > d2 { (d1, 1.0) } else { (d2, 0.0) };
    }
    let h = (0.5 - 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    (lerp(d2, d1, h) + k * h * (1.0 - h), h)
}

impl Sample {
    /// Hard union of two samples; color follows the nearer surface.
    pub fn union(self, other: Sample) -> Sample {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }

    /// Smooth union; color blends with the same weight as the distance.
    pub fn smooth_union(self, other: Sample, k: f32) -> Sample {
        let (distance, h) = smooth_union_parts(self.distance, other.distance, k);
        Sample::new(distance, other.color.lerp(self.color, h))
    }

    /// Smooth intersection; color blends with the same weight as the distance.
    pub fn smooth_intersect(self, other: Sample, k: f32) -> Sample {
        let (distance, h) = smooth_intersect_parts(self.distance, other.distance, k);
        Sample::new(distance, other.color.lerp(self.color, h))
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    fn smooth_union_converges_to_min() {
        let pairs = [(0.4, 1.2), (-0.3, 0.7), (2.0, 2.0), (1.5, -2.5)];

        for (d1, d2) in pairs {
            assert_relative_eq!(
                smooth_union(d1, d2, 1e-4),
                d1.min(d2),
                epsilon = 1e-3,
                max_relative = 1e-3
            );
        }
    }

    #[test]
    fn smooth_union_is_symmetric() {
        let pairs = [(0.4, 1.2), (-0.3, 0.7), (0.05, -0.05)];

        for (d1, d2) in pairs {
            assert_relative_eq!(
                smooth_union(d1, d2, 0.5),
                smooth_union(d2, d1, 0.5),
                epsilon = 1e-6
            );
            assert_relative_eq!(
                smooth_intersect(d1, d2, 0.5),
                smooth_intersect(d2, d1, 0.5),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn smooth_union_dips_below_min_in_blend_region() {
        // Near-equal distances sit inside the blend region, where the smooth
        // surface bulges outward (smaller distance than the hard union).
        let d = smooth_union(0.5, 0.55, 0.4);
        assert!(d < 0.5);
    }

    #[test]
    fn smooth_intersect_converges_to_max() {
        let pairs = [(0.4, 1.2), (-0.3, 0.7), (1.5, -2.5)];

        for (d1, d2) in pairs {
            assert_relative_eq!(
                smooth_intersect(d1, d2, 1e-4),
                d1.max(d2),
                epsilon = 1e-3,
                max_relative = 1e-3
            );
        }
    }

    #[test]
    fn zero_k_is_the_hard_operator() {
        assert_relative_eq!(smooth_union(0.3, 0.8, 0.0), 0.3);
        assert_relative_eq!(smooth_intersect(0.3, 0.8, 0.0), 0.8);
    }

    #[test]
    fn union_color_follows_nearer_surface() {
        let red = Sample::new(1.0, Vec3::X);
        let blue = Sample::new(0.2, Vec3::Z);

        let merged = red.union(blue);
        assert_relative_eq!(merged.distance, 0.2);
        assert_eq!(merged.color, Vec3::Z);
    }

    #[test]
    fn smooth_union_color_tracks_dominant_distance() {
        let red = Sample::new(0.1, Vec3::X);
        let blue = Sample::new(5.0, Vec3::Z);

        // Far from the blend region the nearer surface owns the color.
        let merged = red.smooth_union(blue, 0.3);
        assert!((merged.color - Vec3::X).length() < 1e-3);
    }
}
