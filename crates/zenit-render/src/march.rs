//! Sphere tracing: advance a ray by the field's own distance estimate until
//! it converges on a surface or escapes.

use glam::Vec3;
use serde::Deserialize;
use zenit_core::field::Field;

use crate::camera::Ray;

/// Convergence and budget limits for one march.
///
/// Smaller `accuracy` trades speed for precision. The same settings type
/// drives the primary march and the shorter shadow/reflection sub-marches.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct MarchSettings {
    /// Hit threshold: the march converges once the field distance drops
    /// below this value
    pub accuracy: f32,
    /// Iteration cap; exhausting it is a normal Miss, not an error
    pub max_steps: u32,
    /// Escape distance along the ray
    pub max_distance: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            accuracy: 0.005,
            max_steps: 256,
            max_distance: 200.0,
        }
    }
}

impl MarchSettings {
    /// Clamp to usable ranges; a zero or negative accuracy would stall the
    /// march in place.
    pub fn clamped(self) -> Self {
        Self {
            accuracy: self.accuracy.clamp(1e-5, 0.1),
            max_steps: self.max_steps.max(1),
            max_distance: self.max_distance.max(0.0),
        }
    }

    /// Restart offset for secondary marches, a few thresholds along the
    /// surface normal. Keeps shadow and reflection rays from immediately
    /// re-hitting the surface they started on.
    pub fn surface_bias(&self) -> f32 {
        self.accuracy * 4.0
    }
}

/// Why a march ended without finding a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// Travelled past the configured max distance
    OutOfRange,
    /// Ran out of iterations
    StepBudget,
}

/// Outcome of a march; both variants are normal terminations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarchResult {
    Hit {
        point: Vec3,
        /// Distance travelled along the ray
        distance: f32,
        steps: u32,
    },
    Miss {
        reason: MissReason,
    },
}

impl MarchResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, MarchResult::Hit { .. })
    }
}

/// March `ray` through `field`.
///
/// Each step evaluates the field once and advances by the returned
/// distance, which by the SDF contract can never overshoot a surface.
pub fn march(field: &dyn Field, ray: &Ray, settings: &MarchSettings) -> MarchResult {
    let mut t = 0.0_f32;
    for steps in 0..settings.max_steps {
        if t > settings.max_distance {
            return MarchResult::Miss {
                reason: MissReason::OutOfRange,
            };
        }

        let point = ray.at(t);
        let d = field.distance(point);
        if d < settings.accuracy {
            return MarchResult::Hit {
                point,
                distance: t,
                steps,
            };
        }

        t += d;
    }

    MarchResult::Miss {
        reason: MissReason::StepBudget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use zenit_core::field::Sample;
    use zenit_core::primitives::Sphere;

    struct SphereField(Sphere);

    impl Field for SphereField {
        fn sample(&self, p: Vec3) -> Sample {
            Sample::new(zenit_core::field::Sdf::distance(&self.0, p), Vec3::ONE)
        }
    }

    fn unit_sphere() -> SphereField {
        SphereField(Sphere::new(Vec3::ZERO, 1.0))
    }

    #[test]
    fn direct_hit_converges_to_surface_distance() {
        let field = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let settings = MarchSettings {
            accuracy: 0.001,
            ..MarchSettings::default()
        };

        match march(&field, &ray, &settings) {
            MarchResult::Hit { distance, .. } => {
                // Origin is 5 from the center, radius 1: the surface is at t = 4.
                assert_relative_eq!(distance, 4.0, epsilon = 0.01);
            }
            MarchResult::Miss { reason } => panic!("expected hit, got miss: {reason:?}"),
        }
    }

    #[test]
    fn ray_pointing_away_escapes_before_the_step_budget() {
        let field = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
        let settings = MarchSettings {
            max_distance: 50.0,
            ..MarchSettings::default()
        };

        match march(&field, &ray, &settings) {
            MarchResult::Miss { reason } => assert_eq!(reason, MissReason::OutOfRange),
            MarchResult::Hit { .. } => panic!("expected miss"),
        }
    }

    #[test]
    fn grazing_ray_exhausts_the_step_budget() {
        // Passing exactly at the surface keeps distances near zero without
        // ever crossing the hit threshold.
        let field = unit_sphere();
        let ray = Ray::new(Vec3::new(-5.0, 1.0 + 1e-4, 0.0), Vec3::X);
        let settings = MarchSettings {
            accuracy: 1e-5,
            max_steps: 64,
            max_distance: 1e9,
        };

        match march(&field, &ray, &settings) {
            MarchResult::Miss { reason } => assert_eq!(reason, MissReason::StepBudget),
            MarchResult::Hit { .. } => panic!("expected miss"),
        }
    }

    #[test]
    fn hit_point_lies_on_the_ray() {
        let field = unit_sphere();
        let ray = Ray::new(Vec3::new(0.3, 0.1, -4.0), Vec3::Z);

        if let MarchResult::Hit {
            point, distance, ..
        } = march(&field, &ray, &MarchSettings::default())
        {
            let expected = ray.at(distance);
            assert_relative_eq!((point - expected).length(), 0.0, epsilon = 1e-6);
        } else {
            panic!("expected hit");
        }
    }

    #[test]
    fn settings_clamp_rejects_degenerate_accuracy() {
        let clamped = MarchSettings {
            accuracy: -1.0,
            max_steps: 0,
            max_distance: -5.0,
        }
        .clamped();

        assert!(clamped.accuracy > 0.0);
        assert!(clamped.max_steps >= 1);
        assert!(clamped.max_distance >= 0.0);
    }
}
