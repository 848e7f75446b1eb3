//! Lighting environment: directional sun, ambient term, sky gradient, and
//! the gradient-derived sphere palette.
//!
//! The sky gradient doubles as the background for primary misses and as the
//! environment sample for reflection rays that escape the scene.

use glam::Vec3;

use crate::error::{Error, Result};

/// Directional light, read-only per frame
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Direction the light travels (normalized on construction)
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    /// A zero-length direction falls back to straight down rather than
    /// poisoning every dot product with NaN.
    pub fn new(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Y),
            color,
            intensity: intensity.max(0.0),
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(
            Vec3::new(-0.5, -0.8, 0.4),
            Vec3::new(1.0, 0.96, 0.88),
            1.0,
        )
    }
}

/// Piecewise-linear color ramp over [0, 1]
#[derive(Debug, Clone)]
pub struct Gradient {
    /// Stops sorted by position
    stops: Vec<(f32, Vec3)>,
}

impl Gradient {
    pub fn new(mut stops: Vec<(f32, Vec3)>) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::InvalidParameter(
                "gradient needs at least one stop".into(),
            ));
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { stops })
    }

    /// Sample the ramp at `t`, clamping beyond the end stops.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let span = (t1 - t0).max(f32::EPSILON);
                return c0.lerp(c1, (t - t0) / span);
            }
        }
        last.1
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            stops: vec![
                (0.0, Vec3::new(0.95, 0.35, 0.20)),
                (0.35, Vec3::new(0.90, 0.85, 0.30)),
                (0.7, Vec3::new(0.25, 0.55, 0.90)),
                (1.0, Vec3::new(0.80, 0.30, 0.70)),
            ],
        }
    }
}

/// Ambient and background terms shared by every pixel of a frame
#[derive(Debug, Clone)]
pub struct Environment {
    pub ambient_color: Vec3,
    pub ambient_intensity: f32,
    /// Sky color at the horizon
    pub sky_horizon: Vec3,
    /// Sky color straight up
    pub sky_zenith: Vec3,
    /// Ramp the sphere palette is sampled from
    pub sphere_gradient: Gradient,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::new(0.16, 0.18, 0.22),
            ambient_intensity: 1.0,
            sky_horizon: Vec3::new(0.72, 0.80, 0.90),
            sky_zenith: Vec3::new(0.25, 0.45, 0.78),
            sphere_gradient: Gradient::default(),
        }
    }
}

impl Environment {
    /// Background/environment sample for a direction; stands in for the
    /// cubemap the renderer would be handed on a GPU host.
    pub fn sky(&self, direction: Vec3) -> Vec3 {
        let unit = direction.try_normalize().unwrap_or(Vec3::Y);
        let t = 0.5 * (unit.y + 1.0);
        self.sky_horizon.lerp(self.sky_zenith, t)
    }

    /// Eight palette entries sampled from the gradient at i/8.
    pub fn sphere_palette(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| self.sphere_gradient.evaluate(i as f32 * 0.125))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn light_direction_is_normalized_defensively() {
        let light = Light::new(Vec3::new(0.0, -3.0, 0.0), Vec3::ONE, 1.0);
        assert_relative_eq!(light.direction.length(), 1.0, epsilon = 1e-6);

        let degenerate = Light::new(Vec3::ZERO, Vec3::ONE, 1.0);
        assert_relative_eq!(degenerate.direction.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn gradient_interpolates_between_stops() {
        let g = Gradient::new(vec![(0.0, Vec3::ZERO), (1.0, Vec3::ONE)]).unwrap();

        assert_relative_eq!(g.evaluate(0.5).x, 0.5, epsilon = 1e-6);
        assert_eq!(g.evaluate(-1.0), Vec3::ZERO);
        assert_eq!(g.evaluate(2.0), Vec3::ONE);
    }

    #[test]
    fn gradient_rejects_empty_stops() {
        assert!(Gradient::new(Vec::new()).is_err());
    }

    #[test]
    fn palette_samples_at_eighths() {
        let env = Environment {
            sphere_gradient: Gradient::new(vec![(0.0, Vec3::ZERO), (1.0, Vec3::ONE)]).unwrap(),
            ..Environment::default()
        };

        let palette = env.sphere_palette();
        assert_relative_eq!(palette[0].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(palette[4].x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(palette[7].x, 0.875, epsilon = 1e-6);
    }

    #[test]
    fn sky_blends_from_horizon_to_zenith() {
        let env = Environment::default();

        assert_eq!(env.sky(Vec3::Y), env.sky_zenith);
        let horizon = env.sky(Vec3::X);
        assert_relative_eq!(
            horizon.x,
            env.sky_horizon.lerp(env.sky_zenith, 0.5).x,
            epsilon = 1e-6
        );
    }
}
