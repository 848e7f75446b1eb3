//! Per-frame parameter snapshots.
//!
//! Everything the per-pixel pipeline reads is gathered into [`FrameParams`]
//! before a frame starts and passed by reference; there is no shared mutable
//! state for pixels to observe mid-frame.

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::environment::{Environment, Light};
use crate::error::Result;
use crate::march::MarchSettings;

/// Shadow, ambient-occlusion, and reflection controls.
///
/// All values are clamped to their documented ranges by [`Self::clamped`];
/// out-of-range input degrades the image, never the frame.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ShadingParams {
    /// Exponent applied to the remapped soft-shadow factor; 0 disables
    /// shadowing entirely
    pub shadow_intensity: f32,
    /// Start of the shadow search interval along the light ray
    pub shadow_near: f32,
    /// End of the shadow search interval
    pub shadow_far: f32,
    /// Penumbra width factor; larger values soften shadow edges
    pub shadow_penumbra: f32,
    /// Normal-offset spacing between occlusion samples
    pub ao_step: f32,
    /// Occlusion darkening strength, [0, 1]
    pub ao_intensity: f32,
    /// Occlusion sample count, [1, 10]
    pub ao_samples: u32,
    /// Reflection bounce budget; 0 disables reflections
    pub reflection_bounces: u32,
    /// Blend weight of reflected scene color, [0, 1]
    pub reflection_intensity: f32,
    /// Blend weight of the environment sample when a reflection ray
    /// escapes, [0, 1]
    pub env_intensity: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            shadow_intensity: 1.0,
            shadow_near: 0.05,
            shadow_far: 40.0,
            shadow_penumbra: 0.08,
            ao_step: 0.1,
            ao_intensity: 0.25,
            ao_samples: 5,
            reflection_bounces: 0,
            reflection_intensity: 0.4,
            env_intensity: 0.5,
        }
    }
}

impl ShadingParams {
    pub fn clamped(self) -> Self {
        Self {
            shadow_intensity: self.shadow_intensity.max(0.0),
            shadow_near: self.shadow_near.max(0.0),
            shadow_far: self.shadow_far.max(self.shadow_near),
            shadow_penumbra: self.shadow_penumbra.max(1e-4),
            ao_step: self.ao_step.clamp(1e-4, 1.0),
            ao_intensity: self.ao_intensity.clamp(0.0, 1.0),
            ao_samples: self.ao_samples.clamp(1, 10),
            reflection_bounces: self.reflection_bounces.min(8),
            reflection_intensity: self.reflection_intensity.clamp(0.0, 1.0),
            env_intensity: self.env_intensity.clamp(0.0, 1.0),
        }
    }
}

/// Immutable snapshot consumed by every pixel of one frame.
///
/// Constructed fresh each frame by whatever loop owns frame timing; the
/// renderer never assumes a cadence beyond "parameters are frozen at call
/// time".
#[derive(Debug, Clone)]
pub struct FrameParams {
    pub light: Light,
    pub shading: ShadingParams,
    pub march: MarchSettings,
    pub environment: Environment,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            light: Light::default(),
            shading: ShadingParams::default(),
            march: MarchSettings::default(),
            environment: Environment::default(),
        }
    }
}

impl FrameParams {
    /// Build a snapshot from a deserialized config, clamping everything to
    /// usable ranges.
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            light: Light::new(
                Vec3::from_array(config.light_direction),
                Vec3::from_array(config.light_color),
                config.light_intensity,
            ),
            shading: config.shading.clamped(),
            march: config.march.clamped(),
            environment: Environment::default(),
        }
    }
}

/// Wall-clock-driven animation state; a single writer advances it once per
/// frame, every pixel reads the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    /// Degrees per second of elapsed time
    pub rate: f32,
}

impl Default for Animation {
    fn default() -> Self {
        Self { rate: 45.0 }
    }
}

impl Animation {
    pub fn phase_at(&self, elapsed_secs: f32) -> f32 {
        self.rate * elapsed_secs
    }
}

/// JSON-facing frame configuration; every field is optional with defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub light_direction: [f32; 3],
    pub light_color: [f32; 3],
    pub light_intensity: f32,
    pub shading: ShadingParams,
    pub march: MarchSettings,
}

impl Default for FrameConfig {
    fn default() -> Self {
        let light = Light::default();
        Self {
            light_direction: light.direction.to_array(),
            light_color: light.color.to_array(),
            light_intensity: light.intensity,
            shading: ShadingParams::default(),
            march: MarchSettings::default(),
        }
    }
}

impl FrameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping_pins_documented_ranges() {
        let params = ShadingParams {
            ao_intensity: 3.0,
            ao_samples: 50,
            reflection_intensity: -1.0,
            shadow_far: 0.0,
            shadow_near: 1.0,
            ..ShadingParams::default()
        }
        .clamped();

        assert_eq!(params.ao_intensity, 1.0);
        assert_eq!(params.ao_samples, 10);
        assert_eq!(params.reflection_intensity, 0.0);
        assert!(params.shadow_far >= params.shadow_near);
    }

    #[test]
    fn animation_phase_scales_with_elapsed_time() {
        let anim = Animation::default();

        assert_eq!(anim.phase_at(0.0), 0.0);
        assert_eq!(anim.phase_at(2.0), 90.0);
    }

    #[test]
    fn config_parses_partial_json() {
        let config: FrameConfig =
            serde_json::from_str(r#"{"light_intensity": 2.5, "shading": {"ao_samples": 3}}"#)
                .unwrap();

        assert_eq!(config.light_intensity, 2.5);
        assert_eq!(config.shading.ao_samples, 3);
        // Unspecified fields keep their defaults.
        assert_eq!(config.march.max_steps, MarchSettings::default().max_steps);
    }

    #[test]
    fn frame_params_normalize_config_light() {
        let config = FrameConfig {
            light_direction: [0.0, -9.0, 0.0],
            ..FrameConfig::default()
        };

        let params = FrameParams::from_config(&config);
        assert!((params.light.direction.length() - 1.0).abs() < 1e-6);
    }
}
