//! Surface shading: normals, direct lighting, soft shadows, ambient
//! occlusion, and reflection bounces.
//!
//! Shadow and occlusion are secondary marches through the same field the
//! primary ray converged on; both restart with a normal-offset bias so they
//! do not immediately re-hit the surface that spawned them.

use glam::Vec3;
use zenit_core::field::Field;

use crate::camera::Ray;
use crate::frame::{FrameParams, ShadingParams};
use crate::march::{self, MarchResult, MarchSettings};

const NORMAL_EPSILON: f32 = 1e-3;

/// Shade one primary ray: march it, light the hit, or fall through to the
/// sky on a miss.
pub fn pixel(field: &dyn Field, ray: &Ray, frame: &FrameParams) -> Vec3 {
    match march::march(field, ray, &frame.march) {
        MarchResult::Hit { point, .. } => {
            shade_hit(field, ray, point, frame, frame.shading.reflection_bounces)
        }
        MarchResult::Miss { .. } => frame.environment.sky(ray.direction),
    }
}

fn shade_hit(
    field: &dyn Field,
    ray: &Ray,
    point: Vec3,
    frame: &FrameParams,
    bounces: u32,
) -> Vec3 {
    let normal = estimate_normal(field, point);
    let albedo = field.sample(point).color;
    let light = frame.light;
    let bias = frame.march.surface_bias();

    let lambert = normal.dot(-light.direction).max(0.0);
    let occlusion = soft_shadow(
        field,
        point + normal * bias,
        -light.direction,
        &frame.shading,
        &frame.march,
    );
    let shadow = (occlusion * 0.5 + 0.5).powf(frame.shading.shadow_intensity);
    let ao = ambient_occlusion(field, point, normal, &frame.shading);

    let direct = light.color * light.intensity * lambert * shadow;
    let ambient = frame.environment.ambient_color * frame.environment.ambient_intensity;
    let mut color = albedo * (direct + ambient * ao);

    if bounces > 0 {
        let bounce_ray = Ray::new(point + normal * bias, reflect(ray.direction, normal));
        match march::march(field, &bounce_ray, &frame.march) {
            MarchResult::Hit { point: hit, .. } => {
                let reflected = shade_hit(field, &bounce_ray, hit, frame, bounces - 1);
                color = color.lerp(reflected, frame.shading.reflection_intensity);
            }
            MarchResult::Miss { .. } => {
                let sky = frame.environment.sky(bounce_ray.direction);
                let weight = frame.shading.reflection_intensity * frame.shading.env_intensity;
                color = color.lerp(sky, weight);
            }
        }
    }

    color
}

/// Central-difference gradient of the field, normalized.
pub fn estimate_normal(field: &dyn Field, p: Vec3) -> Vec3 {
    let e = NORMAL_EPSILON;
    let gradient = Vec3::new(
        field.distance(p + Vec3::new(e, 0.0, 0.0)) - field.distance(p - Vec3::new(e, 0.0, 0.0)),
        field.distance(p + Vec3::new(0.0, e, 0.0)) - field.distance(p - Vec3::new(0.0, e, 0.0)),
        field.distance(p + Vec3::new(0.0, 0.0, e)) - field.distance(p - Vec3::new(0.0, 0.0, e)),
    );
    gradient.try_normalize().unwrap_or(Vec3::Y)
}

/// Penumbra march toward the light.
///
/// Returns 1 when the interval to `shadow_far` is clear, 0 when an occluder
/// is hit outright, and the running minimum of `h / (penumbra * t)` in
/// between, which widens into a soft edge as the ray passes close to
/// geometry.
pub fn soft_shadow(
    field: &dyn Field,
    origin: Vec3,
    direction: Vec3,
    shading: &ShadingParams,
    march: &MarchSettings,
) -> f32 {
    let mut attenuation = 1.0_f32;
    let mut t = shading.shadow_near;

    for _ in 0..march.max_steps {
        if t >= shading.shadow_far {
            break;
        }

        let h = field.distance(origin + direction * t);
        if h < march.accuracy {
            return 0.0;
        }

        attenuation = attenuation.min((h / (shading.shadow_penumbra * t)).clamp(0.0, 1.0));
        t += h.max(march.accuracy);
    }

    attenuation
}

/// Stepped normal-offset occlusion estimate.
///
/// In open space the field distance equals the sample offset and the sum
/// vanishes; nearby geometry shrinks the samples and darkens the result.
pub fn ambient_occlusion(
    field: &dyn Field,
    point: Vec3,
    normal: Vec3,
    shading: &ShadingParams,
) -> f32 {
    let mut sum = 0.0;
    let mut weight = 0.5;
    for i in 1..=shading.ao_samples {
        let offset = shading.ao_step * i as f32;
        let d = field.distance(point + normal * offset);
        sum += (offset - d) * weight;
        weight *= 0.5;
    }

    (1.0 - shading.ao_intensity * sum).clamp(0.0, 1.0)
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}
