//! # Zenit Render
//!
//! CPU raymarching renderer for [`zenit_core`] fields.
//!
//! The pipeline per pixel: the [`camera`] builds a world-space ray from the
//! view-frustum basis, [`march`] sphere-traces it through the field,
//! [`shade`] lights the hit (soft shadows, ambient occlusion, optional
//! reflection bounces) or falls through to the sky. [`renderer::render`] runs
//! that pipeline over every pixel of a frame, scanlines in parallel.
//!
//! ```rust
//! use zenit_core::prelude::*;
//! use zenit_render::{render, Camera, FrameParams};
//!
//! let scene = OrbitScene::default().with_phase(0.0);
//! let frame = FrameParams::default();
//! let camera = Camera::look_at(Vec3::new(0.0, 3.0, -6.0), Vec3::ZERO);
//! let buffer = render(&scene, &frame, &camera, 64, 36);
//! assert_eq!(buffer.width(), 64);
//! ```

pub mod camera;
pub mod environment;
pub mod frame;
pub mod march;
pub mod renderer;
pub mod shade;

mod error;

pub use camera::{Camera, Ray, RayGenerator};
pub use environment::{Environment, Gradient, Light};
pub use error::{Error, Result};
pub use frame::{Animation, FrameConfig, FrameParams, ShadingParams};
pub use march::{MarchResult, MarchSettings, MissReason};
pub use renderer::{PixelBuffer, render};
