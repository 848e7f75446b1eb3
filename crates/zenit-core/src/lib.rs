//! # Zenit Core
//!
//! Signed distance field evaluation for the Zenit renderer.
//!
//! A scene is anything implementing [`field::Field`]: given a world-space
//! point it returns the signed distance to the nearest surface together with
//! the color that surface would have. Primitives compose through hard and
//! smooth boolean operators; the smooth variants blend both distance and
//! color over a finite region so surfaces meet without a crease.
//!
//! ## Quick Start
//!
//! ```rust
//! use zenit_core::prelude::*;
//!
//! let scene = BlendScene::default().with_phase(30.0);
//! let sample = scene.sample(Vec3::new(0.0, 0.0, -3.0));
//! assert!(sample.distance > 0.0); // outside the blended shape
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: arbitrary units (typically interpreted as meters)
//! - **Angles**: public phase/step parameters are in **degrees**, matching
//!   the frame driver; internal rotation math uses radians
//! - **Precision**: `f32` throughout
//! - **Coordinate system**: right-handed, Y-up

pub mod field;
pub mod ops;
pub mod primitives;
pub mod scenes;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::field::{Field, Sample, Sdf};
    pub use crate::primitives::{Plane, RoundedBox, Sphere};
    pub use crate::scenes::{BlendScene, OrbitScene};

    // Math (re-export glam)
    pub use glam::{Mat4, Quat, Vec3};
}
