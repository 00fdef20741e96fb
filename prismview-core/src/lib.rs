//! Core data structures and traits for prismview
//!
//! This crate holds everything that does not need a window or a GPU:
//! the procedural prism mesh, transforms, the camera, the keyboard input
//! abstraction and the interaction state machine that turns key state into
//! per-frame model/view/projection matrices.

pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod mesh;
pub mod point;
pub mod scene;
pub mod traits;
pub mod transform;

pub use camera::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use input::*;
pub use mesh::*;
pub use point::*;
pub use scene::*;
pub use traits::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};
