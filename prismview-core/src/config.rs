//! Scene configuration

use crate::camera::{Camera, Projection};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Tunables for the interaction state machine
///
/// `Default` reproduces the constants of the classic demo: camera three units
/// up the Z axis looking at the origin, 0.05 steps everywhere and two snap
/// presets at (1, 2, 3) and (3, 2, 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Initial camera
    pub camera: Camera,
    /// Initial object centre
    pub object_center: Point3<f32>,
    /// World-axis camera move per held frame
    pub camera_step: f32,
    /// Object translate per held frame
    pub object_step: f32,
    /// Radians added to the object angle per frame while rotating
    pub rotation_step: f32,
    /// Sideways camera step per frame while revolving
    pub revolve_step: f32,
    /// Snap positions for the two preset keys
    pub presets: [Point3<f32>; 2],
    pub projection: Projection,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            object_center: Point3::origin(),
            camera_step: 0.05,
            object_step: 0.05,
            rotation_step: 0.05,
            revolve_step: 0.05,
            presets: [Point3::new(1.0, 2.0, 3.0), Point3::new(3.0, 2.0, 1.0)],
            projection: Projection::default(),
        }
    }
}
