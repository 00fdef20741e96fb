//! Camera utilities for 3D visualization

use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A look-at camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Point3<f32>, target: Point3<f32>, up: Vector3<f32>) -> Self {
        Self {
            position,
            target,
            up,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Unnormalized direction from the camera to its target
    pub fn front(&self) -> Vector3<f32> {
        self.target - self.position
    }

    /// normalize(front x up)
    pub fn right(&self) -> Vector3<f32> {
        self.front().cross(&self.up).normalize()
    }

    /// normalize(right x front), the up direction as seen by the camera
    pub fn local_up(&self) -> Vector3<f32> {
        self.right().cross(&self.front()).normalize()
    }

    /// Step sideways around the target; for small steps the distance to the
    /// target stays roughly constant.
    pub fn revolve(&mut self, step: f32) {
        self.position += self.right() * step;
    }

    /// Distance between camera and target
    pub fn distance_to_target(&self) -> f32 {
        self.front().norm()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }
}

/// How the projection's aspect ratio is derived from the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectPolicy {
    /// width / height
    #[default]
    Viewport,
    /// Always 1.0, whatever the window shape
    Square,
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub aspect_policy: AspectPolicy,
}

impl Projection {
    /// Aspect ratio for a viewport of the given size
    pub fn aspect_ratio(&self, width: u32, height: u32) -> f32 {
        match self.aspect_policy {
            AspectPolicy::Square => 1.0,
            AspectPolicy::Viewport if width == 0 || height == 0 => 1.0,
            AspectPolicy::Viewport => width as f32 / height as f32,
        }
    }

    /// OpenGL-style perspective matrix (clip z in [-1, 1])
    pub fn matrix(&self, width: u32, height: u32) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect_ratio(width, height), self.fov, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 100.0,
            aspect_policy: AspectPolicy::Viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_camera_basis() {
        let camera = Camera::default();
        assert_eq!(camera.front(), Vector3::new(0.0, 0.0, -3.0));
        assert_relative_eq!(camera.right(), Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(camera.local_up(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_view_matrix_maps_target_onto_negative_z() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        let target = view.transform_point(&camera.target);
        assert_relative_eq!(target, Point3::new(0.0, 0.0, -3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_revolve_keeps_radius_for_small_steps() {
        let mut camera = Camera::default();
        for _ in 0..200 {
            camera.revolve(0.05);
        }
        // Each step grows the radius by a second-order amount only
        assert!(camera.distance_to_target() > 3.0);
        assert!(camera.distance_to_target() < 3.1, "{}", camera.distance_to_target());
        assert_relative_eq!(camera.position.y, 0.0);
    }

    #[test]
    fn test_aspect_policies() {
        let viewport = Projection::default();
        assert_relative_eq!(viewport.aspect_ratio(1600, 800), 2.0);
        assert_relative_eq!(viewport.aspect_ratio(0, 800), 1.0);

        let square = Projection {
            aspect_policy: AspectPolicy::Square,
            ..Projection::default()
        };
        assert_relative_eq!(square.aspect_ratio(1600, 800), 1.0);
        assert_eq!(square.matrix(1600, 800), viewport.matrix(800, 800));
    }
}
