//! Point and vertex types

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Linear RGB color with components in `[0, 1]`
pub type Color = [f32; 3];

/// Draw a color from `rng`, one component at a time in r, g, b order.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let r = rng.gen::<f32>();
    let g = rng.gen::<f32>();
    let b = rng.gen::<f32>();
    [r, g, b]
}

/// A position with a flat color, laid out for direct upload as a vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: Color,
}

impl Vertex {
    /// Create a vertex from a point and a color
    pub fn new(position: &Point3f, color: Color) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color,
        }
    }

    /// Position as a point
    pub fn point(&self) -> Point3f {
        Point3f::from(self.position)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            color: [1.0, 1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_vertex_layout_is_interleaved() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);

        let v = Vertex::new(&Point3f::new(1.0, 2.0, 3.0), [0.25, 0.5, 0.75]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_random_color_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let color = random_color(&mut rng);
            assert!(color.iter().all(|c| (0.0..=1.0).contains(c)), "{:?}", color);
        }
    }
}
