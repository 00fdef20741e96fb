//! Core traits for prismview

use crate::error::Result;
use crate::mesh::MeshBuffer;
use crate::point::Point3f;
use crate::scene::FrameMatrices;

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        Point3f::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        )
    }
}

/// Backend that puts a prism on screen
///
/// The mesh is uploaded once; afterwards every frame supplies only the model,
/// view and projection matrices.
pub trait SceneRenderer {
    /// Upload the vertex buffer. Called once before the first frame.
    fn upload(&mut self, mesh: &MeshBuffer) -> Result<()>;

    /// Draw the uploaded mesh as a triangle list with this frame's matrices
    fn draw(&mut self, frame: &FrameMatrices) -> Result<()>;
}

impl Drawable for MeshBuffer {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return (Point3f::origin(), Point3f::origin());
        }

        let mut min = vertices[0].point();
        let mut max = min;

        for vertex in vertices {
            let p = vertex.point();
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        (min, max)
    }
}
