//! 3D transformation utilities

use nalgebra::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A homogeneous 3D transformation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f32>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f32>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation of `angle` radians about the X axis
    pub fn rotation_x(angle: f32) -> Self {
        Self::rotation(UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle))
    }

    /// Create a rotation transformation from a quaternion
    pub fn rotation(rotation: UnitQuaternion<f32>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a transformation from translation and rotation
    pub fn from_translation_rotation(
        translation: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
    ) -> Self {
        let isometry = Isometry3::from_parts(translation.into(), rotation);
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }

    /// Translation component (last column)
    pub fn translation_part(&self) -> Vector3<f32> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Compose this transformation with another, `other` applied first
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Prepend a world-space translation
    pub fn translated(self, delta: Vector3<f32>) -> Self {
        Self::translation(delta).compose(self)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f32>> for Transform3D {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}

/// The prism's placement in the world: a centre plus a spin about X
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    /// Object centre `c`
    pub center: Point3<f32>,
    /// Rotation about the X axis, in radians
    pub angle: f32,
    matrix: Transform3D,
}

impl ObjectTransform {
    /// An unrotated object at `center`
    pub fn at(center: Point3<f32>) -> Self {
        let mut object = Self {
            center,
            angle: 0.0,
            matrix: Transform3D::identity(),
        };
        object.recompute();
        object
    }

    /// Rebuild the matrix as translate(c) * rotate_x(angle)
    pub fn recompute(&mut self) {
        self.matrix =
            Transform3D::translation(self.center.coords) * Transform3D::rotation_x(self.angle);
    }

    /// Move the centre and the current matrix by the same world-space delta
    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.matrix = self.matrix.translated(delta);
        self.center += delta;
    }

    /// Current model matrix
    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix.matrix
    }

    pub fn transform(&self) -> Transform3D {
        self.matrix
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::at(Point3::origin())
    }
}
