//! Procedural prism mesh generation
//!
//! A prism with `n` sides is emitted as a flat, non-indexed triangle list:
//! two fan-triangulated caps followed by `n` side quads, every face carrying
//! one random color.

use crate::error::{Error, Result};
use crate::point::*;
use rand::Rng;
use serde::Serialize;
use std::f64::consts::PI;

/// Radius of the circle both rings lie on
pub const RING_RADIUS: f32 = 0.5;

/// Z coordinate of the top ring; the bottom ring sits at the negated value
pub const HALF_HEIGHT: f32 = 0.5;

/// Largest vertex count a single draw call can cover
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// Number of vertices in the triangle list of an `n`-sided prism, or `None`
/// if it does not fit in `usize`
pub fn expected_vertex_count(sides: usize) -> Option<usize> {
    let caps = sides.saturating_sub(2).checked_mul(6)?;
    let walls = sides.checked_mul(6)?;
    caps.checked_add(walls)
}

/// Validate `sides` and return the vertex count of its prism
fn checked_vertex_count(sides: usize) -> Result<usize> {
    if sides < 3 {
        return Err(Error::InvalidSides { sides });
    }
    expected_vertex_count(sides)
        .filter(|&count| count <= MAX_VERTICES)
        .ok_or(Error::TooManySides { sides })
}

/// The two rings of corner points of a prism
#[derive(Debug, Clone, PartialEq)]
pub struct PrismRings {
    pub top: Vec<Point3f>,
    pub bottom: Vec<Point3f>,
}

impl PrismRings {
    /// Compute both rings for a prism with `sides` corners per cap
    pub fn new(sides: usize) -> Result<Self> {
        checked_vertex_count(sides)?;

        let ring = |z: f32| -> Vec<Point3f> {
            (0..sides)
                .map(|i| {
                    let theta = 2.0 * PI * i as f64 / sides as f64;
                    Point3f::new(
                        theta.cos() as f32 * RING_RADIUS,
                        theta.sin() as f32 * RING_RADIUS,
                        z,
                    )
                })
                .collect()
        };

        Ok(Self {
            top: ring(HALF_HEIGHT),
            bottom: ring(-HALF_HEIGHT),
        })
    }

    /// Number of corners per ring
    pub fn sides(&self) -> usize {
        self.top.len()
    }
}

/// Flat triangle-list vertex buffer of a prism
///
/// The buffer is sized once by [`build_prism`] and has no mutating API, so
/// whatever was uploaded to the renderer stays in sync with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshBuffer {
    sides: usize,
    vertices: Vec<Vertex>,
}

impl MeshBuffer {
    /// Number of prism sides this buffer was built for
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// All vertices, three per triangle
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over triangles as vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(3)
    }

    /// Raw interleaved position/color bytes, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

struct MeshWriter {
    vertices: Vec<Vertex>,
}

impl MeshWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    fn triangle(&mut self, a: &Point3f, b: &Point3f, c: &Point3f, color: Color) {
        self.vertices.push(Vertex::new(a, color));
        self.vertices.push(Vertex::new(b, color));
        self.vertices.push(Vertex::new(c, color));
    }

    fn fan(&mut self, ring: &[Point3f], color: Color) {
        for i in 0..ring.len() - 2 {
            self.triangle(&ring[0], &ring[i + 1], &ring[i + 2], color);
        }
    }

    /// Quad between top edge (t0, t1) and bottom edge (b0, b1)
    fn quad(&mut self, t0: &Point3f, t1: &Point3f, b0: &Point3f, b1: &Point3f, color: Color) {
        self.triangle(t0, t1, b1, color);
        self.triangle(t0, b0, b1, color);
    }
}

/// Build the triangle list of an `n`-sided prism, drawing face colors from `rng`
///
/// Colors are drawn in face order: top cap, bottom cap, side quads `0..n-1`,
/// then the closing quad between corner `n-1` and corner `0`.
pub fn build_prism<R: Rng + ?Sized>(sides: usize, rng: &mut R) -> Result<MeshBuffer> {
    let vertex_count = checked_vertex_count(sides)?;
    let rings = PrismRings::new(sides)?;
    let (top, bottom) = (&rings.top, &rings.bottom);

    let mut writer = MeshWriter::with_capacity(vertex_count);

    writer.fan(top, random_color(rng));
    writer.fan(bottom, random_color(rng));

    for i in 0..sides - 1 {
        let color = random_color(rng);
        writer.quad(&top[i], &top[i + 1], &bottom[i], &bottom[i + 1], color);
    }

    // Closing face wraps corner n-1 back to corner 0.
    let last = sides - 1;
    let color = random_color(rng);
    writer.quad(&top[last], &top[0], &bottom[last], &bottom[0], color);

    debug_assert_eq!(writer.vertices.len(), vertex_count);
    log::debug!(
        "Built {}-sided prism with {} vertices",
        sides,
        writer.vertices.len()
    );

    Ok(MeshBuffer {
        sides,
        vertices: writer.vertices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(sides: usize) -> MeshBuffer {
        let mut rng = StdRng::seed_from_u64(42);
        build_prism(sides, &mut rng).unwrap()
    }

    #[test]
    fn test_vertex_count_matches_formula() {
        for sides in 3..=32 {
            let mesh = build(sides);
            assert_eq!(mesh.vertex_count(), 6 * (sides - 2) + 6 * sides);
            assert_eq!(Some(mesh.vertex_count()), expected_vertex_count(sides));
            assert_eq!(mesh.sides(), sides);
        }
    }

    #[test]
    fn test_square_prism_has_twelve_triangles() {
        let mesh = build(4);
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.triangles().count(), 12);
        assert_eq!(mesh.as_bytes().len(), 36 * 24);
    }

    #[test]
    fn test_rejects_degenerate_prisms() {
        let mut rng = StdRng::seed_from_u64(1);
        for sides in 0..3 {
            let result = build_prism(sides, &mut rng);
            assert!(
                matches!(result, Err(Error::InvalidSides { sides: s }) if s == sides),
                "sides = {} should be rejected",
                sides
            );
        }
    }

    #[test]
    fn test_rejects_oversized_prisms() {
        assert_eq!(expected_vertex_count(usize::MAX / 4), None);

        let mut rng = StdRng::seed_from_u64(1);
        for sides in [usize::MAX / 4, usize::MAX, 357_913_943] {
            let result = build_prism(sides, &mut rng);
            assert!(
                matches!(result, Err(Error::TooManySides { sides: s }) if s == sides),
                "sides = {} should be rejected",
                sides
            );
        }
        assert!(PrismRings::new(usize::MAX / 4).is_err());
    }

    #[test]
    fn test_vertex_count_limit() {
        // 12n - 12 vertices; 357_913_942 is the last n that stays within u32
        assert_eq!(expected_vertex_count(357_913_942), Some(4_294_967_292));
        assert!(checked_vertex_count(357_913_942).is_ok());
        assert_eq!(expected_vertex_count(4), Some(36));
    }

    #[test]
    fn test_triangles_are_flat_colored() {
        let mesh = build(9);
        for triangle in mesh.triangles() {
            assert_eq!(triangle[0].color, triangle[1].color);
            assert_eq!(triangle[1].color, triangle[2].color);
        }
    }

    #[test]
    fn test_face_color_layout() {
        let sides = 6;
        let mesh = build(sides);
        let colors: Vec<Color> = mesh.triangles().map(|t| t[0].color).collect();
        let cap = sides - 2;

        // One color per cap
        assert!(colors[..cap].iter().all(|c| *c == colors[0]));
        assert!(colors[cap..2 * cap].iter().all(|c| *c == colors[cap]));

        // One color per side quad, shared by its two triangles
        let sides_colors = &colors[2 * cap..];
        assert_eq!(sides_colors.len(), 2 * sides);
        for quad in sides_colors.chunks_exact(2) {
            assert_eq!(quad[0], quad[1]);
        }
    }

    #[test]
    fn test_colors_drawn_in_face_order() {
        let sides = 5;
        let mesh = build(sides);

        let mut rng = StdRng::seed_from_u64(42);
        let expected: Vec<Color> = (0..sides + 2).map(|_| random_color(&mut rng)).collect();

        let cap = sides - 2;
        let triangles: Vec<&[Vertex]> = mesh.triangles().collect();
        assert_eq!(triangles[0][0].color, expected[0]);
        assert_eq!(triangles[cap][0].color, expected[1]);
        for i in 0..sides {
            assert_eq!(triangles[2 * cap + 2 * i][0].color, expected[2 + i]);
        }
    }

    #[test]
    fn test_same_seed_same_mesh() {
        assert_eq!(build(7), build(7));

        let mut rng = StdRng::seed_from_u64(43);
        let other = build_prism(7, &mut rng).unwrap();
        assert_ne!(build(7), other);
    }

    #[test]
    fn test_rings_differ_only_in_z() {
        let rings = PrismRings::new(11).unwrap();
        assert_eq!(rings.sides(), 11);
        for (t, b) in rings.top.iter().zip(&rings.bottom) {
            assert_eq!(t.x, b.x);
            assert_eq!(t.y, b.y);
            assert_relative_eq!(t.z - b.z, 1.0);
        }
    }

    #[test]
    fn test_rings_lie_on_circle() {
        let rings = PrismRings::new(8).unwrap();
        assert_relative_eq!(rings.top[0].x, 0.5);
        assert_relative_eq!(rings.top[0].y, 0.0);
        assert_relative_eq!(rings.top[2].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rings.top[2].y, 0.5, epsilon = 1e-6);
        for p in rings.top.iter().chain(&rings.bottom) {
            assert_relative_eq!(p.coords.xy().norm(), RING_RADIUS, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cap_fans_share_first_corner() {
        let sides = 7;
        let mesh = build(sides);
        let rings = PrismRings::new(sides).unwrap();
        let triangles: Vec<&[Vertex]> = mesh.triangles().collect();

        for i in 0..sides - 2 {
            let top = triangles[i];
            assert_eq!(top[0].point(), rings.top[0]);
            assert_eq!(top[1].point(), rings.top[i + 1]);
            assert_eq!(top[2].point(), rings.top[i + 2]);

            let bottom = triangles[sides - 2 + i];
            assert_eq!(bottom[0].point(), rings.bottom[0]);
            assert_eq!(bottom[1].point(), rings.bottom[i + 1]);
            assert_eq!(bottom[2].point(), rings.bottom[i + 2]);
        }
    }

    #[test]
    fn test_side_quads_follow_ring_order() {
        let sides = 5;
        let mesh = build(sides);
        let rings = PrismRings::new(sides).unwrap();
        let triangles: Vec<&[Vertex]> = mesh.triangles().collect();
        let first_side = 2 * (sides - 2);

        for i in 0..sides - 1 {
            let upper = triangles[first_side + 2 * i];
            let lower = triangles[first_side + 2 * i + 1];

            assert_eq!(upper[0].point(), rings.top[i]);
            assert_eq!(upper[1].point(), rings.top[i + 1]);
            assert_eq!(upper[2].point(), rings.bottom[i + 1]);

            assert_eq!(lower[0].point(), rings.top[i]);
            assert_eq!(lower[1].point(), rings.bottom[i]);
            assert_eq!(lower[2].point(), rings.bottom[i + 1]);
        }
    }

    #[test]
    fn test_closing_quad_wraps_to_first_corner() {
        let sides = 6;
        let mesh = build(sides);
        let rings = PrismRings::new(sides).unwrap();
        let triangles: Vec<&[Vertex]> = mesh.triangles().collect();
        let n = sides;

        let upper = triangles[triangles.len() - 2];
        let lower = triangles[triangles.len() - 1];

        assert_eq!(upper[0].point(), rings.top[n - 1]);
        assert_eq!(upper[1].point(), rings.top[0]);
        assert_eq!(upper[2].point(), rings.bottom[0]);

        assert_eq!(lower[0].point(), rings.top[n - 1]);
        assert_eq!(lower[1].point(), rings.bottom[n - 1]);
        assert_eq!(lower[2].point(), rings.bottom[0]);
    }

    #[test]
    fn test_bounding_box() {
        use crate::traits::Drawable;

        let mesh = build(4);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, -0.5, epsilon = 1e-6);
        assert_relative_eq!(max.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(min.z, -0.5);
        assert_relative_eq!(max.z, 0.5);
    }
}
