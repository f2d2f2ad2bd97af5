//! Triangle mesh produced by `triangulate`.

use nalgebra::Vector2;

use crate::geom::{cross, WindingOrder};

/// Indexed triangle list.
///
/// Invariants (upheld by `triangulate`):
/// - `indices.len() % 3 == 0`, every index `< vertices.len()`.
/// - Every vertex is referenced by at least one triangle.
/// - All triangles share one winding order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vector2<f64>>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner positions of each triangle, in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vector2<f64>; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }

    /// Signed area of every triangle (positive = counterclockwise).
    pub fn signed_areas(&self) -> impl Iterator<Item = f64> + '_ {
        self.triangles().map(|[a, b, c]| 0.5 * cross(a, b, c))
    }

    /// Total unsigned area covered by the mesh.
    pub fn area(&self) -> f64 {
        self.signed_areas().map(f64::abs).sum()
    }

    /// Winding shared by all triangles, or `None` if empty or mixed.
    pub fn winding_order(&self) -> Option<WindingOrder> {
        let mut it = self.signed_areas().map(WindingOrder::of_area);
        let first = it.next()??;
        it.all(|w| w == Some(first)).then_some(first)
    }

    /// Reverse every triangle in place (swap the last two corners).
    pub fn flip_winding(&mut self) {
        for t in self.indices.chunks_exact_mut(3) {
            t.swap(1, 2);
        }
    }
}
