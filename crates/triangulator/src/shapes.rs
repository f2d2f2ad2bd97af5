//! Ready-made shapes: the demo diamond with three notched holes, and squares.
//!
//! The demo shape is a 200×400 diamond (six vertices, counterclockwise) with
//! the same six-vertex notched hole cut at its home position and shifted up and
//! down by 90. It exercises repeated cuts, bridges that land on earlier seams
//! and collinear runs along the diamond's vertical sides.
//!
//! `holed_square` puts a k×k grid of square holes into a square; holes sit side
//! by side, so it relies on `cut_holes_in_shape` ordering the cuts.

use nalgebra::{vector, Vector2};

use crate::error::GeometryError;
use crate::geom::Polygon;
use crate::hole::cut_holes_in_shape;

/// Vertical offsets of the three demo holes.
pub const DEMO_HOLE_OFFSETS: [f64; 3] = [0.0, 90.0, -90.0];

/// Diamond outline, counterclockwise, area 60000.
pub fn demo_outline() -> Polygon {
    Polygon::from_vec_unchecked(vec![
        vector![-100.0, -100.0],
        vector![0.0, -200.0],
        vector![100.0, -100.0],
        vector![100.0, 100.0],
        vector![0.0, 200.0],
        vector![-100.0, 100.0],
    ])
}

/// Notched hole at the origin, clockwise, area 4800.
pub fn demo_hole() -> Polygon {
    Polygon::from_vec_unchecked(vec![
        vector![-40.0, -40.0],
        vector![-40.0, 40.0],
        vector![0.0, 20.0],
        vector![40.0, 40.0],
        vector![40.0, -40.0],
        vector![0.0, -20.0],
    ])
}

/// Demo outline with every hole of `DEMO_HOLE_OFFSETS` cut in, as one ring.
pub fn demo_shape() -> Result<Polygon, GeometryError> {
    let hole = demo_hole();
    let holes: Vec<Polygon> = DEMO_HOLE_OFFSETS
        .iter()
        .map(|&dy| hole.translated(vector![0.0, dy]))
        .collect();
    cut_holes_in_shape(&demo_outline(), &holes)
}

/// Square holes of half the cell size, one centred in each cell of a k×k grid
/// over `[0, size]²`.
pub fn hole_grid(size: f64, k: usize) -> Result<Vec<Polygon>, GeometryError> {
    let cell = size / k as f64;
    (0..k * k)
        .map(|n| {
            let (i, j) = ((n / k) as f64, (n % k) as f64);
            square(vector![(i + 0.25) * cell, (j + 0.25) * cell], 0.5 * cell)
        })
        .collect()
}

/// `[0, size]²` with `hole_grid(size, k)` cut in.
pub fn holed_square(size: f64, k: usize) -> Result<Polygon, GeometryError> {
    cut_holes_in_shape(&square(vector![0.0, 0.0], size)?, &hole_grid(size, k)?)
}

/// Axis-aligned square with lower-left corner `min`, counterclockwise.
pub fn square(min: Vector2<f64>, size: f64) -> Result<Polygon, GeometryError> {
    if size.is_nan() || size <= 0.0 {
        return Err(GeometryError::invalid(format!("square size must be positive, got {size}")));
    }
    Polygon::new(vec![
        min,
        min + vector![size, 0.0],
        min + vector![size, size],
        min + vector![0.0, size],
    ])
}
