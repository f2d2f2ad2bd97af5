//! Curated API surface.
//!
//! One import path for callers (the CLI, benches, runnable programs) that do
//! not care where things live inside the crate. Internal layout may move; these
//! names stay.

// Geometry
pub use crate::geom::{cross, point_in_polygon, signed_area, winding_order};
pub use crate::geom::{GeomCfg, Polygon, WindingOrder};
// Random polygons
pub use crate::geom::rand::{
    draw_star_polygon, draw_star_with_hole, ReplayToken as StarReplay, StarCfg, VertexCount,
};
// Algorithms
pub use crate::hole::{
    cut_hole_in_shape, cut_hole_in_shape_with_cfg, cut_holes_in_shape, cut_holes_in_shape_with_cfg,
};
pub use crate::triangulate::{triangulate, triangulate_with_cfg};
// Results and errors
pub use crate::error::GeometryError;
pub use crate::mesh::Mesh;
// Demo geometry
pub use crate::shapes::{
    demo_hole, demo_outline, demo_shape, hole_grid, holed_square, square, DEMO_HOLE_OFFSETS,
};
