//! Print the demo shape's triangulation in both winding orders.
//!
//! Usage:
//!   cargo run -p triangulator --example demo_shape
//!   cargo run -p triangulator --example demo_shape -- triangles

use triangulator::api::{demo_shape, triangulate, GeometryError, WindingOrder};

fn main() -> Result<(), GeometryError> {
    let list = std::env::args().nth(1).is_some_and(|a| a == "triangles");
    let shape = demo_shape()?;
    println!("merged ring: {} vertices, area {:.1}", shape.len(), shape.signed_area());
    for order in [WindingOrder::Clockwise, WindingOrder::CounterClockwise] {
        let mesh = triangulate(&shape, order)?;
        println!(
            "{order:?}: {} triangles over {} vertices, area {:.1}",
            mesh.triangle_count(),
            mesh.vertices.len(),
            mesh.area()
        );
        if list {
            for [a, b, c] in mesh.triangles() {
                println!("  ({}, {}) ({}, {}) ({}, {})", a.x, a.y, b.x, b.y, c.x, c.y);
            }
        }
    }
    Ok(())
}
