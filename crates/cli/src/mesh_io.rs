//! JSON formats read and written by the CLI.
//!
//! - Input shape: `{ "outer": [[x, y], ...], "holes": [[[x, y], ...], ...] }`,
//!   `holes` optional. Rings may be given in either orientation and may repeat
//!   the first vertex at the end.
//! - Output mesh: vertices, triangle indices, triangle count, winding, and the
//!   index width a GPU upload would use.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use triangulator::api::{cut_holes_in_shape_with_cfg, GeomCfg, Mesh, Polygon, WindingOrder};
use triangulator::Vec2;

/// Triangle winding as spelled on the command line and in output files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winding {
    Cw,
    Ccw,
}

impl From<Winding> for WindingOrder {
    fn from(w: Winding) -> Self {
        match w {
            Winding::Cw => WindingOrder::Clockwise,
            Winding::Ccw => WindingOrder::CounterClockwise,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ShapeFile {
    pub outer: Vec<[f64; 2]>,
    #[serde(default)]
    pub holes: Vec<Vec<[f64; 2]>>,
}

impl ShapeFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Outline with every hole cut in; holes keep their file index in errors.
    pub fn merged(&self, cfg: &GeomCfg) -> Result<Polygon> {
        let outer = ring(&self.outer).context("outer ring")?;
        let holes = self
            .holes
            .iter()
            .enumerate()
            .map(|(k, hole)| ring(hole).with_context(|| format!("hole {k}")))
            .collect::<Result<Vec<_>>>()?;
        cut_holes_in_shape_with_cfg(&outer, &holes, cfg).context("cutting holes")
    }
}

fn ring(coords: &[[f64; 2]]) -> Result<Polygon> {
    Ok(Polygon::new(
        coords.iter().map(|&[x, y]| Vec2::new(x, y)).collect(),
    )?)
}

/// Narrowest index type that can address every vertex; `u16::MAX` stays
/// reserved as a primitive-restart value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    pub fn for_vertex_count(n: usize) -> Self {
        if n < u16::MAX as usize {
            IndexFormat::U16
        } else {
            IndexFormat::U32
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshFile {
    pub winding: Winding,
    pub index_format: IndexFormat,
    pub triangles: usize,
    pub vertices: Vec<[f64; 2]>,
    pub indices: Vec<u32>,
}

impl MeshFile {
    pub fn new(mesh: &Mesh, winding: Winding) -> Self {
        Self {
            winding,
            index_format: IndexFormat::for_vertex_count(mesh.vertices.len()),
            triangles: mesh.triangle_count(),
            vertices: mesh.vertices.iter().map(|v| [v.x, v.y]).collect(),
            indices: mesh.indices.clone(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }
}
