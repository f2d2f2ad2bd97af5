use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use triangulator::api::{demo_shape, triangulate_with_cfg, GeomCfg, Polygon};

mod mesh_io;
mod provenance;

use mesh_io::{MeshFile, ShapeFile, Winding};
use provenance::{write_sidecar, Build, MeshSummary, Payload};

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Triangulate polygons with holes into indexed meshes")]
struct Cmd {
    #[command(flatten)]
    tol: TolArgs,

    #[command(subcommand)]
    action: Action,
}

/// Geometry tolerances, shared by every subcommand.
#[derive(Args, Debug, Clone, Copy)]
struct TolArgs {
    /// Relative area tolerance (scaled by the squared bounding-box extent)
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_rel)]
    eps_rel: f64,
    /// Absolute floor for the area tolerance
    #[arg(long, global = true, default_value_t = 0.0)]
    eps_abs: f64,
    /// Reject self-intersecting rings before triangulating
    #[arg(long, global = true)]
    check_simple: bool,
}

impl From<TolArgs> for GeomCfg {
    fn from(t: TolArgs) -> Self {
        GeomCfg {
            eps_rel: t.eps_rel,
            eps_abs: t.eps_abs,
            check_simple: t.check_simple,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Cut the holes of a JSON shape file, triangulate, write the mesh
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Winding::Cw)]
        winding: Winding,
    },
    /// Triangulate the built-in diamond with three notched holes
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Winding::Cw)]
        winding: Winding,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg::from(cmd.tol);
    match cmd.action {
        Action::Triangulate {
            input,
            out,
            winding,
        } => run_triangulate(&input, &out, winding, &cfg).map(|_| ()),
        Action::Demo { out, winding } => run_demo(&out, winding, &cfg).map(|_| ()),
        Action::Report => report(),
    }
}

fn run_triangulate(
    input: &Path,
    out: &Path,
    winding: Winding,
    cfg: &GeomCfg,
) -> Result<MeshFile> {
    tracing::info!(input = %input.display(), out = %out.display(), ?winding, "triangulate");
    let shape = ShapeFile::load(input)?;
    let merged = shape.merged(cfg)?;
    let params = json!({
        "input": input.to_string_lossy(),
        "holes": shape.holes.len(),
        "winding": winding,
        "eps_rel": cfg.eps_rel,
        "eps_abs": cfg.eps_abs,
        "check_simple": cfg.check_simple,
    });
    emit(&merged, out, winding, cfg, Payload::new("triangulate", params))
}

fn run_demo(out: &Path, winding: Winding, cfg: &GeomCfg) -> Result<MeshFile> {
    tracing::info!(out = %out.display(), ?winding, "demo");
    let merged = demo_shape()?;
    let params = json!({
        "shape": "demo",
        "winding": winding,
        "eps_rel": cfg.eps_rel,
        "eps_abs": cfg.eps_abs,
        "check_simple": cfg.check_simple,
    });
    emit(&merged, out, winding, cfg, Payload::new("demo", params))
}

/// Triangulate `merged`, write the mesh and its provenance sidecar.
fn emit(
    merged: &Polygon,
    out: &Path,
    winding: Winding,
    cfg: &GeomCfg,
    payload: Payload,
) -> Result<MeshFile> {
    let mesh = triangulate_with_cfg(merged, winding.into(), cfg)?;
    let file = MeshFile::new(&mesh, winding);
    file.write(out)?;
    let summary = MeshSummary {
        ring_vertices: merged.len(),
        vertices: file.vertices.len(),
        triangles: file.triangles,
        index_format: file.index_format,
        area: mesh.area(),
    };
    let prov = write_sidecar(out, payload.with_summary(summary))?;
    tracing::info!(
        triangles = file.triangles,
        vertices = file.vertices.len(),
        index_format = ?file.index_format,
        provenance = %prov.display(),
        "wrote mesh"
    );
    Ok(file)
}

fn report() -> Result<()> {
    let obj = json!({
        "build": Build::current(),
        "params": GeomCfgReport::from(GeomCfg::default()),
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Default tolerances as reported by `report`.
#[derive(serde::Serialize)]
struct GeomCfgReport {
    eps_rel: f64,
    eps_abs: f64,
    check_simple: bool,
}

impl From<GeomCfg> for GeomCfgReport {
    fn from(cfg: GeomCfg) -> Self {
        Self {
            eps_rel: cfg.eps_rel,
            eps_abs: cfg.eps_abs,
            check_simple: cfg.check_simple,
        }
    }
}
