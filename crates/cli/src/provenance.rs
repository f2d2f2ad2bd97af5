//! `<stem>.provenance.json` sidecars next to written meshes.
//!
//! A sidecar records which build produced the mesh, the command and tolerances
//! it ran with, and what came out: ring size, vertex and triangle counts, index
//! width and covered area.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::mesh_io::IndexFormat;

/// Code revision and library version, shared by sidecars and `report`.
#[derive(Clone, Debug, Serialize)]
pub struct Build {
    pub code_rev: String,
    pub version: &'static str,
}

impl Build {
    pub fn current() -> Self {
        Self {
            code_rev: current_git_rev(),
            version: triangulator::VERSION,
        }
    }
}

/// Counts and area of a written mesh.
#[derive(Clone, Debug, Serialize)]
pub struct MeshSummary {
    /// Vertices of the merged ring before clipping, seam copies included.
    pub ring_vertices: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub index_format: IndexFormat,
    pub area: f64,
}

/// What produced a mesh: the command, its parameters and the result.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub summary: Option<MeshSummary>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: MeshSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    build: Build,
    callsite: Callsite,
    command: &'a str,
    params: &'a Value,
    summary: &'a Option<MeshSummary>,
    outputs: Vec<String>,
}

/// Write the sidecar for `mesh` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(mesh: P, payload: Payload) -> Result<PathBuf> {
    let mesh = mesh.as_ref();
    let path = provenance_path(mesh);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let caller = Location::caller();
    let sidecar = Sidecar {
        build: Build::current(),
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        command: payload.command,
        params: &payload.params,
        summary: &payload.summary,
        outputs: vec![mesh.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(mesh: &Path) -> PathBuf {
    let mut name = mesh
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("mesh"));
    name.push(".provenance.json");
    mesh.with_file_name(name)
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
