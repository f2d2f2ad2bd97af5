//! Random star-shaped polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of simple, generally concave
//!   polygons for property tests and benchmarks of hole cutting and ear clipping.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, keep the angles sorted. The ring is star-shaped around the
//!   origin and therefore simple, counterclockwise by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Polygon`, `crate::hole::cut_hole_in_shape`

use super::types::Polygon;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude), clamped to [0, 0.9]. Radii are
    /// `base_radius * (1 + u)` with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 6, max: 40 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 10.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped polygon (counterclockwise, simple).
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    star_with_rng(cfg, &mut rng, None)
}

/// Draw a star-shaped polygon plus a regular hole around the origin that fits inside.
///
/// The hole radius is half the smallest distance from the origin to an outer
/// edge, and the outer ring keeps at least 6 vertices so that the origin stays
/// in its kernel. Both rings come out counterclockwise; `cut_hole_in_shape`
/// reorients the hole.
pub fn draw_star_with_hole(cfg: StarCfg, tok: ReplayToken) -> (Polygon, Polygon) {
    let mut rng = tok.to_std_rng();
    let outer = star_with_rng(cfg, &mut rng, Some(6));
    let r_hole = 0.5 * min_edge_distance_to_origin(outer.points());
    let k = rng.gen_range(3..=8usize);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let hole: Vec<Vector2<f64>> = (0..k)
        .map(|j| {
            let th = phase + (j as f64) * std::f64::consts::TAU / (k as f64);
            Vector2::new(th.cos() * r_hole, th.sin() * r_hole)
        })
        .collect();
    (outer, Polygon::from_vec_unchecked(hole))
}

fn star_with_rng(cfg: StarCfg, rng: &mut StdRng, min_vertices: Option<usize>) -> Polygon {
    let n = cfg
        .vertex_count
        .sample(rng)
        .max(min_vertices.unwrap_or(3));
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Vector2<f64>> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::from_vec_unchecked(pts)
}

/// Smallest distance from the origin to any edge of the ring.
fn min_edge_distance_to_origin(pts: &[Vector2<f64>]) -> f64 {
    let mut best = f64::INFINITY;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        let ab = b - a;
        let len2 = ab.norm_squared();
        let t = if len2 > 0.0 {
            (-a.dot(&ab) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        best = best.min((a + ab * t).norm());
    }
    best
}
