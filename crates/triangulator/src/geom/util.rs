use nalgebra::Vector2;

/// Twice the signed area of triangle (a, b, c); positive for a→b→c counterclockwise.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Signed area of a closed ring (shoelace). Positive for counterclockwise rings.
pub fn signed_area(pts: &[Vector2<f64>]) -> f64 {
    if pts.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..pts.len() {
        let p = pts[i];
        let q = pts[(i + 1) % pts.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Larger side of the axis-aligned bounding box (0 for empty input).
pub(crate) fn bbox_extent(pts: &[Vector2<f64>]) -> f64 {
    let mut it = pts.iter();
    let Some(first) = it.next() else {
        return 0.0;
    };
    let (mut lo, mut hi) = (*first, *first);
    for p in it {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    let d = hi - lo;
    d.x.max(d.y)
}

/// `p` inside or on the closed triangle (a, b, c) whose orientation sign is `s`.
#[inline]
pub(crate) fn in_triangle_closed(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
    s: f64,
    eps: f64,
) -> bool {
    cross(a, b, p) * s >= -eps && cross(b, c, p) * s >= -eps && cross(c, a, p) * s >= -eps
}

/// `p` on segment a–b, assuming the three points are already known to be collinear.
#[inline]
fn within_bbox(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Segments p1–p2 and q1–q2 cross or touch (within `eps` on the orientation tests).
pub(crate) fn segments_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
    eps: f64,
) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);
    let straddles = |u: f64, v: f64| (u > eps && v < -eps) || (u < -eps && v > eps);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }
    (d1.abs() <= eps && within_bbox(q1, q2, p1))
        || (d2.abs() <= eps && within_bbox(q1, q2, p2))
        || (d3.abs() <= eps && within_bbox(p1, p2, q1))
        || (d4.abs() <= eps && within_bbox(p1, p2, q2))
}

/// Crossing-number point-in-polygon test. Boundary points may go either way.
///
/// Seam edges produced by hole cutting are traversed twice in opposite
/// directions and cancel out, so merged rings are handled as well.
pub fn point_in_polygon(pts: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let n = pts.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (a, b) = (pts[i], pts[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_at = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Bridge direction `v → target` lies strictly inside the wedge of the ring at `v`.
///
/// `prev` and `next` are the ring neighbours of `v`; `s` is the sign of the ring's
/// winding (`+1` CCW). Convex corners need both half-planes, reflex corners either.
pub(crate) fn locally_inside(
    prev: Vector2<f64>,
    v: Vector2<f64>,
    next: Vector2<f64>,
    target: Vector2<f64>,
    s: f64,
    eps: f64,
) -> bool {
    let turn = cross(prev, v, next) * s;
    let left_in = cross(prev, v, target) * s > eps;
    let left_out = cross(v, next, target) * s > eps;
    if turn >= 0.0 {
        left_in && left_out
    } else {
        left_in || left_out
    }
}

/// First pair of edges `(i, j)` (edge k runs from vertex k to k+1) that intersect.
///
/// Pairs sharing a vertex coordinate are skipped, which also skips the two
/// coincident edges of a hole seam.
pub(crate) fn first_self_intersection(pts: &[Vector2<f64>], eps: f64) -> Option<(usize, usize)> {
    let n = pts.len();
    for i in 0..n {
        let (a1, a2) = (pts[i], pts[(i + 1) % n]);
        for j in (i + 1)..n {
            let (b1, b2) = (pts[j], pts[(j + 1) % n]);
            if a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2 {
                continue;
            }
            if segments_intersect(a1, a2, b1, b2, eps) {
                return Some((i, j));
            }
        }
    }
    None
}
