//! Miter-joint tessellation of thick polylines.
//!
//! Each segment becomes a quad whose end edges are beveled along the joint's
//! angle bisector, so consecutive quads meet without gaps or overlaps.

use crate::Vec2;

/// Four corners of one tessellated stroke segment.
///
/// Corner order is strip-friendly: `[start - offset, start + offset,
/// end - offset, end + offset]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentQuad {
    pub corners: [Vec2; 4],
}

impl SegmentQuad {
    /// Expands the quad into six triangle-list vertices (two triangles).
    #[inline]
    pub fn triangles(&self) -> [Vec2; 6] {
        let [a, b, c, d] = self.corners;
        [a, b, c, b, d, c]
    }
}

/// Tessellates the segment (p1, p2) of a polyline whose neighbors are `p0`
/// (before `p1`) and `p3` (after `p2`).
///
/// At the polyline boundaries callers pass `p0 == p1` / `p3 == p2`; the
/// joint then uses the segment direction itself instead of a bisector.
///
/// Returns `None` for zero-length segments (`p1 == p2`).
///
/// The per-endpoint offset is `half_width / dot(normal, miter)`. No miter
/// limit is applied: near-180 degree folds make the denominator approach
/// zero and the offsets grow without bound.
pub fn segment_quad(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    half_width: f32,
) -> Option<SegmentQuad> {
    if p1 == p2 {
        return None;
    }

    let line = (p2 - p1).normalize();
    let normal = line.perp();

    // Joint tangent: angle bisector of the incoming and outgoing unit
    // directions, renormalized.
    let tangent1 = if p0 == p1 {
        line
    } else {
        ((p1 - p0).normalize() + line).normalize()
    };
    let tangent2 = if p2 == p3 {
        line
    } else {
        ((p3 - p2).normalize() + line).normalize()
    };

    let miter1 = tangent1.perp();
    let miter2 = tangent2.perp();

    // Project the miter onto the segment normal; the inverse of that
    // projection stretches the offset as the joint sharpens.
    let len1 = half_width / normal.dot(miter1);
    let len2 = half_width / normal.dot(miter2);

    Some(SegmentQuad {
        corners: [
            p1 - miter1 * len1,
            p1 + miter1 * len1,
            p2 - miter2 * len2,
            p2 + miter2 * len2,
        ],
    })
}

/// Tessellates a whole polyline into triangle-list vertices, six per
/// surviving segment.
///
/// `width` is the full stroke width; each side is offset by `width / 2`.
/// Neighbor indices are clamped at both ends, so sequences of length 0 or 1
/// produce no geometry and no indexing hazards.
pub fn tessellate(points: &[Vec2], width: f32) -> Vec<Vec2> {
    let n = points.len();
    let half_width = width * 0.5;
    let mut out = Vec::with_capacity(n.saturating_sub(1) * 6);

    for i in 0..n {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[(i + 1).min(n - 1)];
        let p3 = points[(i + 2).min(n - 1)];

        if let Some(quad) = segment_quad(p0, p1, p2, p3, half_width) {
            out.extend_from_slice(&quad.triangles());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn assert_near(a: Vec2, b: Vec2) {
        assert!(
            (a - b).length() < EPS,
            "expected {a:?} to be near {b:?}"
        );
    }

    // ── segment_quad ──────────────────────────────────────────────────────

    #[test]
    fn horizontal_segment_offsets_straight_across() {
        // End-to-end property: (100,100) -> (200,100) at width 10 gives a
        // quad with horizontal long edges 10 units apart centered on y=100.
        let p1 = v(100.0, 100.0);
        let p2 = v(200.0, 100.0);
        let quad = segment_quad(p1, p1, p2, p2, 5.0).unwrap();

        assert_near(quad.corners[0], v(100.0, 95.0));
        assert_near(quad.corners[1], v(100.0, 105.0));
        assert_near(quad.corners[2], v(200.0, 95.0));
        assert_near(quad.corners[3], v(200.0, 105.0));
    }

    #[test]
    fn long_edges_perpendicular_to_miter_direction() {
        let p1 = v(10.0, 20.0);
        let p2 = v(70.0, -15.0);
        let quad = segment_quad(p1, p1, p2, p2, 4.0).unwrap();

        let miter = (p2 - p1).normalize().perp();
        let lower = quad.corners[2] - quad.corners[0];
        let upper = quad.corners[3] - quad.corners[1];
        assert!(lower.dot(miter).abs() < EPS);
        assert!(upper.dot(miter).abs() < EPS);
    }

    #[test]
    fn edge_span_matches_miter_length_formula() {
        // 90 degree corner: the bisector miter projects onto the normal at
        // cos(45), so each offset stretches to half_width * sqrt(2).
        let p1 = v(0.0, 0.0);
        let p2 = v(10.0, 0.0);
        let p3 = v(10.0, 10.0);
        let half = 3.0;
        let quad = segment_quad(p1, p1, p2, p3, half).unwrap();

        let span = (quad.corners[3] - quad.corners[2]).length();
        let expected = 2.0 * half * std::f32::consts::SQRT_2;
        assert!((span - expected).abs() < EPS, "span {span} != {expected}");
    }

    #[test]
    fn zero_length_segment_emits_nothing() {
        let p = v(5.0, 5.0);
        assert!(segment_quad(p, p, p, p, 2.0).is_none());
        assert!(segment_quad(v(0.0, 0.0), p, p, v(9.0, 9.0), 2.0).is_none());
    }

    #[test]
    fn interior_joint_shares_corners_between_segments() {
        // Collinear points: both segments compute the same bevel at the
        // shared vertex, so the stroke is watertight there.
        let pts = [v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0)];

        let first = segment_quad(pts[0], pts[0], pts[1], pts[2], 5.0).unwrap();
        let second = segment_quad(pts[0], pts[1], pts[2], pts[2], 5.0).unwrap();

        assert_near(first.corners[2], second.corners[0]);
        assert_near(first.corners[3], second.corners[1]);
    }

    #[test]
    fn bent_joint_is_watertight() {
        let pts = [v(0.0, 0.0), v(10.0, 0.0), v(18.0, 6.0)];

        let first = segment_quad(pts[0], pts[0], pts[1], pts[2], 4.0).unwrap();
        let second = segment_quad(pts[0], pts[1], pts[2], pts[2], 4.0).unwrap();

        assert_near(first.corners[2], second.corners[0]);
        assert_near(first.corners[3], second.corners[1]);
    }

    // ── tessellate ────────────────────────────────────────────────────────

    #[test]
    fn empty_and_single_point_produce_no_geometry() {
        assert!(tessellate(&[], 10.0).is_empty());
        assert!(tessellate(&[v(3.0, 4.0)], 10.0).is_empty());
    }

    #[test]
    fn two_points_produce_one_quad() {
        let verts = tessellate(&[v(0.0, 0.0), v(10.0, 0.0)], 10.0);
        assert_eq!(verts.len(), 6);
    }

    #[test]
    fn three_points_produce_two_quads() {
        let verts = tessellate(&[v(0.0, 0.0), v(10.0, 0.0), v(20.0, 5.0)], 10.0);
        assert_eq!(verts.len(), 12);
    }

    #[test]
    fn width_is_full_stroke_width() {
        let verts = tessellate(&[v(0.0, 50.0), v(100.0, 50.0)], 10.0);
        let ys: Vec<f32> = verts.iter().map(|p| p.y).collect();
        assert!(ys.iter().all(|&y| (y - 45.0).abs() < EPS || (y - 55.0).abs() < EPS));
    }
}
