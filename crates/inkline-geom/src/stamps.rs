//! Circle-stamp placement along a polyline.
//!
//! A cheaper, lower-fidelity alternative to miter tessellation: the stroke is
//! approximated by fixed-radius disks, which scallops visibly when stamps are
//! sparse relative to the radius.

use crate::Vec2;

/// Computes disk centers approximating a thick polyline.
///
/// One disk is placed at every vertex, plus interior stamps along each
/// segment at an arc-length spacing equal to `radius` — `floor(len / radius)`
/// of them for a segment of length `len`. Zero-length segments contribute no
/// interior stamps, and a non-positive radius yields vertex disks only.
pub fn stamp_centers(points: &[Vec2], radius: f32) -> Vec<Vec2> {
    let mut centers: Vec<Vec2> = points.to_vec();

    if radius <= 0.0 {
        return centers;
    }

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let delta = p2 - p1;
        let len = delta.length();
        if len == 0.0 {
            continue;
        }

        let dir = delta / len;
        let count = (len / radius).floor() as u32;
        for i in 1..=count {
            centers.push(p1 + dir * (radius * i as f32));
        }
    }

    centers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn every_vertex_gets_a_disk() {
        let pts = [v(0.0, 0.0), v(100.0, 0.0), v(100.0, 50.0)];
        let centers = stamp_centers(&pts, 1000.0);
        // Radius larger than every segment: vertex disks only.
        assert_eq!(centers, pts.to_vec());
    }

    #[test]
    fn interior_count_is_floor_of_length_over_radius() {
        let centers = stamp_centers(&[v(0.0, 0.0), v(25.0, 0.0)], 10.0);
        // 2 vertex disks + floor(25 / 10) = 2 interior stamps.
        assert_eq!(centers.len(), 4);
        assert_eq!(centers[2], v(10.0, 0.0));
        assert_eq!(centers[3], v(20.0, 0.0));
    }

    #[test]
    fn exact_multiple_lands_a_stamp_on_the_far_vertex() {
        let centers = stamp_centers(&[v(0.0, 0.0), v(30.0, 0.0)], 10.0);
        assert_eq!(centers.len(), 2 + 3);
        assert_eq!(centers.last(), Some(&v(30.0, 0.0)));
    }

    #[test]
    fn zero_length_segment_adds_no_interior_stamps() {
        let p = v(5.0, 5.0);
        let centers = stamp_centers(&[p, p], 2.0);
        assert_eq!(centers.len(), 2);
    }

    #[test]
    fn empty_and_single_point() {
        assert!(stamp_centers(&[], 5.0).is_empty());
        assert_eq!(stamp_centers(&[v(1.0, 2.0)], 5.0), vec![v(1.0, 2.0)]);
    }

    #[test]
    fn non_positive_radius_yields_vertex_disks_only() {
        let pts = [v(0.0, 0.0), v(50.0, 0.0)];
        assert_eq!(stamp_centers(&pts, 0.0), pts.to_vec());
        assert_eq!(stamp_centers(&pts, -3.0), pts.to_vec());
    }

    #[test]
    fn stamps_follow_the_segment_direction() {
        let centers = stamp_centers(&[v(0.0, 0.0), v(0.0, 22.0)], 10.0);
        assert_eq!(centers[2], v(0.0, 10.0));
        assert_eq!(centers[3], v(0.0, 20.0));
    }
}
