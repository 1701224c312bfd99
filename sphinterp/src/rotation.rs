/////////////////////////////////////////////////////////////////////////////////////////////
//
// Rotates particle positions about an origin before a 3D field is sliced or projected.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use faer::{Mat, mat};
use sphinterp_utils::get_extents;

/// Rigid rotation of 3D positions about a fixed origin.
///
/// Angles are in **degrees** and are applied about the fixed z, then y,
/// then x axes, so for angles `[a, b, c]` the rotation matrix is
/// `Rx(c) * Ry(b) * Rz(a)`. Positive angles rotate counter-clockwise when
/// looking down the axis towards the origin.
#[derive(Clone, Debug)]
pub struct ViewRotation {
    matrix: Mat<f64>,
    origin: [f64; 3],
}

impl ViewRotation {
    pub fn new(angles: [f64; 3], origin: [f64; 3]) -> Self {
        let [a, b, c] = angles.map(f64::to_radians);

        let rot_z = mat![
            [a.cos(), -a.sin(), 0.0],
            [a.sin(), a.cos(), 0.0],
            [0.0, 0.0, 1.0],
        ];

        let rot_y = mat![
            [b.cos(), 0.0, b.sin()],
            [0.0, 1.0, 0.0],
            [-b.sin(), 0.0, b.cos()],
        ];

        let rot_x = mat![
            [1.0, 0.0, 0.0],
            [0.0, c.cos(), -c.sin()],
            [0.0, c.sin(), c.cos()],
        ];

        ViewRotation {
            matrix: rot_x * rot_y * rot_z,
            origin,
        }
    }

    /// The 3x3 rotation matrix.
    pub fn matrix(&self) -> &Mat<f64> {
        &self.matrix
    }

    /// The point rotated about.
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Returns `R (p - o) + o`.
    #[inline(always)]
    pub fn apply(&self, point: [f64; 3]) -> [f64; 3] {
        let local = [
            point[0] - self.origin[0],
            point[1] - self.origin[1],
            point[2] - self.origin[2],
        ];

        std::array::from_fn(|i| {
            self.matrix[(i, 0)] * local[0]
                + self.matrix[(i, 1)] * local[1]
                + self.matrix[(i, 2)] * local[2]
                + self.origin[i]
        })
    }

    /// Rotates every position in place.
    pub fn rotate_positions(&self, positions: &mut [[f64; 3]]) {
        positions.iter_mut().for_each(|p| *p = self.apply(*p));
    }
}

/// Midpoint of the axis-aligned bounding box of `positions`.
///
/// Axes with no finite coordinates contribute `0.0`.
pub(crate) fn bounding_box_centre(positions: &[[f64; 3]]) -> [f64; 3] {
    std::array::from_fn(|axis| {
        let coords: Vec<f64> = positions.iter().map(|p| p[axis]).collect();
        get_extents(&coords).map_or(0.0, |(min, max)| 0.5 * (min + max))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::utils::approx::*;

    fn assert_close(a: [f64; 3], b: [f64; 3]) {
        let approx_eq = ApproxEq { abs_tol: 1e-14, rel_tol: 1e-14 };
        for i in 0..3 {
            assert!(a[i] ~ b[i]);
        }
    }

    #[test]
    fn zero_angles_leave_points_unchanged() {
        let rotation = ViewRotation::new([0.0; 3], [1.0, 2.0, 3.0]);
        assert_eq!(rotation.apply([0.5, -0.25, 7.0]), [0.5, -0.25, 7.0]);
    }

    #[test]
    fn quarter_turns_about_each_axis() {
        let origin = [0.0; 3];

        let about_z = ViewRotation::new([90.0, 0.0, 0.0], origin);
        assert_close(about_z.apply([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);

        let about_y = ViewRotation::new([0.0, 90.0, 0.0], origin);
        assert_close(about_y.apply([0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);

        let about_x = ViewRotation::new([0.0, 0.0, 90.0], origin);
        assert_close(about_x.apply([0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn z_rotation_is_applied_first() {
        // Rz(90) takes x to y, then Rx(90) takes y to z.
        let rotation = ViewRotation::new([90.0, 0.0, 90.0], [0.0; 3]);
        assert_close(rotation.apply([1.0, 0.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn rotation_preserves_distance_to_origin() {
        let approx_eq = ApproxEq { abs_tol: 1e-13, rel_tol: 1e-13 };
        let origin = [0.3, -1.2, 4.0];
        let rotation = ViewRotation::new([17.0, -42.0, 133.0], origin);

        let point = [2.0, 1.0, -3.0];
        let rotated = rotation.apply(point);
        let before = sphinterp_utils::get_distance(&point, &origin);
        let after = sphinterp_utils::get_distance(&rotated, &origin);
        assert!(after ~ before);

        assert_close(rotation.apply(origin), origin);
    }

    #[test]
    fn bounding_box_centre_is_the_midpoint() {
        let positions = [[0.0, -1.0, 2.0], [4.0, 1.0, 2.0], [1.0, 0.5, 6.0]];
        assert_eq!(bounding_box_centre(&positions), [2.0, 0.0, 4.0]);
        assert_eq!(bounding_box_centre(&[]), [0.0; 3]);
    }
}
