/////////////////////////////////////////////////////////////////////////////////////////////
//
// Builds lookup tables of smoothing kernels integrated along the line of sight.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{Dimensions, SmoothingKernel, quadrature::integrate_with_breakpoints, utils::linspace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Errors raised while building a [`ColumnKernel`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKernelError {
    /// At least two samples are needed to interpolate between `q = 0` and the support radius.
    TooFewSamples { samples: usize },
}

impl fmt::Display for ColumnKernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKernelError::TooFewSamples { samples } => write!(
                f,
                "column kernel needs at least 2 samples, got {}",
                samples
            ),
        }
    }
}

impl Error for ColumnKernelError {}

/// Integrates the 3D form of `kernel` through a column passing at normalised
/// distance `q` from the particle:
///
/// `F(q) = 2 * integral_0^sqrt(R^2 - q^2) W(sqrt(q^2 + z^2), 3) dz`
///
/// The integration range is split wherever `sqrt(q^2 + z^2)` crosses one of
/// the kernel's knots, so each piece is smooth.
pub fn line_of_sight_integral<K>(kernel: &K, q: f64) -> f64
where
    K: SmoothingKernel + ?Sized,
{
    let radius = kernel.radius();
    if q >= radius {
        return 0.0;
    }

    let q2 = q * q;
    let z_max = (radius * radius - q2).sqrt();

    let mut breakpoints = Vec::with_capacity(kernel.knots().len() + 1);
    breakpoints.push(0.0);
    breakpoints.extend(
        kernel
            .knots()
            .iter()
            .filter(|&&knot| knot > q)
            .map(|&knot| (knot * knot - q2).sqrt().min(z_max)),
    );

    let integral = integrate_with_breakpoints(
        |z| kernel.weight((q2 + z * z).sqrt(), Dimensions::Three),
        &breakpoints,
    );

    2.0 * integral.value
}

/// A smoothing kernel integrated along one axis, tabulated at evenly spaced
/// normalised radii from `0` to the support radius inclusive.
///
/// Used to project a 3D field onto a plane: a particle's contribution to a
/// pixel at planar distance `r` is proportional to `F(r / h)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnKernel {
    radius: f64,
    values: Vec<f64>,
}

impl ColumnKernel {
    /// Tabulates the column integral of `kernel` at `samples` radii in `[0, radius]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sphinterp_utils::{ColumnKernel, kernels::CubicSplineKernel};
    ///
    /// let table = ColumnKernel::new(&CubicSplineKernel, 1000).unwrap();
    /// assert_eq!(table.samples(), 1000);
    /// assert_eq!(table.interpolate(2.0), 0.0);
    /// ```
    pub fn new<K>(kernel: &K, samples: usize) -> Result<Self, ColumnKernelError>
    where
        K: SmoothingKernel + ?Sized,
    {
        if samples < 2 {
            return Err(ColumnKernelError::TooFewSamples { samples });
        }

        let radius = kernel.radius();
        let values = linspace(0.0, radius, samples)
            .into_par_iter()
            .map(|q| line_of_sight_integral(kernel, q))
            .collect();

        Ok(Self { radius, values })
    }

    /// Support radius the table spans.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of tabulated radii.
    pub fn samples(&self) -> usize {
        self.values.len()
    }

    /// Tabulated column integrals.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Normalised radii at which [`values`](Self::values) were tabulated.
    pub fn radii(&self) -> Vec<f64> {
        linspace(0.0, self.radius, self.values.len())
    }

    /// Linearly interpolates the table at normalised radius `q`.
    ///
    /// Returns the first sample for `q <= 0` and exactly `0.0` for `q >= radius`.
    #[inline(always)]
    pub fn interpolate(&self, q: f64) -> f64 {
        if !(q < self.radius) {
            return 0.0;
        }
        if q <= 0.0 {
            return self.values[0];
        }

        let last = self.values.len() - 1;
        let spacing = self.radius / last as f64;
        let index = ((q / spacing) as usize).min(last - 1);

        let lower = self.values[index];
        let slope = (self.values[index + 1] - lower) / spacing;
        lower + slope * (q - index as f64 * spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{CubicSplineKernel, QuarticSplineKernel, QuinticSplineKernel};
    use crate::quadrature::integrate_with_breakpoints;
    use equator::assert;
    use faer::utils::approx::*;
    use std::f64::consts::PI;

    /// Composite Simpson's rule, kept independent of the adaptive quadrature.
    fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, intervals: usize) -> f64 {
        let width = (b - a) / intervals as f64;
        let interior: f64 = (1..intervals)
            .map(|i| {
                let factor = if i % 2 == 1 { 4.0 } else { 2.0 };
                factor * f(a + i as f64 * width)
            })
            .sum();
        (f(a) + f(b) + interior) * width / 3.0
    }

    fn simpson_column<K: SmoothingKernel>(kernel: &K, q: f64) -> f64 {
        let radius = kernel.radius();
        let z_max = (radius * radius - q * q).max(0.0).sqrt();
        2.0 * simpson(
            |z| kernel.weight((q * q + z * z).sqrt(), Dimensions::Three),
            0.0,
            z_max,
            20_000,
        )
    }

    #[test]
    fn cubic_column_through_centre_matches_closed_form() {
        let approx_eq = ApproxEq { abs_tol: 1e-14, rel_tol: 1e-13 };

        // 2/pi * (int_0^1 (1 - 1.5 z^2 + 0.75 z^3) dz + int_1^2 0.25 (2 - z)^3 dz) = 1.5 / pi
        assert!(line_of_sight_integral(&CubicSplineKernel, 0.0) ~ 1.5 / PI);
    }

    #[test]
    fn column_integrals_match_simpson_reference() {
        let approx_eq = ApproxEq { abs_tol: 1e-10, rel_tol: 1e-8 };

        for q in [0.0, 0.13, 0.5, 0.999, 1.0, 1.7, 2.2] {
            assert!(line_of_sight_integral(&QuarticSplineKernel, q) ~ simpson_column(&QuarticSplineKernel, q));
            assert!(line_of_sight_integral(&QuinticSplineKernel, q) ~ simpson_column(&QuinticSplineKernel, q));
        }
    }

    fn check_planar_normalisation<K: SmoothingKernel>(kernel: &K) {
        let approx_eq = ApproxEq { abs_tol: 1e-10, rel_tol: 1e-10 };

        let mut breakpoints = vec![0.0];
        breakpoints.extend_from_slice(kernel.knots());

        let total = integrate_with_breakpoints(
            |q| 2.0 * PI * q * line_of_sight_integral(kernel, q),
            &breakpoints,
        );
        assert!(total.value ~ 1.0);
    }

    #[test]
    fn projected_kernel_is_normalised_in_the_plane() {
        check_planar_normalisation(&CubicSplineKernel);
        check_planar_normalisation(&QuarticSplineKernel);
        check_planar_normalisation(&QuinticSplineKernel);
    }

    #[test]
    fn table_spans_zero_to_radius() {
        let table = ColumnKernel::new(&QuarticSplineKernel, 501).unwrap();

        assert_eq!(table.samples(), 501);
        assert_eq!(table.radius(), 2.5);
        assert_eq!(table.radii().first().copied(), Some(0.0));
        assert_eq!(table.radii().last().copied(), Some(2.5));
        assert_eq!(table.values().last().copied(), Some(0.0));
        assert_eq!(table.values()[0], line_of_sight_integral(&QuarticSplineKernel, 0.0));
    }

    #[test]
    fn interpolation_clamps_outside_the_table() {
        let table = ColumnKernel::new(&CubicSplineKernel, 100).unwrap();

        assert_eq!(table.interpolate(-0.5), table.values()[0]);
        assert_eq!(table.interpolate(0.0), table.values()[0]);
        assert_eq!(table.interpolate(2.0), 0.0);
        assert_eq!(table.interpolate(7.5), 0.0);
        assert_eq!(table.interpolate(f64::NAN), 0.0);
    }

    #[test]
    fn interpolation_is_linear_between_nodes() {
        let approx_eq = ApproxEq { abs_tol: 1e-15, rel_tol: 1e-12 };
        let table = ColumnKernel::new(&QuinticSplineKernel, 31).unwrap();
        let radii = table.radii();
        let values = table.values();

        for i in [0usize, 7, 15, 29] {
            assert!(table.interpolate(radii[i]) ~ values[i]);

            let midpoint = 0.5 * (radii[i] + radii[i + 1]);
            assert!(table.interpolate(midpoint) ~ 0.5 * (values[i] + values[i + 1]));
        }
    }

    #[test]
    fn fine_table_tracks_the_exact_integral() {
        let approx_eq = ApproxEq { abs_tol: 1e-9, rel_tol: 1e-6 };
        let table = QuinticSplineKernel.column_kernel(10_000).unwrap();

        for q in [0.05, 0.4, 1.23, 2.5] {
            assert!(table.interpolate(q) ~ line_of_sight_integral(&QuinticSplineKernel, q));
        }
    }

    #[test]
    fn too_few_samples_are_rejected() {
        assert_eq!(
            ColumnKernel::new(&CubicSplineKernel, 1),
            Err(ColumnKernelError::TooFewSamples { samples: 1 })
        );
        assert_eq!(
            CubicSplineKernel.column_kernel(0),
            Err(ColumnKernelError::TooFewSamples { samples: 0 })
        );
    }
}
