/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes one-call interpolation functions using default parameters.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! One-call interpolation routines.
//!
//! Each function reads smoothing length, density and mass from the `"h"`,
//! `"rho"` and `"m"` columns (or scalar parameters) of the source, and uses
//! [`InterpolationParams::default`](crate::InterpolationParams). Build an
//! [`Interpolator`] to change column names, rotate 3D views or report progress.

use crate::{
    InterpolationError, Interpolator,
    geometry::{GridSpec, LineSpec, LineSpec3},
    particle_data::ParticleSource,
};
use faer::{Col, Mat};
use sphinterp_utils::SmoothingKernel;

/// Interpolates `target` onto a 2D grid.
///
/// # Examples
///
/// ```
/// use sphinterp::{GridSpec, ParticleTable, interpolate_2d};
/// use sphinterp_utils::{Dimensions, SmoothingKernel, kernels::CubicSplineKernel};
///
/// let particles = ParticleTable::new()
///     .with_column("x", vec![0.0]).unwrap()
///     .with_column("y", vec![0.0]).unwrap()
///     .with_column("P", vec![1.0]).unwrap()
///     .with_param("h", 1.0)
///     .with_param("rho", 1.0)
///     .with_param("m", 1.0);
///
/// let grid = GridSpec::new(4, 4, -2.0, 2.0, -2.0, 2.0);
/// let image = interpolate_2d(&particles, "P", "x", "y", CubicSplineKernel, &grid).unwrap();
///
/// let centre = CubicSplineKernel.weight((0.5f64 * 0.5 + 0.5 * 0.5).sqrt(), Dimensions::Two);
/// assert!((image[(2, 2)] - centre).abs() < 1e-15);
/// ```
pub fn interpolate_2d<S, K>(
    source: &S,
    target: &str,
    x: &str,
    y: &str,
    kernel: K,
    grid: &GridSpec,
) -> Result<Mat<f64>, InterpolationError>
where
    S: ParticleSource + ?Sized,
    K: SmoothingKernel,
{
    Interpolator::builder(source, kernel)
        .build()
        .interpolate_2d(target, x, y, grid)
}

/// Interpolates `target` along a 2D line.
pub fn interpolate_2d_cross<S, K>(
    source: &S,
    target: &str,
    x: &str,
    y: &str,
    kernel: K,
    line: &LineSpec,
) -> Result<Col<f64>, InterpolationError>
where
    S: ParticleSource + ?Sized,
    K: SmoothingKernel,
{
    Interpolator::builder(source, kernel)
        .build()
        .interpolate_2d_cross(target, x, y, line)
}

/// Projects a 3D field onto the x-y plane, integrating through z with a
/// column kernel table of `samples` entries.
pub fn interpolate_3d<S, K>(
    source: &S,
    target: &str,
    x: &str,
    y: &str,
    z: &str,
    kernel: K,
    samples: usize,
    grid: &GridSpec,
) -> Result<Mat<f64>, InterpolationError>
where
    S: ParticleSource + ?Sized,
    K: SmoothingKernel,
{
    Interpolator::builder(source, kernel)
        .build()
        .interpolate_3d(target, x, y, z, samples, grid)
}

/// Slices a 3D field with the plane `z = z_slice`.
pub fn interpolate_3d_cross<S, K>(
    source: &S,
    target: &str,
    z_slice: f64,
    x: &str,
    y: &str,
    z: &str,
    kernel: K,
    grid: &GridSpec,
) -> Result<Mat<f64>, InterpolationError>
where
    S: ParticleSource + ?Sized,
    K: SmoothingKernel,
{
    Interpolator::builder(source, kernel)
        .build()
        .interpolate_3d_cross(target, z_slice, x, y, z, grid)
}

/// Interpolates a 3D field along a 3D line.
pub fn interpolate_3d_line<S, K>(
    source: &S,
    target: &str,
    x: &str,
    y: &str,
    z: &str,
    kernel: K,
    line: &LineSpec3,
) -> Result<Col<f64>, InterpolationError>
where
    S: ParticleSource + ?Sized,
    K: SmoothingKernel,
{
    Interpolator::builder(source, kernel)
        .build()
        .interpolate_3d_line(target, x, y, z, line)
}
