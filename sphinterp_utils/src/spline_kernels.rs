/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the cubic, quartic and quintic B-spline smoothing kernels.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    Dimensions, SmoothingKernel,
    constants::{
        CUBIC_SPLINE_CONSTANTS, QUARTIC_SPLINE_CONSTANTS, QUINTIC_SPLINE_CONSTANTS,
        SplineConstants,
    },
};

#[inline(always)]
fn normalise(constants: &SplineConstants, shape: f64, ndim: Dimensions) -> f64 {
    constants.norms[ndim.index()] * shape
}

/// M4 cubic spline kernel with support radius 2.
///
/// `f(q) = 1 - 3/2 q^2 + 3/4 q^3` for `q < 1`, `1/4 (2 - q)^3` for `q < 2`.
#[derive(Clone, Debug, Copy, Default)]
pub struct CubicSplineKernel;

impl CubicSplineKernel {
    #[inline(always)]
    pub fn shape(&self, q: f64) -> f64 {
        if q < 1.0 {
            1.0 - 1.5 * q.powi(2) + 0.75 * q.powi(3)
        } else if q < 2.0 {
            0.25 * (2.0 - q).powi(3)
        } else {
            0.0
        }
    }
}

impl SmoothingKernel for CubicSplineKernel {
    #[inline(always)]
    fn radius(&self) -> f64 {
        CUBIC_SPLINE_CONSTANTS.radius
    }

    #[inline(always)]
    fn weight(&self, q: f64, ndim: Dimensions) -> f64 {
        normalise(&CUBIC_SPLINE_CONSTANTS, self.shape(q), ndim)
    }

    fn knots(&self) -> &'static [f64] {
        CUBIC_SPLINE_CONSTANTS.knots
    }
}

/// M5 quartic spline kernel with support radius 2.5.
#[derive(Clone, Debug, Copy, Default)]
pub struct QuarticSplineKernel;

impl QuarticSplineKernel {
    #[inline(always)]
    pub fn shape(&self, q: f64) -> f64 {
        if q < 0.5 {
            (2.5 - q).powi(4) - 5.0 * (1.5 - q).powi(4) + 10.0 * (0.5 - q).powi(4)
        } else if q < 1.5 {
            (2.5 - q).powi(4) - 5.0 * (1.5 - q).powi(4)
        } else if q < 2.5 {
            (2.5 - q).powi(4)
        } else {
            0.0
        }
    }
}

impl SmoothingKernel for QuarticSplineKernel {
    #[inline(always)]
    fn radius(&self) -> f64 {
        QUARTIC_SPLINE_CONSTANTS.radius
    }

    #[inline(always)]
    fn weight(&self, q: f64, ndim: Dimensions) -> f64 {
        normalise(&QUARTIC_SPLINE_CONSTANTS, self.shape(q), ndim)
    }

    fn knots(&self) -> &'static [f64] {
        QUARTIC_SPLINE_CONSTANTS.knots
    }
}

/// M6 quintic spline kernel with support radius 3.
#[derive(Clone, Debug, Copy, Default)]
pub struct QuinticSplineKernel;

impl QuinticSplineKernel {
    #[inline(always)]
    pub fn shape(&self, q: f64) -> f64 {
        if q < 1.0 {
            (3.0 - q).powi(5) - 6.0 * (2.0 - q).powi(5) + 15.0 * (1.0 - q).powi(5)
        } else if q < 2.0 {
            (3.0 - q).powi(5) - 6.0 * (2.0 - q).powi(5)
        } else if q < 3.0 {
            (3.0 - q).powi(5)
        } else {
            0.0
        }
    }
}

impl SmoothingKernel for QuinticSplineKernel {
    #[inline(always)]
    fn radius(&self) -> f64 {
        QUINTIC_SPLINE_CONSTANTS.radius
    }

    #[inline(always)]
    fn weight(&self, q: f64, ndim: Dimensions) -> f64 {
        normalise(&QUINTIC_SPLINE_CONSTANTS, self.shape(q), ndim)
    }

    fn knots(&self) -> &'static [f64] {
        QUINTIC_SPLINE_CONSTANTS.knots
    }
}
