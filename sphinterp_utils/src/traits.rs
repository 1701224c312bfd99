/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the smoothing kernel trait shared by every interpolation routine.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::column_kernel::{ColumnKernel, ColumnKernelError};
use serde::{Deserialize, Serialize};

/// Number of spatial dimensions a kernel is normalised for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimensions {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Dimensions {
    /// Power of the smoothing length that turns a kernel value into a density weight.
    #[inline(always)]
    pub fn exponent(self) -> i32 {
        self as i32
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }
}

/// A compact-support smoothing kernel of normalised distance `q = r / h`.
///
/// Implementors must return exactly `0.0` for `q >= radius()`, so that pixels
/// outside the support of every particle come out as exact zeros.
pub trait SmoothingKernel: Send + Sync {
    /// Compact support radius in units of the smoothing length.
    fn radius(&self) -> f64;

    /// Kernel weight at normalised distance `q`, normalised for `ndim` dimensions.
    fn weight(&self, q: f64, ndim: Dimensions) -> f64;

    /// Normalised distances at which the piecewise form changes, ending at `radius()`.
    fn knots(&self) -> &'static [f64];

    /// Builds a table of this kernel integrated through the third axis,
    /// sampled at `samples` evenly spaced radii in `[0, radius()]`.
    fn column_kernel(&self, samples: usize) -> Result<ColumnKernel, ColumnKernelError> {
        ColumnKernel::new(self, samples)
    }
}
