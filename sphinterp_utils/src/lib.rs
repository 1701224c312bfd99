/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports smoothing kernels, column tables, quadrature, and helpers used by sphinterp.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Kernel utilities for the [`sphinterp`] crate
//!
//! Provides the B-spline smoothing kernels used to interpolate SPH particle
//! data, the line-of-sight integrated (column) form of those kernels, and the
//! adaptive quadrature used to build it.
//!
//! [`sphinterp`]: https://docs.rs/sphinterp
mod column_kernel;
mod constants;
mod quadrature;
mod spline_kernels;
mod traits;
mod utils;

/// Implemented smoothing kernels.
pub mod kernels {
    pub use super::spline_kernels::*;
}

pub use {
    column_kernel::{ColumnKernel, ColumnKernelError, line_of_sight_integral},
    constants::SplineConstants,
    quadrature::{
        Integral, QuadratureSettings, integrate, integrate_with_breakpoints,
        integrate_with_settings,
    },
    traits::{Dimensions, SmoothingKernel},
    utils::{KernelType, get_distance, get_extents, linspace},
};
