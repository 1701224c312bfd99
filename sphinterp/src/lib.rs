/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API and high-level documentation for SPH particle interpolation.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Smoothed particle hydrodynamics (SPH) interpolation.
//!
//! SPH simulations represent a continuous field by particles, each carrying a
//! position, a smoothing length `h`, a density `rho`, a mass `m` and any
//! number of scalar quantities. A quantity `A` is recovered anywhere in space
//! as the kernel-weighted sum
//!
//! ```text
//! A(r) = sum_i  m_i / rho_i * A_i * W(|r - r_i|, h_i)
//! ```
//!
//! This crate evaluates that sum onto regular rasters and lines:
//!
//! - **2D grids** and **2D cross-sections** of two-dimensional data.
//! - **Column projections** of three-dimensional data, integrating the field
//!   through z using a tabulated line-of-sight kernel.
//! - **3D slices** through the plane `z = z_slice`.
//! - **3D cross-sections** along an arbitrary line in space.
//!
//! Kernels, their column-integrated form, and the quadrature used to build it
//! live in the companion [`sphinterp_utils`] crate.
//!
//! # Features
//! - Cubic, quartic and quintic B-spline kernels, selectable statically or at
//!   runtime through [`KernelType`](sphinterp_utils::KernelType)
//! - Exact zeros outside every particle's kernel support
//! - Parallel, deterministic rasterisation with optional KD-tree pruning
//! - Optional view rotation of 3D data before projecting or slicing
//! - Any tabular container can be interpolated by implementing [`ParticleSource`]
//!
//! # Examples
//!
//! ```
//! use sphinterp::{
//!     GridSpec, Interpolator, InterpolationParams, NeighbourSearch,
//!     generate_random_particles,
//! };
//! use sphinterp_utils::KernelType;
//!
//! // Random particles in the unit cube
//! let particles = generate_random_particles(500, 3, Some(42)).unwrap();
//!
//! let grid = GridSpec::new(32, 32, 0.0, 1.0, 0.0, 1.0);
//!
//! // Project through z, and slice through the middle of the cube
//! let interpolator = Interpolator::builder(&particles, KernelType::CubicSpline)
//!     .params(
//!         InterpolationParams::builder()
//!             .neighbour_search(NeighbourSearch::KdTree)
//!             .build(),
//!     )
//!     .build();
//!
//! let column = interpolator.interpolate_3d("A", "x", "y", "z", 1000, &grid).unwrap();
//! let slice = interpolator.interpolate_3d_cross("A", 0.5, "x", "y", "z", &grid).unwrap();
//!
//! assert_eq!((column.nrows(), column.ncols()), (32, 32));
//! assert_eq!((slice.nrows(), slice.ncols()), (32, 32));
//! ```
//!
//! # References
//! 1.  D. J. Price. Smoothed particle hydrodynamics and magnetohydrodynamics.
//!     Journal of Computational Physics, 231(3):759-794, 2012.
//! 2.  D. J. Price. SPLASH: An interactive visualisation tool for smoothed
//!     particle hydrodynamics simulations. PASA, 24(3):159-173, 2007.
pub mod config;

mod common;

mod error;

mod geometry;

mod interpolate;

mod interpolator;

mod kdtree;

mod particle_data;

mod particles;

pub mod progress;

mod rotation;

pub use {
    common::{csv_to_particle_table, generate_random_particles, grid_to_csv},
    config::{InterpolationParams, NeighbourSearch, ParticleColumns, ParamsBuilder},
    error::InterpolationError,
    geometry::{GridSpec, Line, LineSpec, LineSpec3},
    interpolate::{
        interpolate_2d, interpolate_2d_cross, interpolate_3d, interpolate_3d_cross,
        interpolate_3d_line,
    },
    interpolator::{Interpolator, InterpolatorBuilder},
    particle_data::{Column, ParticleSource, ParticleTable},
    rotation::ViewRotation,
};
