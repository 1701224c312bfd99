/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines support radii, knots, and normalisation constants for the spline kernels.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use std::f64::consts::PI;

/// Constants that define a particular B-spline smoothing kernel.
#[derive(Clone, Debug, Copy)]
pub struct SplineConstants {
    /// Compact support radius, in units of the smoothing length.
    pub radius: f64,

    /// Normalised distances at which the piecewise polynomial changes form.
    /// The last knot is always the support radius.
    pub knots: &'static [f64],

    /// Normalisation in one, two and three dimensions.
    pub norms: [f64; 3],
}

/// M4 cubic spline.
pub const CUBIC_SPLINE_CONSTANTS: SplineConstants = SplineConstants {
    radius: 2.0,
    knots: &[1.0, 2.0],
    norms: [2.0 / 3.0, 10.0 / (7.0 * PI), 1.0 / PI],
};

/// M5 quartic spline.
pub const QUARTIC_SPLINE_CONSTANTS: SplineConstants = SplineConstants {
    radius: 2.5,
    knots: &[0.5, 1.5, 2.5],
    norms: [1.0 / 24.0, 96.0 / (1199.0 * PI), 1.0 / (20.0 * PI)],
};

/// M6 quintic spline.
pub const QUINTIC_SPLINE_CONSTANTS: SplineConstants = SplineConstants {
    radius: 3.0,
    knots: &[1.0, 2.0, 3.0],
    norms: [1.0 / 120.0, 7.0 / (478.0 * PI), 1.0 / (120.0 * PI)],
};
