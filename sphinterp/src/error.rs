/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the error type returned by the particle interpolation routines.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use sphinterp_utils::ColumnKernelError;
use std::{error::Error, fmt};

/// Errors raised while validating inputs to, or gathering particles for, an
/// interpolation.
///
/// Every check runs before any accumulation, so a routine either returns the
/// full output array or one of these errors.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// A named column is missing from the particle source.
    ColumnNotFound { name: String },

    /// A column does not hold one value per particle.
    ColumnLength {
        name: String,
        found: usize,
        expected: usize,
    },

    /// A particle coordinate is NaN or infinite.
    InvalidPosition {
        particle: usize,
        axis: String,
        value: f64,
    },

    /// A particle has a smoothing length that is zero, negative or NaN.
    InvalidSmoothingLength { particle: usize, value: f64 },

    /// A particle has zero density, so its volume weight is undefined.
    ZeroDensity { particle: usize },

    /// The requested grid, line or column table cannot be sampled.
    InvalidGridSpec { reason: String },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::ColumnNotFound { name } => {
                write!(f, "column {:?} not found in particle data", name)
            }
            InterpolationError::ColumnLength {
                name,
                found,
                expected,
            } => write!(
                f,
                "column {:?} has {} values (expected {})",
                name, found, expected
            ),
            InterpolationError::InvalidPosition {
                particle,
                axis,
                value,
            } => write!(
                f,
                "particle {} has non-finite {:?} coordinate {}",
                particle, axis, value
            ),
            InterpolationError::InvalidSmoothingLength { particle, value } => write!(
                f,
                "particle {} has invalid smoothing length {} (must be > 0)",
                particle, value
            ),
            InterpolationError::ZeroDensity { particle } => {
                write!(f, "particle {} has zero density", particle)
            }
            InterpolationError::InvalidGridSpec { reason } => {
                write!(f, "invalid sampling geometry: {}", reason)
            }
        }
    }
}

impl Error for InterpolationError {}

impl From<ColumnKernelError> for InterpolationError {
    fn from(value: ColumnKernelError) -> Self {
        InterpolationError::InvalidGridSpec {
            reason: value.to_string(),
        }
    }
}
