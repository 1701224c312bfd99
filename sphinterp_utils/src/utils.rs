/////////////////////////////////////////////////////////////////////////////////////////////
//
// Supplies general-purpose utilities for sampling, distances, extents, and kernel dispatch.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{Dimensions, SmoothingKernel};
use serde::{Deserialize, Serialize};

/// Returns `num` evenly spaced values over `[start, stop]`.
///
/// Both end points are included and the last value is exactly `stop`.
///
/// # Examples
///
/// ```
/// use sphinterp_utils::linspace;
///
/// assert_eq!(linspace(0.0, 2.0, 5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// assert_eq!(linspace(1.0, 3.0, 1), vec![1.0]);
/// assert!(linspace(1.0, 3.0, 0).is_empty());
/// ```
#[inline(always)]
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Calculates the euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use sphinterp_utils::get_distance;
///
/// let dist = get_distance(&[1.0, 2.0], &[4.0, 6.0]);
///
/// assert_eq!(dist, 5.0);
/// ```
#[inline(always)]
pub fn get_distance(target: &[f64], source: &[f64]) -> f64 {
    let mut dist = 0.0;
    for (t, s) in target.iter().zip(source.iter()) {
        let diff = t - s;
        dist += diff * diff;
    }
    dist.sqrt()
}

/// Returns the minimum and maximum of a slice, ignoring NaNs.
///
/// Returns `None` for an empty slice or one holding only NaNs.
///
/// # Examples
///
/// ```
/// use sphinterp_utils::get_extents;
///
/// assert_eq!(get_extents(&[1.0, -2.0, 4.0]), Some((-2.0, 4.0)));
/// assert_eq!(get_extents(&[]), None);
/// ```
#[inline(always)]
pub fn get_extents(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .filter(|value| !value.is_nan())
        .fold(None, |extents, &value| match extents {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

// Runtime kernel selector generated from the kernel registry below.
// Assumes each kernel type is a unit struct implementing `Default` and `SmoothingKernel`.
macro_rules! for_each_kernel {
    ( registry = [ $( ($V:ident, $name:literal, $Kty:path) ),* $(,)? ] ) => {

        /// Runtime kernel selector built from the kernel registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum KernelType {
            $( $V, )*
        }

        impl KernelType {
            /// Every registered kernel, in registry order.
            pub const ALL: &'static [KernelType] = &[ $( KernelType::$V, )* ];

            /// Short lowercase name of the kernel.
            pub fn name(&self) -> &'static str {
                match self {
                    $( KernelType::$V => $name, )*
                }
            }
        }

        impl SmoothingKernel for KernelType {
            #[inline(always)]
            fn radius(&self) -> f64 {
                match self {
                    $( KernelType::$V => <$Kty>::default().radius(), )*
                }
            }

            #[inline(always)]
            fn weight(&self, q: f64, ndim: Dimensions) -> f64 {
                match self {
                    $( KernelType::$V => <$Kty>::default().weight(q, ndim), )*
                }
            }

            fn knots(&self) -> &'static [f64] {
                match self {
                    $( KernelType::$V => <$Kty>::default().knots(), )*
                }
            }
        }
    };
}

for_each_kernel! {
    registry = [
        (CubicSpline,   "cubic",   crate::kernels::CubicSplineKernel),
        (QuarticSpline, "quartic", crate::kernels::QuarticSplineKernel),
        (QuinticSpline, "quintic", crate::kernels::QuinticSplineKernel),
    ]
}

impl Default for KernelType {
    fn default() -> Self {
        KernelType::CubicSpline
    }
}
