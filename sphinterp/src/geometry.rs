/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the raster grids and sample lines that particle data is interpolated onto.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::InterpolationError;
use serde::{Deserialize, Serialize};

/// A regular 2D raster over `[x_min, x_max] x [y_min, y_max]`.
///
/// Rows run along `y` and columns along `x`, so an image built on this grid
/// has shape `(pixels_y, pixels_x)`. Values are sampled at pixel centres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of pixels along `x`.
    pub pixels_x: usize,

    /// Number of pixels along `y`.
    pub pixels_y: usize,

    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl GridSpec {
    pub fn new(
        pixels_x: usize,
        pixels_y: usize,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Self {
        Self {
            pixels_x,
            pixels_y,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Checks the grid has pixels and finite, increasing bounds.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.pixels_x == 0 || self.pixels_y == 0 {
            return Err(InterpolationError::InvalidGridSpec {
                reason: format!(
                    "grid must have at least one pixel per axis, got {} x {}",
                    self.pixels_x, self.pixels_y
                ),
            });
        }

        for (axis, min, max) in [("x", self.x_min, self.x_max), ("y", self.y_min, self.y_max)] {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(InterpolationError::InvalidGridSpec {
                    reason: format!(
                        "{} bounds must be finite with min < max, got [{}, {}]",
                        axis, min, max
                    ),
                });
            }
        }

        Ok(())
    }

    /// Width of one pixel along `x`.
    #[inline(always)]
    pub fn pixel_width(&self) -> f64 {
        (self.x_max - self.x_min) / self.pixels_x as f64
    }

    /// Height of one pixel along `y`.
    #[inline(always)]
    pub fn pixel_height(&self) -> f64 {
        (self.y_max - self.y_min) / self.pixels_y as f64
    }

    /// Centre of the pixel in row `i` and column `j`.
    #[inline(always)]
    pub fn pixel_centre(&self, i: usize, j: usize) -> (f64, f64) {
        (
            self.x_min + (j as f64 + 0.5) * self.pixel_width(),
            self.y_min + (i as f64 + 0.5) * self.pixel_height(),
        )
    }

    /// `x` coordinate of every pixel column centre.
    pub fn x_centres(&self) -> Vec<f64> {
        (0..self.pixels_x).map(|j| self.pixel_centre(0, j).0).collect()
    }

    /// `y` coordinate of every pixel row centre.
    pub fn y_centres(&self) -> Vec<f64> {
        (0..self.pixels_y).map(|i| self.pixel_centre(i, 0).1).collect()
    }
}

/// A straight line from `start` to `end` divided into `steps` equal segments,
/// sampled at segment midpoints.
///
/// Use [`LineSpec`] for lines in the plane and [`LineSpec3`] for lines in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<const D: usize> {
    pub start: [f64; D],
    pub end: [f64; D],
    pub steps: usize,
}

/// A line through a 2D field.
pub type LineSpec = Line<2>;

/// A line through a 3D field.
pub type LineSpec3 = Line<3>;

impl Line<2> {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, steps: usize) -> Self {
        Self {
            start: [x1, y1],
            end: [x2, y2],
            steps,
        }
    }
}

impl Line<3> {
    pub fn new(start: [f64; 3], end: [f64; 3], steps: usize) -> Self {
        Self { start, end, steps }
    }
}

impl<const D: usize> Line<D> {
    /// Checks the line has samples and finite endpoints.
    ///
    /// A line whose endpoints coincide is valid; every sample lands on that point.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.steps == 0 {
            return Err(InterpolationError::InvalidGridSpec {
                reason: String::from("line must have at least one step"),
            });
        }

        if self
            .start
            .iter()
            .chain(self.end.iter())
            .any(|coord| !coord.is_finite())
        {
            return Err(InterpolationError::InvalidGridSpec {
                reason: format!(
                    "line endpoints must be finite, got {:?} to {:?}",
                    self.start, self.end
                ),
            });
        }

        Ok(())
    }

    /// Position of sample `k`.
    #[inline(always)]
    pub fn sample(&self, k: usize) -> [f64; D] {
        std::array::from_fn(|axis| {
            let step = (self.end[axis] - self.start[axis]) / self.steps as f64;
            self.start[axis] + (k as f64 + 0.5) * step
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::utils::approx::*;

    #[test]
    fn pixel_centres_sit_half_a_pixel_inside_the_bounds() {
        let approx_eq = ApproxEq { abs_tol: 1e-15, rel_tol: 1e-15 };
        let grid = GridSpec::new(10, 15, 0.0, 2.0, 0.0, 3.0);

        let (x, y) = grid.pixel_centre(0, 0);
        assert!(x ~ 0.1);
        assert!(y ~ 0.1);

        let (x, y) = grid.pixel_centre(14, 9);
        assert!(x ~ 1.9);
        assert!(y ~ 2.9);

        assert_eq!(grid.x_centres().len(), 10);
        assert_eq!(grid.y_centres().len(), 15);
    }

    #[test]
    fn invalid_grids_are_rejected() {
        assert!(GridSpec::new(0, 4, 0.0, 1.0, 0.0, 1.0).validate().is_err());
        assert!(GridSpec::new(4, 4, 1.0, 1.0, 0.0, 1.0).validate().is_err());
        assert!(GridSpec::new(4, 4, 0.0, 1.0, 2.0, -1.0).validate().is_err());
        assert!(GridSpec::new(4, 4, 0.0, f64::NAN, 0.0, 1.0).validate().is_err());
        assert!(GridSpec::new(1, 1, -1.0, 1.0, -1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn line_samples_are_segment_midpoints() {
        let approx_eq = ApproxEq { abs_tol: 1e-15, rel_tol: 1e-15 };
        let line = LineSpec::new(0.0, 1.0, 2.0, -1.0, 4);

        let first = line.sample(0);
        assert!(first[0] ~ 0.25);
        assert!(first[1] ~ 0.75);

        let last = line.sample(3);
        assert!(last[0] ~ 1.75);
        assert!(last[1] ~ -0.75);
    }

    #[test]
    fn degenerate_lines_are_allowed() {
        let line = LineSpec3::new([0.5, 0.5, 0.5], [0.5, 0.5, 0.5], 7);
        assert!(line.validate().is_ok());
        assert!((0..7).all(|k| line.sample(k) == [0.5, 0.5, 0.5]));

        assert!(LineSpec::new(0.0, 0.0, 1.0, 1.0, 0).validate().is_err());
        assert!(LineSpec::new(0.0, f64::INFINITY, 1.0, 1.0, 3).validate().is_err());
    }
}
