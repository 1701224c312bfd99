/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the interpolator that rasterises particle fields onto grids and lines.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    InterpolationError,
    config::{InterpolationParams, NeighbourSearch},
    geometry::{GridSpec, LineSpec, LineSpec3},
    kdtree::KDTree,
    particle_data::ParticleSource,
    particles::{Particles, Weighting, gather},
    progress::{ProgressMsg, ProgressSink, report_interval},
};
use faer::{Col, Mat};
use rayon::prelude::*;
use sphinterp_utils::{Dimensions, SmoothingKernel, get_distance};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Instant;

// Relative padding on the neighbour search radius so that rounding in the
// tree's distance never drops a particle that is inside its kernel support.
const SEARCH_RADIUS_PADDING: f64 = 1e-9;

/// Builder for an [`Interpolator`].
///
/// The builder should be called via the [`Interpolator::builder`] method.
#[derive(Debug)]
pub struct InterpolatorBuilder<'a, S: ParticleSource + ?Sized, K: SmoothingKernel> {
    source: &'a S,
    kernel: K,
    params: InterpolationParams,
    progress_callback: Option<Arc<dyn ProgressSink>>,
}

impl<'a, S: ParticleSource + ?Sized, K: SmoothingKernel> InterpolatorBuilder<'a, S, K> {
    fn new(source: &'a S, kernel: K) -> Self {
        Self {
            source,
            kernel,
            params: InterpolationParams::default(),
            progress_callback: None,
        }
    }

    /// Sets custom column names, neighbour search and view rotation.
    pub fn params(mut self, params: InterpolationParams) -> Self {
        self.params = params;
        self
    }

    /// Optional callback for reporting interpolation progress.
    pub fn progress_callback(mut self, progress_callback: Arc<dyn ProgressSink>) -> Self {
        self.progress_callback = Some(progress_callback);
        self
    }

    /// Builds and returns the configured [`Interpolator`].
    pub fn build(self) -> Interpolator<'a, S, K> {
        Interpolator {
            source: self.source,
            kernel: self.kernel,
            params: self.params,
            progress_callback: self.progress_callback,
        }
    }
}

/// Interpolates particle quantities onto 2D rasters and 1D lines.
///
/// Every pixel or sample is the SPH sum over particles
/// `sum_i m_i / (rho_i h_i^d) * A_i * W(|r - r_i| / h_i, d)`, where `d` is
/// the dimensionality of the routine. The column projection instead sums
/// `m_i / (rho_i h_i^3) * h_i * A_i * F(|r - r_i|_xy / h_i)` with `F` the
/// line-of-sight integrated kernel.
///
/// Particles contribute nothing beyond their kernel support, so cells far
/// from every particle are exactly `0.0`. Cells are evaluated in parallel,
/// each summing its particles in ascending index order, so results do not
/// depend on thread count or on the [`NeighbourSearch`] strategy.
///
/// # Examples
///
/// ```
/// use sphinterp::{GridSpec, Interpolator, InterpolationParams, ParticleTable};
/// use sphinterp_utils::kernels::CubicSplineKernel;
///
/// let particles = ParticleTable::new()
///     .with_column("x", vec![0.0]).unwrap()
///     .with_column("y", vec![0.0]).unwrap()
///     .with_column("A", vec![1.0]).unwrap()
///     .with_param("h", 1.0)
///     .with_param("rho", 1.0)
///     .with_param("m", 1.0);
///
/// let interpolator = Interpolator::builder(&particles, CubicSplineKernel)
///     .params(InterpolationParams::default())
///     .build();
///
/// let grid = GridSpec::new(40, 40, -2.0, 2.0, -2.0, 2.0);
/// let image = interpolator.interpolate_2d("A", "x", "y", &grid).unwrap();
///
/// assert_eq!(image.nrows(), 40);
/// assert_eq!(image[(0, 0)], 0.0);
/// assert!(image[(20, 20)] > 0.0);
/// ```
#[derive(Debug)]
pub struct Interpolator<'a, S: ParticleSource + ?Sized, K: SmoothingKernel> {
    source: &'a S,
    kernel: K,
    params: InterpolationParams,
    progress_callback: Option<Arc<dyn ProgressSink>>,
}

/// Particles plus the optional tree used to find those near a sample point.
struct Neighbours<'p> {
    particles: &'p Particles,
    tree: Option<KDTree>,
    search_radius: f64,
    dims: usize,
}

impl<'p> Neighbours<'p> {
    fn new(particles: &'p Particles, search: NeighbourSearch, radius: f64, dims: usize) -> Self {
        let tree = match search {
            NeighbourSearch::BruteForce => None,
            NeighbourSearch::KdTree => Some(KDTree::new(&particles.positions, dims)),
        };

        Self {
            particles,
            tree,
            search_radius: radius * particles.max_smoothing_length() * (1.0 + SEARCH_RADIUS_PADDING),
            dims,
        }
    }

    /// Sums `weight_i * profile(q_i)` over particles with `q_i < radius`.
    #[inline(always)]
    fn sum_at<F>(&self, point: [f64; 3], radius: f64, profile: &F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let particles = self.particles;
        let dims = self.dims;

        let accumulate = |acc: f64, i: usize| {
            let r = get_distance(&point[..dims], &particles.positions[i][..dims]);
            let q = r / particles.smoothing_lengths[i];
            if q < radius {
                acc + particles.weights[i] * profile(q)
            } else {
                acc
            }
        };

        match &self.tree {
            None => (0..particles.len()).fold(0.0, accumulate),
            Some(tree) => tree
                .radius_search(&point, self.search_radius)
                .into_iter()
                .fold(0.0, accumulate),
        }
    }
}

impl<'a, S: ParticleSource + ?Sized, K: SmoothingKernel> Interpolator<'a, S, K> {
    /// Returns a new [`InterpolatorBuilder`] over `source` using `kernel`,
    /// with default [`InterpolationParams`] and no progress callback.
    pub fn builder(source: &'a S, kernel: K) -> InterpolatorBuilder<'a, S, K> {
        InterpolatorBuilder::new(source, kernel)
    }

    /// The parameters in use.
    pub fn params(&self) -> &InterpolationParams {
        &self.params
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    fn emit(&self, msg: ProgressMsg) {
        if let Some(sink) = &self.progress_callback {
            sink.emit(msg);
        }
    }

    fn gathered(&self, particles: &Particles) {
        self.emit(ProgressMsg::ParticlesGathered {
            num_particles: particles.len(),
        });
    }

    fn finished(&self, routine: &str, num_particles: usize, cells: usize, start: Instant) {
        if self.progress_callback.is_some() {
            self.emit(ProgressMsg::Message {
                message: format!(
                    "Took {:?} to interpolate {} particles onto {} cells ({})",
                    start.elapsed(),
                    num_particles,
                    cells,
                    routine
                ),
            });
        }
    }

    /// Evaluates `profile` at every pixel centre, row by row in parallel.
    fn raster<F>(
        &self,
        neighbours: &Neighbours<'_>,
        grid: &GridSpec,
        z: f64,
        stage: &str,
        profile: F,
    ) -> Mat<f64>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let radius = self.kernel.radius();
        let sink = self.progress_callback.as_ref();
        let num_rows = grid.pixels_y;
        let interval = report_interval(num_rows);
        let completed = AtomicUsize::new(0);

        let rows: Vec<Vec<f64>> = (0..num_rows)
            .into_par_iter()
            .map(|i| {
                let row: Vec<f64> = (0..grid.pixels_x)
                    .map(|j| {
                        let (x, y) = grid.pixel_centre(i, j);
                        neighbours.sum_at([x, y, z], radius, &profile)
                    })
                    .collect();

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(sink) = sink {
                    if done % interval == 0 || done == num_rows {
                        sink.emit(ProgressMsg::RasterProgress {
                            stage: stage.to_string(),
                            progress: done as f64 / num_rows as f64,
                        });
                    }
                }

                row
            })
            .collect();

        Mat::from_fn(grid.pixels_y, grid.pixels_x, |i, j| rows[i][j])
    }

    /// Evaluates `profile` at every sample point of a line.
    fn line<F>(
        &self,
        neighbours: &Neighbours<'_>,
        points: Vec<[f64; 3]>,
        stage: &str,
        profile: F,
    ) -> Col<f64>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let radius = self.kernel.radius();
        let values: Vec<f64> = points
            .par_iter()
            .map(|&point| neighbours.sum_at(point, radius, &profile))
            .collect();

        self.emit(ProgressMsg::RasterProgress {
            stage: stage.to_string(),
            progress: 1.0,
        });

        Col::from_fn(values.len(), |k| values[k])
    }

    /// Interpolates `target` onto a 2D grid using the 2D kernel.
    ///
    /// Returns an image of shape `(grid.pixels_y, grid.pixels_x)`.
    pub fn interpolate_2d(
        &self,
        target: &str,
        x: &str,
        y: &str,
        grid: &GridSpec,
    ) -> Result<Mat<f64>, InterpolationError> {
        let start = Instant::now();
        grid.validate()?;

        let weighting = Weighting::Direct {
            exponent: Dimensions::Two.exponent(),
        };
        let particles = gather(self.source, target, &[x, y], &self.params, weighting, false)?;
        self.gathered(&particles);

        let kernel = &self.kernel;
        let neighbours = Neighbours::new(&particles, self.params.neighbour_search, kernel.radius(), 2);
        let image = self.raster(&neighbours, grid, 0.0, "2D grid", |q| {
            kernel.weight(q, Dimensions::Two)
        });

        self.finished("2D grid", particles.len(), grid.pixels_x * grid.pixels_y, start);
        Ok(image)
    }

    /// Interpolates `target` at the sample points of a 2D line using the 2D kernel.
    ///
    /// Returns one value per step.
    pub fn interpolate_2d_cross(
        &self,
        target: &str,
        x: &str,
        y: &str,
        line: &LineSpec,
    ) -> Result<Col<f64>, InterpolationError> {
        let start = Instant::now();
        line.validate()?;

        let weighting = Weighting::Direct {
            exponent: Dimensions::Two.exponent(),
        };
        let particles = gather(self.source, target, &[x, y], &self.params, weighting, false)?;
        self.gathered(&particles);

        let kernel = &self.kernel;
        let neighbours = Neighbours::new(&particles, self.params.neighbour_search, kernel.radius(), 2);
        let points = (0..line.steps)
            .map(|k| {
                let [px, py] = line.sample(k);
                [px, py, 0.0]
            })
            .collect();
        let values = self.line(&neighbours, points, "2D cross-section", |q| {
            kernel.weight(q, Dimensions::Two)
        });

        self.finished("2D cross-section", particles.len(), line.steps, start);
        Ok(values)
    }

    /// Projects `target` onto the x-y plane by integrating the 3D field
    /// through z.
    ///
    /// The kernel is integrated along the line of sight once, into a table
    /// of `samples` values, which is then linearly interpolated per pixel.
    pub fn interpolate_3d(
        &self,
        target: &str,
        x: &str,
        y: &str,
        z: &str,
        samples: usize,
        grid: &GridSpec,
    ) -> Result<Mat<f64>, InterpolationError> {
        let start = Instant::now();
        grid.validate()?;

        let table = self.kernel.column_kernel(samples)?;
        self.emit(ProgressMsg::ColumnKernelBuilt { samples });

        let particles = gather(self.source, target, &[x, y, z], &self.params, Weighting::Column, true)?;
        self.gathered(&particles);

        let neighbours = Neighbours::new(&particles, self.params.neighbour_search, self.kernel.radius(), 2);
        let image = self.raster(&neighbours, grid, 0.0, "3D column projection", |q| {
            table.interpolate(q)
        });

        self.finished("3D column projection", particles.len(), grid.pixels_x * grid.pixels_y, start);
        Ok(image)
    }

    /// Slices the 3D field with the plane `z = z_slice`, using the 3D kernel.
    pub fn interpolate_3d_cross(
        &self,
        target: &str,
        z_slice: f64,
        x: &str,
        y: &str,
        z: &str,
        grid: &GridSpec,
    ) -> Result<Mat<f64>, InterpolationError> {
        let start = Instant::now();
        grid.validate()?;
        if !z_slice.is_finite() {
            return Err(InterpolationError::InvalidGridSpec {
                reason: format!("slice coordinate must be finite, got {}", z_slice),
            });
        }

        let weighting = Weighting::Direct {
            exponent: Dimensions::Three.exponent(),
        };
        let particles = gather(self.source, target, &[x, y, z], &self.params, weighting, true)?;
        self.gathered(&particles);

        let kernel = &self.kernel;
        let neighbours = Neighbours::new(&particles, self.params.neighbour_search, kernel.radius(), 3);
        let image = self.raster(&neighbours, grid, z_slice, "3D slice", |q| {
            kernel.weight(q, Dimensions::Three)
        });

        self.finished("3D slice", particles.len(), grid.pixels_x * grid.pixels_y, start);
        Ok(image)
    }

    /// Interpolates `target` at the sample points of a 3D line using the 3D kernel.
    pub fn interpolate_3d_line(
        &self,
        target: &str,
        x: &str,
        y: &str,
        z: &str,
        line: &LineSpec3,
    ) -> Result<Col<f64>, InterpolationError> {
        let start = Instant::now();
        line.validate()?;

        let weighting = Weighting::Direct {
            exponent: Dimensions::Three.exponent(),
        };
        let particles = gather(self.source, target, &[x, y, z], &self.params, weighting, true)?;
        self.gathered(&particles);

        let kernel = &self.kernel;
        let neighbours = Neighbours::new(&particles, self.params.neighbour_search, kernel.radius(), 3);
        let points = (0..line.steps).map(|k| line.sample(k)).collect();
        let values = self.line(&neighbours, points, "3D cross-section", |q| {
            kernel.weight(q, Dimensions::Three)
        });

        self.finished("3D cross-section", particles.len(), line.steps, start);
        Ok(values)
    }
}
