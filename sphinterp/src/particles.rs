/////////////////////////////////////////////////////////////////////////////////////////////
//
// Reads, validates, and pre-weights the particle columns used by an interpolation.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    InterpolationError,
    config::InterpolationParams,
    particle_data::{Column, ParticleSource},
    rotation::{ViewRotation, bounding_box_centre},
};

/// How each particle's kernel value is scaled before it is summed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Weighting {
    /// `m / (rho * h^exponent) * A`, for direct kernel evaluation.
    Direct { exponent: i32 },

    /// `m / (rho * h^3) * h * A`, for line-of-sight integrated kernels.
    Column,
}

/// Particle positions, smoothing lengths and weights gathered from a source.
#[derive(Debug, Clone)]
pub(crate) struct Particles {
    pub positions: Vec<[f64; 3]>,
    pub smoothing_lengths: Vec<f64>,
    pub weights: Vec<f64>,
}

impl Particles {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Largest smoothing length, or `0.0` with no particles.
    pub fn max_smoothing_length(&self) -> f64 {
        self.smoothing_lengths.iter().copied().fold(0.0, f64::max)
    }
}

fn lookup<'s, S>(source: &'s S, name: &str) -> Result<Column<'s>, InterpolationError>
where
    S: ParticleSource + ?Sized,
{
    let column = source
        .column(name)
        .ok_or_else(|| InterpolationError::ColumnNotFound {
            name: name.to_string(),
        })?;

    let expected = source.num_particles();
    match column.len() {
        Some(found) if found != expected => Err(InterpolationError::ColumnLength {
            name: name.to_string(),
            found,
            expected,
        }),
        _ => Ok(column),
    }
}

/// Reads the coordinate columns (two or three), the target column, and the
/// smoothing length, density and mass columns named by `params`.
///
/// All columns are looked up before any particle is checked. Particles are
/// then checked in index order and the first non-finite coordinate, invalid
/// smoothing length or zero density is returned as an error.
///
/// When `rotate` is set and `params.rotation` is present, positions are
/// rotated about `params.rotation_origin` or the centre of their bounding box.
pub(crate) fn gather<S>(
    source: &S,
    target: &str,
    coordinates: &[&str],
    params: &InterpolationParams,
    weighting: Weighting,
    rotate: bool,
) -> Result<Particles, InterpolationError>
where
    S: ParticleSource + ?Sized,
{
    let coordinate_columns = coordinates
        .iter()
        .map(|name| lookup(source, name))
        .collect::<Result<Vec<_>, _>>()?;

    let values = lookup(source, target)?;
    let h = lookup(source, &params.columns.smoothing_length)?;
    let rho = lookup(source, &params.columns.density)?;
    let m = lookup(source, &params.columns.mass)?;

    let num_particles = source.num_particles();

    for i in 0..num_particles {
        for (axis, column) in coordinates.iter().zip(&coordinate_columns) {
            let value = column.get(i);
            if !value.is_finite() {
                return Err(InterpolationError::InvalidPosition {
                    particle: i,
                    axis: axis.to_string(),
                    value,
                });
            }
        }

        let h_i = h.get(i);
        if !(h_i > 0.0) {
            return Err(InterpolationError::InvalidSmoothingLength {
                particle: i,
                value: h_i,
            });
        }
        if rho.get(i) == 0.0 {
            return Err(InterpolationError::ZeroDensity { particle: i });
        }
    }

    let mut positions: Vec<[f64; 3]> = (0..num_particles)
        .map(|i| {
            let mut position = [0.0; 3];
            for (axis, column) in coordinate_columns.iter().enumerate().take(3) {
                position[axis] = column.get(i);
            }
            position
        })
        .collect();

    if rotate {
        if let Some(angles) = params.rotation {
            let origin = params
                .rotation_origin
                .unwrap_or_else(|| bounding_box_centre(&positions));
            ViewRotation::new(angles, origin).rotate_positions(&mut positions);
        }
    }

    let smoothing_lengths: Vec<f64> = (0..num_particles).map(|i| h.get(i)).collect();

    let weights = (0..num_particles)
        .map(|i| {
            let h_i = smoothing_lengths[i];
            match weighting {
                Weighting::Direct { exponent } => {
                    m.get(i) / (rho.get(i) * h_i.powi(exponent)) * values.get(i)
                }
                Weighting::Column => m.get(i) / (rho.get(i) * h_i.powi(3)) * h_i * values.get(i),
            }
        })
        .collect();

    Ok(Particles {
        positions,
        smoothing_lengths,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParticleTable;
    use equator::assert;
    use faer::utils::approx::*;

    fn table() -> ParticleTable {
        ParticleTable::new()
            .with_column("x", vec![0.0, 1.0, 2.0])
            .unwrap()
            .with_column("y", vec![0.0, 0.0, 2.0])
            .unwrap()
            .with_column("A", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_column("h", vec![0.5, 1.0, 2.0])
            .unwrap()
            .with_column("rho", vec![1.0, 2.0, 4.0])
            .unwrap()
            .with_param("m", 0.5)
    }

    #[test]
    fn weights_follow_the_requested_dimensionality() {
        let approx_eq = ApproxEq { abs_tol: 1e-15, rel_tol: 1e-15 };
        let params = InterpolationParams::default();

        let planar = gather(&table(), "A", &["x", "y"], &params, Weighting::Direct { exponent: 2 }, false)
            .unwrap();
        assert!(planar.weights[0] ~ 0.5 / (1.0 * 0.25) * 1.0);
        assert!(planar.weights[2] ~ 0.5 / (4.0 * 4.0) * 3.0);
        assert_eq!(planar.positions[2], [2.0, 2.0, 0.0]);
        assert_eq!(planar.max_smoothing_length(), 2.0);

        let column = gather(&table(), "A", &["x", "y"], &params, Weighting::Column, false).unwrap();
        assert!(column.weights[1] ~ 0.5 / (2.0 * 1.0) * 1.0 * 2.0);
        assert!(column.weights[2] ~ 0.5 / (4.0 * 8.0) * 2.0 * 3.0);
    }

    #[test]
    fn missing_columns_are_reported_before_domain_errors() {
        let mut bad = table();
        bad.insert_column("h", vec![0.5, -1.0, 2.0]).unwrap();
        let params = InterpolationParams::default();

        let err = gather(&bad, "A", &["x", "z"], &params, Weighting::Column, false).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::ColumnNotFound {
                name: String::from("z")
            }
        );

        let err = gather(&bad, "A", &["x", "y"], &params, Weighting::Column, false).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::InvalidSmoothingLength {
                particle: 1,
                value: -1.0
            }
        );
    }

    #[test]
    fn zero_density_and_nan_smoothing_lengths_are_rejected() {
        let params = InterpolationParams::default();

        let mut bad = table();
        bad.insert_column("rho", vec![1.0, 1.0, 0.0]).unwrap();
        let err = gather(&bad, "A", &["x", "y"], &params, Weighting::Column, false).unwrap_err();
        assert_eq!(err, InterpolationError::ZeroDensity { particle: 2 });

        let mut bad = table();
        bad.insert_column("h", vec![f64::NAN, 1.0, 1.0]).unwrap();
        let err = gather(&bad, "A", &["x", "y"], &params, Weighting::Column, false).unwrap_err();
        assert!(matches!(
            err,
            InterpolationError::InvalidSmoothingLength { particle: 0, .. }
        ));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let params = InterpolationParams::default();

        let mut bad = table();
        bad.insert_column("y", vec![0.0, f64::INFINITY, f64::NAN]).unwrap();
        let err = gather(&bad, "A", &["x", "y"], &params, Weighting::Column, false).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::InvalidPosition {
                particle: 1,
                axis: String::from("y"),
                value: f64::INFINITY,
            }
        );
    }

    #[test]
    fn configured_column_names_are_used() {
        let source = ParticleTable::new()
            .with_column("x", vec![0.0])
            .unwrap()
            .with_column("y", vec![0.0])
            .unwrap()
            .with_column("A", vec![1.0])
            .unwrap()
            .with_column("hsml", vec![1.0])
            .unwrap()
            .with_column("density", vec![1.0])
            .unwrap()
            .with_param("mass", 1.0);

        let params = InterpolationParams::builder()
            .smoothing_length_column("hsml")
            .density_column("density")
            .mass_column("mass")
            .build();

        let gathered = gather(&source, "A", &["x", "y"], &params, Weighting::Column, false).unwrap();
        assert_eq!(gathered.len(), 1);
        assert_eq!(gathered.weights[0], 1.0);
    }

    #[test]
    fn rotation_is_applied_only_when_requested() {
        let approx_eq = ApproxEq { abs_tol: 1e-14, rel_tol: 1e-14 };
        let mut source = table();
        source.insert_column("z", vec![0.0, 0.0, 0.0]).unwrap();

        let params = InterpolationParams::builder()
            .rotation([90.0, 0.0, 0.0])
            .rotation_origin([0.0, 0.0, 0.0])
            .build();
        let weighting = Weighting::Direct { exponent: 3 };

        let rotated = gather(&source, "A", &["x", "y", "z"], &params, weighting, true).unwrap();
        assert!(rotated.positions[1][0] ~ 0.0);
        assert!(rotated.positions[1][1] ~ 1.0);

        let unrotated = gather(&source, "A", &["x", "y", "z"], &params, weighting, false).unwrap();
        assert_eq!(unrotated.positions[1], [1.0, 0.0, 0.0]);
    }
}
