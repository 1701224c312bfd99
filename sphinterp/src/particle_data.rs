/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the particle data interface and a simple in-memory particle table.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Access to particle records by column name.

use crate::InterpolationError;
use serde::{Deserialize, Serialize};

/// A column of per-particle values, or one value shared by every particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Column<'a> {
    /// One value per particle.
    Values(&'a [f64]),

    /// A single value broadcast to every particle (e.g. a uniform particle mass).
    Uniform(f64),
}

impl<'a> Column<'a> {
    /// Returns the value for `particle`.
    #[inline(always)]
    pub fn get(&self, particle: usize) -> f64 {
        match self {
            Column::Values(values) => values[particle],
            Column::Uniform(value) => *value,
        }
    }

    /// Number of values held, or `None` for a uniform column.
    pub fn len(&self) -> Option<usize> {
        match self {
            Column::Values(values) => Some(values.len()),
            Column::Uniform(_) => None,
        }
    }
}

/// A source of particle records that exposes numeric columns by name.
///
/// Implement this for any tabular container to interpolate straight from it.
pub trait ParticleSource {
    /// Number of particles (rows).
    fn num_particles(&self) -> usize;

    /// Looks up a column by name.
    fn column(&self, name: &str) -> Option<Column<'_>>;
}

/// Minimal in-memory [`ParticleSource`] of named columns plus named scalar
/// parameters.
///
/// Parameters are looked up when no column has the requested name, which is
/// how a uniform particle mass is usually stored.
///
/// # Examples
///
/// ```
/// use sphinterp::{Column, ParticleSource, ParticleTable};
///
/// let table = ParticleTable::new()
///     .with_column("x", vec![0.0, 1.0])
///     .unwrap()
///     .with_column("h", vec![0.5, 0.5])
///     .unwrap()
///     .with_param("m", 2.0);
///
/// assert_eq!(table.num_particles(), 2);
/// assert_eq!(table.column("m"), Some(Column::Uniform(2.0)));
/// assert!(table.column("rho").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleTable {
    columns: Vec<(String, Vec<f64>)>,
    params: Vec<(String, f64)>,
}

impl ParticleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a column.
    ///
    /// The first column fixes the number of particles; every later column
    /// must match it.
    pub fn insert_column(
        &mut self,
        name: &str,
        values: Vec<f64>,
    ) -> Result<(), InterpolationError> {
        let expected = self
            .columns
            .iter()
            .find(|(existing, _)| existing != name)
            .map(|(_, other)| other.len());

        if let Some(expected) = expected {
            if expected != values.len() {
                return Err(InterpolationError::ColumnLength {
                    name: name.to_string(),
                    found: values.len(),
                    expected,
                });
            }
        }

        match self.columns.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing_values)) => *existing_values = values,
            None => self.columns.push((name.to_string(), values)),
        }

        Ok(())
    }

    /// Builder form of [`insert_column`](Self::insert_column).
    pub fn with_column(mut self, name: &str, values: Vec<f64>) -> Result<Self, InterpolationError> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    /// Inserts or replaces a scalar parameter.
    pub fn set_param(&mut self, name: &str, value: f64) {
        match self.params.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.params.push((name.to_string(), value)),
        }
    }

    /// Builder form of [`set_param`](Self::set_param).
    pub fn with_param(mut self, name: &str, value: f64) -> Self {
        self.set_param(name, value);
        self
    }

    /// Returns a scalar parameter by name.
    pub fn param(&self, name: &str) -> Option<f64> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| *value)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ParticleSource for ParticleTable {
    fn num_particles(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    fn column(&self, name: &str) -> Option<Column<'_>> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| Column::Values(values.as_slice()))
            .or_else(|| self.param(name).map(Column::Uniform))
    }
}
