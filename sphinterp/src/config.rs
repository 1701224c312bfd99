/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares configuration types for column naming, neighbour search, and view rotation.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Declares configuration types for column naming, neighbour search, and view rotation.
use serde::{Deserialize, Serialize};

/// Names of the particle columns holding the per-particle quantities every
/// interpolation needs.
///
/// Any of these may also resolve to a scalar parameter of the particle
/// source, which is broadcast to every particle.
///
/// ### Default Values
/// - `smoothing_length`: `"h"`
/// - `density`: `"rho"`
/// - `mass`: `"m"`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ParticleColumns {
    /// Column holding the smoothing length of each particle.
    pub smoothing_length: String,

    /// Column holding the density of each particle.
    pub density: String,

    /// Column holding the mass of each particle.
    pub mass: String,
}

impl Default for ParticleColumns {
    fn default() -> Self {
        ParticleColumns {
            smoothing_length: String::from("h"),
            density: String::from("rho"),
            mass: String::from("m"),
        }
    }
}

/// Strategy used to find the particles whose kernels reach a sample point.
///
/// Both strategies produce bit-for-bit identical output.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum NeighbourSearch {
    /// Visit every particle for every sample point.
    BruteForce,

    /// Query a KD-tree over particle positions with the largest kernel
    /// support, and visit only the particles it returns.
    KdTree,
}

impl Default for NeighbourSearch {
    fn default() -> Self {
        NeighbourSearch::KdTree
    }
}

/// Parameters shared by every interpolation routine.
///
/// ### Default Values
/// - `columns`: [`ParticleColumns::default`]
/// - `neighbour_search`: [`NeighbourSearch::KdTree`]
/// - `rotation`: `None`
/// - `rotation_origin`: `None`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(default)]
pub struct InterpolationParams {
    /// Names of the smoothing length, density and mass columns.
    pub columns: ParticleColumns,

    /// How particles near each sample point are found.
    pub neighbour_search: NeighbourSearch,

    /// Euler angles in degrees, applied about the fixed z, y and then x
    /// axes, used to rotate particles before 3D fields are projected,
    /// sliced or sampled along a line. Ignored by the 2D routines.
    pub rotation: Option<[f64; 3]>,

    /// Point to rotate about. Defaults to the centre of the particles'
    /// bounding box.
    pub rotation_origin: Option<[f64; 3]>,
}

impl InterpolationParams {
    /// Returns a new [`ParamsBuilder`] populated with default values.
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder::new()
    }
}

/// A convenience builder for constructing an [`InterpolationParams`] instance.
///
/// The builder should be called via the [`InterpolationParams::builder`] method.
///
/// See [`InterpolationParams`] for details on each field.
#[derive(Debug, Clone)]
pub struct ParamsBuilder {
    pub columns: ParticleColumns,
    pub neighbour_search: NeighbourSearch,
    pub rotation: Option<[f64; 3]>,
    pub rotation_origin: Option<[f64; 3]>,
}

impl ParamsBuilder {
    fn new() -> Self {
        let defaults = InterpolationParams::default();
        Self {
            columns: defaults.columns,
            neighbour_search: defaults.neighbour_search,
            rotation: defaults.rotation,
            rotation_origin: defaults.rotation_origin,
        }
    }

    /// Sets the smoothing length column name.
    pub fn smoothing_length_column(mut self, name: &str) -> Self {
        self.columns.smoothing_length = name.to_string();
        self
    }

    /// Sets the density column name.
    pub fn density_column(mut self, name: &str) -> Self {
        self.columns.density = name.to_string();
        self
    }

    /// Sets the mass column name.
    pub fn mass_column(mut self, name: &str) -> Self {
        self.columns.mass = name.to_string();
        self
    }

    /// Sets the neighbour search strategy.
    pub fn neighbour_search(mut self, neighbour_search: NeighbourSearch) -> Self {
        self.neighbour_search = neighbour_search;
        self
    }

    /// Sets the view rotation, in degrees, for the 3D routines.
    pub fn rotation(mut self, rotation: [f64; 3]) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Sets the point the view rotation is applied about.
    pub fn rotation_origin(mut self, rotation_origin: [f64; 3]) -> Self {
        self.rotation_origin = Some(rotation_origin);
        self
    }

    /// Builds and returns an [`InterpolationParams`] instance.
    pub fn build(self) -> InterpolationParams {
        InterpolationParams {
            columns: self.columns,
            neighbour_search: self.neighbour_search,
            rotation: self.rotation,
            rotation_origin: self.rotation_origin,
        }
    }
}
