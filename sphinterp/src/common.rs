/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines shared helpers for random particle generation and CSV I/O.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{GridSpec, InterpolationError, ParticleTable};
use csv::{ReaderBuilder, Writer};
use faer::Mat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs::File;

const COORDINATE_NAMES: [&str; 3] = ["x", "y", "z"];

/// Generate a table of random particles in the unit hypercube.
///
/// # Parameters
/// - `n`: Number of particles to generate.
/// - `dims`: Number of position columns (`x`, `y`, then `z`), clamped to `1..=3`.
/// - `seed`: Optional random seed.
///   - If `Some(seed)` is provided, the same particles will be generated
///     deterministically across runs and platforms (useful for reproducible tests).
///   - If `None`, the generator is seeded from the operating system's randomness source.
///
/// # Returns
/// A [`ParticleTable`] with position columns in `[0, 1)`, smoothing
/// lengths `h` in `[0.05, 0.15)`, densities `rho` in `[0.5, 1.5)`, masses
/// `m` in `[0.5, 1.5) / n`, and a quantity `A` in `[-1, 1)`.
///
/// # Example
/// ```
/// use sphinterp::{ParticleSource, generate_random_particles};
///
/// let particles = generate_random_particles(100, 3, Some(42)).unwrap();
/// assert_eq!(particles.num_particles(), 100);
/// assert!(particles.column("z").is_some());
/// ```
pub fn generate_random_particles(
    n: usize,
    dims: usize,
    seed: Option<u64>,
) -> Result<ParticleTable, InterpolationError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut random_column = |low: f64, high: f64| -> Vec<f64> {
        (0..n).map(|_| rng.random_range(low..high)).collect()
    };

    let mut columns: Vec<(&str, Vec<f64>)> = COORDINATE_NAMES
        .iter()
        .take(dims.clamp(1, 3))
        .map(|&name| (name, random_column(0.0, 1.0)))
        .collect();

    let scale = 1.0 / n.max(1) as f64;
    columns.push(("h", random_column(0.05, 0.15)));
    columns.push(("rho", random_column(0.5, 1.5)));
    columns.push(("m", random_column(0.5 * scale, 1.5 * scale)));
    columns.push(("A", random_column(-1.0, 1.0)));

    columns
        .into_iter()
        .try_fold(ParticleTable::new(), |table, (name, values)| {
            table.with_column(name, values)
        })
}

/// Load a headered CSV file into a [`ParticleTable`], one column per header.
///
/// # Arguments
/// * `file_path` - Path to the CSV file.
///
/// # Returns
/// On success, a table with one column per CSV header, in file order.
pub fn csv_to_particle_table(file_path: &str) -> Result<ParticleTable, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for result in reader.records() {
        let record = result?;
        if record.len() != headers.len() {
            return Err("Inconsistent number of columns in CSV".into());
        }

        for (column, value) in columns.iter_mut().zip(record.iter()) {
            column.push(value.trim().parse()?);
        }
    }

    let mut table = ParticleTable::new();
    for (name, values) in headers.iter().zip(columns) {
        table.insert_column(name, values)?;
    }

    Ok(table)
}

/// Write an interpolated image to a CSV file.
///
/// One row is written per pixel, with headers `X, Y, Value`, where `X` and
/// `Y` are the pixel centre.
///
/// # Arguments
/// * `image` - Image of shape `(grid.pixels_y, grid.pixels_x)`.
/// * `grid` - The grid the image was interpolated onto.
/// * `filename` - Output CSV filename.
///
/// # Errors
/// Returns an error if the image does not match the grid or writing to disk fails.
pub fn grid_to_csv(image: &Mat<f64>, grid: &GridSpec, filename: &str) -> Result<(), Box<dyn Error>> {
    if image.nrows() != grid.pixels_y || image.ncols() != grid.pixels_x {
        return Err(format!(
            "Image shape ({}, {}) does not match grid ({}, {})",
            image.nrows(),
            image.ncols(),
            grid.pixels_y,
            grid.pixels_x
        )
        .into());
    }

    let mut wtr = Writer::from_path(filename)?;
    wtr.write_record(["X", "Y", "Value"])?;

    for i in 0..grid.pixels_y {
        for j in 0..grid.pixels_x {
            let (x, y) = grid.pixel_centre(i, j);
            wtr.write_record([x.to_string(), y.to_string(), image[(i, j)].to_string()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, ParticleSource};
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sphinterp_{}_{}", std::process::id(), name))
    }

    #[test]
    fn random_particles_are_reproducible() {
        let a = generate_random_particles(50, 2, Some(7)).unwrap();
        let b = generate_random_particles(50, 2, Some(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.column_names(), vec!["x", "y", "h", "rho", "m", "A"]);

        let h = match a.column("h") {
            Some(Column::Values(values)) => values.to_vec(),
            _ => Vec::new(),
        };
        assert_eq!(h.len(), 50);
        assert!(h.iter().all(|&value| (0.05..0.15).contains(&value)));
    }

    #[test]
    fn csv_round_trip_preserves_columns() {
        let path = temp_path("particles.csv");
        fs::write(&path, "x, y,h,rho,m,A\n0.0,1.5,0.1,1.0,0.01,2.0\n-1.0,2.5,0.2,2.0,0.01,-3.0\n").unwrap();

        let table = csv_to_particle_table(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(table.num_particles(), 2);
        assert_eq!(table.column_names(), vec!["x", "y", "h", "rho", "m", "A"]);
        assert_eq!(table.column("y"), Some(Column::Values(&[1.5, 2.5])));
    }

    #[test]
    fn csv_with_bad_values_is_rejected() {
        let path = temp_path("bad_particles.csv");
        fs::write(&path, "x,y\n0.0,abc\n").unwrap();

        let result = csv_to_particle_table(path.to_str().unwrap());
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn grid_is_written_one_row_per_pixel() {
        let path = temp_path("image.csv");
        let grid = GridSpec::new(2, 3, 0.0, 1.0, 0.0, 3.0);
        let image = Mat::from_fn(3, 2, |i, j| (10 * i + j) as f64);

        grid_to_csv(&image, &grid, path.to_str().unwrap()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "X,Y,Value");
        assert_eq!(lines[1], "0.25,0.5,0");
        assert_eq!(lines[6], "0.75,2.5,21");

        let wrong_shape = Mat::<f64>::zeros(2, 2);
        assert!(grid_to_csv(&wrong_shape, &grid, path.to_str().unwrap()).is_err());
    }
}
