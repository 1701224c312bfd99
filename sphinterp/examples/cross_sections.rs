use sphinterp::{GridSpec, LineSpec3, generate_random_particles, interpolate_3d_cross, interpolate_3d_line};
use sphinterp_utils::kernels::QuinticSplineKernel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let particles = generate_random_particles(2000, 3, Some(7))?;

    // Slice the cube half way up
    let grid = GridSpec::new(100, 100, 0.0, 1.0, 0.0, 1.0);
    let slice = interpolate_3d_cross(&particles, "A", 0.5, "x", "y", "z", QuinticSplineKernel, &grid)?;

    // Sample along the main diagonal
    let diagonal = LineSpec3::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], 50);
    let values = interpolate_3d_line(&particles, "A", "x", "y", "z", QuinticSplineKernel, &diagonal)?;

    println!("Slice centre value: {:.4}", slice[(50, 50)]);
    for k in (0..values.nrows()).step_by(10) {
        println!("Diagonal sample {k}: {:.4}", values[k]);
    }

    Ok(())
}
