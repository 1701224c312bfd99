use sphinterp::{
    GridSpec, Interpolator, InterpolationParams, generate_random_particles, grid_to_csv,
    progress::{ProgressMsg, closure_sink},
};
use sphinterp_utils::KernelType;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Random particles with a quantity `A` in the unit cube
    let particles = generate_random_particles(5000, 3, Some(42))?;

    // Print progress as the image is built
    let (sink, handle) = closure_sink(256, |msg| match msg {
        ProgressMsg::RasterProgress { stage, progress } => {
            println!("{stage}: {:.0}%", 100.0 * progress)
        }
        ProgressMsg::Message { message } => println!("{message}"),
        _ => {}
    });

    // Look down the cube from an oblique angle
    let params = InterpolationParams::builder().rotation([30.0, 20.0, 0.0]).build();

    let interpolator = Interpolator::builder(&particles, KernelType::CubicSpline)
        .params(params)
        .progress_callback(sink)
        .build();

    let grid = GridSpec::new(200, 200, -0.25, 1.25, -0.25, 1.25);
    let image = interpolator.interpolate_3d("A", "x", "y", "z", 1000, &grid)?;

    grid_to_csv(&image, &grid, "column_projection.csv")?;

    // Drop the sink so the listener thread exits
    drop(interpolator);
    let _ = handle.join();

    Ok(())
}
