use trilateration_sandbox::{run_pipeline, PipelineParams, TransformParams};

fn main() {
    env_logger::init();

    // Demo frame: rotated, shifted and scaled beacon map with a little noise.
    let params = PipelineParams {
        transform: TransformParams::identity()
            .with_translation(12.0, -8.0)
            .with_rotation_degrees(25.0)
            .with_uniform_scale(1.5)
            .with_noise(1.0),
        seed: Some(7),
        ..Default::default()
    };
    match run_pipeline(&params) {
        Ok(report) => report.print_text_summary(),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
