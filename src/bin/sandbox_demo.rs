use std::env;
use std::path::Path;
use trilateration_sandbox::config::sandbox;
use trilateration_sandbox::config::OutputFormat;
use trilateration_sandbox::io::{to_json_pretty, write_json_file};
use trilateration_sandbox::run_pipeline;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = sandbox::load_config(Path::new(&config_path))?;
    let params = config.frame.resolve();

    let report = run_pipeline(&params).map_err(|e| format!("Pipeline failed: {e}"))?;
    let format = config.output.format;

    if format.includes_text() {
        report.print_text_summary();
    }

    if format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report)?;
            println!("JSON report written to {}", path.display());
        } else {
            let json = to_json_pretty(&report)?;
            if format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: sandbox_demo <config.json>".to_string()
}
