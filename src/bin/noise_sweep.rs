use std::env;
use std::path::Path;
use trilateration_sandbox::config::sweep;
use trilateration_sandbox::io::{to_json_pretty, write_json_file};
use trilateration_sandbox::sweep::run_sweep;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = sweep::load_config(Path::new(&config_path))?;
    let params = config.frame.resolve();
    params
        .transform
        .validate()
        .map_err(|e| format!("Invalid transform: {e}"))?;

    let report = run_sweep(&params, config.seeds.to_range());
    let format = config.output.format;

    if format.includes_text() {
        report.print_text_summary();
    }
    if format.includes_json() {
        match &config.output.json_out {
            Some(path) => {
                write_json_file(path, &report)?;
                println!("Sweep report written to {}", path.display());
            }
            None => println!("{}", to_json_pretty(&report)?),
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: noise_sweep <config.json>".to_string()
}
