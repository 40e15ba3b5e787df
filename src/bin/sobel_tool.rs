use sobel_edge::config::load_config;
use sobel_edge::image::io::write_json_file;
use sobel_edge::pipeline;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let report = pipeline::run(&config.input, &config.output.image).map_err(|e| e.to_string())?;
    println!(
        "Saved edge image to {} ({}x{}, {} edge pixels)",
        config.output.image.display(),
        report.geometry.width(),
        report.geometry.height(),
        report.stats.edge_pixels
    );

    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &report).map_err(|e| e.to_string())?;
        println!("Saved report to {}", report_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: sobel_tool <config.json>".to_string()
}
