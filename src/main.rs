use sobel_edge::pipeline;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let (input, output) = match (args.next(), args.next(), args.next()) {
        (Some(input), Some(output), None) => (PathBuf::from(input), PathBuf::from(output)),
        _ => return Err(usage()),
    };

    let report = pipeline::run(&input, &output).map_err(|e| e.to_string())?;
    println!("{report}");
    Ok(())
}

fn usage() -> String {
    "Usage: sobel_edge <input.bmp> <output.bmp>".to_string()
}
