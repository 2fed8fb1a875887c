// Thin CLI wrapper around the `sprite_scrub` library. All the real logic
// lives in `src/lib.rs` and below.

use sprite_scrub::pipeline::{self, DEFAULT_THRESHOLD};
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // --- 1. Argument Parsing & Setup ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: sprite_scrub <input_image> <output_png> [threshold] [cols rows]");
        return ExitCode::FAILURE;
    }
    let input_path = Path::new(&args[1]);
    let output_path = Path::new(&args[2]);

    let threshold = match args.get(3).map(|raw| raw.parse::<u8>()) {
        None => DEFAULT_THRESHOLD,
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            println!("Threshold must be an integer in 0-255, got '{}'", args[3]);
            return ExitCode::FAILURE;
        }
    };

    // --- 2. Scrub ---
    let report = match pipeline::remove_background(input_path, output_path, threshold) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };
    println!("{report}");

    // --- 3. Optional Frame Hint ---
    // With a grid given, report the per-frame size for the downstream slicer.
    if let (Some(cols), Some(rows)) = (parse_dim(args.get(4)), parse_dim(args.get(5))) {
        let frame_w = report.width / cols;
        let frame_h = report.height / rows;
        println!("\nFrame dimensions: {frame_w}x{frame_h} ({cols} cols x {rows} rows)");
    }

    ExitCode::SUCCESS
}

fn parse_dim(raw: Option<&String>) -> Option<u32> {
    raw.and_then(|value| value.parse::<u32>().ok())
        .filter(|&value| value > 0)
}
