// THEORY:
// This file is the main entry point for the `sprite_scrub` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like a game's asset build
// step).
//
// The primary goal is to export the `ScrubPipeline` and its associated data
// structures (`ScrubConfig`, `ScrubReport`, `ScrubError`) as the clean,
// high-level interface for the entire scrubbing engine. The per-pixel
// heuristics and image I/O live in `core_modules` and are exposed for callers
// that want the predicates without the file pass.

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

// Re-export key data structures for the public API.
pub use crate::error::ScrubError;
pub use crate::parallel_pipeline::ParallelScrubPipeline;
pub use crate::pipeline::{
    DEFAULT_THRESHOLD, ScrubConfig, ScrubPipeline, ScrubReport, remove_background,
};
