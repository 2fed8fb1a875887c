// THEORY:
// The `error` module defines the single failure taxonomy for the whole crate.
// Every operation is terminal on failure: a scrub either fully classifies and
// saves, or it fails before a usable output file exists. There is no retry
// logic and nothing is suppressed — the library propagates with `?` and leaves
// user-facing messaging to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while scrubbing one sprite sheet.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// The source file is missing or unreadable.
    #[error("cannot read input image {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file exists but cannot be decoded as a raster image.
    #[error("cannot decode {path} as an image: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The destination PNG cannot be written.
    #[error("cannot write output image {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A parallel worker or its channel died before replying.
    #[error("worker pool failure: {0}")]
    Worker(&'static str),
}
