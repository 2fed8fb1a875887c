// THEORY:
// The `pipeline` module is the top-level API for the scrubbing engine. It
// encapsulates the full pass — load, classify, rewrite, save — behind a single,
// easy-to-use interface, and reports what it did.
//
// The pass itself is deliberately boring: one linear walk over the RGBA buffer,
// each pixel classified independently by `core_modules::classifier` and either
// left bit-identical or rewritten to fully transparent black. There are no
// intermediate states beyond "loaded", "classified", "saved", and no
// cross-pixel data flow, which is also what makes the row-band parallel
// variant in `parallel_pipeline` safe.

use crate::core_modules::classifier::classifier;
use crate::core_modules::pixel::pixel::{CHANNELS, Pixel, TRANSPARENT, Threshold};
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::ScrubError;
use std::fmt;
use std::path::{Path, PathBuf};

/// The per-channel brightness cutoff used when the caller does not supply one.
pub const DEFAULT_THRESHOLD: Threshold = 230;

/// Configuration for the scrub pass, allowing for tunable behavior.
#[derive(Debug, Clone, Copy)]
pub struct ScrubConfig {
    /// Per-channel cutoff for the very-light test. The gray tolerance and the
    /// checker bands are fixed properties of the classifier, not knobs.
    pub threshold: Threshold,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// The primary output of a completed scrub.
#[derive(Debug, Clone)]
pub struct ScrubReport {
    /// Where the cleaned PNG was written.
    pub output_path: PathBuf,
    /// Width of the image in pixels; always equal to the input's.
    pub width: u32,
    /// Height of the image in pixels; always equal to the input's.
    pub height: u32,
    /// Number of pixels rewritten to fully transparent black.
    pub transparent_count: usize,
}

impl ScrubReport {
    /// Share of the image that was rewritten, in percent. A zero-pixel image
    /// reports 0.0 rather than dividing by zero.
    pub fn percent_transparent(&self) -> f64 {
        let total = self.width as u64 * self.height as u64;
        if total == 0 {
            return 0.0;
        }
        100.0 * self.transparent_count as f64 / total as f64
    }
}

impl fmt::Display for ScrubReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved transparent sprite to {}",
            self.output_path.display()
        )?;
        writeln!(f, "Dimensions: {}x{}", self.width, self.height)?;
        write!(
            f,
            "Made {} pixels transparent ({:.1}%)",
            self.transparent_count,
            self.percent_transparent()
        )
    }
}

/// The main, top-level struct for the scrubbing engine.
pub struct ScrubPipeline {
    config: ScrubConfig,
}

impl ScrubPipeline {
    pub fn new(config: ScrubConfig) -> Self {
        Self { config }
    }

    /// Runs the single linear classification-and-rewrite pass over a flat
    /// RGBA8 buffer, in place.
    ///
    /// Returns the number of pixels rewritten. Every pixel comes out either
    /// bit-identical to its input or exactly (0,0,0,0), so running the pass a
    /// second time over its own output changes nothing.
    pub fn scrub_buffer(&self, buffer: &mut [u8]) -> usize {
        let mut transparent_count = 0;

        for bytes in buffer.chunks_exact_mut(CHANNELS) {
            let pixel = Pixel::from_bytes(bytes);
            if classifier::is_background(&pixel, self.config.threshold) {
                bytes.copy_from_slice(&TRANSPARENT);
                transparent_count += 1;
            }
        }

        transparent_count
    }

    /// Loads `input_path`, scrubs it, and writes the result to `output_path`
    /// as a PNG (overwriting any existing file). Dimensions are never altered.
    pub fn scrub_file(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<ScrubReport, ScrubError> {
        let (mut buffer, width, height) = image_helper::load(input_path)?;
        log::debug!(
            "loaded {} ({width}x{height}, threshold {})",
            input_path.display(),
            self.config.threshold
        );

        let transparent_count = self.scrub_buffer(&mut buffer);
        image_helper::save(output_path, width, height, &buffer)?;

        let report = ScrubReport {
            output_path: output_path.to_path_buf(),
            width,
            height,
            transparent_count,
        };
        log::info!(
            "scrubbed {}: {} of {} pixels made transparent",
            input_path.display(),
            transparent_count,
            width as u64 * height as u64
        );
        Ok(report)
    }
}

/// One-call convenience: scrub `input_path` into `output_path` with the given
/// per-channel brightness cutoff.
pub fn remove_background(
    input_path: &Path,
    output_path: &Path,
    threshold: Threshold,
) -> Result<ScrubReport, ScrubError> {
    ScrubPipeline::new(ScrubConfig { threshold }).scrub_file(input_path, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::utils::image_helper::image_helper;

    fn pipeline(threshold: Threshold) -> ScrubPipeline {
        ScrubPipeline::new(ScrubConfig { threshold })
    }

    #[test]
    fn two_by_one_scenario() {
        // White background pixel plus a dark foreground pixel.
        let mut buffer = vec![255, 255, 255, 255, 10, 10, 10, 255];
        let count = pipeline(230).scrub_buffer(&mut buffer);

        assert_eq!(count, 1);
        assert_eq!(buffer, vec![0, 0, 0, 0, 10, 10, 10, 255]);

        let report = ScrubReport {
            output_path: PathBuf::from("out.png"),
            width: 2,
            height: 1,
            transparent_count: count,
        };
        assert_eq!(report.percent_transparent(), 50.0);
    }

    #[test]
    fn foreground_pixels_are_bit_identical() {
        let original = vec![10, 10, 10, 255, 42, 7, 99, 128, 0, 0, 0, 0];
        let mut buffer = original.clone();

        assert_eq!(pipeline(230).scrub_buffer(&mut buffer), 0);
        assert_eq!(buffer, original);
    }

    #[test]
    fn opaque_checker_pixel_is_cleared() {
        let mut buffer = vec![155, 155, 155, 200];
        assert_eq!(pipeline(230).scrub_buffer(&mut buffer), 1);
        assert_eq!(buffer, vec![0, 0, 0, 0]);
    }

    #[test]
    fn scrub_is_idempotent() {
        let mut buffer = vec![
            255, 255, 255, 255, // very light
            195, 200, 190, 255, // light gray
            155, 155, 155, 200, // checker band A
            10, 10, 10, 255, // foreground
        ];
        let first = pipeline(230).scrub_buffer(&mut buffer);
        let after_first = buffer.clone();

        let second = pipeline(230).scrub_buffer(&mut buffer);
        assert_eq!(first, 3);
        assert_eq!(second, 0);
        assert_eq!(buffer, after_first);
    }

    #[test]
    fn empty_buffer_reports_zero_percent() {
        let mut buffer = Vec::new();
        assert_eq!(pipeline(230).scrub_buffer(&mut buffer), 0);

        let report = ScrubReport {
            output_path: PathBuf::from("out.png"),
            width: 0,
            height: 0,
            transparent_count: 0,
        };
        assert_eq!(report.percent_transparent(), 0.0);
    }

    #[test]
    fn count_matches_cleared_pixels() {
        // A sweep of grays across the checker bands and the light-gray floor.
        let mut buffer = Vec::new();
        for value in (0u16..=255).step_by(5) {
            buffer.extend_from_slice(&[value as u8, value as u8, value as u8, 255]);
        }

        let count = pipeline(230).scrub_buffer(&mut buffer);
        let cleared = buffer
            .chunks_exact(4)
            .filter(|px| *px == [0, 0, 0, 0])
            .count();
        assert_eq!(count, cleared);
    }

    #[test]
    fn scrub_file_end_to_end() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let input = dir.path().join("sheet.png");
        let output = dir.path().join("sheet_clean.png");

        let source = vec![255, 255, 255, 255, 10, 10, 10, 255];
        image_helper::save(&input, 2, 1, &source).expect("Error saving file.");

        let report = remove_background(&input, &output, 230).expect("Error scrubbing file.");
        assert_eq!((report.width, report.height), (2, 1));
        assert_eq!(report.transparent_count, 1);
        assert_eq!(report.output_path, output);

        let (cleaned, w, h) = image_helper::load(&output).expect("Error loading file.");
        assert_eq!((w, h), (2, 1));
        assert_eq!(cleaned, vec![0, 0, 0, 0, 10, 10, 10, 255]);
    }

    #[test]
    fn report_display_matches_summary_format() {
        let report = ScrubReport {
            output_path: PathBuf::from("clean.png"),
            width: 2,
            height: 1,
            transparent_count: 1,
        };
        let rendered = report.to_string();
        assert!(rendered.contains("Saved transparent sprite to clean.png"));
        assert!(rendered.contains("Dimensions: 2x1"));
        assert!(rendered.contains("Made 1 pixels transparent (50.0%)"));
    }
}
