// THEORY:
// The `classifier` module owns the background decision itself. It is the bridge
// between the raw per-pixel heuristics in `Pixel` and the pipeline's rewrite
// pass. Three independent boolean predicates are combined by a pure logical OR;
// no predicate consults another, and evaluation order is irrelevant.
//
// Key architectural principles:
// 1.  **Pure predicates**: Each test is a free function from (pixel, parameters)
//     to bool with no state and no side effects. This keeps every rule
//     independently testable and keeps the rewrite pass trivially auditable.
// 2.  **Literal checker bands**: The three gray bands were read off a specific
//     editor's transparency checkerboard. They are not derived from a formula,
//     so they are kept as exact literals rather than generalized.
// 3.  **Alpha-blind**: Every predicate looks only at color channels. An opaque
//     pixel in a checker band is still background.

pub mod classifier {
    use crate::core_modules::pixel::pixel::{Brightness, Channel, Pixel, Threshold};

    /// Tolerance for the gray test: each channel must sit strictly within this
    /// distance of the channel mean.
    pub const GRAY_TOLERANCE: Brightness = 20.0;

    /// Brightness floor for the light-gray test (strict).
    pub const LIGHT_GRAY_FLOOR: Brightness = 180.0;

    /// The three inclusive checker bands, each applied to every channel
    /// independently. Reverse-engineered from a renderer's checkerboard
    /// colors; do not tune.
    pub const CHECKER_BANDS: [(Channel, Channel); 3] = [(150, 160), (190, 210), (120, 135)];

    /// Test 1: near-white. Every color channel strictly above `threshold`.
    pub fn is_very_light(pixel: &Pixel, threshold: Threshold) -> bool {
        pixel.exceeds(threshold)
    }

    /// Test 2: light gray. Achromatic within tolerance of the channel mean,
    /// and that mean strictly above the brightness floor.
    pub fn is_light_gray(pixel: &Pixel) -> bool {
        pixel.is_near_gray(GRAY_TOLERANCE) && pixel.brightness() > LIGHT_GRAY_FLOOR
    }

    /// Test 3: checkerboard gray. All channels inside any one of the three
    /// fixed bands (e.g. r=150, g=160, b=155 qualifies for band A).
    pub fn is_checker(pixel: &Pixel) -> bool {
        CHECKER_BANDS
            .iter()
            .any(|&(low, high)| pixel.within_band(low, high))
    }

    /// The background verdict: the pure disjunction of the three tests.
    pub fn is_background(pixel: &Pixel, threshold: Threshold) -> bool {
        is_very_light(pixel, threshold) || is_light_gray(pixel) || is_checker(pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::classifier::*;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn pure_white_is_very_light() {
        let white = Pixel::new(255, 255, 255, 255);
        assert!(is_very_light(&white, 230));
        assert!(is_background(&white, 230));
    }

    #[test]
    fn one_dim_channel_defeats_very_light() {
        assert!(!is_very_light(&Pixel::new(255, 255, 230, 255), 230));
    }

    #[test]
    fn bright_gray_is_light_gray() {
        // Mean 195, all channels within 20 of it.
        assert!(is_light_gray(&Pixel::new(190, 195, 200, 255)));
        // Mean exactly 180 fails the strict floor.
        assert!(!is_light_gray(&Pixel::new(180, 180, 180, 255)));
    }

    #[test]
    fn dark_gray_is_not_light_gray() {
        assert!(!is_light_gray(&Pixel::new(100, 100, 100, 255)));
    }

    #[test]
    fn checker_bands_catch_mixed_channels() {
        // Each channel independently in band A.
        assert!(is_checker(&Pixel::new(150, 160, 155, 200)));
        assert!(is_checker(&Pixel::new(190, 210, 200, 255)));
        assert!(is_checker(&Pixel::new(120, 135, 127, 255)));
        // Channels straddling two different bands do not qualify.
        assert!(!is_checker(&Pixel::new(150, 190, 120, 255)));
    }

    #[test]
    fn checker_ignores_alpha_and_threshold() {
        let checker = Pixel::new(155, 155, 155, 200);
        assert!(is_background(&checker, 0));
        assert!(is_background(&checker, 255));
    }

    #[test]
    fn foreground_fails_all_three() {
        let dark = Pixel::new(10, 10, 10, 255);
        assert!(!is_very_light(&dark, 230));
        assert!(!is_light_gray(&dark));
        assert!(!is_checker(&dark));
        assert!(!is_background(&dark, 230));
    }

    #[test]
    fn transparent_black_is_foreground() {
        // The rewrite target itself must never reclassify, or the pass would
        // not be idempotent.
        assert!(!is_background(&Pixel::new(0, 0, 0, 0), 230));
    }
}
