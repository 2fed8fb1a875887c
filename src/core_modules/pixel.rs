// THEORY:
// The `Pixel` module is the most fundamental unit of the scrubbing system. It is
// a "dumb" data container for a single RGBA pixel plus a small set of
// 1-dimensional heuristics — metrics that can be computed from this pixel alone,
// with no knowledge of neighbors in space. Anything that needs another pixel
// (flood fills, edge feathering, connected components) is deliberately outside
// this system's scope and therefore has no home here.
//
// What lives here (by design):
// - Raw channels (RGBA) as bytes, exactly as they appear in the decoded buffer.
// - Brightness: the real-valued mean of the three color channels. The mean is
//   computed in floating point, never truncated — the gray test below depends
//   on fractional precision (e.g. (200,200,201) has mean 200.33..).
// - Grayness: whether every color channel sits within a tolerance of that mean.
//   A pixel can be gray at any brightness; "light gray" is a decision for the
//   classifier layer, which combines grayness with a brightness floor.
//
// Alpha is carried but never consulted by any heuristic: background detection
// is a pure color decision, and an opaque checker pixel is still background.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    /// Per-channel brightness cutoff for the "very light" classifier test.
    pub type Threshold = Byte;
    /// Real-valued mean of the three color channels (0.0-255.0).
    pub type Brightness = f64;

    /// Number of bytes a single RGBA pixel occupies in a flat buffer.
    pub const CHANNELS: usize = 4;

    /// The fully transparent pixel every background pixel is rewritten to.
    pub const TRANSPARENT: [Byte; CHANNELS] = [0, 0, 0, 0];

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Constructs a pixel from the first four bytes of a buffer slice.
        ///
        /// Callers are expected to hand in exactly one pixel's worth of bytes,
        /// typically via `chunks_exact(CHANNELS)` over an RGBA8 buffer.
        pub fn from_bytes(bytes: &[Byte]) -> Self {
            Pixel {
                red: bytes[0],
                green: bytes[1],
                blue: bytes[2],
                alpha: bytes[3],
            }
        }

        /// =================================Heuristics==================================

        /// Real-valued mean of the three color channels.
        ///
        /// - Interprets brightness as the unweighted RGB average.
        /// - Kept in f64 deliberately: the gray-tolerance test compares channel
        ///   distances against this mean and must see fractional values.
        pub fn brightness(&self) -> Brightness {
            (self.red as Brightness + self.green as Brightness + self.blue as Brightness) / 3.0
        }

        /// Whether every color channel lies strictly within `tolerance` of the
        /// channel mean.
        ///
        /// - A pixel that passes is visually achromatic (some shade of gray).
        /// - Strict inequality, matching the classifier's tolerance semantics.
        pub fn is_near_gray(&self, tolerance: Brightness) -> bool {
            let mean = self.brightness();
            (self.red as Brightness - mean).abs() < tolerance
                && (self.green as Brightness - mean).abs() < tolerance
                && (self.blue as Brightness - mean).abs() < tolerance
        }

        /// Whether every color channel strictly exceeds `threshold`.
        ///
        /// - At threshold 255 nothing qualifies; at 0 everything but pure-zero
        ///   channels does. Both extremes are legal, degenerate inputs.
        pub fn exceeds(&self, threshold: Threshold) -> bool {
            self.red > threshold && self.green > threshold && self.blue > threshold
        }

        /// Whether every color channel falls inside the inclusive band
        /// `[low, high]`, each channel checked independently.
        pub fn within_band(&self, low: Channel, high: Channel) -> bool {
            (low..=high).contains(&self.red)
                && (low..=high).contains(&self.green)
                && (low..=high).contains(&self.blue)
        }
    }
}
