// THEORY:
// The `image_helper` module isolates every interaction with the filesystem and
// the `image` codec stack. The rest of the crate only ever sees flat RGBA8
// byte buffers plus dimensions, which keeps the classification pass trivially
// testable without touching disk. Opening and decoding are two separate steps
// so the error taxonomy can tell "file is missing" apart from "file is not an
// image".

pub mod image_helper {
    use crate::error::ScrubError;
    use image::{ImageEncoder, ImageReader};
    use std::path::Path;

    /// Decodes `path` into a flat RGBA8 buffer plus dimensions.
    ///
    /// Any raster format the `image` crate understands is accepted; whatever
    /// the source color type, the buffer comes back as 4 bytes per pixel.
    pub fn load(path: &Path) -> Result<(Vec<u8>, u32, u32), ScrubError> {
        let reader = ImageReader::open(path).map_err(|source| ScrubError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| ScrubError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok((rgba.into_raw(), width, height))
    }

    /// Encodes a flat RGBA8 buffer as a PNG at `path`, overwriting any
    /// existing file.
    pub fn save(path: &Path, width: u32, height: u32, buffer: &[u8]) -> Result<(), ScrubError> {
        let output = std::fs::File::create(path).map_err(|source| ScrubError::Output {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(source),
        })?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder
            .write_image(buffer, width, height, image::ExtendedColorType::Rgba8)
            .map_err(|source| ScrubError::Output {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }
}
