//! I/O helpers for bitmaps and JSON.
//!
//! - `load_bitmap`: decode an 8-bit RGB or RGBA file into an owned BGR(A) buffer,
//!   four channels for 32-bit BMPs.
//! - `save_bitmap`: encode a BGR(A) buffer, format from the extension (BMP
//!   when unknown).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::bgr::{BLUE, RED};
use super::{BgrImage, ImageView};
use crate::error::{EdgeFilterError, Result};
use crate::types::{ChannelCount, Geometry};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use log::{debug, warn};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Swap the red and blue bytes of every pixel. Converts RGB(A) to BGR(A) and
/// back.
fn swap_red_blue(data: &mut [u8], channels: ChannelCount) {
    for px in data.chunks_exact_mut(channels.get()) {
        px.swap(BLUE, RED);
    }
}

/// Load a bitmap from disk as interleaved BGR (24-bit sources) or BGRA
/// (32-bit sources).
///
/// The channel count follows the bit depth in the BMP header. A 32-bit
/// `BI_RGB` bitmap decodes as RGB, so its fourth byte is read back from the
/// file's pixel array.
pub fn load_bitmap(path: &Path) -> Result<BgrImage> {
    let read_err = |source: image::ImageError| EdgeFilterError::Read {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(|e| read_err(image::ImageError::IoError(e)))?;
    let decoded = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| read_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(read_err)?;
    let color = decoded.color();
    let header = BmpHeader::parse(&bytes);
    let (width, height, mut data) = match decoded {
        DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            (w, h, buf.into_raw())
        }
        DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            (w, h, buf.into_raw())
        }
        _ => {
            return Err(EdgeFilterError::UnsupportedLayout {
                path: path.to_path_buf(),
                color: format!("{color:?}"),
            })
        }
    };
    let decoded_bits = color.bits_per_pixel();
    let bit_depth = match header {
        Some(h) if h.bit_count == 32 => h.bit_count,
        _ => decoded_bits,
    };
    let channels = ChannelCount::from_bit_depth(bit_depth)?;
    if channels.bit_depth() != decoded_bits {
        let padding = header
            .and_then(|h| h.padding_bytes(&bytes, width as usize, height as usize))
            .unwrap_or_else(|| {
                warn!(
                    "load_bitmap {}: no 32-bit pixel array, padding set to 0xFF",
                    path.display()
                );
                vec![0xFF; width as usize * height as usize]
            });
        data = data
            .chunks_exact(3)
            .zip(padding)
            .flat_map(|(rgb, pad)| [rgb[0], rgb[1], rgb[2], pad])
            .collect();
    }
    debug!(
        "load_bitmap {}: {width}x{height} {}-bit",
        path.display(),
        channels.bit_depth()
    );
    swap_red_blue(&mut data, channels);
    let geometry = Geometry::new(width as usize, height as usize, channels)?;
    BgrImage::from_vec(geometry, data)
}

/// Fields of the BMP file and info headers that decide the pixel layout.
#[derive(Clone, Copy, Debug)]
struct BmpHeader {
    pixel_offset: usize,
    top_down: bool,
    bit_count: u16,
    compression: u32,
}

impl BmpHeader {
    const BI_RGB: u32 = 0;

    fn parse(bytes: &[u8]) -> Option<Self> {
        if !bytes.starts_with(b"BM") {
            return None;
        }
        let le = |at: usize| -> Option<[u8; 4]> { bytes.get(at..at + 4)?.try_into().ok() };
        let bit_count = u16::from_le_bytes(bytes.get(28..30)?.try_into().ok()?);
        Some(Self {
            pixel_offset: u32::from_le_bytes(le(10)?) as usize,
            top_down: i32::from_le_bytes(le(22)?) < 0,
            bit_count,
            compression: u32::from_le_bytes(le(30)?),
        })
    }

    /// Fourth byte of every pixel in top-down order, for 32-bit `BI_RGB`
    /// pixel arrays. Rows are stored bottom-up unless the height is negative.
    fn padding_bytes(&self, bytes: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
        if self.bit_count != 32 || self.compression != Self::BI_RGB {
            return None;
        }
        let stride = width.checked_mul(4)?;
        let end = stride
            .checked_mul(height)?
            .checked_add(self.pixel_offset)?;
        let pixels = bytes.get(self.pixel_offset..end)?;
        let mut padding = Vec::with_capacity(width * height);
        for y in 0..height {
            let row = if self.top_down { y } else { height - 1 - y };
            let start = row * stride;
            padding.extend(pixels[start..start + stride].chunks_exact(4).map(|px| px[3]));
        }
        Some(padding)
    }
}

/// Save a BGR(A) buffer with the same geometry and bit depth it carries.
pub fn save_bitmap<I>(img: &I, path: &Path) -> Result<()>
where
    I: ImageView + ?Sized,
{
    let write_err = |message: String| EdgeFilterError::Write {
        path: path.to_path_buf(),
        message,
    };
    ensure_parent_dir(path).map_err(write_err)?;

    let g = img.geometry();
    let mut data = img.data().to_vec();
    swap_red_blue(&mut data, g.channels());
    let color = match g.channels() {
        ChannelCount::Bgr => ColorType::Rgb8,
        ChannelCount::Bgra => ColorType::Rgba8,
    };
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Bmp);
    let width = u32::try_from(g.width()).map_err(|e| write_err(e.to_string()))?;
    let height = u32::try_from(g.height()).map_err(|e| write_err(e.to_string()))?;
    image::save_buffer_with_format(path, &data, width, height, color, format)
        .map_err(|e| write_err(e.to_string()))?;
    debug!("save_bitmap {} as {format:?}", path.display());
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json_err = |message: String| EdgeFilterError::Json {
        path: path.to_path_buf(),
        message,
    };
    ensure_parent_dir(path).map_err(json_err)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| json_err(e.to_string()))?;
    fs::write(path, json).map_err(|e| json_err(e.to_string()))
}

fn ensure_parent_dir(path: &Path) -> std::result::Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
