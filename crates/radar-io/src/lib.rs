//! radar-io - Frame decoding and PNG encoding for radar restoration
//!
//! Supported formats:
//!
//! - PNG: read indexed/grayscale, write 8-bit indexed or grayscale with
//!   transparency (feature `png-format`)
//! - GIF: read the first frame with its palette, write single frames
//!   (feature `gif-format`)
//!
//! Restored frames are handed out as base64 text of their PNG encoding.

mod error;
pub mod format;

#[cfg(feature = "png-format")]
pub mod encode;
#[cfg(feature = "gif-format")]
pub mod gif;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

#[cfg(feature = "png-format")]
pub use encode::{encode_png, encode_png_base64};
#[cfg(feature = "gif-format")]
pub use self::gif::{read_gif, write_gif};
#[cfg(feature = "png-format")]
pub use self::png::{read_png, write_png};

use radar_core::Surface;

/// Decode an image held in memory, dispatching on its magic number.
pub fn read_image_from_bytes(data: &[u8]) -> IoResult<Surface> {
    let format = detect_format_from_bytes(data)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::read_png(std::io::Cursor::new(data)),

        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => self::gif::read_gif(data),

        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}
