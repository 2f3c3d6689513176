//! Text encoding of restored frames
//!
//! Restored frames leave the pipeline as base64 text of their PNG bytes,
//! ready to embed in JSON or a data URL.

use crate::IoResult;
use crate::png::write_png;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use radar_core::Surface;

/// Encode a surface as PNG bytes in memory.
pub fn encode_png(surface: &Surface) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_png(surface, &mut buf)?;
    Ok(buf)
}

/// Encode a surface as standard base64 text of its PNG bytes.
///
/// The text is padded and has no line breaks.
pub fn encode_png_base64(surface: &Surface) -> IoResult<String> {
    let png = encode_png(surface)?;
    log::debug!("encoded {}x{} PNG, {} bytes", surface.width(), surface.height(), png.len());
    Ok(STANDARD.encode(png))
}
