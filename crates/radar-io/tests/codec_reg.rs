//! Codec regression test
//!
//! Decodes synthetic radar frames from GIF and PNG bytes and checks that
//! the restored-frame encoding is a readable PNG with the expected
//! palette and transparency.
//!
//! Run with:
//! ```
//! cargo test -p radar-io --test codec_reg
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};
use radar_core::{Palette, Surface};
use radar_io::{
    ImageFormat, detect_format_from_bytes, encode_png, encode_png_base64, read_image_from_bytes,
    write_gif,
};
use radar_test::{RegParams, synthetic_frame};

#[test]
fn codec_reg() {
    let mut rp = RegParams::new("codec");

    let frame = synthetic_frame(64, 48).expect("fixture");

    // GIF bytes
    eprintln!("  Testing GIF decode");
    let mut gif_bytes = Vec::new();
    write_gif(&frame, &mut gif_bytes).expect("write_gif");
    assert_eq!(
        detect_format_from_bytes(&gif_bytes).unwrap(),
        ImageFormat::Gif
    );
    let from_gif = read_image_from_bytes(&gif_bytes).expect("decode GIF");
    rp.compare_surfaces(&frame, &from_gif);
    rp.compare_values(256.0, from_gif.palette().map_or(0, |p| p.len()) as f64, 0.0);

    // PNG bytes
    eprintln!("  Testing PNG decode");
    let png_bytes = encode_png(&frame).expect("encode_png");
    assert_eq!(
        detect_format_from_bytes(&png_bytes).unwrap(),
        ImageFormat::Png
    );
    let from_png = read_image_from_bytes(&png_bytes).expect("decode PNG");
    rp.compare_surfaces(&frame, &from_png);

    // Base64 text
    eprintln!("  Testing base64 output");
    let text = encode_png_base64(&frame).expect("encode_png_base64");
    let decoded = STANDARD.decode(text.as_bytes()).expect("valid base64");
    rp.compare_strings(&png_bytes, &decoded);
    let round = read_image_from_bytes(&decoded).expect("decode base64 PNG");
    rp.compare_values(
        0.0,
        round
            .palette()
            .and_then(|p| p.transparent_index())
            .map_or(-1.0, f64::from),
        0.0,
    );

    // Palette-less surfaces go out as grayscale
    eprintln!("  Testing grayscale output");
    let gray = Surface::from_data(4, 1, vec![0, 85, 170, 255]).unwrap();
    let from_gray = read_image_from_bytes(&encode_png(&gray).unwrap()).unwrap();
    rp.compare_surfaces(&gray, &from_gray);
    rp.compare_values(0.0, if from_gray.has_palette() { 1.0 } else { 0.0 }, 0.0);

    // Binary surfaces keep their two-entry palette
    let binary = frame.binarize();
    let from_binary = read_image_from_bytes(&encode_png(&binary).unwrap()).unwrap();
    rp.compare_surfaces(&binary, &from_binary);
    rp.compare_values(
        Palette::binary().len() as f64,
        from_binary.palette().map_or(0, |p| p.len()) as f64,
        0.0,
    );

    assert!(rp.cleanup(), "codec regression test failed");
}
