use crate::constants::AVATAR_PLACEHOLDER_SIZE;
use crate::service::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use image::{GenericImageView, ImageFormat};
use log::error;
use std::io::Cursor;

/// Decodes the given uploaded image and shrinks it to the given maximum
/// height, keeping the aspect ratio. The result is re-encoded as PNG and
/// returned as a base64 data URL, so it can be stored and served inline
/// with the contact.
pub fn avatar_thumbnail(bytes: &[u8], max_height: u32) -> Result<String> {
    let img = image::load_from_memory(bytes).map_err(|e| {
        error!("Could not decode uploaded avatar: {e}");
        Error::Validation(String::from("Uploaded avatar is not a usable image"))
    })?;
    let img = if img.height() > max_height {
        img.thumbnail(u32::MAX, max_height)
    } else {
        img
    };

    let mut png_bytes = Cursor::new(Vec::new());
    img.write_to(&mut png_bytes, ImageFormat::Png)
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(png_bytes.into_inner())
    ))
}

/// Renders a square SVG showing the first letter of the given name, as a
/// base64 data URL. Used for contacts created without an avatar upload.
pub fn placeholder_avatar(name: &str) -> String {
    // the initial is alphanumeric or '?', so it can be inlined into the markup
    let initial = name
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| String::from("?"));
    let size = AVATAR_PLACEHOLDER_SIZE;
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}"><rect width="100%" height="100%" fill="#557c9b"/><text x="50%" y="50%" font-family="sans-serif" font-size="{font_size}" fill="#ffffff" text-anchor="middle" dominant-baseline="central">{initial}</text></svg>"##,
        font_size = size / 2,
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::tests::test_png_bytes;

    fn decode_png_data_url(data_url: &str) -> image::DynamicImage {
        let payload = data_url
            .strip_prefix("data:image/png;base64,")
            .expect("png data url");
        let bytes = STANDARD.decode(payload).expect("valid base64");
        image::load_from_memory(&bytes).expect("valid png")
    }

    #[test]
    fn avatar_thumbnail_scales_down_to_max_height() {
        let result = avatar_thumbnail(&test_png_bytes(50, 200), 64).expect("thumbnail works");
        let img = decode_png_data_url(&result);
        assert_eq!(img.height(), 64);
        assert!(img.width() < 50);
    }

    #[test]
    fn avatar_thumbnail_keeps_small_images_as_they_are() {
        let result = avatar_thumbnail(&test_png_bytes(10, 10), 64).expect("thumbnail works");
        let img = decode_png_data_url(&result);
        assert_eq!(img.dimensions(), (10, 10));
    }

    #[test]
    fn avatar_thumbnail_fails_if_not_an_image() {
        let result = avatar_thumbnail(b"definitely not an image", 64);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn placeholder_avatar_uses_the_first_letter() {
        let result = placeholder_avatar("ryan florence");
        let payload = result
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("svg data url");
        let svg = String::from_utf8(STANDARD.decode(payload).expect("valid base64"))
            .expect("valid utf-8");
        assert!(svg.contains(">R</text>"));
    }

    #[test]
    fn placeholder_avatar_skips_leading_non_letters() {
        let result = placeholder_avatar("  (tyler)");
        let payload = result
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("svg data url");
        let svg = String::from_utf8(STANDARD.decode(payload).expect("valid base64"))
            .expect("valid utf-8");
        assert!(svg.contains(">T</text>"));
    }

    #[test]
    fn placeholder_avatar_falls_back_if_no_letter() {
        let result = placeholder_avatar("@#!");
        let payload = result
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("svg data url");
        let svg = String::from_utf8(STANDARD.decode(payload).expect("valid base64"))
            .expect("valid utf-8");
        assert!(svg.contains(">?</text>"));
    }
}
