use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

use crate::deck::Deck;

/// Load one texture per deck slide, in deck order. A slide whose image cannot
/// be read or decoded keeps its position and gets `None`; the widget renders
/// a placeholder for it.
pub fn load_deck_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    deck: &Deck,
) -> Vec<Option<Texture2D>> {
    deck.slides()
        .iter()
        .map(|slide| match load_texture_with_exif_rotation(rl, thread, &slide.image) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!(
                    "could not load image for slide '{}' ({}): {e:#}",
                    slide.title,
                    slide.image.display()
                );
                None
            }
        })
        .collect()
}

/// Load an image file into a texture, applying the EXIF orientation tag when
/// present (JPEG only; orientations involving flips are ignored).
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> anyhow::Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut orientation = 1; // 1 = top-left, no rotation
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY)
                    && let Value::Short(values) = &field.value
                    && let Some(&value) = values.first()
                {
                    orientation = value;
                }
            }
            Err(e) => {
                log::warn!("no EXIF data for {}: {e}", image_path.display());
            }
        }
    }

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", image_path.display()))?;

    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}
