use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};

const ICON_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn is_icon_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ICON_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Image files of `dir`, sorted by file name so that the n-th file is the
/// icon of the n-th forecast period.
pub fn load_sorted_icon_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if is_icon_file(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(Error::NoImages(dir.to_path_buf()));
    }
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when missing or unreadable.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!(path = ?path, error = %e, "Could not read EXIF data");
            1
        }
    }
}

pub fn load_icon(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Texture2D> {
    let image_error = |reason: String| Error::Image { path: path.to_path_buf(), reason };

    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| image_error(e.to_string()))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are left as they are.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = ?path, orientation, "Applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| image_error(e.to_string()))
}

/// Load every icon of `dir`. Fails on the first image that cannot be loaded
/// so the deck never ends up with icons attached to the wrong cards.
pub fn load_icons(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Vec<Texture2D>> {
    load_sorted_icon_paths(dir)?
        .iter()
        .map(|path| load_icon(rl, thread, path))
        .collect()
}
