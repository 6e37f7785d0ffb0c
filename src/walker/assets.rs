use image::RgbaImage;
use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::{Surface, SurfaceRef};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not load image \"{}\": {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not prepare image \"{}\": {reason}", .path.display())]
    Surface { path: PathBuf, reason: String },
}

impl AssetError {
    pub fn path(&self) -> &Path {
        match self {
            AssetError::Decode { path, .. } | AssetError::Surface { path, .. } => path,
        }
    }
}

/// Decodes the image at `path` and converts it to `format`, which should be
/// the display's own pixel format so later blits don't need a conversion.
pub fn load_image(path: &Path, format: PixelFormatEnum) -> Result<Surface<'static>, AssetError> {
    let decoded = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let surface_err = |reason: String| AssetError::Surface {
        path: path.to_path_buf(),
        reason,
    };
    let surface = rgba_to_surface(&decoded).map_err(surface_err)?;
    let converted = surface.convert_format(format).map_err(surface_err)?;

    log::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        converted.width(),
        converted.height(),
        format
    );
    Ok(converted)
}

/// Loads every path in order, stopping at the first failure.
pub fn load_images<I, P>(paths: I, format: PixelFormatEnum) -> Result<Vec<Surface<'static>>, AssetError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|path| load_image(path.as_ref(), format))
        .collect()
}

/// Returns a left-right mirrored copy of `surface` in the same pixel format.
pub fn mirror_horizontal(surface: &SurfaceRef) -> Result<Surface<'static>, String> {
    let format = surface.pixel_format_enum();
    let mut mirrored = surface.convert_format(format)?;

    let bpp = format.byte_size_per_pixel();
    let width = mirrored.width() as usize;
    let height = mirrored.height() as usize;
    let pitch = mirrored.pitch() as usize;

    mirrored.with_lock_mut(|pixels| {
        for y in 0..height {
            let row = &mut pixels[y * pitch..y * pitch + width * bpp];
            for x in 0..width / 2 {
                let (left, right) = (x * bpp, (width - 1 - x) * bpp);
                for k in 0..bpp {
                    row.swap(left + k, right + k);
                }
            }
        }
    });

    Ok(mirrored)
}

// The surface rows may be padded, so copy row by row instead of in one go.
fn rgba_to_surface(image: &RgbaImage) -> Result<Surface<'static>, String> {
    let (width, height) = image.dimensions();
    let mut surface = Surface::new(width, height, PixelFormatEnum::RGBA32)?;
    let pitch = surface.pitch() as usize;
    let row_len = width as usize * 4;
    let src = image.as_raw();

    surface.with_lock_mut(|pixels| {
        for y in 0..height as usize {
            pixels[y * pitch..y * pitch + row_len]
                .copy_from_slice(&src[y * row_len..(y + 1) * row_len]);
        }
    });

    Ok(surface)
}
