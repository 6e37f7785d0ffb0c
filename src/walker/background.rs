use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::surface::{Surface, SurfaceRef};

/// Left edges of the tiles needed to cover `buffer_width`, one every
/// `tile_width` pixels starting at 0.
pub fn tile_offsets(buffer_width: u32, tile_width: u32) -> Vec<i32> {
    if tile_width == 0 {
        return Vec::new();
    }
    (0..buffer_width)
        .step_by(tile_width as usize)
        .map(|x| x as i32)
        .collect()
}

/// Tiles `tile` along the top of a buffer the size of `screen`. The last
/// tile is cut off by the buffer edge when the width doesn't divide evenly.
pub fn build_background(
    tile: &SurfaceRef,
    screen: Rect,
    format: PixelFormatEnum,
) -> Result<Surface<'static>, String> {
    let mut buffer = Surface::new(screen.width(), screen.height(), format)?;
    let offsets = tile_offsets(screen.width(), tile.width());

    for &x in &offsets {
        tile.blit(None::<Rect>, &mut buffer, Rect::new(x, 0, tile.width(), tile.height()))?;
    }

    log::debug!(
        "Background built from {} tiles of {}x{}",
        offsets.len(),
        tile.width(),
        tile.height()
    );
    Ok(buffer)
}
