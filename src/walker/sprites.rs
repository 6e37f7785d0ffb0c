use sdl2::rect::Rect;
use sdl2::surface::SurfaceRef;

pub trait Sprite {
    fn image(&self) -> &SurfaceRef;
    fn rect(&self) -> Rect;

    // Per-frame hook, nothing animates yet
    fn update(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(usize);

struct Entry<S> {
    sprite: S,
    // Where the sprite landed on screen last frame, after clipping
    drawn: Option<Rect>,
}

/// Owns the sprites of a scene and redraws them with dirty rectangles:
/// `clear` erases what the last `draw` put on screen and `draw` reports
/// everything that changed so only those regions need presenting.
pub struct SpriteGroup<S: Sprite> {
    entries: Vec<Entry<S>>,
}

impl<S: Sprite> SpriteGroup<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, sprite: S) -> SpriteId {
        self.entries.push(Entry {
            sprite,
            drawn: None,
        });
        SpriteId(self.entries.len() - 1)
    }

    pub fn get(&self, id: SpriteId) -> Option<&S> {
        self.entries.get(id.0).map(|entry| &entry.sprite)
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut S> {
        self.entries.get_mut(id.0).map(|entry| &mut entry.sprite)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self, screen: &mut SurfaceRef, background: &SurfaceRef) -> Result<(), String> {
        for rect in self.entries.iter().filter_map(|entry| entry.drawn) {
            background.blit(rect, screen, rect)?;
        }
        Ok(())
    }

    pub fn update(&mut self) {
        for entry in &mut self.entries {
            entry.sprite.update();
        }
    }

    pub fn draw(&mut self, screen: &mut SurfaceRef) -> Result<Vec<Rect>, String> {
        let mut dirty = Vec::with_capacity(self.entries.len());
        for entry in &mut self.entries {
            let drawn = entry
                .sprite
                .image()
                .blit(None::<Rect>, screen, entry.sprite.rect())?;
            dirty.extend(dirty_rects(entry.drawn, drawn));
            entry.drawn = drawn;
        }
        Ok(dirty)
    }
}

impl<S: Sprite> Default for SpriteGroup<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Regions to present for one sprite moving from `previous` to `current`.
/// Overlapping areas are merged into one rectangle.
pub fn dirty_rects(previous: Option<Rect>, current: Option<Rect>) -> Vec<Rect> {
    match (previous, current) {
        (Some(previous), Some(current)) if previous.has_intersection(current) => {
            vec![previous.union(current)]
        }
        (Some(previous), Some(current)) => vec![current, previous],
        (None, Some(current)) => vec![current],
        (Some(previous), None) => vec![previous],
        (None, None) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::pixels::PixelFormatEnum;
    use sdl2::surface::Surface;

    struct Block {
        image: Surface<'static>,
        rect: Rect,
        updates: u32,
    }

    impl Block {
        fn new(x: i32, y: i32, size: u32) -> Block {
            Block {
                image: Surface::new(size, size, PixelFormatEnum::RGB888).expect("surface"),
                rect: Rect::new(x, y, size, size),
                updates: 0,
            }
        }
    }

    impl Sprite for Block {
        fn image(&self) -> &SurfaceRef {
            &self.image
        }

        fn rect(&self) -> Rect {
            self.rect
        }

        fn update(&mut self) {
            self.updates += 1;
        }
    }

    fn blank_screen() -> Surface<'static> {
        Surface::new(100, 100, PixelFormatEnum::RGB888).expect("surface")
    }

    #[test]
    fn dirty_rects_merges_overlapping_moves() {
        let previous = Rect::new(0, 0, 10, 10);
        let current = Rect::new(1, 1, 10, 10);
        assert_eq!(
            dirty_rects(Some(previous), Some(current)),
            vec![Rect::new(0, 0, 11, 11)]
        );
    }

    #[test]
    fn dirty_rects_keeps_disjoint_moves_separate() {
        let previous = Rect::new(0, 0, 10, 10);
        let current = Rect::new(50, 50, 10, 10);
        assert_eq!(
            dirty_rects(Some(previous), Some(current)),
            vec![current, previous]
        );
    }

    #[test]
    fn dirty_rects_first_and_vanished_draws() {
        let rect = Rect::new(3, 4, 5, 6);
        assert_eq!(dirty_rects(None, Some(rect)), vec![rect]);
        assert_eq!(dirty_rects(Some(rect), None), vec![rect]);
        assert!(dirty_rects(None, None).is_empty());
    }

    #[test]
    fn draw_reports_new_then_merged_regions() {
        let mut screen = blank_screen();
        let background = blank_screen();
        let mut group = SpriteGroup::new();
        let id = group.add(Block::new(10, 10, 8));

        assert_eq!(group.draw(&mut screen).unwrap(), vec![Rect::new(10, 10, 8, 8)]);

        group.clear(&mut screen, &background).unwrap();
        group.get_mut(id).unwrap().rect.offset(1, 0);
        assert_eq!(group.draw(&mut screen).unwrap(), vec![Rect::new(10, 10, 9, 8)]);
    }

    #[test]
    fn draw_clips_to_screen_edge() {
        let mut screen = blank_screen();
        let mut group = SpriteGroup::new();
        group.add(Block::new(96, 0, 8));

        assert_eq!(group.draw(&mut screen).unwrap(), vec![Rect::new(96, 0, 4, 8)]);
    }

    #[test]
    fn update_reaches_every_member() {
        let mut group = SpriteGroup::new();
        let a = group.add(Block::new(0, 0, 4));
        let b = group.add(Block::new(20, 20, 4));
        assert_eq!(group.len(), 2);

        group.update();
        group.update();
        assert_eq!(group.get(a).unwrap().updates, 2);
        assert_eq!(group.get(b).unwrap().updates, 2);
    }
}
