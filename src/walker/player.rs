use super::sprites::Sprite;
use sdl2::rect::Rect;
use sdl2::surface::{Surface, SurfaceRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

/// The two appearances of the player; `left` is the mirror of `right`.
pub struct PlayerImages {
    pub right: Surface<'static>,
    pub left: Surface<'static>,
}

impl PlayerImages {
    pub fn facing(&self, facing: Facing) -> &SurfaceRef {
        match facing {
            Facing::Right => &*self.right,
            Facing::Left => &*self.left,
        }
    }
}

pub struct Player {
    images: PlayerImages,
    facing: Facing,
    rect: Rect,
}

impl Player {
    pub fn new(images: PlayerImages) -> Player {
        let rect = images.right.rect();
        Player {
            images,
            facing: Facing::Right,
            rect,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn face(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.offset(dx, dy);
    }

    /// Pulls the player back inside `bounds`. A player larger than `bounds`
    /// is pinned to its top-left corner.
    pub fn clamp_to(&mut self, bounds: Rect) {
        let max_x = (bounds.right() - self.rect.width() as i32).max(bounds.x());
        let max_y = (bounds.bottom() - self.rect.height() as i32).max(bounds.y());
        self.rect.set_x(self.rect.x().clamp(bounds.x(), max_x));
        self.rect.set_y(self.rect.y().clamp(bounds.y(), max_y));
    }
}

impl Sprite for Player {
    fn image(&self) -> &SurfaceRef {
        self.images.facing(self.facing)
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}
