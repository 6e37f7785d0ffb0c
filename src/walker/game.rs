use super::assets::{self, AssetError};
use super::background;
use super::clock::FrameClock;
use super::config::GameConfig;
use super::input::{self, DirectionKeys};
use super::player::{Facing, Player, PlayerImages};
use super::sprites::{Sprite, SpriteGroup, SpriteId};
use anyhow::{Context, Error, Result};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::surface::{Surface, SurfaceRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Running,
    Terminating,
}

/// Everything drawn on screen: the background used to erase, the sprites
/// and the handle of the player among them.
pub struct Scene {
    background: Surface<'static>,
    sprites: SpriteGroup<Player>,
    player: SpriteId,
    step: i32,
    bounds: Option<Rect>,
    face_movement: bool,
}

impl Scene {
    pub fn new(background: Surface<'static>, player: Player, config: &GameConfig) -> Scene {
        let mut sprites = SpriteGroup::new();
        let player = sprites.add(player);
        Scene {
            background,
            sprites,
            player,
            step: config.step,
            bounds: config.clamp_to_screen.then_some(config.screen),
            face_movement: config.face_movement,
        }
    }

    /// Loads the player and background assets from the data directory,
    /// converted to the display's `format`.
    pub fn load(config: &GameConfig, format: PixelFormatEnum) -> Result<Scene> {
        let sprite = assets::load_image(&config.asset_path(&config.player_image), format)
            .context("could not load the player sprite")?;
        let mirrored = assets::mirror_horizontal(&sprite).map_err(|reason| AssetError::Surface {
            path: config.asset_path(&config.player_image),
            reason,
        })?;
        let player = Player::new(PlayerImages {
            right: sprite,
            left: mirrored,
        });
        log::info!(
            "Player sprite is {}x{}",
            player.rect().width(),
            player.rect().height()
        );

        let tile = assets::load_image(&config.asset_path(&config.background_image), format)
            .context("could not load the background tile")?;
        let background =
            background::build_background(&tile, config.screen, format).map_err(Error::msg)?;

        Ok(Scene::new(background, player, config))
    }

    pub fn player(&self) -> Option<&Player> {
        self.sprites.get(self.player)
    }

    pub fn present_background(&self, screen: &mut SurfaceRef) -> Result<(), String> {
        self.background.blit(None::<Rect>, screen, None::<Rect>)?;
        Ok(())
    }

    /// Runs one frame of erase, update, move and draw. Returns the screen
    /// regions that changed.
    pub fn frame(&mut self, screen: &mut SurfaceRef, keys: DirectionKeys) -> Result<Vec<Rect>, String> {
        self.sprites.clear(screen, &self.background)?;
        self.sprites.update();

        let (dx, dy) = keys.delta();
        if let Some(player) = self.sprites.get_mut(self.player) {
            player.move_by(dx * self.step, dy * self.step);
            if self.face_movement {
                if let Some(facing) = facing_for(dx) {
                    player.face(facing);
                }
            }
            if let Some(bounds) = self.bounds {
                player.clamp_to(bounds);
            }
        }

        self.sprites.draw(screen)
    }
}

/// Facing for a horizontal step; no horizontal movement keeps the current one.
pub fn facing_for(dx: i32) -> Option<Facing> {
    match dx.signum() {
        1 => Some(Facing::Right),
        -1 => Some(Facing::Left),
        _ => None,
    }
}

pub struct Game {
    config: GameConfig,
    state: LoopState,
}

impl Game {
    pub fn new(config: GameConfig) -> Game {
        Game {
            config,
            state: LoopState::Initializing,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    fn transition(&mut self, next: LoopState) {
        log::info!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn run(&mut self) -> Result<()> {
        let sdl_context = sdl2::init().map_err(Error::msg)?;
        let video_subsystem = sdl_context.video().map_err(Error::msg)?;

        let screen_rect = self.config.screen;
        let window = video_subsystem
            .window(&self.config.title, screen_rect.width(), screen_rect.height())
            .position_centered()
            .build()
            .context("could not open the game window")?;

        let mut event_pump = sdl_context.event_pump().map_err(Error::msg)?;

        let format = window
            .surface(&event_pump)
            .map_err(Error::msg)?
            .pixel_format_enum();
        log::info!(
            "Display mode {}x{} ({:?})",
            screen_rect.width(),
            screen_rect.height(),
            format
        );

        let mut scene = Scene::load(&self.config, format)?;
        {
            let mut screen = window.surface(&event_pump).map_err(Error::msg)?;
            scene.present_background(&mut screen).map_err(Error::msg)?;
            screen.update_window().map_err(Error::msg)?;
        }

        let timer = sdl_context.timer().map_err(Error::msg)?;
        let mut clock = FrameClock::new(timer, self.config.fps);
        self.transition(LoopState::Running);

        while self.state == LoopState::Running {
            if input::drain_quit(event_pump.poll_iter()) {
                self.transition(LoopState::Terminating);
                break;
            }
            let keys = DirectionKeys::from_keyboard(&event_pump.keyboard_state());

            let mut screen = window.surface(&event_pump).map_err(Error::msg)?;
            let dirty = scene.frame(&mut screen, keys).map_err(Error::msg)?;
            screen.update_window_rects(&dirty).map_err(Error::msg)?;

            clock.tick();
        }

        clock.pause(self.config.shutdown_delay);
        log::info!("Shutting down");
        Ok(())
    }
}
