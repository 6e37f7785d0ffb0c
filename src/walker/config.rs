use sdl2::rect::Rect;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 400;

pub struct GameConfig {
    pub title: String,
    // Display mode and camera bounds, constant for the whole run
    pub screen: Rect,
    pub fps: u32,
    pub data_dir: PathBuf,
    pub player_image: String,
    pub background_image: String,
    // Pixels moved per frame along each pressed axis
    pub step: i32,
    pub clamp_to_screen: bool,
    // Turn the player towards its horizontal movement
    pub face_movement: bool,
    pub shutdown_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Walker".to_string(),
            screen: Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
            fps: 40,
            data_dir: default_data_dir(),
            player_image: "player_sprite.png".to_string(),
            background_image: "background.png".to_string(),
            step: 1,
            clamp_to_screen: false,
            face_movement: false,
            shutdown_delay: Duration::from_millis(100),
        }
    }
}

impl GameConfig {
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

/// `data/` next to the running executable, or the crate's own `data/` when
/// the binary is run out of `target/`.
fn default_data_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
    }
}
