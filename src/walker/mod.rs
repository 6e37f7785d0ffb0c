pub mod assets;
pub mod background;
pub mod clock;
pub mod config;
pub mod game;
pub mod input;
pub mod player;
pub mod sprites;
