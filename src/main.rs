use walker::walker::config::GameConfig;
use walker::walker::game::Game;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Walker starting...");

    let mut game = Game::new(GameConfig::default());
    game.run()
}
