use ggez::{conf, event, GameResult};

use hungry_python::app::App;
use hungry_python::config::{Settings, DEFAULT_SETTINGS_FILE};
use hungry_python::grid::GRID_SIZE;
use hungry_python::logger;

fn main() -> GameResult {
    logger::init();
    let settings = Settings::load(DEFAULT_SETTINGS_FILE);

    let screen_size = GRID_SIZE as f32 * settings.cell_size;
    let window_setup = conf::WindowSetup::default()
        .title("Snake - Upgraded")
        .vsync(true);
    let window_mode = conf::WindowMode::default()
        .dimensions(screen_size, screen_size)
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("hungry_python", "hungry_python")
        .add_resource_path(settings.resource_dir.clone())
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = App::new(&mut ctx, &settings)?;
    event::run(ctx, event_loop, app)
}
