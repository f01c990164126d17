//! ggez event handler wiring input, timing, sound and drawing to the controller.

use std::time::Duration;

use ggez::event::EventHandler;
use ggez::graphics::Canvas;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};

use crate::assets::Assets;
use crate::config::Settings;
use crate::controller::{Controller, Flow};
use crate::grid::GRID_SIZE;
use crate::high_score::FileScoreStore;
use crate::input::command_for;
use crate::render::{Renderer, BACKGROUND_COLOR};

const TARGET_FPS: u32 = 60;

pub struct App {
    controller: Controller<FileScoreStore>,
    renderer: Renderer,
    assets: Assets,
}

impl App {
    pub fn new(ctx: &mut Context, settings: &Settings) -> GameResult<Self> {
        let store = FileScoreStore::new(settings.high_score_path.clone());
        log::info!("High score file: {}", store.path().display());
        let controller = Controller::new(store, settings.difficulty, settings.skin);
        let assets = Assets::load(ctx, controller.skin());

        Ok(App {
            controller,
            renderer: Renderer::new(settings.cell_size, GRID_SIZE),
            assets,
        })
    }

    fn play_cues(&mut self, ctx: &mut Context) {
        for cue in self.controller.drain_cues() {
            self.assets.sounds.play(ctx, cue);
        }
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let step = Duration::from_secs_f64(1.0 / TARGET_FPS as f64);
        let mut steps = 0;
        while ctx.time.check_update_time(TARGET_FPS) {
            steps += 1;
        }
        self.controller.advance_steps(step, steps);
        self.play_cues(ctx);
        self.assets.sync_skin(ctx, self.controller.skin());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, BACKGROUND_COLOR);
        self.renderer
            .draw(ctx, &mut canvas, &self.controller.view(), &self.assets)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        if repeated {
            return Ok(());
        }
        let Some(key) = input.keycode else {
            return Ok(());
        };
        if let Some(command) = command_for(key, self.controller.state()) {
            if self.controller.handle(command) == Flow::Exit {
                ctx.request_quit();
            }
        }
        self.play_cues(ctx);
        Ok(())
    }
}
