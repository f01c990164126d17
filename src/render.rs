//! Draws a `GameView` with ggez.

use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, Rect, Text, TextLayout};
use ggez::{Context, GameResult};

use crate::assets::Assets;
use crate::controller::{GameState, GameView};
use crate::grid::Cell;
use crate::orientation::sprite_for;

pub const BACKGROUND_COLOR: Color = Color::new(0.686, 0.843, 0.275, 1.0);
const GRASS_COLOR: Color = Color::new(0.655, 0.820, 0.239, 1.0);
const INK_COLOR: Color = Color::new(0.220, 0.290, 0.047, 1.0);
const TITLE_COLOR: Color = Color::new(0.196, 0.196, 0.196, 1.0);
const SELECTED_COLOR: Color = Color::new(0.039, 0.314, 0.039, 1.0);
const FRUIT_COLOR: Color = Color::new(0.784, 0.118, 0.118, 1.0);
const PLACEHOLDER_COLOR: Color = Color::new(0.706, 0.706, 0.706, 1.0);
const GAME_OVER_COLOR: Color = Color::new(1.0, 0.784, 0.314, 1.0);
const SUBTLE_COLOR: Color = Color::new(0.784, 0.784, 0.784, 1.0);
const HINT_COLOR: Color = Color::new(0.863, 0.863, 0.863, 1.0);

/// Layout was designed for an 800px square window and scales from there.
const REFERENCE_SIZE: f32 = 800.0;

pub struct Renderer {
    cell: f32,
    size: f32,
}

impl Renderer {
    pub fn new(cell_size: f32, grid_size: i16) -> Self {
        Renderer {
            cell: cell_size,
            size: cell_size * grid_size as f32,
        }
    }

    fn unit(&self) -> f32 {
        self.size / REFERENCE_SIZE
    }

    pub fn draw(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        view: &GameView,
        assets: &Assets,
    ) -> GameResult {
        self.draw_grass(ctx, canvas, view.grid_size)?;
        match view.state {
            GameState::MainMenu => self.draw_main_menu(canvas, view, assets),
            GameState::Playing => self.draw_elements(ctx, canvas, view, assets)?,
            GameState::Paused => {
                self.draw_elements(ctx, canvas, view, assets)?;
                self.draw_pause(ctx, canvas, assets)?;
            }
            GameState::GameOver => {
                self.draw_elements(ctx, canvas, view, assets)?;
                self.draw_game_over(ctx, canvas, view, assets)?;
            }
        }
        Ok(())
    }

    fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            cell.x as f32 * self.cell,
            cell.y as f32 * self.cell,
            self.cell,
            self.cell,
        )
    }

    fn draw_grass(&self, ctx: &mut Context, canvas: &mut Canvas, grid_size: i16) -> GameResult {
        for row in 0..grid_size {
            for col in 0..grid_size {
                if (row + col) % 2 == 0 {
                    fill_rect(ctx, canvas, self.cell_rect(Cell::new(col, row)), GRASS_COLOR)?;
                }
            }
        }
        Ok(())
    }

    fn draw_elements(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        view: &GameView,
        assets: &Assets,
    ) -> GameResult {
        self.draw_fruit(ctx, canvas, view.fruit, assets)?;
        self.draw_snake(ctx, canvas, view, assets)?;
        self.draw_score(ctx, canvas, view, assets)
    }

    fn draw_fruit(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        fruit: Cell,
        assets: &Assets,
    ) -> GameResult {
        let rect = self.cell_rect(fruit);
        match &assets.apple {
            Some(apple) => self.draw_image(canvas, apple, rect),
            None => fill_rect(ctx, canvas, rect, FRUIT_COLOR)?,
        }
        Ok(())
    }

    fn draw_snake(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        view: &GameView,
        assets: &Assets,
    ) -> GameResult {
        for segment in view.segments() {
            let rect = self.cell_rect(segment.cell);
            match assets.sprites.get(sprite_for(&segment)) {
                Some(image) => self.draw_image(canvas, image, rect),
                None => fill_rect(ctx, canvas, rect, PLACEHOLDER_COLOR)?,
            }
        }
        Ok(())
    }

    fn draw_image(&self, canvas: &mut Canvas, image: &graphics::Image, rect: Rect) {
        canvas.draw(
            image,
            DrawParam::default().dest([rect.x, rect.y]).scale([
                rect.w / image.width() as f32,
                rect.h / image.height() as f32,
            ]),
        );
    }

    /// Current score bottom-right next to an apple, high score top-left.
    fn draw_score(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        view: &GameView,
        assets: &Assets,
    ) -> GameResult {
        let u = self.unit();
        let center = [self.size - 60.0 * u, self.size - 40.0 * u];
        let icon = Rect::new(center[0] - 20.0 * u - self.cell, center[1] - self.cell / 2.0, self.cell, self.cell);
        let panel = Rect::new(icon.x, icon.y, icon.w + 46.0 * u, icon.h);

        fill_rect(ctx, canvas, panel, GRASS_COLOR)?;
        match &assets.apple {
            Some(apple) => self.draw_image(canvas, apple, icon),
            None => fill_rect(ctx, canvas, icon, FRUIT_COLOR)?,
        }
        canvas.draw(
            &centered(assets, view.score.to_string(), 25.0 * u),
            DrawParam::default().dest(center).color(INK_COLOR),
        );
        let outline = Mesh::new_rectangle(ctx, DrawMode::stroke(2.0), panel, INK_COLOR)?;
        canvas.draw(&outline, DrawParam::default());

        canvas.draw(
            &text(assets, format!("High Score: {}", view.high_score), 25.0 * u),
            DrawParam::default().dest([10.0, 10.0]).color(INK_COLOR),
        );
        Ok(())
    }

    fn draw_main_menu(&self, canvas: &mut Canvas, view: &GameView, assets: &Assets) {
        let u = self.unit();
        let mid = self.size / 2.0;
        canvas.draw(
            &centered(assets, "HUNGRY PYTHON", 64.0 * u),
            DrawParam::default().dest([mid, 230.0 * u]).color(TITLE_COLOR),
        );
        for (i, (selected, label)) in view.menu_labels().enumerate() {
            let color = if selected { SELECTED_COLOR } else { TITLE_COLOR };
            canvas.draw(
                &centered(assets, label, 32.0 * u),
                DrawParam::default()
                    .dest([mid, (310.0 + i as f32 * 50.0) * u])
                    .color(color),
            );
        }
    }

    fn draw_pause(&self, ctx: &mut Context, canvas: &mut Canvas, assets: &Assets) -> GameResult {
        let u = self.unit();
        let mid = self.size / 2.0;
        self.draw_overlay(ctx, canvas, 120)?;
        canvas.draw(
            &centered(assets, "PAUSED", 64.0 * u),
            DrawParam::default().dest([mid, mid - 20.0 * u]).color(Color::WHITE),
        );
        canvas.draw(
            &centered(assets, "Press P to resume or M for menu", 18.0 * u),
            DrawParam::default().dest([mid, mid + 30.0 * u]).color(HINT_COLOR),
        );
        Ok(())
    }

    fn draw_game_over(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        view: &GameView,
        assets: &Assets,
    ) -> GameResult {
        let u = self.unit();
        let mid = self.size / 2.0;
        self.draw_overlay(ctx, canvas, 150)?;

        let lines = [
            ("GAME OVER".to_string(), 64.0, 200.0, GAME_OVER_COLOR),
            (format!("Score: {}", view.last_score), 32.0, 280.0, Color::WHITE),
            (format!("High Score: {}", view.high_score), 32.0, 320.0, SUBTLE_COLOR),
            ("Press ENTER to play again".to_string(), 18.0, 470.0, HINT_COLOR),
            ("Press M to return to menu".to_string(), 18.0, 510.0, HINT_COLOR),
        ];
        for (line, scale, y, color) in lines {
            canvas.draw(
                &centered(assets, line, scale * u),
                DrawParam::default().dest([mid, y * u]).color(color),
            );
        }
        Ok(())
    }

    fn draw_overlay(&self, ctx: &mut Context, canvas: &mut Canvas, alpha: u8) -> GameResult {
        let screen = Rect::new(0.0, 0.0, self.size, self.size);
        fill_rect(ctx, canvas, screen, Color::from_rgba(0, 0, 0, alpha))
    }
}

fn fill_rect(ctx: &mut Context, canvas: &mut Canvas, rect: Rect, color: Color) -> GameResult {
    let mesh = Mesh::new_rectangle(ctx, DrawMode::fill(), rect, color)?;
    canvas.draw(&mesh, DrawParam::default());
    Ok(())
}

fn text(assets: &Assets, content: impl Into<String>, scale: f32) -> Text {
    let mut text = Text::new(content.into());
    text.set_scale(scale);
    if let Some(font) = assets.font {
        text.set_font(font);
    }
    text
}

fn centered(assets: &Assets, content: impl Into<String>, scale: f32) -> Text {
    let mut text = text(assets, content, scale);
    text.set_layout(TextLayout::center());
    text
}
