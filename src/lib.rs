//! Hungry Python: a single-player grid snake game.
//!
//! The game rules (`grid`, `direction`, `snake`, `fruit`, `controller`) are
//! independent of ggez. `app`, `assets`, `input` and `render` adapt them to a
//! ggez window.

pub mod app;
pub mod assets;
pub mod config;
pub mod controller;
pub mod difficulty;
pub mod direction;
pub mod fruit;
pub mod grid;
pub mod high_score;
pub mod input;
pub mod logger;
pub mod orientation;
pub mod render;
pub mod skin;
pub mod snake;
