//! Game flow: menu, play, pause and game over, driven by commands and ticks.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::difficulty::Difficulty;
use crate::direction::Direction;
use crate::fruit::Fruit;
use crate::grid::{in_bounds, Cell, GRID_SIZE};
use crate::high_score::ScoreStore;
use crate::skin::Skin;
use crate::snake::{Segment, Snake, INITIAL_LENGTH};

/// Longest stretch of wall time a single `advance` call accounts for.
const MAX_FRAME_STEP: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

/// Discrete player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Quit,
    Pause,
    ReturnToMenu,
    CycleDifficulty,
    ToggleSkin,
    NavigateUp,
    NavigateDown,
}

/// Sound feedback requested by the controller. Fire and forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    FruitEaten,
    MenuSelect,
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Difficulty,
    Skin,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Start,
        MenuItem::Difficulty,
        MenuItem::Skin,
        MenuItem::Quit,
    ];

    pub fn label(&self, difficulty: Difficulty, skin: Skin) -> String {
        match self {
            MenuItem::Start => "Start Game".to_string(),
            MenuItem::Difficulty => format!("Difficulty: {}", difficulty.label()),
            MenuItem::Skin => format!("Skin: {}", skin.number()),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

/// Read-only snapshot handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub state: GameState,
    pub grid_size: i16,
    pub snake: &'a Snake,
    pub fruit: Cell,
    pub score: u32,
    pub high_score: u32,
    pub last_score: u32,
    pub menu_index: usize,
    pub difficulty: Difficulty,
    pub skin: Skin,
    pub tick_interval: Duration,
}

impl<'a> GameView<'a> {
    pub fn segments(&self) -> impl Iterator<Item = Segment> + 'a {
        self.snake.segments()
    }

    pub fn menu_labels(&self) -> impl Iterator<Item = (bool, String)> + '_ {
        MenuItem::ALL.into_iter().enumerate().map(move |(i, item)| {
            (i == self.menu_index, item.label(self.difficulty, self.skin))
        })
    }
}

pub struct Controller<S: ScoreStore> {
    state: GameState,
    snake: Snake,
    fruit: Fruit,
    difficulty: Difficulty,
    skin: Skin,
    menu_index: usize,
    high_score: u32,
    last_score: u32,
    direction_changed: bool,
    tick_interval: Duration,
    elapsed: Duration,
    cues: Vec<Cue>,
    rng: StdRng,
    store: S,
}

impl<S: ScoreStore> Controller<S> {
    pub fn new(store: S, difficulty: Difficulty, skin: Skin) -> Self {
        Self::with_rng(store, difficulty, skin, StdRng::from_entropy())
    }

    pub fn with_rng(store: S, difficulty: Difficulty, skin: Skin, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let mut fruit = Fruit::at(Cell::new(0, 0));
        fruit.randomize(&mut rng, snake.body());
        let high_score = store.load();
        log::info!("Loaded high score {high_score}");

        Controller {
            state: GameState::MainMenu,
            snake,
            fruit,
            difficulty,
            skin,
            menu_index: 0,
            high_score,
            last_score: 0,
            direction_changed: false,
            tick_interval: difficulty.tick_interval(),
            elapsed: Duration::ZERO,
            cues: Vec::new(),
            rng,
            store,
        }
    }

    /// Applies one player command. Only `Flow::Exit` asks the caller to stop.
    pub fn handle(&mut self, command: Command) -> Flow {
        if command == Command::Quit {
            log::info!("Quit requested");
            return Flow::Exit;
        }

        match self.state {
            GameState::MainMenu => return self.handle_menu(command),
            GameState::Playing => match command {
                Command::MoveUp => self.steer(Direction::Up),
                Command::MoveDown => self.steer(Direction::Down),
                Command::MoveLeft => self.steer(Direction::Left),
                Command::MoveRight => self.steer(Direction::Right),
                Command::Pause => {
                    self.cue(Cue::MenuSelect);
                    self.enter(GameState::Paused);
                }
                _ => {}
            },
            GameState::Paused => match command {
                Command::Pause => {
                    self.cue(Cue::MenuSelect);
                    self.elapsed = Duration::ZERO;
                    self.enter(GameState::Playing);
                }
                Command::ReturnToMenu => {
                    self.cue(Cue::MenuSelect);
                    self.enter(GameState::MainMenu);
                }
                _ => {}
            },
            GameState::GameOver => match command {
                Command::Confirm => {
                    self.cue(Cue::MenuSelect);
                    self.start();
                }
                Command::ReturnToMenu => {
                    self.cue(Cue::MenuSelect);
                    self.enter(GameState::MainMenu);
                }
                _ => {}
            },
        }
        Flow::Continue
    }

    fn handle_menu(&mut self, command: Command) -> Flow {
        let selected = MenuItem::ALL[self.menu_index];
        match command {
            Command::NavigateUp => {
                self.menu_index = (self.menu_index + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
                self.cue(Cue::MenuSelect);
            }
            Command::NavigateDown => {
                self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
                self.cue(Cue::MenuSelect);
            }
            Command::Confirm => match selected {
                MenuItem::Start => {
                    self.cue(Cue::MenuSelect);
                    self.start();
                }
                MenuItem::Difficulty => self.set_difficulty(self.difficulty.next()),
                MenuItem::Skin => self.toggle_skin(),
                MenuItem::Quit => {
                    log::info!("Quit selected from menu");
                    return Flow::Exit;
                }
            },
            Command::MoveLeft | Command::MoveRight => match selected {
                MenuItem::Difficulty if command == Command::MoveLeft => {
                    self.set_difficulty(self.difficulty.previous())
                }
                MenuItem::Difficulty => self.set_difficulty(self.difficulty.next()),
                MenuItem::Skin => self.toggle_skin(),
                _ => {}
            },
            Command::CycleDifficulty => self.set_difficulty(self.difficulty.next()),
            Command::ToggleSkin => self.toggle_skin(),
            _ => {}
        }
        Flow::Continue
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.tick_interval = difficulty.tick_interval();
        self.cue(Cue::MenuSelect);
        log::debug!("Difficulty set to {}", difficulty.label());
    }

    fn toggle_skin(&mut self) {
        self.skin = self.skin.toggled();
        self.cue(Cue::MenuSelect);
        log::debug!("Skin set to {}", self.skin.number());
    }

    /// One direction change per tick, never straight back.
    fn steer(&mut self, direction: Direction) {
        if self.direction_changed {
            return;
        }
        if self.snake.set_direction(direction) {
            self.direction_changed = true;
        }
    }

    /// Fresh snake and fruit, moving right, paced by the current difficulty.
    fn start(&mut self) {
        self.snake.reset();
        self.fruit.randomize(&mut self.rng, self.snake.body());
        self.snake.set_direction(Direction::Right);
        self.direction_changed = false;
        self.tick_interval = self.difficulty.tick_interval();
        self.elapsed = Duration::ZERO;
        self.enter(GameState::Playing);
    }

    /// Feeds wall time into the tick clock and runs every tick that is due.
    /// Time only accumulates while playing. Returns the number of ticks run.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.state != GameState::Playing {
            return 0;
        }
        self.elapsed += dt.min(MAX_FRAME_STEP);
        let mut ticks = 0;
        while self.state == GameState::Playing && self.elapsed >= self.tick_interval {
            self.elapsed -= self.tick_interval;
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Runs a frame made of `count` fixed steps. The frame as a whole is
    /// clamped like a single `advance`, so a stall never replays in full.
    pub fn advance_steps(&mut self, step: Duration, count: u32) -> u32 {
        self.advance(step.saturating_mul(count))
    }

    /// A single game step: move, eat, then check for death.
    pub fn tick(&mut self) {
        self.direction_changed = false;
        if self.state != GameState::Playing {
            return;
        }

        if self.snake.step() {
            self.record_high_score();
        }
        self.check_fruit();
        self.check_fail();
    }

    fn check_fruit(&mut self) {
        if self.snake.head() == Some(self.fruit.pos) {
            self.fruit.randomize(&mut self.rng, self.snake.body());
            self.snake.grow();
            self.cue(Cue::FruitEaten);
        }

        if self.snake.contains(self.fruit.pos) {
            self.fruit.randomize(&mut self.rng, self.snake.body());
        }
    }

    fn check_fail(&mut self) {
        let off_grid = self.snake.head().map_or(true, |head| !in_bounds(head));
        if off_grid || self.snake.hits_itself() {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.last_score = self.score();
        self.record_high_score();
        log::info!(
            "Game over with score {} (high score {})",
            self.last_score,
            self.high_score
        );
        self.enter(GameState::GameOver);
    }

    /// Writes through to the store whenever the current score beats the best.
    fn record_high_score(&mut self) {
        let score = self.score();
        if score <= self.high_score {
            return;
        }
        self.high_score = score;
        match self.store.save(score) {
            Ok(()) => log::info!("New high score {score}"),
            Err(e) => log::warn!("Failed to save high score {score}: {e}"),
        }
    }

    fn enter(&mut self, state: GameState) {
        log::debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Takes every cue raised since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            state: self.state,
            grid_size: GRID_SIZE,
            snake: &self.snake,
            fruit: self.fruit.pos,
            score: self.score(),
            high_score: self.high_score,
            last_score: self.last_score,
            menu_index: self.menu_index,
            difficulty: self.difficulty,
            skin: self.skin,
            tick_interval: self.tick_interval,
        }
    }

    /// Segments grown beyond the starting length.
    pub fn score(&self) -> u32 {
        self.snake.len().saturating_sub(INITIAL_LENGTH) as u32
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Cell {
        self.fruit.pos
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn last_score(&self) -> u32 {
        self.last_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Puts the fruit on a chosen cell, e.g. to set up a scenario.
    pub fn place_fruit(&mut self, cell: Cell) {
        self.fruit = Fruit::at(cell);
    }

    /// Swaps in a prepared snake, e.g. to set up a scenario.
    pub fn replace_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
