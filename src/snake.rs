//! The snake: an ordered run of cells, head first.

use std::collections::VecDeque;

use crate::direction::Direction;
use crate::grid::Cell;

/// Segment count of a freshly reset snake. Score is measured against it.
pub const INITIAL_LENGTH: usize = 3;

const START_BODY: [Cell; INITIAL_LENGTH] = [Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)];

/// One body segment together with the offsets to its neighbours.
///
/// `toward_head` is `body[i - 1] - body[i]`, `toward_tail` is
/// `body[i + 1] - body[i]`. The head has no `toward_head`, the tail no
/// `toward_tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub index: usize,
    pub cell: Cell,
    pub toward_head: Option<Cell>,
    pub toward_tail: Option<Cell>,
}

impl Segment {
    pub fn is_head(&self) -> bool {
        self.index == 0
    }

    pub fn is_tail(&self) -> bool {
        self.toward_tail.is_none() && !self.is_head()
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Option<Direction>,
    growing: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    pub fn new() -> Self {
        let mut snake = Snake {
            body: VecDeque::with_capacity(INITIAL_LENGTH),
            direction: None,
            growing: false,
        };
        snake.reset();
        snake
    }

    /// Builds a snake from explicit cells, head first.
    pub fn with_body<I>(cells: I, direction: Option<Direction>) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Snake {
            body: cells.into_iter().collect(),
            direction,
            growing: false,
        }
    }

    /// Back to three horizontal cells, idle, not growing.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(START_BODY);
        self.direction = None;
        self.growing = false;
    }

    /// Turns the snake unless `direction` would reverse it into its neck.
    /// Returns whether the change was taken.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction == Some(direction.opposite()) {
            return false;
        }
        self.direction = Some(direction);
        true
    }

    /// Advances one cell along the current direction. An idle snake stays put.
    ///
    /// Returns true when a pending growth was consumed by this move.
    pub fn step(&mut self) -> bool {
        let (Some(direction), Some(&head)) = (self.direction, self.body.front()) else {
            return false;
        };
        self.body.push_front(head + direction.offset());
        if self.growing {
            self.growing = false;
            true
        } else {
            self.body.pop_back();
            false
        }
    }

    /// Marks the next `step` as a growing one. The body is untouched until then.
    pub fn grow(&mut self) {
        self.growing = true;
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True when the head shares its cell with any other segment.
    pub fn hits_itself(&self) -> bool {
        match self.head() {
            Some(head) => self.body.iter().skip(1).any(|&c| c == head),
            None => false,
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.body.iter().enumerate().map(move |(index, &cell)| Segment {
            index,
            cell,
            toward_head: index
                .checked_sub(1)
                .and_then(|i| self.body.get(i))
                .map(|&prev| prev - cell),
            toward_tail: self.body.get(index + 1).map(|&next| next - cell),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[(i16, i16)]) -> Vec<Cell> {
        raw.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_reset_layout() {
        let snake = Snake::new();
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            cells(&[(5, 10), (4, 10), (3, 10)])
        );
        assert_eq!(snake.direction(), None);
        assert!(!snake.is_growing());
    }

    #[test]
    fn test_idle_step_is_noop() {
        let mut snake = Snake::new();
        assert!(!snake.step());
        assert_eq!(snake.head(), Some(Cell::new(5, 10)));
        assert_eq!(snake.len(), INITIAL_LENGTH);
    }

    #[test]
    fn test_step_keeps_length() {
        let mut snake = Snake::new();
        snake.set_direction(Direction::Right);
        snake.step();
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            cells(&[(6, 10), (5, 10), (4, 10)])
        );
    }

    #[test]
    fn test_grow_is_deferred_to_next_step() {
        let mut snake = Snake::new();
        snake.set_direction(Direction::Right);
        snake.grow();
        assert_eq!(snake.len(), 3, "grow must not touch the body");
        assert!(snake.step());
        assert_eq!(snake.len(), 4);
        assert!(!snake.is_growing());
        assert_eq!(snake.body().back(), Some(&Cell::new(3, 10)));

        assert!(!snake.step());
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_reverse_is_rejected() {
        let mut snake = Snake::new();
        assert!(snake.set_direction(Direction::Right));
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Some(Direction::Right));

        assert!(snake.set_direction(Direction::Up));
        assert!(!snake.set_direction(Direction::Down));
        assert_eq!(snake.direction(), Some(Direction::Up));
    }

    #[test]
    fn test_same_direction_is_accepted() {
        let mut snake = Snake::new();
        snake.set_direction(Direction::Down);
        assert!(snake.set_direction(Direction::Down));
    }

    #[test]
    fn test_self_collision_detected() {
        // Head at (5,5) moving right into (6,5), which the body still holds.
        let mut snake = Snake::with_body(
            cells(&[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6)]),
            Some(Direction::Right),
        );
        assert!(!snake.hits_itself());
        snake.step();
        assert!(snake.hits_itself());
    }

    #[test]
    fn test_segments_offsets() {
        let snake = Snake::with_body(cells(&[(5, 5), (5, 6), (4, 6)]), Some(Direction::Up));
        let segments: Vec<_> = snake.segments().collect();
        assert_eq!(segments.len(), 3);

        assert!(segments[0].is_head());
        assert_eq!(segments[0].toward_head, None);
        assert_eq!(segments[0].toward_tail, Some(Cell::new(0, 1)));

        assert_eq!(segments[1].toward_head, Some(Cell::new(0, -1)));
        assert_eq!(segments[1].toward_tail, Some(Cell::new(-1, 0)));

        assert!(segments[2].is_tail());
        assert_eq!(segments[2].toward_head, Some(Cell::new(1, 0)));
        assert_eq!(segments[2].toward_tail, None);
    }
}
