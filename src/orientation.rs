//! Picks the sprite for a snake segment from its neighbour offsets.

use crate::direction::Direction;
use crate::snake::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyShape {
    Vertical,
    Horizontal,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Head(Direction),
    Tail(Direction),
    Body(BodyShape),
}

impl SpriteKind {
    /// Image file stem for this sprite, e.g. `head_up` or `body_tl`.
    pub fn asset_name(&self) -> &'static str {
        match self {
            SpriteKind::Head(Direction::Up) => "head_up",
            SpriteKind::Head(Direction::Down) => "head_down",
            SpriteKind::Head(Direction::Left) => "head_left",
            SpriteKind::Head(Direction::Right) => "head_right",
            SpriteKind::Tail(Direction::Up) => "tail_up",
            SpriteKind::Tail(Direction::Down) => "tail_down",
            SpriteKind::Tail(Direction::Left) => "tail_left",
            SpriteKind::Tail(Direction::Right) => "tail_right",
            SpriteKind::Body(BodyShape::Vertical) => "body_vertical",
            SpriteKind::Body(BodyShape::Horizontal) => "body_horizontal",
            SpriteKind::Body(BodyShape::TopLeft) => "body_tl",
            SpriteKind::Body(BodyShape::TopRight) => "body_tr",
            SpriteKind::Body(BodyShape::BottomLeft) => "body_bl",
            SpriteKind::Body(BodyShape::BottomRight) => "body_br",
        }
    }

    pub const ALL: [SpriteKind; 14] = [
        SpriteKind::Head(Direction::Up),
        SpriteKind::Head(Direction::Down),
        SpriteKind::Head(Direction::Left),
        SpriteKind::Head(Direction::Right),
        SpriteKind::Tail(Direction::Up),
        SpriteKind::Tail(Direction::Down),
        SpriteKind::Tail(Direction::Left),
        SpriteKind::Tail(Direction::Right),
        SpriteKind::Body(BodyShape::Vertical),
        SpriteKind::Body(BodyShape::Horizontal),
        SpriteKind::Body(BodyShape::TopLeft),
        SpriteKind::Body(BodyShape::TopRight),
        SpriteKind::Body(BodyShape::BottomLeft),
        SpriteKind::Body(BodyShape::BottomRight),
    ];
}

/// Head and tail point away from their only neighbour. Interior segments are
/// straight when both neighbours share an axis, otherwise a corner named after
/// the two sides it connects.
pub fn sprite_for(segment: &Segment) -> SpriteKind {
    match (segment.toward_head, segment.toward_tail) {
        (None, tail) => SpriteKind::Head(
            tail.and_then(Direction::from_offset)
                .map_or(Direction::Right, Direction::opposite),
        ),
        (Some(head), None) => SpriteKind::Tail(
            Direction::from_offset(head).map_or(Direction::Left, Direction::opposite),
        ),
        (Some(next), Some(prev)) => SpriteKind::Body(body_shape(prev.x, prev.y, next.x, next.y)),
    }
}

fn body_shape(px: i16, py: i16, nx: i16, ny: i16) -> BodyShape {
    if px == nx {
        return BodyShape::Vertical;
    }
    if py == ny {
        return BodyShape::Horizontal;
    }
    let corner = |h: i16, v: i16| (px == h && ny == v) || (py == v && nx == h);
    if corner(-1, -1) {
        BodyShape::TopLeft
    } else if corner(-1, 1) {
        BodyShape::BottomLeft
    } else if corner(1, -1) {
        BodyShape::TopRight
    } else {
        BodyShape::BottomRight
    }
}
