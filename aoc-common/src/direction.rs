//! Eight-way compass directions on a grid of [`Point`]s
//!
//! x grows towards the east and y grows towards the north.

use crate::error::DirectionError;
use crate::point::Point;
use num_traits::Signed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four axis-aligned directions, clockwise from north
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step for this direction
    pub fn offset<T: Signed + Copy>(self) -> Point<T> {
        let (dx, dy) = match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        };
        Point::new(unit(dx), unit(dy))
    }

    /// `point` moved one step in this direction
    pub fn advance<T: Signed + Copy>(self, point: Point<T>) -> Point<T> {
        point + self.offset()
    }

    /// Rotate clockwise by `degrees`, rounded down to a multiple of 45
    ///
    /// Negative angles rotate counter-clockwise.
    pub fn turn_clockwise(self, degrees: i32) -> Self {
        let steps = degrees.div_euclid(45).rem_euclid(8) as usize;
        Self::ALL[(self as usize + steps) % 8]
    }

    pub fn turn_counterclockwise(self, degrees: i32) -> Self {
        self.turn_clockwise(-degrees)
    }

    pub fn opposite(self) -> Self {
        self.turn_clockwise(180)
    }
}

fn unit<T: Signed>(value: i8) -> T {
    match value {
        1 => T::one(),
        -1 => -T::one(),
        _ => T::zero(),
    }
}

/// Arrow glyphs as used by grid-walk puzzles: `^ v > <`
impl TryFrom<char> for Direction {
    type Error = DirectionError;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        match glyph {
            '^' => Ok(Direction::North),
            'v' => Ok(Direction::South),
            '>' => Ok(Direction::East),
            '<' => Ok(Direction::West),
            other => Err(DirectionError::UnknownGlyph(other)),
        }
    }
}
