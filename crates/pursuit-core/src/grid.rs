#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grid cell. Equality is exact cell equality, never approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One turn's worth of movement. `Stop` is a legal action everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    Stop,
}

impl Direction {
    /// Fixed enumeration order for determinism: N, E, S, W.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset on the grid. North is +y.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

/// Boolean wall grid, immutable for the lifetime of a match once built.
///
/// Out-of-bounds queries read as walls, so callers never need their own
/// bounds checks.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallMap {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl WallMap {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "wall map must be non-empty");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
        }
    }

    /// Build a map from an ASCII sketch: `#` is a wall, anything else is
    /// open. The first line is the top row (highest `y`). Intended for
    /// fixtures; hosts hand over their own grids.
    pub fn from_ascii(sketch: &str) -> Self {
        let rows: Vec<&str> = sketch
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut map = Self::new(width.max(1), height.max(1));
        for (i, row) in rows.iter().enumerate() {
            let y = (height as i32) - 1 - (i as i32);
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    map.set_wall(x as i32, y, true);
                }
            }
        }
        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_wall(&mut self, x: i32, y: i32, wall: bool) {
        if let Some(idx) = self.idx(x, y) {
            self.blocked[idx] = wall;
        }
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).map(|i| self.blocked[i]).unwrap_or(true)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Open cells in column `x`, ascending by row.
    pub fn open_in_column(&self, x: i32) -> Vec<Position> {
        (0..self.height)
            .filter(|&y| !self.is_wall(x, y))
            .map(|y| Position::new(x, y))
            .collect()
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }
}
