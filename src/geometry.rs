//! Integer geometry shared by frames and queries.
//!
//! Draw offsets and actor rects are in tiles; image extents are in pixels.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Size of one tile in pixels.
pub const TILE_SIZE: u32 = 8;

/// 2D integer vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Width and height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extents {
    pub width: u32,
    pub height: u32,
}

impl Extents {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert pixel extents to tile extents, counting partial tiles.
    pub fn pixels_to_tiles(self) -> Extents {
        Extents::new(
            self.width.div_ceil(TILE_SIZE),
            self.height.div_ceil(TILE_SIZE),
        )
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub size: Extents,
}
