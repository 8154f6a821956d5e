//! Shared building blocks for Advent of Code solvers
//!
//! # Overview
//!
//! This library provides:
//! - A literal-delimiter tokenizer with an empty-token discard policy
//! - Typed splitting: map every token through a transform, or parse it as an
//!   integer in any radix
//! - A generic 2D [`Point`] with arithmetic, dot/cross products and a
//!   documented hash projection, plus eight-way [`Direction`]s
//! - Small reductions ([`max_of`], [`arg_max`], ...) and input file helpers
//!
//! # Quick Example
//!
//! ```
//! use aoc_common::{split_and_transform, split_int, Direction, Point};
//! use std::collections::HashSet;
//!
//! let sizes: Vec<Vec<u32>> = split_and_transform(
//!     "2x3x4\n1x1x10",
//!     |line| split_int(line, "x", 10, false).unwrap(),
//!     "\n",
//!     true,
//! );
//! assert_eq!(sizes, [[2, 3, 4], [1, 1, 10]]);
//!
//! let mut position = Point::<i32>::default();
//! let mut visited = HashSet::from([position]);
//! for glyph in "^>v<".chars() {
//!     position = Direction::try_from(glyph).unwrap().advance(position);
//!     visited.insert(position);
//! }
//! assert_eq!(visited.len(), 4);
//! ```
//!
//! All operations are pure and hold no shared state, so they can be called
//! from any number of threads at once.

mod compare;
mod direction;
mod error;
mod input;
mod numeric;
mod paths;
mod point;
mod split;

pub use compare::{arg_max, arg_min, compare_by, max_of, min_of};
pub use direction::Direction;
pub use error::{DirectionError, InputError, SplitError};
pub use input::{read_input, read_lines};
pub use numeric::{ComponentHash, Integral, Numeric};
pub use paths::{ROOT_MARKER, find_root_from, root_path};
pub use point::{Point, PointF32, PointF64, PointI32, PointI64};
pub use split::{
    DEFAULT_DELIMITER, DEFAULT_RADIX, Splitter, Tokens, split, split_and_transform, split_int,
    try_split_and_transform,
};
