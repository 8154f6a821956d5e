//! Generic two-component vector used for grid positions and offsets

use crate::numeric::{ComponentHash, Numeric};
use num_traits::{AsPrimitive, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D point or vector with both components of the same numeric type
///
/// `Point::default()` is the origin. Equality is structural.
///
/// ```
/// use aoc_common::Point;
///
/// let a = Point::new(2, 3);
/// let b = Point::new(4, 5);
/// assert_eq!(a + b, Point::new(6, 8));
/// assert_eq!(a.dot(b), 23);
/// assert_eq!(a.cross(b), -2);
/// assert_eq!(Point::new(3, 4).length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

pub type PointI32 = Point<i32>;
pub type PointI64 = Point<i64>;
pub type PointF32 = Point<f32>;
pub type PointF64 = Point<f64>;

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Point<T> {
    /// Point with both components set to `value`
    pub fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }
}

impl<T: Numeric> Point<T> {
    /// `x * other.x + y * other.y`
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product (determinant), `x * other.y - y * other.x`
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn squared_length(self) -> T {
        self.dot(self)
    }

    /// Euclidean length, always computed in `f64`
    ///
    /// Components are widened before squaring, so this never overflows `T`.
    pub fn length(self) -> f64 {
        let (x, y): (f64, f64) = (self.x.as_(), self.y.as_());
        (x * x + y * y).sqrt()
    }

    pub fn squared_distance(self, other: Self) -> T {
        let dx = abs_diff(self.x, other.x);
        let dy = abs_diff(self.y, other.y);
        dx * dx + dy * dy
    }

    /// Taxicab distance; works for unsigned components too
    pub fn manhattan_distance(self, other: Self) -> T {
        abs_diff(self.x, other.x) + abs_diff(self.y, other.y)
    }
}

fn abs_diff<T: Numeric>(a: T, b: T) -> T {
    if a >= b { a - b } else { b - a }
}

impl<T: ComponentHash> Point<T> {
    /// Order-sensitive hash of both components: `h(x) ^ (h(y) << 1)`
    ///
    /// This is the value fed to [`Hasher`]s, which makes points usable as
    /// `HashMap`/`HashSet` keys. It is a pure function of `(x, y)` and makes
    /// no attempt to avoid collisions between distinct points.
    pub fn hash_projection(&self) -> u64 {
        self.x.component_hash() ^ (self.y.component_hash() << 1)
    }
}

impl<T: ComponentHash> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_projection());
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Point<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: SubAssign> SubAssign for Point<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: MulAssign + Copy> MulAssign<T> for Point<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Div<Output = T> + Zero + Copy> Div<T> for Point<T> {
    type Output = Self;

    /// # Panics
    /// Panics if the divisor is zero.
    fn div(self, rhs: T) -> Self {
        assert!(!rhs.is_zero(), "point divided by zero");
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: DivAssign + Zero + Copy> DivAssign<T> for Point<T> {
    /// # Panics
    /// Panics if the divisor is zero.
    fn div_assign(&mut self, rhs: T) {
        assert!(!rhs.is_zero(), "point divided by zero");
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Neg<Output = T>> Neg for Point<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(point: Point<T>) -> Self {
        (point.x, point.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
