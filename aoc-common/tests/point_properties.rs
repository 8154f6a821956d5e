//! Property-based tests for point arithmetic and hashing

use aoc_common::{Point, PointI64};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn small_point() -> impl Strategy<Value = PointI64> {
    (-10_000i64..10_000, -10_000i64..10_000).prop_map(Point::from)
}

fn hash_of(point: &PointI64) -> u64 {
    let mut hasher = DefaultHasher::new();
    point.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_add_then_sub_is_identity(a in small_point(), b in small_point()) {
        prop_assert_eq!(a + b - b, a);
        let mut c = a;
        c += b;
        c -= b;
        prop_assert_eq!(c, a);
    }

    #[test]
    fn prop_dot_is_symmetric_cross_is_antisymmetric(a in small_point(), b in small_point()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
        prop_assert_eq!(a.cross(b), -b.cross(a));
        prop_assert_eq!(a.cross(a), 0);
    }

    #[test]
    fn prop_squared_length_matches_length(a in small_point()) {
        let length = a.length();
        prop_assert!((length * length - a.squared_length() as f64).abs() < 1e-3);
    }

    /// *For any* components of any width, length matches the f64 formula and never panics
    #[test]
    fn prop_length_in_full_component_range(
        x in any::<u8>(),
        y in any::<u8>(),
        a in any::<i32>(),
        b in any::<i32>(),
    ) {
        let (fx, fy) = (f64::from(x), f64::from(y));
        prop_assert_eq!(Point::new(x, y).length(), (fx * fx + fy * fy).sqrt());

        let (fa, fb) = (f64::from(a), f64::from(b));
        prop_assert_eq!(Point::new(a, b).length(), (fa * fa + fb * fb).sqrt());
    }

    #[test]
    fn prop_scalar_round_trip(a in small_point(), k in 1i64..100) {
        prop_assert_eq!(a * k / k, a);
    }

    /// Equal points always hash equally, and the projection is order sensitive
    #[test]
    fn prop_hash_projection(a in small_point()) {
        prop_assert_eq!(hash_of(&a), hash_of(&Point::new(a.x, a.y)));
        let expected = (a.x as u64) ^ ((a.y as u64) << 1);
        prop_assert_eq!(a.hash_projection(), expected);
    }
}
