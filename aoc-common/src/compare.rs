//! Reductions picking the best of a handful of values
//!
//! ```
//! use aoc_common::{arg_max, max_of};
//!
//! assert_eq!(max_of([3, 9, 2]), Some(9));
//! assert_eq!(arg_max([3, 9, 9]), Some(1));
//! ```

/// Keep the best value according to `replace`
///
/// Starts with the first value and swaps in a later value only when
/// `replace(&current, &candidate)` returns `true`, so ties keep the earliest.
///
/// # Returns
/// * `Some((index, value))` - Position and value of the winner
/// * `None` - `values` was empty
pub fn compare_by<T, I, F>(values: I, mut replace: F) -> Option<(usize, T)>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut values = values.into_iter().enumerate();
    let first = values.next()?;
    Some(values.fold(first, |best, candidate| {
        if replace(&best.1, &candidate.1) {
            candidate
        } else {
            best
        }
    }))
}

pub fn max_of<T: PartialOrd, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    compare_by(values, |best, candidate| candidate > best).map(|(_, value)| value)
}

pub fn min_of<T: PartialOrd, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    compare_by(values, |best, candidate| candidate < best).map(|(_, value)| value)
}

/// Index of the first maximum
pub fn arg_max<T: PartialOrd, I: IntoIterator<Item = T>>(values: I) -> Option<usize> {
    compare_by(values, |best, candidate| candidate > best).map(|(index, _)| index)
}

/// Index of the first minimum
pub fn arg_min<T: PartialOrd, I: IntoIterator<Item = T>>(values: I) -> Option<usize> {
    compare_by(values, |best, candidate| candidate < best).map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(max_of(Vec::<i32>::new()), None);
        assert_eq!(arg_min(std::iter::empty::<u8>()), None);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(max_of([4, -2, 7, 1]), Some(7));
        assert_eq!(min_of([4, -2, 7, 1]), Some(-2));
        assert_eq!(arg_max([4, -2, 7, 1]), Some(2));
        assert_eq!(arg_min([4, -2, 7, 1]), Some(1));
    }

    #[test]
    fn test_ties_keep_first() {
        assert_eq!(arg_max([5, 1, 5]), Some(0));
        assert_eq!(arg_min([2, 1, 1]), Some(1));
    }

    #[test]
    fn test_floats_and_strings() {
        assert_eq!(max_of([0.5, 2.5, -1.0]), Some(2.5));
        assert_eq!(min_of(["pear", "apple", "fig"]), Some("apple"));
    }

    #[test]
    fn test_custom_comparison() {
        let longest = compare_by(["ab", "abcd", "abc"], |best, candidate| {
            candidate.len() > best.len()
        });
        assert_eq!(longest, Some((1, "abcd")));
    }
}
