//! Delimiter-based tokenizing and typed splitting
//!
//! Every operation in this module shares the same token boundaries: the input
//! is cut at each non-overlapping occurrence of a literal delimiter, scanning
//! left to right. The discard-empty policy then decides whether zero-length
//! tokens are emitted.
//!
//! ```
//! use aoc_common::{split, split_int, Splitter};
//!
//! assert_eq!(split("a,,b", ",", false), ["a", "", "b"]);
//! assert_eq!(split("a,,b", ",", true), ["a", "b"]);
//! assert_eq!(split_int::<i32>("1x2x3", "x", 10, false).unwrap(), [1, 2, 3]);
//! assert_eq!(Splitter::new().ints::<u16>("10 54 543").unwrap(), [10, 54, 543]);
//! ```

use crate::error::SplitError;
use crate::numeric::Integral;
use num_traits::Num;
use std::iter::FusedIterator;

/// Delimiter used when none is given
pub const DEFAULT_DELIMITER: &str = " ";
/// Radix used by integer splitting when none is given
pub const DEFAULT_RADIX: u32 = 10;

/// Lazy iterator over the tokens of a string
///
/// Tokens borrow from the input; owned copies are only made by [`split`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'd> {
    inner: std::str::Split<'a, &'d str>,
    discard_empty: bool,
}

impl<'a, 'd> Tokens<'a, 'd> {
    /// Start tokenizing `input` on `delimiter`
    ///
    /// # Panics
    /// Panics if `delimiter` is empty.
    pub fn new(input: &'a str, delimiter: &'d str, discard_empty: bool) -> Self {
        assert!(!delimiter.is_empty(), "split delimiter must not be empty");
        Self {
            inner: input.split(delimiter),
            discard_empty,
        }
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let discard_empty = self.discard_empty;
        self.inner.find(|token| !(discard_empty && token.is_empty()))
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Split `input` on a literal delimiter into owned tokens
///
/// # Arguments
/// * `input` - The text to split
/// * `delimiter` - Literal, non-empty separator ([`DEFAULT_DELIMITER`] is a space)
/// * `discard_empty` - Drop zero-length tokens, including leading and trailing ones
///
/// # Returns
/// The tokens in order of appearance. With `discard_empty = false` the result
/// always holds one more token than there are delimiter occurrences, so an
/// empty input yields `[""]`.
///
/// # Panics
/// Panics if `delimiter` is empty.
pub fn split(input: &str, delimiter: &str, discard_empty: bool) -> Vec<String> {
    split_and_transform(input, str::to_owned, delimiter, discard_empty)
}

/// Split `input` and map every token through `transform`
///
/// Each token is handed to `transform` as soon as it is found, so only the
/// transformed sequence is materialized. The output has exactly one value per
/// emitted token.
///
/// # Panics
/// Panics if `delimiter` is empty.
pub fn split_and_transform<T, F>(
    input: &str,
    transform: F,
    delimiter: &str,
    discard_empty: bool,
) -> Vec<T>
where
    F: FnMut(&str) -> T,
{
    Tokens::new(input, delimiter, discard_empty)
        .map(transform)
        .collect()
}

/// Fallible variant of [`split_and_transform`]
///
/// Stops at the first token whose transform fails and returns that error.
pub fn try_split_and_transform<T, E, F>(
    input: &str,
    transform: F,
    delimiter: &str,
    discard_empty: bool,
) -> Result<Vec<T>, E>
where
    F: FnMut(&str) -> Result<T, E>,
{
    Tokens::new(input, delimiter, discard_empty)
        .map(transform)
        .collect()
}

/// Split `input` and parse every token as an integer in `radix`
///
/// Parsing is locale independent and does not trim whitespace. A single
/// leading `+` or `-` is accepted, as for the primitive `from_str_radix`.
///
/// # Returns
/// * `Ok(Vec<T>)` - One value per emitted token
/// * `Err(SplitError::InvalidInteger)` - The first token that is empty,
///   non-numeric or out of range for `T`
///
/// # Panics
/// Panics if `delimiter` is empty or `radix` is outside `2..=36`.
pub fn split_int<T: Integral>(
    input: &str,
    delimiter: &str,
    radix: u32,
    discard_empty: bool,
) -> Result<Vec<T>, SplitError> {
    assert_radix(radix);
    Tokens::new(input, delimiter, discard_empty)
        .enumerate()
        .map(|(index, token)| parse_token(index, token, radix))
        .collect()
}

fn parse_token<T: Integral>(index: usize, token: &str, radix: u32) -> Result<T, SplitError> {
    <T as Num>::from_str_radix(token, radix).map_err(|source| SplitError::InvalidInteger {
        index,
        token: token.to_owned(),
        radix,
        source,
    })
}

fn assert_radix(radix: u32) {
    assert!(
        (2..=36).contains(&radix),
        "radix must be in 2..=36, got {radix}"
    );
}

/// Reusable split settings with the conventional defaults
///
/// `Splitter::new()` splits on a single space, keeps empty tokens and parses
/// integers in base 10.
///
/// ```
/// use aoc_common::Splitter;
///
/// let lines = Splitter::new().delimiter("\n").discard_empty(true);
/// assert_eq!(lines.split("a\n\nb\n"), ["a", "b"]);
///
/// let hex = Splitter::new().delimiter(",").radix(16);
/// assert_eq!(hex.ints::<u8>("ff,10").unwrap(), [255, 16]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splitter<'d> {
    delimiter: &'d str,
    discard_empty: bool,
    radix: u32,
}

impl Splitter<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Splitter<'static> {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            discard_empty: false,
            radix: DEFAULT_RADIX,
        }
    }
}

impl<'d> Splitter<'d> {
    /// Use a different delimiter
    ///
    /// # Panics
    /// Panics if `delimiter` is empty.
    pub fn delimiter<'n>(self, delimiter: &'n str) -> Splitter<'n> {
        assert!(!delimiter.is_empty(), "split delimiter must not be empty");
        Splitter {
            delimiter,
            discard_empty: self.discard_empty,
            radix: self.radix,
        }
    }

    pub fn discard_empty(self, discard_empty: bool) -> Self {
        Self {
            discard_empty,
            ..self
        }
    }

    /// Use a different radix for [`Splitter::ints`]
    ///
    /// # Panics
    /// Panics if `radix` is outside `2..=36`.
    pub fn radix(self, radix: u32) -> Self {
        assert_radix(radix);
        Self { radix, ..self }
    }

    pub fn tokens<'a>(&self, input: &'a str) -> Tokens<'a, 'd> {
        Tokens::new(input, self.delimiter, self.discard_empty)
    }

    pub fn split(&self, input: &str) -> Vec<String> {
        split(input, self.delimiter, self.discard_empty)
    }

    pub fn transform<T, F>(&self, input: &str, transform: F) -> Vec<T>
    where
        F: FnMut(&str) -> T,
    {
        split_and_transform(input, transform, self.delimiter, self.discard_empty)
    }

    pub fn try_transform<T, E, F>(&self, input: &str, transform: F) -> Result<Vec<T>, E>
    where
        F: FnMut(&str) -> Result<T, E>,
    {
        try_split_and_transform(input, transform, self.delimiter, self.discard_empty)
    }

    pub fn ints<T: Integral>(&self, input: &str) -> Result<Vec<T>, SplitError> {
        split_int(input, self.delimiter, self.radix, self.discard_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_spaces() {
        assert_eq!(split("10 54 543", " ", false), ["10", "54", "543"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split("", " ", false), [""]);
        assert!(split("", " ", true).is_empty());
    }

    #[test]
    fn test_adjacent_delimiters() {
        assert_eq!(split("a,,b", ",", false), ["a", "", "b"]);
        assert_eq!(split("a,,b", ",", true), ["a", "b"]);
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(split(",a,", ",", false), ["", "a", ""]);
        assert_eq!(split(",a,", ",", true), ["a"]);
        assert_eq!(split(",", ",", false), ["", ""]);
        assert!(split(",,,", ",", true).is_empty());
    }

    #[test]
    fn test_multi_character_delimiter() {
        assert_eq!(split("a->b->c", "->", false), ["a", "b", "c"]);
        // Occurrences never overlap: the cursor skips the whole match
        assert_eq!(split("aaa", "aa", false), ["", "a"]);
        assert_eq!(split("a-b", "->", false), ["a-b"]);
    }

    #[test]
    fn test_non_ascii_delimiter() {
        assert_eq!(split("1→2→3", "→", false), ["1", "2", "3"]);
    }

    #[test]
    #[should_panic(expected = "delimiter must not be empty")]
    fn test_empty_delimiter_panics() {
        split("abc", "", false);
    }

    #[test]
    fn test_transform_sees_every_token() {
        let lengths = split_and_transform("ab  cde", str::len, " ", false);
        assert_eq!(lengths, [2, 0, 3]);

        let lengths = split_and_transform("ab  cde", str::len, " ", true);
        assert_eq!(lengths, [2, 3]);
    }

    #[test]
    fn test_try_transform_stops_on_error() {
        let mut seen = Vec::new();
        let result: Result<Vec<char>, String> = try_split_and_transform(
            "a b cd e",
            |token| {
                seen.push(token.to_owned());
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(format!("not a char: {token}")),
                }
            },
            " ",
            false,
        );
        assert_eq!(result, Err("not a char: cd".to_string()));
        assert_eq!(seen, ["a", "b", "cd"]);
    }

    #[test]
    fn test_split_int_decimal() {
        assert_eq!(split_int::<i32>("10 54 543", " ", 10, false).unwrap(), [10, 54, 543]);
        assert_eq!(split_int::<i32>("1x2x3", "x", 10, false).unwrap(), [1, 2, 3]);
        assert_eq!(split_int::<i64>("-4,+5", ",", 10, false).unwrap(), [-4, 5]);
    }

    #[test]
    fn test_split_int_other_radix() {
        assert_eq!(split_int::<u8>("101 11", " ", 2, false).unwrap(), [5, 3]);
        assert_eq!(split_int::<u32>("ff FF 7f", " ", 16, false).unwrap(), [255, 255, 127]);
        assert_eq!(split_int::<i32>("z", " ", 36, false).unwrap(), [35]);
    }

    #[test]
    fn test_split_int_reports_bad_token() {
        let err = split_int::<i32>("1 two 3", " ", 10, false).unwrap_err();
        match err {
            SplitError::InvalidInteger {
                index, token, radix, ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(token, "two");
                assert_eq!(radix, 10);
            }
        }
    }

    #[test]
    fn test_split_int_out_of_range() {
        let err = split_int::<u8>("255 256", " ", 10, false).unwrap_err();
        assert!(matches!(err, SplitError::InvalidInteger { index: 1, .. }));
    }

    #[test]
    fn test_split_int_empty_token_policy() {
        // Kept empty tokens are not numbers
        assert!(split_int::<i32>("1  2", " ", 10, false).is_err());
        assert_eq!(split_int::<i32>("1  2", " ", 10, true).unwrap(), [1, 2]);
        assert!(split_int::<i32>("", " ", 10, true).unwrap().is_empty());
    }

    #[test]
    fn test_split_int_does_not_trim() {
        assert!(split_int::<i32>("1, 2", ",", 10, false).is_err());
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn test_bad_radix_panics() {
        let _ = split_int::<i32>("1", " ", 37, false);
    }

    #[test]
    fn test_splitter_defaults() {
        let splitter = Splitter::new();
        assert_eq!(splitter, Splitter::default());
        assert_eq!(splitter.split("a b"), ["a", "b"]);
        assert_eq!(splitter.ints::<i32>("10 54 543").unwrap(), [10, 54, 543]);
    }

    #[test]
    fn test_splitter_settings() {
        let splitter = Splitter::new().delimiter(", ").discard_empty(true);
        assert_eq!(splitter.split("x, , y, "), ["x", "y"]);
        assert_eq!(splitter.tokens("1, 2").count(), 2);
        assert_eq!(splitter.transform("1, 22", str::len), [1, 2]);

        let octal = splitter.radix(8);
        assert_eq!(octal.ints::<u16>("17, 10").unwrap(), [15, 8]);
    }

    #[test]
    fn test_tokens_borrow_from_input() {
        let input = String::from("left|right");
        let tokens: Vec<&str> = Tokens::new(&input, "|", false).collect();
        assert_eq!(tokens, ["left", "right"]);
    }
}
