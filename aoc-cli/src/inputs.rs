//! Puzzle inputs stored on disk

use aoc_common::InputError;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the whole input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        aoc_common::read_input(self.input_path(year, day))
    }
}
