use serde::Serialize;

use crate::api::types::CellRef;
use crate::board::letters::generate_letter;
use crate::core::rng::Rng;

/// Square matrix of uppercase letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Fill a `size × size` grid with independently drawn letters.
    pub fn generate(size: usize, rng: &mut Rng) -> Self {
        let letters = (0..size * size).map(|_| generate_letter(rng)).collect();
        Self { size, letters }
    }

    /// Build a grid from rows of text. Intended for fixtures and replays.
    ///
    /// Panics if the rows do not form a square.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let letters: Vec<char> = rows.iter().flat_map(|r| r.chars()).collect();
        assert_eq!(letters.len(), size * size, "grid rows must form a square");
        Self { size, letters }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    fn idx(&self, cell: CellRef) -> usize {
        assert!(
            self.contains(cell),
            "cell ({}, {}) outside {}x{} grid",
            cell.row,
            cell.col,
            self.size,
            self.size
        );
        cell.row * self.size + cell.col
    }

    /// Letter at `cell`. Out-of-range coordinates are a caller bug and panic.
    pub fn letter(&self, cell: CellRef) -> char {
        self.letters[self.idx(cell)]
    }

    /// Overwrite one cell.
    pub fn set(&mut self, cell: CellRef, letter: char) {
        let i = self.idx(cell);
        self.letters[i] = letter;
    }

    /// Draw a fresh letter for one cell. No adjacency or uniqueness rules apply.
    pub fn replace_letter(&mut self, cell: CellRef, rng: &mut Rng) {
        let letter = generate_letter(rng);
        self.set(cell, letter);
    }

    /// Concatenate the letters along `cells`, in order.
    pub fn word_at(&self, cells: &[CellRef]) -> String {
        cells.iter().map(|&c| self.letter(c)).collect()
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.letters
            .chunks(self.size.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }
}
