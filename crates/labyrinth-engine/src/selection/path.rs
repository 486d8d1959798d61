use serde::Serialize;

use crate::api::types::CellRef;

/// Ordered, duplicate-free chain of Chebyshev-adjacent cells.
/// Insertion order is selection order is letter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionPath {
    cells: Vec<CellRef>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellRef] {
        &self.cells
    }

    pub fn last(&self) -> Option<CellRef> {
        self.cells.last().copied()
    }

    pub fn position(&self, cell: CellRef) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        self.position(cell).is_some()
    }

    /// Whether `cell` may extend the path: empty path, or adjacent to the tail.
    pub fn accepts(&self, cell: CellRef) -> bool {
        match self.last() {
            None => true,
            Some(last) => last.is_adjacent(cell),
        }
    }

    /// Append `cell` if it keeps the path valid. Returns whether it was added.
    pub fn push(&mut self, cell: CellRef) -> bool {
        if self.contains(cell) || !self.accepts(cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    pub fn pop(&mut self) -> Option<CellRef> {
        self.cells.pop()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Take the cells out, leaving the path empty.
    pub fn take(&mut self) -> Vec<CellRef> {
        std::mem::take(&mut self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> CellRef {
        CellRef::new(row, col)
    }

    #[test]
    fn push_enforces_adjacency() {
        let mut path = SelectionPath::new();
        assert!(path.push(c(0, 0)));
        assert!(!path.push(c(0, 2)));
        assert!(path.push(c(1, 1)));
        assert_eq!(path.cells(), &[c(0, 0), c(1, 1)]);
    }

    #[test]
    fn push_rejects_duplicates() {
        let mut path = SelectionPath::new();
        path.push(c(0, 0));
        path.push(c(0, 1));
        assert!(!path.push(c(0, 0)));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn take_empties() {
        let mut path = SelectionPath::new();
        path.push(c(2, 2));
        assert_eq!(path.take(), vec![c(2, 2)]);
        assert!(path.is_empty());
    }
}
