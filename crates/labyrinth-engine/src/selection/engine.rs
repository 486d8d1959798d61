use crate::api::types::{CellRef, InputMode};
use crate::board::grid::Grid;
use crate::selection::path::SelectionPath;
use crate::selection::trail::Trail;

/// A drag that ends with at least this many cells submits itself.
pub const AUTO_SUBMIT_LEN: usize = 3;

/// Abstract pointer gestures, already resolved to grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Mouse button or finger went down on a cell.
    PointerDown(CellRef),
    /// The pointer moved far enough off the pressed cell to count as a drag.
    DragStart,
    /// While dragging, the pointer reached the centre zone of a cell.
    DragEnter(CellRef),
    /// Mouse button released or finger lifted.
    PointerUp,
    /// Discrete tap on a cell while in tap mode.
    TapSelect(CellRef),
    /// The platform aborted the gesture (touch-cancel).
    Cancel,
    /// The player pressed "clear".
    Clear,
}

/// What the owner of the engine has to follow up on after a gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reaction {
    /// The path changed.
    pub changed: bool,
    /// A drag just ended with enough cells to submit.
    pub submit: bool,
    /// Trail segments started fading under this generation and need a delayed removal.
    pub fade_trail: Option<u32>,
    /// A tap tried to add a cell that is not next to the path's tail.
    pub not_adjacent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    origin: CellRef,
    moved: bool,
}

/// Gesture state machine: turns taps and drags into an ordered path of cells.
///
/// Modes:
/// - `Idle`: nothing decided. A press on an empty path selects that cell at once
///   and opens the tap-or-drag ambiguity window.
/// - `Dragging`: the press turned into a drag. Entering the second-to-last cell
///   backtracks; entering a fresh neighbour of the tail extends.
/// - `Tapping`: a press was released without moving. Each further press is a
///   discrete tap that extends the path or deselects its tail.
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    path: SelectionPath,
    mode: InputMode,
    press: Option<Press>,
    trail: Trail,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Whether a press is in progress.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Letters under the path, in path order.
    pub fn current_word(&self, grid: &Grid) -> String {
        grid.word_at(self.path.cells())
    }

    /// Feed one gesture through the state machine.
    pub fn handle(&mut self, gesture: Gesture) -> Reaction {
        let mut reaction = Reaction::default();
        match gesture {
            Gesture::PointerDown(cell) => self.pointer_down(cell, &mut reaction),
            Gesture::DragStart => self.drag_start(),
            Gesture::DragEnter(cell) => self.drag_enter(cell, &mut reaction),
            Gesture::PointerUp => self.pointer_up(&mut reaction),
            Gesture::TapSelect(cell) => {
                if self.mode == InputMode::Tapping {
                    self.select(cell, &mut reaction);
                }
            }
            Gesture::Cancel | Gesture::Clear => {
                reaction.changed = self.reset();
            }
        }
        reaction
    }

    fn pointer_down(&mut self, cell: CellRef, reaction: &mut Reaction) {
        if self.mode == InputMode::Tapping {
            self.select(cell, reaction);
            return;
        }

        self.press = Some(Press { origin: cell, moved: false });
        // Immediate feedback for the first letter; later presses wait for the
        // tap-or-drag decision.
        if self.path.is_empty() {
            self.select(cell, reaction);
        }
    }

    fn drag_start(&mut self) {
        if let Some(press) = self.press.as_mut() {
            if !press.moved {
                press.moved = true;
                self.mode = InputMode::Dragging;
                log::debug!("drag started at ({}, {})", press.origin.row, press.origin.col);
            }
        }
    }

    fn drag_enter(&mut self, cell: CellRef, reaction: &mut Reaction) {
        if self.mode != InputMode::Dragging {
            return;
        }

        let len = self.path.len();
        match self.path.position(cell) {
            Some(idx) if len >= 2 && idx == len - 2 => {
                self.retract();
                reaction.changed = true;
            }
            None if self.path.accepts(cell) => {
                self.extend(cell);
                reaction.changed = true;
            }
            // Re-entering an older cell, or a cell out of reach.
            _ => {}
        }
    }

    fn pointer_up(&mut self, reaction: &mut Reaction) {
        let tapped = matches!(self.press, Some(Press { moved: false, .. }));

        if tapped {
            if self.path.len() <= 1 {
                self.mode = InputMode::Tapping;
            }
        } else if self.path.len() == 1 && self.mode == InputMode::Dragging {
            // A drag that backtracked to its first cell abandons it.
            self.retract();
            reaction.changed = true;
            self.mode = InputMode::Idle;
        }

        if self.mode == InputMode::Dragging {
            self.mode = InputMode::Idle;
            reaction.fade_trail = self.trail.fade_out();
            reaction.submit = self.path.len() >= AUTO_SUBMIT_LEN;
        }

        self.press = None;
    }

    /// Tap semantics: deselect the tail, or extend with an adjacent cell.
    fn select(&mut self, cell: CellRef, reaction: &mut Reaction) {
        if let Some(idx) = self.path.position(cell) {
            // Only the tail can be taken back.
            if idx + 1 == self.path.len() {
                self.retract();
                reaction.changed = true;
                if self.path.is_empty() {
                    self.mode = InputMode::Idle;
                }
            }
            return;
        }

        if !self.path.accepts(cell) {
            reaction.not_adjacent = true;
            return;
        }
        self.extend(cell);
        reaction.changed = true;
    }

    fn extend(&mut self, cell: CellRef) {
        let prev = self.path.last();
        if self.path.push(cell) {
            if let Some(prev) = prev {
                self.trail.push(prev, cell);
            }
        }
    }

    fn retract(&mut self) {
        if self.path.pop().is_some() {
            self.trail.pop();
        }
    }

    /// Empty the path, drop the trail and return to `Idle`.
    /// Returns whether there was anything to clear.
    pub fn reset(&mut self) -> bool {
        let had_path = !self.path.is_empty();
        self.path.clear();
        self.trail.clear();
        self.press = None;
        self.mode = InputMode::Idle;
        had_path
    }

    /// Hand the path over for submission and reset the engine.
    pub fn take_path(&mut self) -> Vec<CellRef> {
        let cells = self.path.take();
        self.reset();
        cells
    }

    /// Drop trail segments whose fade-out, started in `generation`, finished.
    pub fn remove_faded_trail(&mut self, generation: u32) {
        self.trail.remove_faded(generation);
    }
}
