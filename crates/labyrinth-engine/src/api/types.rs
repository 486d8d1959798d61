use serde::Serialize;

/// A grid coordinate. Carries no reference to whatever draws the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev adjacency: at most one step in each axis, excluding self.
    pub fn is_adjacent(self, other: CellRef) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

/// Which interpretation the selection engine is applying to pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum InputMode {
    #[default]
    Idle,
    Dragging,
    Tapping,
}

/// Coarse lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Tutorial overlay up; clock not started.
    #[default]
    Ready,
    Playing,
    /// Terminal. The session is frozen.
    Over,
}

/// Final statistics reported when the clock runs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub level: u32,
    /// Total seconds awarded for words.
    pub score: u32,
    pub elapsed_time: u32,
    pub words_found: usize,
    pub found_words: Vec<String>,
}

/// Notifications for the presentation layer, drained once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Show a transient message.
    Message { text: String },
    /// The current message timed out.
    MessageCleared,
    /// A word was accepted. `cells` should flash as correct.
    WordAccepted { word: String, bonus: u32, cells: Vec<CellRef> },
    /// A word was rejected. `cells` should flash as incorrect.
    WordRejected { word: String, cells: Vec<CellRef> },
    /// Fresh letters landed at these cells.
    LettersReplaced { cells: Vec<CellRef> },
    LevelUp { level: u32, bonus_seconds: u32 },
    /// The grid was regenerated, possibly at a new size.
    GridShuffled { size: usize },
    Paused,
    Resumed,
    GameOver { summary: GameSummary },
}
