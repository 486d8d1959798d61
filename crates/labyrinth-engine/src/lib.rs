pub mod api;
pub mod board;
pub mod core;
pub mod error;
pub mod input;
pub mod rules;
pub mod selection;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::session::{Outcome, Session};
pub use api::snapshot::SessionSnapshot;
pub use api::types::{CellRef, GameSummary, InputMode, Phase, SessionEvent};
pub use board::grid::Grid;
pub use crate::core::rng::Rng;
pub use crate::core::scheduler::Scheduler;
pub use crate::core::time::{format_clock, CountdownClock};
pub use error::{LabyrinthError, Result};
pub use input::pointer::{GridLayout, PointerTracker};
pub use input::queue::{Command, InputEvent, InputQueue, PointerKind};
pub use rules::dictionary::Dictionary;
pub use rules::levels::{LevelUp, Progression};
pub use rules::scoring::{validate, Rejection};
pub use selection::engine::{Gesture, Reaction, SelectionEngine};
pub use selection::path::SelectionPath;
pub use selection::trail::{Trail, TrailSegment};
