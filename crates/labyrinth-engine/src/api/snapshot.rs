use serde::Serialize;

use crate::api::types::{CellRef, InputMode, Phase};
use crate::selection::trail::TrailSegment;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Grid rows, top to bottom.
    pub grid: Vec<String>,
    pub path: Vec<CellRef>,
    pub current_word: String,
    pub mode: InputMode,
    pub trail: Vec<TrailSegment>,
    pub phase: Phase,
    pub paused: bool,
    pub score: u32,
    pub time_left: i32,
    /// `time_left` as `MM:SS`.
    pub time_display: String,
    pub elapsed_time: u32,
    pub elapsed_display: String,
    pub level: u32,
    pub words_in_level: u32,
    pub words_to_advance: u32,
    pub found_words: Vec<String>,
    pub message: Option<String>,
    pub can_submit: bool,
    pub can_clear: bool,
    pub can_shuffle: bool,
}

impl SessionSnapshot {
    /// Serialize for the JS side.
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
