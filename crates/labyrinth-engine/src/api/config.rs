use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunables for a session, provided by the host page.
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds on the clock when the game starts (default: 60).
    pub starting_time: i32,
    /// Seconds per countdown tick (default: 1.0).
    pub tick_seconds: f32,
    /// Seed for letter generation.
    pub seed: u64,
    /// How long a message stays up (default: 2.0).
    pub message_seconds: f32,
    /// Fade-out time of the drag trail (default: 0.6).
    pub trail_fade_seconds: f32,
    /// Correct/incorrect flash before cells are recycled (default: 0.5).
    pub feedback_seconds: f32,
    /// Fly-away time before the new letter lands (default: 0.4).
    pub replace_seconds: f32,
    /// Mouse drag threshold as a fraction of the cell size (default: 0.25).
    pub drag_threshold: f32,
    /// Centre zone, as a fraction of the cell size, in which a dragged-over
    /// cell counts as entered (default: 0.35).
    pub center_zone: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_time: 60,
            tick_seconds: 1.0,
            seed: 42,
            message_seconds: 2.0,
            trail_fade_seconds: 0.6,
            feedback_seconds: 0.5,
            replace_seconds: 0.4,
            drag_threshold: 0.25,
            center_zone: 0.35,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Delay between an accepted submission and the new letters landing.
    pub fn letter_swap_delay(&self) -> f32 {
        self.feedback_seconds + self.replace_seconds
    }
}
