//! Level tables and the level-up transition.

/// Words needed to clear `level`.
pub fn words_per_level(level: u32) -> u32 {
    (5 + level).min(15)
}

/// Board size used from `level` on.
pub fn grid_size_for_level(level: u32) -> usize {
    if level < 3 {
        4
    } else if level < 6 {
        5
    } else {
        6
    }
}

/// Shortest word accepted at `level`.
pub fn min_word_length_for_level(level: u32) -> usize {
    if level < 4 {
        3
    } else if level < 8 {
        4
    } else {
        5
    }
}

/// Seconds added to the clock on reaching `level`.
pub fn level_time_bonus(level: u32) -> u32 {
    30 + level.saturating_sub(1) * 10
}

/// Result of a level-up, for the caller to apply and announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub bonus_seconds: u32,
    /// Set when the board should grow. Applied at the next regeneration only.
    pub new_grid_size: Option<usize>,
}

/// Level counter and per-level word tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    level: u32,
    words_in_level: u32,
    words_to_advance: u32,
    /// Size the next generated grid should have.
    grid_size: usize,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    pub fn new() -> Self {
        Self {
            level: 1,
            words_in_level: 0,
            words_to_advance: words_per_level(1),
            grid_size: grid_size_for_level(1),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn words_in_level(&self) -> u32 {
        self.words_in_level
    }

    pub fn words_to_advance(&self) -> u32 {
        self.words_to_advance
    }

    /// Size for the next grid regeneration. May differ from the live grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn min_word_length(&self) -> usize {
        min_word_length_for_level(self.level)
    }

    /// Count an accepted word and level up if the threshold is reached.
    pub fn record_word(&mut self) -> Option<LevelUp> {
        self.words_in_level += 1;
        self.check_level_up()
    }

    pub fn check_level_up(&mut self) -> Option<LevelUp> {
        if self.words_in_level >= words_per_level(self.level) {
            Some(self.level_up())
        } else {
            None
        }
    }

    pub fn level_up(&mut self) -> LevelUp {
        self.level += 1;
        self.words_in_level = 0;
        self.words_to_advance = words_per_level(self.level);

        let size = grid_size_for_level(self.level);
        let new_grid_size = (size != self.grid_size).then(|| {
            self.grid_size = size;
            size
        });

        LevelUp {
            level: self.level,
            bonus_seconds: level_time_bonus(self.level),
            new_grid_size,
        }
    }
}
