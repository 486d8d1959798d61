use crate::api::config::GameConfig;
use crate::api::snapshot::SessionSnapshot;
use crate::api::types::{CellRef, GameSummary, InputMode, Phase, SessionEvent};
use crate::board::grid::Grid;
use crate::core::rng::Rng;
use crate::core::scheduler::Scheduler;
use crate::core::time::{format_clock, CountdownClock};
use crate::error::Result;
use crate::rules::dictionary::Dictionary;
use crate::rules::levels::Progression;
use crate::rules::scoring::{validate, Rejection};
use crate::selection::engine::{Gesture, Reaction, SelectionEngine};

const MSG_NOT_ADJACENT: &str = "Select adjacent letters only";
const MSG_DICTIONARY_FAILED: &str = "Error loading dictionary";

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid { word: String, bonus: u32 },
    Invalid { word: String, reason: Rejection },
    /// Submitting is disabled right now (paused, not started, or over).
    Ignored,
}

/// Follow-ups that run after a delay, on the same loop as input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    ClearMessage { generation: u32 },
    ClearTrail { generation: u32 },
    ReplaceLetters { cells: Vec<CellRef>, grid_generation: u32 },
}

/// One game, from tutorial screen to game over.
///
/// Owns the grid, the selection, the score/time state and the pending cosmetic
/// follow-ups. All mutation goes through `&mut self`; the host drives it with
/// gestures, commands and `update(dt)`.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    rng: Rng,
    grid: Grid,
    grid_generation: u32,
    dictionary: Dictionary,
    selection: SelectionEngine,
    progression: Progression,
    phase: Phase,
    paused: bool,
    score: u32,
    time_left: i32,
    elapsed_time: u32,
    found_words: Vec<String>,
    message: Option<String>,
    message_generation: u32,
    clock: CountdownClock,
    tasks: Scheduler<Deferred>,
    events: Vec<SessionEvent>,
}

impl Session {
    /// New session with a freshly generated grid.
    pub fn new(config: GameConfig, dictionary: Dictionary) -> Self {
        let mut rng = Rng::new(config.seed);
        let progression = Progression::new();
        let grid = Grid::generate(progression.grid_size(), &mut rng);
        Self::assemble(config, dictionary, rng, grid, progression)
    }

    /// New session over a fixed grid.
    pub fn with_grid(config: GameConfig, dictionary: Dictionary, grid: Grid) -> Self {
        let rng = Rng::new(config.seed);
        Self::assemble(config, dictionary, rng, grid, Progression::new())
    }

    fn assemble(
        config: GameConfig,
        dictionary: Dictionary,
        rng: Rng,
        grid: Grid,
        progression: Progression,
    ) -> Self {
        let clock = CountdownClock::new(config.tick_seconds);
        Self {
            time_left: config.starting_time,
            config,
            rng,
            grid,
            grid_generation: 0,
            dictionary,
            selection: SelectionEngine::new(),
            progression,
            phase: Phase::Ready,
            paused: false,
            score: 0,
            elapsed_time: 0,
            found_words: Vec::new(),
            message: None,
            message_generation: 0,
            clock,
            tasks: Scheduler::new(),
            events: Vec::new(),
        }
    }

    // -- Dictionary --

    /// Install the result of loading the word list. A failed load leaves the
    /// dictionary empty and tells the player; the game stays playable.
    pub fn set_dictionary(&mut self, loaded: Result<Dictionary>) {
        match loaded {
            Ok(dictionary) => {
                log::info!("Dictionary ready ({} words)", dictionary.len());
                self.dictionary = dictionary;
            }
            Err(err) => {
                log::warn!("Error loading dictionary: {err}");
                self.dictionary = Dictionary::empty();
                self.show_message(MSG_DICTIONARY_FAILED);
            }
        }
    }

    /// Parse and install a newline-delimited word list.
    pub fn load_word_list(&mut self, text: &str) {
        self.set_dictionary(Ok(Dictionary::from_word_list(text)));
    }

    // -- Lifecycle --

    /// Leave the tutorial screen and start the clock.
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Playing;
        self.paused = false;
        self.clock.start();
        log::info!("Game started with {}s on the clock", self.time_left);
    }

    pub fn pause(&mut self) {
        if self.phase != Phase::Playing || self.paused {
            return;
        }
        self.paused = true;
        self.clock.stop();
        // The release of a press held across the pause never reaches the engine,
        // so abandon it now. A tapped-out path is kept.
        if self.selection.is_pressed() || self.selection.mode() == InputMode::Dragging {
            self.selection.handle(Gesture::Cancel);
        }
        self.events.push(SessionEvent::Paused);
        self.show_message("Game paused");
        log::info!("Game paused at {}s", self.time_left);
    }

    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.clock.start();
        self.events.push(SessionEvent::Resumed);
        self.show_message("Game resumed");
        log::info!("Game resumed");
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Gestures, submits, clears and shuffles only count while this holds.
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Playing && !self.paused
    }

    // -- Frame driving --

    /// Advance delayed follow-ups and the countdown by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.phase == Phase::Over {
            return;
        }

        for action in self.tasks.advance(dt) {
            self.apply_deferred(action);
        }

        let ticks = self.clock.accumulate(dt);
        for _ in 0..ticks {
            self.tick();
            if self.phase == Phase::Over {
                break;
            }
        }
    }

    /// One countdown step. Runs out the game when the clock reaches zero.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing || self.paused {
            return;
        }
        self.time_left -= 1;
        self.elapsed_time += 1;
        if self.time_left <= 0 {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        self.phase = Phase::Over;
        self.clock.stop();
        self.tasks.clear();
        let summary = self.summary();
        log::info!(
            "Game over: level {}, {} words, {}s added, {} played",
            summary.level,
            summary.words_found,
            summary.score,
            format_clock(summary.elapsed_time as i32)
        );
        self.events.push(SessionEvent::GameOver { summary });
    }

    fn apply_deferred(&mut self, action: Deferred) {
        match action {
            Deferred::ClearMessage { generation } => {
                if generation == self.message_generation && self.message.take().is_some() {
                    self.events.push(SessionEvent::MessageCleared);
                }
            }
            Deferred::ClearTrail { generation } => self.selection.remove_faded_trail(generation),
            Deferred::ReplaceLetters { cells, grid_generation } => {
                // A shuffle in the meantime already replaced everything.
                if grid_generation != self.grid_generation {
                    return;
                }
                for &cell in &cells {
                    self.grid.replace_letter(cell, &mut self.rng);
                }
                self.events.push(SessionEvent::LettersReplaced { cells });
            }
        }
    }

    // -- Input --

    /// Feed one pointer gesture to the selection engine.
    ///
    /// Panics if the gesture names a cell outside the grid: cells come from the
    /// rendered board, so that is a host bug.
    pub fn gesture(&mut self, gesture: Gesture) -> Reaction {
        if let Gesture::PointerDown(cell) | Gesture::DragEnter(cell) | Gesture::TapSelect(cell) =
            gesture
        {
            assert!(
                self.grid.contains(cell),
                "gesture on ({}, {}) outside the {}x{} grid",
                cell.row,
                cell.col,
                self.grid.size(),
                self.grid.size()
            );
        }
        if !self.accepts_input() {
            return Reaction::default();
        }

        let reaction = self.selection.handle(gesture);
        if reaction.not_adjacent {
            self.show_message(MSG_NOT_ADJACENT);
        }
        if let Some(generation) = reaction.fade_trail {
            self.tasks
                .schedule(self.config.trail_fade_seconds, Deferred::ClearTrail { generation });
        }
        if reaction.submit {
            self.submit();
        }
        reaction
    }

    /// Explicit "clear" button.
    pub fn clear_selection(&mut self) {
        self.gesture(Gesture::Clear);
    }

    /// Validate the current path, and score it if it is a word.
    pub fn submit(&mut self) -> Outcome {
        if !self.accepts_input() {
            return Outcome::Ignored;
        }

        let word = self.current_word();
        let bonus = match validate(&word, self.progression.min_word_length(), &self.dictionary) {
            Ok(bonus) => bonus,
            Err(reason @ Rejection::TooShort { .. }) => {
                // Selection stays so the player can keep building.
                self.show_message(&reason.message());
                return Outcome::Invalid { word, reason };
            }
            Err(reason) => {
                let cells = self.selection.take_path();
                log::debug!("Rejected {word}");
                self.events.push(SessionEvent::WordRejected { word: word.clone(), cells });
                self.show_message(&reason.message());
                return Outcome::Invalid { word, reason };
            }
        };

        let cells = self.selection.take_path();
        self.found_words.push(word.clone());
        self.score += bonus;
        self.time_left += bonus as i32;
        log::debug!("Accepted {word} for +{bonus}s");

        self.tasks.schedule(
            self.config.letter_swap_delay(),
            Deferred::ReplaceLetters { cells: cells.clone(), grid_generation: self.grid_generation },
        );
        self.events.push(SessionEvent::WordAccepted { word: word.clone(), bonus, cells });
        self.show_message(&format!("+{bonus} seconds!"));

        if let Some(up) = self.progression.record_word() {
            self.time_left += up.bonus_seconds as i32;
            log::info!("Level up to {} (+{}s)", up.level, up.bonus_seconds);
            if let Some(size) = up.new_grid_size {
                log::info!("Grid grows to {size}x{size} at the next shuffle");
            }
            self.events.push(SessionEvent::LevelUp {
                level: up.level,
                bonus_seconds: up.bonus_seconds,
            });
            self.show_message(&format!("Level Up! +{} seconds!", up.bonus_seconds));
        }

        Outcome::Valid { word, bonus }
    }

    /// Regenerate the whole grid at the size the current level calls for.
    /// Returns false when shuffling is disabled.
    pub fn shuffle(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let size = self.progression.grid_size();
        if size != self.grid.size() {
            log::info!("Grid resized {0}x{0} -> {1}x{1}", self.grid.size(), size);
        }
        self.grid = Grid::generate(size, &mut self.rng);
        self.grid_generation += 1;
        self.selection.reset();
        self.events.push(SessionEvent::GridShuffled { size });
        true
    }

    fn show_message(&mut self, text: &str) {
        self.message_generation += 1;
        self.message = Some(text.to_string());
        self.events.push(SessionEvent::Message { text: text.to_string() });
        self.tasks.schedule(
            self.config.message_seconds,
            Deferred::ClearMessage { generation: self.message_generation },
        );
    }

    // -- Queries --

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn path(&self) -> &[CellRef] {
        self.selection.path().cells()
    }

    pub fn mode(&self) -> InputMode {
        self.selection.mode()
    }

    pub fn current_word(&self) -> String {
        self.selection.current_word(&self.grid)
    }

    pub fn can_submit(&self) -> bool {
        self.accepts_input() && self.selection.path().len() >= self.progression.min_word_length()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> i32 {
        self.time_left
    }

    pub fn elapsed_time(&self) -> u32 {
        self.elapsed_time
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Pending delayed follow-ups.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            level: self.progression.level(),
            score: self.score,
            elapsed_time: self.elapsed_time,
            words_found: self.found_words.len(),
            found_words: self.found_words.clone(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid.rows(),
            path: self.path().to_vec(),
            current_word: self.current_word(),
            mode: self.mode(),
            trail: self.selection.trail().segments().to_vec(),
            phase: self.phase,
            paused: self.paused,
            score: self.score,
            time_left: self.time_left,
            time_display: format_clock(self.time_left),
            elapsed_time: self.elapsed_time,
            elapsed_display: format_clock(self.elapsed_time as i32),
            level: self.progression.level(),
            words_in_level: self.progression.words_in_level(),
            words_to_advance: self.progression.words_to_advance(),
            found_words: self.found_words.clone(),
            message: self.message.clone(),
            can_submit: self.can_submit(),
            can_clear: self.accepts_input() && !self.path().is_empty(),
            can_shuffle: self.accepts_input(),
        }
    }
}
