use glam::Vec2;
use labyrinth_engine::{
    Command, Dictionary, GameConfig, Gesture, GridLayout, InputEvent, InputQueue,
    LabyrinthError, PointerTracker, Session,
};

/// Owns one session and feeds it browser input once per frame.
///
/// The `#[wasm_bindgen]` exports in `lib.rs` keep a single runner in a
/// `thread_local!` and forward to it.
pub struct GameRunner {
    session: Session,
    input: InputQueue,
    tracker: PointerTracker,
    layout: GridLayout,
    gestures: Vec<Gesture>,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        Self::with_session(Session::new(config, Dictionary::empty()))
    }

    pub fn with_session(session: Session) -> Self {
        let config = session.config();
        let tracker = PointerTracker::new(config.drag_threshold, config.center_zone);
        let layout = GridLayout::new(Vec2::ZERO, 1.0, session.grid().size());
        Self {
            session,
            input: InputQueue::new(),
            tracker,
            layout,
            gestures: Vec::with_capacity(8),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Where the board is drawn, in the same coordinates as pointer events.
    pub fn set_layout(&mut self, origin_x: f32, origin_y: f32, cell_size: f32) {
        self.layout.origin = Vec2::new(origin_x, origin_y);
        self.layout.cell_size = cell_size;
    }

    pub fn load_dictionary(&mut self, text: &str) {
        self.session.load_word_list(text);
    }

    /// The host failed to fetch the word list.
    pub fn dictionary_failed(&mut self, reason: &str) {
        self.session
            .set_dictionary(Err(LabyrinthError::DictionaryFetch(reason.to_string())));
    }

    /// Run one frame: apply queued input in arrival order, then advance time.
    pub fn tick(&mut self, dt: f32) {
        for event in self.input.drain() {
            match event {
                InputEvent::Command(command) => self.dispatch(command),
                pointer => {
                    // Shuffles can resize the board between events.
                    self.layout.size = self.session.grid().size();
                    self.tracker.interpret(&pointer, &self.layout, &mut self.gestures);
                    for gesture in self.gestures.drain(..) {
                        self.session.gesture(gesture);
                    }
                }
            }
        }
        self.session.update(dt);
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::Start => self.session.start(),
            Command::TogglePause => self.session.toggle_pause(),
            Command::Submit => {
                self.session.submit();
            }
            Command::Clear => self.session.clear_selection(),
            Command::Shuffle => {
                self.session.shuffle();
            }
            Command::Restart => self.restart(),
        }
    }

    /// Fresh session with the same config and word list, skipping the tutorial.
    fn restart(&mut self) {
        let mut config = self.session.config().clone();
        config.seed = config.seed.wrapping_add(self.session.elapsed_time() as u64 + 1);
        let dictionary = self.session.dictionary().clone();
        self.session = Session::new(config, dictionary);
        self.session.start();
        log::info!("New game");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot_json(&self) -> String {
        self.session.snapshot().to_json()
    }

    /// Events since the last call, as a JSON array.
    pub fn drain_events_json(&mut self) -> String {
        let events = self.session.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}
