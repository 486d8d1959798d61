//! End-to-end play through raw pointer input, the way the web runner drives a session.

use std::io::Write;

use glam::Vec2;
use labyrinth_engine::{
    CellRef, Dictionary, GameConfig, Gesture, Grid, GridLayout, InputEvent, Outcome, Phase,
    PointerKind, PointerTracker, Session, SessionEvent,
};

const ROWS: [&str; 4] = ["LABY", "RINT", "HSOE", "MAZE"];

fn word_list() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "lab\nrin\nmaze\nsoe\nhis").unwrap();
    file
}

fn session() -> Session {
    let file = word_list();
    let config = GameConfig::from_json(r#"{ "starting_time": 30, "seed": 7 }"#).unwrap();
    let mut s = Session::with_grid(config, Dictionary::empty(), Grid::from_rows(&ROWS));
    s.set_dictionary(Dictionary::load(file.path()));
    s.start();
    s
}

/// 4x4 board of 50-unit cells at the world origin.
fn layout() -> GridLayout {
    GridLayout::new(Vec2::ZERO, 50.0, 4)
}

fn center(row: usize, col: usize) -> (f32, f32) {
    let p = layout().cell_center(CellRef::new(row, col));
    (p.x, p.y)
}

fn play(s: &mut Session, tracker: &mut PointerTracker, events: &[InputEvent]) {
    let mut gestures = Vec::new();
    for e in events {
        tracker.interpret(e, &layout(), &mut gestures);
    }
    for g in gestures {
        s.gesture(g);
    }
}

fn down(cell: (f32, f32), kind: PointerKind) -> InputEvent {
    InputEvent::PointerDown { x: cell.0, y: cell.1, kind }
}

fn mv(cell: (f32, f32)) -> InputEvent {
    InputEvent::PointerMove { x: cell.0, y: cell.1 }
}

#[test]
fn mouse_drag_scores_a_word() {
    let mut s = session();
    let mut tracker = PointerTracker::new(0.25, 0.35);
    play(
        &mut s,
        &mut tracker,
        &[
            down(center(0, 0), PointerKind::Mouse),
            mv((40.0, 25.0)),
            mv(center(0, 1)),
            mv(center(0, 2)),
            InputEvent::PointerUp,
        ],
    );

    assert_eq!(s.found_words(), ["LAB".to_string()]);
    assert_eq!(s.time_left(), 40);
    assert!(s.path().is_empty());
}

#[test]
fn touch_drag_with_backtrack() {
    let mut s = session();
    let mut tracker = PointerTracker::new(0.25, 0.35);
    play(
        &mut s,
        &mut tracker,
        &[
            down(center(3, 0), PointerKind::Touch),
            mv(center(3, 1)),
            mv(center(3, 2)),
            mv(center(2, 2)),
            // Back onto Z retracts O.
            mv(center(3, 2)),
            mv(center(3, 3)),
            InputEvent::PointerUp,
        ],
    );

    assert_eq!(s.found_words(), ["MAZE".to_string()]);
    assert_eq!(s.score(), 15);
}

#[test]
fn taps_then_submit() {
    let mut s = session();
    let mut tracker = PointerTracker::new(0.25, 0.35);
    for cell in [(1, 0), (1, 1), (1, 2)] {
        play(
            &mut s,
            &mut tracker,
            &[down(center(cell.0, cell.1), PointerKind::Mouse), InputEvent::PointerUp],
        );
    }
    assert_eq!(s.current_word(), "RIN");
    assert!(matches!(s.submit(), Outcome::Valid { bonus: 10, .. }));
}

#[test]
fn cancelled_touch_clears_selection() {
    let mut s = session();
    let mut tracker = PointerTracker::new(0.25, 0.35);
    play(
        &mut s,
        &mut tracker,
        &[
            down(center(0, 0), PointerKind::Touch),
            mv(center(0, 1)),
            InputEvent::PointerCancel,
        ],
    );
    assert!(s.path().is_empty());
    assert!(s.found_words().is_empty());
}

#[test]
fn clock_runs_out() {
    let mut s = session();
    s.gesture(Gesture::PointerDown(CellRef::new(0, 0)));
    for _ in 0..40 {
        s.update(1.0);
    }
    assert_eq!(s.phase(), Phase::Over);
    assert_eq!(s.elapsed_time(), 30);

    let events = s.drain_events();
    let over = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::GameOver { .. }))
        .count();
    assert_eq!(over, 1);

    let json = s.snapshot().to_json();
    assert!(json.contains(r#""phase":"Over""#));
    assert!(json.contains(r#""time_display":"00:00""#));
}

#[test]
fn level_up_then_pause() {
    let mut s = session();
    let lab = [CellRef::new(0, 0), CellRef::new(0, 1), CellRef::new(0, 2)];
    for _ in 0..6 {
        s.gesture(Gesture::PointerDown(lab[0]));
        s.gesture(Gesture::DragStart);
        s.gesture(Gesture::DragEnter(lab[1]));
        s.gesture(Gesture::DragEnter(lab[2]));
        s.gesture(Gesture::PointerUp);
    }
    assert_eq!(s.level(), 2);
    assert_eq!(s.time_left(), 30 + 60 + 40);
    assert!(s
        .drain_events()
        .contains(&SessionEvent::LevelUp { level: 2, bonus_seconds: 40 }));

    s.toggle_pause();
    s.update(10.0);
    assert_eq!(s.time_left(), 130);
    assert_eq!(s.submit(), Outcome::Ignored);

    s.toggle_pause();
    s.update(2.0);
    assert_eq!(s.time_left(), 128);
}
