//! Property-based tests for path selection and letter generation.

use proptest::prelude::*;

use labyrinth_engine::board::letters::is_board_letter;
use labyrinth_engine::{CellRef, Gesture, Grid, InputMode, Rng, SelectionEngine};

const SIZE: usize = 5;

fn cell() -> impl Strategy<Value = CellRef> {
    (0..SIZE, 0..SIZE).prop_map(|(row, col)| CellRef::new(row, col))
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        4 => cell().prop_map(Gesture::PointerDown),
        2 => Just(Gesture::DragStart),
        6 => cell().prop_map(Gesture::DragEnter),
        4 => Just(Gesture::PointerUp),
        2 => cell().prop_map(Gesture::TapSelect),
        1 => Just(Gesture::Cancel),
        1 => Just(Gesture::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Whatever the gesture stream, the path stays a chain of distinct neighbours.
    #[test]
    fn prop_path_stays_adjacent_and_unique(gestures in prop::collection::vec(gesture(), 0..60)) {
        let mut engine = SelectionEngine::new();
        for g in gestures {
            engine.handle(g);

            let cells = engine.path().cells();
            for pair in cells.windows(2) {
                prop_assert!(pair[0].is_adjacent(pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
            }
            for (i, a) in cells.iter().enumerate() {
                prop_assert!(!cells[i + 1..].contains(a), "duplicate {:?}", a);
            }
            let live = engine.trail().segments().iter().filter(|s| !s.fading).count();
            prop_assert!(live <= cells.len().saturating_sub(1));
        }
    }

    /// An empty path never leaves the engine in tap mode.
    #[test]
    fn prop_tap_mode_needs_a_path(gestures in prop::collection::vec(gesture(), 0..60)) {
        let mut engine = SelectionEngine::new();
        for g in gestures {
            engine.handle(g);
            if engine.mode() == InputMode::Tapping {
                prop_assert!(!engine.path().is_empty());
            }
        }
    }

    /// Generated and replaced letters always come from the letter pools.
    #[test]
    fn prop_letters_from_pools(seed in any::<u64>(), size in 3usize..8, swaps in 0usize..40) {
        let mut rng = Rng::new(seed);
        let mut grid = Grid::generate(size, &mut rng);
        for i in 0..swaps {
            let cell = CellRef::new(i % size, (i * 7) % size);
            grid.replace_letter(cell, &mut rng);
        }
        for row in grid.rows() {
            prop_assert_eq!(row.chars().count(), size);
            for ch in row.chars() {
                prop_assert!(is_board_letter(ch), "unexpected letter {}", ch);
            }
        }
    }
}
