use glam::Vec2;

use crate::api::types::CellRef;
use crate::input::queue::{InputEvent, PointerKind};
use crate::selection::engine::Gesture;

/// Where the board sits in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Top-left corner of cell (0, 0).
    pub origin: Vec2,
    /// Edge length of one square cell.
    pub cell_size: f32,
    /// Cells per side.
    pub size: usize,
}

impl GridLayout {
    pub fn new(origin: Vec2, cell_size: f32, size: usize) -> Self {
        Self { origin, cell_size, size }
    }

    /// Cell under a world position, if any.
    pub fn cell_at(&self, pos: Vec2) -> Option<CellRef> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let local = (pos - self.origin) / self.cell_size;
        let col = local.x.floor() as i32;
        let row = local.y.floor() as i32;
        let size = self.size as i32;
        if col >= 0 && col < size && row >= 0 && row < size {
            Some(CellRef::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// World-space centre of a cell.
    pub fn cell_center(&self, cell: CellRef) -> Vec2 {
        self.origin
            + Vec2::new(
                (cell.col as f32 + 0.5) * self.cell_size,
                (cell.row as f32 + 0.5) * self.cell_size,
            )
    }

    /// Whether `pos` is within `fraction × cell_size` of the cell centre on both axes.
    pub fn in_center_zone(&self, pos: Vec2, cell: CellRef, fraction: f32) -> bool {
        let offset = (pos - self.cell_center(cell)).abs();
        let limit = fraction * self.cell_size;
        offset.x <= limit && offset.y <= limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedPress {
    kind: PointerKind,
    origin: CellRef,
    committed: bool,
}

/// Resolves raw pointer coordinates into [`Gesture`]s.
///
/// Mouse presses turn into drags once the pointer strays more than
/// `drag_threshold × cell_size` from the pressed cell's centre. Touch presses
/// turn into drags once the finger is over a different cell. While dragging, a
/// cell only counts as entered near its centre, so grazing a corner between two
/// cells does not flicker the selection.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    drag_threshold: f32,
    center_zone: f32,
    press: Option<TrackedPress>,
}

impl PointerTracker {
    pub fn new(drag_threshold: f32, center_zone: f32) -> Self {
        Self {
            drag_threshold,
            center_zone,
            press: None,
        }
    }

    /// Translate one raw event. Commands are not pointer input and yield nothing.
    pub fn interpret(&mut self, event: &InputEvent, layout: &GridLayout, out: &mut Vec<Gesture>) {
        match *event {
            InputEvent::PointerDown { x, y, kind } => {
                self.press = None;
                if let Some(cell) = layout.cell_at(Vec2::new(x, y)) {
                    out.push(Gesture::PointerDown(cell));
                    self.press = Some(TrackedPress { kind, origin: cell, committed: false });
                }
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(Vec2::new(x, y), layout, out),
            InputEvent::PointerUp => {
                self.press = None;
                out.push(Gesture::PointerUp);
            }
            InputEvent::PointerCancel => {
                self.press = None;
                out.push(Gesture::Cancel);
            }
            InputEvent::Command(_) => {}
        }
    }

    fn pointer_move(&mut self, pos: Vec2, layout: &GridLayout, out: &mut Vec<Gesture>) {
        let Some(press) = self.press.as_mut() else {
            return;
        };
        let hovered = layout.cell_at(pos);

        if !press.committed {
            let left_origin = hovered.is_some_and(|cell| cell != press.origin);
            let strayed = match press.kind {
                PointerKind::Mouse => {
                    let offset = (pos - layout.cell_center(press.origin)).abs();
                    let limit = self.drag_threshold * layout.cell_size;
                    offset.x > limit || offset.y > limit || left_origin
                }
                PointerKind::Touch => left_origin,
            };
            if !strayed {
                return;
            }
            press.committed = true;
            out.push(Gesture::DragStart);
        }

        if let Some(cell) = hovered {
            if layout.in_center_zone(pos, cell, self.center_zone) {
                out.push(Gesture::DragEnter(cell));
            }
        }
    }

    /// Whether a press is being tracked.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(Vec2::new(100.0, 50.0), 40.0, 4)
    }

    fn tracker() -> PointerTracker {
        PointerTracker::new(0.25, 0.35)
    }

    fn feed(t: &mut PointerTracker, events: &[InputEvent]) -> Vec<Gesture> {
        let mut out = Vec::new();
        for e in events {
            t.interpret(e, &layout(), &mut out);
        }
        out
    }

    fn down(x: f32, y: f32, kind: PointerKind) -> InputEvent {
        InputEvent::PointerDown { x, y, kind }
    }

    fn mv(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove { x, y }
    }

    #[test]
    fn cell_lookup() {
        let l = layout();
        assert_eq!(l.cell_at(Vec2::new(101.0, 51.0)), Some(CellRef::new(0, 0)));
        assert_eq!(l.cell_at(Vec2::new(181.0, 91.0)), Some(CellRef::new(1, 2)));
        assert_eq!(l.cell_at(Vec2::new(99.0, 60.0)), None);
        assert_eq!(l.cell_at(Vec2::new(261.0, 60.0)), None);
        assert_eq!(l.cell_center(CellRef::new(1, 2)), Vec2::new(200.0, 110.0));
    }

    #[test]
    fn centre_zone_edges() {
        let l = layout();
        let cell = CellRef::new(0, 0);
        // Centre (120, 70); zone reaches 14 units out.
        assert!(l.in_center_zone(Vec2::new(133.0, 70.0), cell, 0.35));
        assert!(!l.in_center_zone(Vec2::new(135.0, 70.0), cell, 0.35));
        assert!(!l.in_center_zone(Vec2::new(120.0, 85.0), cell, 0.35));
    }

    #[test]
    fn small_mouse_wiggle_stays_a_tap() {
        let mut t = tracker();
        let out = feed(&mut t, &[down(120.0, 70.0, PointerKind::Mouse), mv(128.0, 74.0), InputEvent::PointerUp]);
        assert_eq!(out, vec![Gesture::PointerDown(CellRef::new(0, 0)), Gesture::PointerUp]);
    }

    #[test]
    fn mouse_past_quarter_cell_commits() {
        let mut t = tracker();
        // 11 units right of centre: past the 10-unit threshold, inside the origin's centre zone.
        let out = feed(&mut t, &[down(120.0, 70.0, PointerKind::Mouse), mv(131.0, 70.0)]);
        assert_eq!(
            out,
            vec![
                Gesture::PointerDown(CellRef::new(0, 0)),
                Gesture::DragStart,
                Gesture::DragEnter(CellRef::new(0, 0)),
            ]
        );
    }

    #[test]
    fn drag_enters_only_near_centres() {
        let mut t = tracker();
        let out = feed(
            &mut t,
            &[
                down(120.0, 70.0, PointerKind::Mouse),
                mv(142.0, 70.0), // cell (0, 1) edge: commit but no enter
                mv(160.0, 70.0), // cell (0, 1) centre
            ],
        );
        assert_eq!(
            out,
            vec![
                Gesture::PointerDown(CellRef::new(0, 0)),
                Gesture::DragStart,
                Gesture::DragEnter(CellRef::new(0, 1)),
            ]
        );
    }

    #[test]
    fn touch_commits_only_on_another_cell() {
        let mut t = tracker();
        let out = feed(&mut t, &[down(120.0, 70.0, PointerKind::Touch), mv(135.0, 85.0)]);
        assert_eq!(out, vec![Gesture::PointerDown(CellRef::new(0, 0))]);

        let out = feed(&mut t, &[mv(160.0, 72.0)]);
        assert_eq!(out, vec![Gesture::DragStart, Gesture::DragEnter(CellRef::new(0, 1))]);
    }

    #[test]
    fn press_outside_grid_is_ignored() {
        let mut t = tracker();
        let out = feed(&mut t, &[down(10.0, 10.0, PointerKind::Mouse), mv(120.0, 70.0)]);
        assert!(out.is_empty());
        assert!(!t.is_pressed());
    }

    #[test]
    fn cancel_and_up_end_the_press() {
        let mut t = tracker();
        let out = feed(&mut t, &[down(120.0, 70.0, PointerKind::Touch), InputEvent::PointerCancel]);
        assert_eq!(out.last(), Some(&Gesture::Cancel));
        assert!(!t.is_pressed());
    }
}
