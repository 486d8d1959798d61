use serde::Serialize;

use crate::api::types::CellRef;

/// Visual link between two consecutive selected cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrailSegment {
    pub from: CellRef,
    pub to: CellRef,
    /// Set when the drag ended; the segment is on its way out.
    pub fading: bool,
    /// Which release started the fade.
    #[serde(skip)]
    pub fade_generation: u32,
}

/// Transient trail drawn behind the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trail {
    segments: Vec<TrailSegment>,
    #[serde(skip)]
    fade_generation: u32,
}

impl Trail {
    pub fn push(&mut self, from: CellRef, to: CellRef) {
        self.segments.push(TrailSegment {
            from,
            to,
            fading: false,
            fade_generation: 0,
        });
    }

    /// Remove the newest live segment (backtrack / deselect).
    pub fn pop(&mut self) {
        if let Some(i) = self.segments.iter().rposition(|s| !s.fading) {
            self.segments.remove(i);
        }
    }

    /// Mark every live segment as fading under a fresh generation, returned for the
    /// later [`Trail::remove_faded`] call. `None` if nothing was live.
    pub fn fade_out(&mut self) -> Option<u32> {
        if self.segments.iter().all(|s| s.fading) {
            return None;
        }
        self.fade_generation += 1;
        let generation = self.fade_generation;
        for segment in self.segments.iter_mut().filter(|s| !s.fading) {
            segment.fading = true;
            segment.fade_generation = generation;
        }
        Some(generation)
    }

    /// Drop the segments that started fading in `generation`. Later fades and
    /// live segments survive.
    pub fn remove_faded(&mut self, generation: u32) {
        self.segments
            .retain(|s| !(s.fading && s.fade_generation == generation));
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
