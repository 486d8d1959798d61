// core/scheduler.rs
//
// Delayed-action queue. Cosmetic follow-ups (message fade, trail fade, letter
// replacement) are queued here and released by the same loop that drains input,
// so they never interleave with a half-processed gesture.
//
// Usage:
//   let mut tasks = Scheduler::new();
//   tasks.schedule(2.0, Action::ClearMessage);
//   for action in tasks.advance(dt) { session.apply(action); }

#[derive(Debug, Clone)]
struct Task<A> {
    due: f32,
    action: A,
}

/// Queue of actions waiting for their delay to elapse.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    tasks: Vec<Task<A>>,
    now: f32,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            now: 0.0,
        }
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire `delay` seconds from now. Once queued it always fires,
    /// unless the whole queue is cleared.
    pub fn schedule(&mut self, delay: f32, action: A) {
        self.tasks.push(Task {
            due: self.now + delay.max(0.0),
            action,
        });
    }

    /// Advance time and return every action that came due, earliest first.
    /// Actions with the same due time fire in the order they were scheduled.
    pub fn advance(&mut self, dt: f32) -> Vec<A> {
        self.now += dt.max(0.0);
        let now = self.now;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= now {
                due.push(self.tasks.remove(i));
            } else {
                i += 1;
            }
        }

        // Stable sort: equal due times keep scheduling order.
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|t| t.action).collect()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
