use smallvec::SmallVec;

/// Identifies a scheduled callback so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct PendingTimer {
    id: TimerId,
    remaining: f32,
    callback: Box<dyn FnOnce()>,
}

/// Frame-driven one-shot timers.
///
/// The host advances the queue once per frame with the frame's delta; each
/// callback runs once, on the first `advance` at or after its deadline, in
/// scheduling order. Callbacks must not assume their scheduler is still alive:
/// anything they touch should be reached through a weak handle.
#[derive(Default)]
pub struct TimerQueue {
    timers: SmallVec<[PendingTimer; 4]>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once `delay_sec` seconds of frame time have passed.
    pub fn schedule(&mut self, delay_sec: f32, callback: impl FnOnce() + 'static) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let remaining = if delay_sec.is_finite() { delay_sec.max(0.0) } else { 0.0 };
        self.timers.push(PendingTimer {
            id,
            remaining,
            callback: Box::new(callback),
        });
        id
    }

    /// Drop a pending callback without running it.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Advance by `dt` seconds and run every callback that came due.
    /// Returns how many callbacks ran.
    pub fn advance(&mut self, dt: f32) -> usize {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut due: SmallVec<[Box<dyn FnOnce()>; 4]> = SmallVec::new();
        let mut i = 0;
        while i < self.timers.len() {
            self.timers[i].remaining -= dt;
            if self.timers[i].remaining <= 0.0 {
                due.push(self.timers.remove(i).callback);
            } else {
                i += 1;
            }
        }
        let fired = due.len();
        for callback in due {
            callback();
        }
        fired
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
