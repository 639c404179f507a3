use crate::timer::{TimerId, TimerQueue};
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Debounce for collision triggers.
///
/// `arm` raises the flag and asks the timer queue to lower it after
/// `duration_sec`. The scheduled callback only holds a weak handle, so once
/// the cooldown is dropped the callback does nothing.
pub struct CollisionCooldown {
    cooling: Rc<Cell<bool>>,
    duration_sec: f32,
}

impl CollisionCooldown {
    pub fn new(duration_sec: f32) -> Self {
        Self {
            cooling: Rc::new(Cell::new(false)),
            duration_sec,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration_sec
    }

    #[inline]
    pub fn is_cooling_down(&self) -> bool {
        self.cooling.get()
    }

    pub fn arm(&self, timers: &mut TimerQueue) -> TimerId {
        self.cooling.set(true);
        let flag: Weak<Cell<bool>> = Rc::downgrade(&self.cooling);
        timers.schedule(self.duration_sec, move || {
            if let Some(flag) = flag.upgrade() {
                flag.set(false);
            }
        })
    }
}
