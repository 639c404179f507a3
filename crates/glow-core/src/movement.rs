use crate::constants::{
    MOVEMENT_MIN_ACCELERATION_SQ, MOVEMENT_TRIGGER_INTERVAL_SEC, MOVEMENT_TRIGGER_RANGE,
};
use glam::Vec3;

/// Per-frame state of the moving actor (usually the player).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementSample {
    pub location: Vec3,
    pub acceleration: Vec3,
    pub grounded: bool,
}

/// Start request produced by sustained movement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementPulse {
    pub location: Vec3,
    pub max_range: f32,
}

/// Emits a glow under an actor that keeps accelerating along the ground.
///
/// Time only accumulates while the actor is grounded and accelerating; any
/// other frame resets it. Once `interval_sec` has accumulated a pulse is
/// emitted at the actor's location and the accumulator restarts.
#[derive(Clone, Debug)]
pub struct MovementTrigger {
    timer: f32,
    interval_sec: f32,
    max_range: f32,
}

impl Default for MovementTrigger {
    fn default() -> Self {
        Self::new(MOVEMENT_TRIGGER_INTERVAL_SEC, MOVEMENT_TRIGGER_RANGE)
    }
}

impl MovementTrigger {
    pub fn new(interval_sec: f32, max_range: f32) -> Self {
        Self {
            timer: 0.0,
            interval_sec,
            max_range,
        }
    }

    pub fn accumulated(&self) -> f32 {
        self.timer
    }

    pub fn update(&mut self, sample: &MovementSample, dt: f32) -> Option<MovementPulse> {
        let airborne = !sample.grounded;
        let accel_sq = sample.acceleration.length_squared();
        if airborne || accel_sq <= MOVEMENT_MIN_ACCELERATION_SQ {
            self.timer = 0.0;
            return None;
        }
        if dt.is_finite() && dt > 0.0 {
            self.timer += dt;
        }
        if self.timer >= self.interval_sec {
            self.timer = 0.0;
            return Some(MovementPulse {
                location: sample.location,
                max_range: self.max_range,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking(x: f32) -> MovementSample {
        MovementSample {
            location: Vec3::new(x, 0.0, 0.0),
            acceleration: Vec3::new(10.0, 0.0, 0.0),
            grounded: true,
        }
    }

    #[test]
    fn sustained_walk_pulses_every_interval() {
        let mut trigger = MovementTrigger::default();
        let mut pulses = Vec::new();
        for i in 0..30 {
            if let Some(p) = trigger.update(&walking(i as f32), 0.1) {
                pulses.push(p);
            }
        }
        // 3 seconds at 0.5s per pulse
        assert!(pulses.len() >= 5 && pulses.len() <= 6, "got {}", pulses.len());
        assert_eq!(pulses[0].max_range, MOVEMENT_TRIGGER_RANGE);
    }

    #[test]
    fn airborne_or_idle_resets_accumulator() {
        let mut trigger = MovementTrigger::default();
        trigger.update(&walking(0.0), 0.4);
        assert!((trigger.accumulated() - 0.4).abs() < 1e-6);

        let jump = MovementSample {
            grounded: false,
            ..walking(1.0)
        };
        assert!(trigger.update(&jump, 0.4).is_none());
        assert_eq!(trigger.accumulated(), 0.0);

        trigger.update(&walking(2.0), 0.4);
        let idle = MovementSample {
            acceleration: Vec3::new(0.5, 0.0, 0.5),
            ..walking(3.0)
        };
        assert!(trigger.update(&idle, 0.4).is_none());
        assert_eq!(trigger.accumulated(), 0.0);
    }

    #[test]
    fn pulse_uses_current_location() {
        let mut trigger = MovementTrigger::default();
        assert!(trigger.update(&walking(1.0), 0.3).is_none());
        let pulse = trigger.update(&walking(7.0), 0.3).unwrap();
        assert_eq!(pulse.location, Vec3::new(7.0, 0.0, 0.0));
        assert_eq!(trigger.accumulated(), 0.0);
    }
}
