//! Fixed-capacity pool of propagation points.
//!
//! Every slot is allocated up front and never moves, so a slot index doubles
//! as the texture column the encoder writes it to. Allocation is a linear scan
//! for the lowest `Inactive` slot; a full pool silently drops the request.
//!
//! Each call to [`PropagationPool::advance`] steps every slot through its
//! phase machine:
//!
//! - `Active`: grow along the ease-out curve until the eased time reaches
//!   `PROPAGATION_COMPLETION_RATIO` of the total, then hold or fade
//! - `WaitingForFadeOut`: count down `fade_out_delay`
//! - `FadeOut`: ramp `fade_out_intensity` to 1 over `fade_out_duration`, then
//!   reset the slot

use crate::config::{ConfigError, GlowConfig, PropagationTimings};
use crate::constants::PROPAGATION_COMPLETION_RATIO;
use crate::easing::ease_out;
use crate::point::{PropagationPoint, PropagationStage};
use glam::Vec3;

pub struct PropagationPool {
    points: Box<[PropagationPoint]>,
    timings: PropagationTimings,
    fade_out_delay: f32,
    fade_out_duration: f32,
    ease_exponent: f32,
}

impl PropagationPool {
    /// Build a pool of `config.max_points` inactive slots.
    pub fn new(config: &GlowConfig) -> Result<Self, ConfigError> {
        let timings = config.timings()?;
        let points = vec![PropagationPoint::default(); config.max_points].into_boxed_slice();
        log::debug!(
            "[pool] {} slots, total propagation {:.3}s, fade ratio {:.3}",
            points.len(),
            timings.total_propagation_time,
            timings.fade_out_time_ratio
        );
        Ok(Self {
            points,
            timings,
            fade_out_delay: config.fade_out_delay,
            fade_out_duration: config.fade_out_duration,
            ease_exponent: config.ease_exponent,
        })
    }

    /// Number of slots; fixed for the pool's lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    pub fn timings(&self) -> PropagationTimings {
        self.timings
    }

    pub fn points(&self) -> &[PropagationPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&PropagationPoint> {
        self.points.get(index)
    }

    pub fn active_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_live()).count()
    }

    pub fn is_full(&self) -> bool {
        self.points.iter().all(|p| p.is_live())
    }

    /// Start a propagation in the lowest free slot.
    ///
    /// Returns the slot index, or `None` when every slot is busy. A full pool
    /// is not an error: the request is dropped without touching any slot.
    pub fn try_start(&mut self, position: Vec3, max_range: f32) -> Option<usize> {
        let index = self.points.iter().position(|p| !p.is_live())?;
        self.points[index].activate(position, max_range);
        log::debug!(
            "[pool] slot {} started at ({:.1},{:.1},{:.1}) range {:.1}",
            index,
            position.x,
            position.y,
            position.z,
            max_range
        );
        Some(index)
    }

    /// Advance every slot by `dt` seconds. Non-positive or non-finite `dt`
    /// leaves the pool untouched.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        for i in 0..self.points.len() {
            let before = self.points[i].stage;
            match before {
                PropagationStage::Inactive => continue,
                PropagationStage::Active => self.process_propagation(i, dt),
                PropagationStage::WaitingForFadeOut => {
                    let p = &mut self.points[i];
                    p.fade_out_timer -= dt;
                    if p.fade_out_timer <= 0.0 {
                        p.fade_out_timer = 0.0;
                        p.stage = PropagationStage::FadeOut;
                    }
                }
                PropagationStage::FadeOut => self.process_fade_out(i, dt),
            }
            let after = self.points[i].stage;
            if after != before {
                log::debug!("[pool] slot {} {:?} -> {:?}", i, before, after);
            }
        }
    }

    /// Force every slot back to `Inactive`.
    pub fn clear(&mut self) {
        for p in self.points.iter_mut() {
            p.deactivate();
        }
    }

    fn process_propagation(&mut self, index: usize, dt: f32) {
        let total = self.timings.total_propagation_time;
        let delay = self.fade_out_delay;
        let exponent = self.ease_exponent;
        let p = &mut self.points[index];

        p.elapsed_time += dt;
        let rate = p.elapsed_time / total;
        p.time_to_send = ease_out(0.0, total, rate, exponent);

        // The curve crawls through its last percent; cut it short.
        if p.time_to_send >= total * PROPAGATION_COMPLETION_RATIO {
            p.elapsed_time = p.time_to_send;
            if delay > 0.0 {
                p.fade_out_timer = delay;
                p.stage = PropagationStage::WaitingForFadeOut;
            } else {
                p.stage = PropagationStage::FadeOut;
            }
        }
    }

    fn process_fade_out(&mut self, index: usize, dt: f32) {
        let total = self.timings.total_propagation_time;
        let duration = self.fade_out_duration;
        let p = &mut self.points[index];

        p.elapsed_time += dt;
        p.fade_out_intensity = ((p.elapsed_time - total) / duration).clamp(0.0, 1.0);

        if p.elapsed_time >= total + duration {
            p.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> PropagationPool {
        PropagationPool::new(&GlowConfig::default()).unwrap()
    }

    #[test]
    fn lowest_free_index_is_reused() {
        let mut pool = pool();
        for _ in 0..3 {
            pool.try_start(Vec3::ZERO, 100.0);
        }
        pool.points[1].deactivate();
        assert_eq!(pool.try_start(Vec3::ONE, 50.0), Some(1));
        assert_eq!(pool.points[1].hit_point, Vec3::ONE);
        assert_eq!(pool.try_start(Vec3::ONE, 50.0), Some(3));
    }

    #[test]
    fn restart_clears_previous_elapsed_time() {
        let mut pool = pool();
        pool.try_start(Vec3::ZERO, 100.0);
        pool.advance(1.0);
        assert!(pool.points[0].elapsed_time > 0.0);
        pool.points[0].deactivate();
        pool.try_start(Vec3::X, 10.0);
        assert_eq!(pool.points[0].elapsed_time, 0.0);
        assert_eq!(pool.points[0].stage, PropagationStage::Active);
    }

    #[test]
    fn waiting_stage_counts_down_delay() {
        let cfg = GlowConfig {
            fade_out_delay: 0.5,
            ..GlowConfig::default()
        };
        let mut pool = PropagationPool::new(&cfg).unwrap();
        pool.try_start(Vec3::ZERO, 100.0);
        pool.advance(4.0);
        assert_eq!(pool.points[0].stage, PropagationStage::WaitingForFadeOut);
        assert!((pool.points[0].fade_out_timer - 0.5).abs() < 1e-6);
        pool.advance(0.3);
        assert_eq!(pool.points[0].stage, PropagationStage::WaitingForFadeOut);
        pool.advance(0.3);
        assert_eq!(pool.points[0].stage, PropagationStage::FadeOut);
    }

    #[test]
    fn clear_resets_all_slots() {
        let mut pool = pool();
        pool.try_start(Vec3::ZERO, 1.0);
        pool.try_start(Vec3::ZERO, 1.0);
        pool.advance(0.5);
        pool.clear();
        assert_eq!(pool.active_count(), 0);
        for p in pool.points() {
            assert_eq!(p.stage, PropagationStage::Inactive);
            assert_eq!(p.elapsed_time, 0.0);
            assert_eq!(p.time_to_send, 0.0);
            assert_eq!(p.fade_out_intensity, 0.0);
        }
    }
}
