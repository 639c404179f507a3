//! Frame-level driver for the glow propagation.
//!
//! `GlowManager` owns the pool, the encoder, the collision cooldown and the
//! movement trigger. The host calls [`GlowManager::on_collision`] from its
//! collision plumbing and [`GlowManager::on_tick`] once per frame; each tick
//! advances the pool, re-encodes both rows and publishes them to every
//! registered material.

use crate::config::{ConfigError, GlowConfig, PropagationTimings};
use crate::constants::PROPAGATION_SPEED_PARAM;
use crate::cooldown::CollisionCooldown;
use crate::encoder::{TextureEncoder, TextureRows};
use crate::movement::{MovementSample, MovementTrigger};
use crate::pool::PropagationPool;
use crate::timer::TimerQueue;
use crate::trigger::{collision_range, CollisionEvent};

/// A material (or any texture consumer) fed by the manager.
pub trait MaterialSink {
    fn set_scalar_parameter(&mut self, name: &str, value: f32);
    fn set_texture_rows(&mut self, rows: &TextureRows);
}

/// What happened to a collision handed to the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// A propagation started in this slot.
    Started(usize),
    /// Accepted, but every slot was busy.
    PoolFull,
    /// Dropped by the cooldown of a previous hit.
    CoolingDown,
}

pub struct GlowManager {
    config: GlowConfig,
    pool: PropagationPool,
    encoder: TextureEncoder,
    cooldown: CollisionCooldown,
    movement: MovementTrigger,
    materials: Vec<Box<dyn MaterialSink>>,
}

impl GlowManager {
    pub fn new(config: GlowConfig) -> Result<Self, ConfigError> {
        let pool = PropagationPool::new(&config)?;
        let encoder = TextureEncoder::for_pool(&pool);
        let cooldown = CollisionCooldown::new(config.cooldown_duration);
        log::info!(
            "[glow] manager ready: {} points, {:.2}s propagation, {:.2}s fade",
            pool.capacity(),
            pool.timings().total_propagation_time,
            config.fade_out_duration
        );
        Ok(Self {
            config,
            pool,
            encoder,
            cooldown,
            movement: MovementTrigger::default(),
            materials: Vec::new(),
        })
    }

    pub fn config(&self) -> &GlowConfig {
        &self.config
    }

    pub fn timings(&self) -> PropagationTimings {
        self.pool.timings()
    }

    pub fn pool(&self) -> &PropagationPool {
        &self.pool
    }

    /// Rows from the most recent tick.
    pub fn rows(&self) -> &TextureRows {
        self.encoder.rows()
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.is_cooling_down()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Attach a material and hand it the propagation speed.
    pub fn register_material(&mut self, mut sink: Box<dyn MaterialSink>) {
        sink.set_scalar_parameter(PROPAGATION_SPEED_PARAM, self.config.propagation_speed);
        self.materials.push(sink);
        log::info!("[glow] material registered ({} total)", self.materials.len());
    }

    /// Handle a hit. Arms the cooldown whenever the hit is not itself
    /// debounced, even if the pool turns out to be full.
    pub fn on_collision(
        &mut self,
        event: &CollisionEvent,
        timers: &mut TimerQueue,
    ) -> CollisionOutcome {
        if self.cooldown.is_cooling_down() {
            log::trace!("[glow] collision ignored, cooling down");
            return CollisionOutcome::CoolingDown;
        }
        let range = collision_range(self.config.intensity_ratio, event.reference_distance());
        let outcome = match self.pool.try_start(event.location, range) {
            Some(slot) => CollisionOutcome::Started(slot),
            None => {
                log::warn!("[glow] all {} slots busy, collision dropped", self.pool.capacity());
                CollisionOutcome::PoolFull
            }
        };
        self.cooldown.arm(timers);
        outcome
    }

    /// Per-frame update.
    ///
    /// The movement trigger always runs. Advancing, encoding and publishing
    /// only happen once at least one material is registered.
    pub fn on_tick(&mut self, dt: f32, movement: Option<&MovementSample>) {
        if let Some(sample) = movement {
            if let Some(pulse) = self.movement.update(sample, dt) {
                if self.pool.try_start(pulse.location, pulse.max_range).is_none() {
                    log::warn!("[glow] movement pulse dropped, pool full");
                }
            }
        }

        if self.materials.is_empty() {
            return;
        }

        self.pool.advance(dt);
        let rows = self.encoder.encode(&self.pool);
        for material in self.materials.iter_mut() {
            material.set_texture_rows(rows);
        }
        log::trace!("[glow] tick dt={:.4} live={}", dt, self.pool.active_count());
    }
}
