//! Session configuration for the glow propagation.
//!
//! A `GlowConfig` is validated once when a pool or manager is built and is
//! immutable afterwards. The derived timings (`PropagationTimings`) are
//! computed from it at the same point.

use crate::constants::*;
use thiserror::Error;

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_points must be at least 1")]
    NoCapacity,

    #[error("{name} must be finite and greater than zero (got {value})")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite and not negative (got {value})")]
    Negative { name: &'static str, value: f32 },

    #[error("ease_exponent must be finite and at least 1 (got {0})")]
    EaseExponent(f32),
}

/// Static parameters of a glow session.
///
/// - `max_points`: pool capacity and width of both data textures
/// - `propagation_distance` / `propagation_speed`: define the total
///   propagation time (`distance / speed`)
/// - `fade_out_delay`: hold time between the end of the growth and the fade
/// - `fade_out_duration`: length of the fade itself
/// - `intensity_ratio`: scales collision reference distances into ranges
/// - `cooldown_duration`: collisions are ignored for this long after one hit
/// - `ease_exponent`: exponent of the ease-out curve (3 = cubic)
#[derive(Clone, Debug, PartialEq)]
pub struct GlowConfig {
    pub max_points: usize,
    pub propagation_distance: f32,
    pub propagation_speed: f32,
    pub fade_out_delay: f32,
    pub fade_out_duration: f32,
    pub intensity_ratio: f32,
    pub cooldown_duration: f32,
    pub ease_exponent: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            max_points: MAX_PROPAGATION_POINTS,
            propagation_distance: DEFAULT_PROPAGATION_DISTANCE,
            propagation_speed: DEFAULT_PROPAGATION_SPEED,
            fade_out_delay: DEFAULT_FADE_OUT_DELAY_SEC,
            fade_out_duration: DEFAULT_FADE_OUT_DURATION_SEC,
            intensity_ratio: DEFAULT_INTENSITY_RATIO,
            cooldown_duration: DEFAULT_COLLISION_COOLDOWN_SEC,
            ease_exponent: DEFAULT_EASE_EXPONENT,
        }
    }
}

/// Values derived once from a validated configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropagationTimings {
    /// Seconds needed to grow to `propagation_distance`.
    pub total_propagation_time: f32,
    /// `total_propagation_time / fade_out_duration`, informational only.
    pub fade_out_time_ratio: f32,
}

impl GlowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_points == 0 {
            return Err(ConfigError::NoCapacity);
        }
        positive("propagation_distance", self.propagation_distance)?;
        positive("propagation_speed", self.propagation_speed)?;
        positive("fade_out_duration", self.fade_out_duration)?;
        non_negative("fade_out_delay", self.fade_out_delay)?;
        non_negative("intensity_ratio", self.intensity_ratio)?;
        non_negative("cooldown_duration", self.cooldown_duration)?;
        if !self.ease_exponent.is_finite() || self.ease_exponent < 1.0 {
            return Err(ConfigError::EaseExponent(self.ease_exponent));
        }
        // Guards against a distance/speed pair whose ratio underflows or overflows.
        positive("total_propagation_time", self.total_propagation_time())?;
        Ok(())
    }

    /// Validate and compute the derived timings.
    pub fn timings(&self) -> Result<PropagationTimings, ConfigError> {
        self.validate()?;
        let total_propagation_time = self.total_propagation_time();
        Ok(PropagationTimings {
            total_propagation_time,
            fade_out_time_ratio: total_propagation_time / self.fade_out_duration,
        })
    }

    #[inline]
    fn total_propagation_time(&self) -> f32 {
        self.propagation_distance / self.propagation_speed
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let t = GlowConfig::default().timings().unwrap();
        assert!((t.total_propagation_time - 4.0).abs() < 1e-6);
        assert!((t.fade_out_time_ratio - 4.0).abs() < 1e-6);
    }

    #[test]
    fn zero_speed_is_refused() {
        let cfg = GlowConfig {
            propagation_speed: 0.0,
            ..GlowConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "propagation_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_distance_is_refused() {
        let cfg = GlowConfig {
            propagation_distance: -10.0,
            ..GlowConfig::default()
        };
        assert!(matches!(
            cfg.timings(),
            Err(ConfigError::NotPositive {
                name: "propagation_distance",
                ..
            })
        ));
    }

    #[test]
    fn tiny_ratio_that_underflows_is_refused() {
        let cfg = GlowConfig {
            propagation_distance: f32::MIN_POSITIVE,
            propagation_speed: f32::MAX,
            ..GlowConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "total_propagation_time",
                ..
            })
        ));
    }

    #[test]
    fn other_fields_are_checked() {
        let zero_points = GlowConfig {
            max_points: 0,
            ..GlowConfig::default()
        };
        assert_eq!(zero_points.validate(), Err(ConfigError::NoCapacity));

        let bad_delay = GlowConfig {
            fade_out_delay: -0.5,
            ..GlowConfig::default()
        };
        assert!(matches!(bad_delay.validate(), Err(ConfigError::Negative { .. })));

        let flat_curve = GlowConfig {
            ease_exponent: 0.5,
            ..GlowConfig::default()
        };
        assert_eq!(flat_curve.validate(), Err(ConfigError::EaseExponent(0.5)));
    }
}
