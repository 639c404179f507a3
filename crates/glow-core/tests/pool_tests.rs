// Host-side tests for the propagation pool phase machine.

use glam::Vec3;
use glow_core::*;

fn pool_with(delay: f32) -> PropagationPool {
    let cfg = GlowConfig {
        fade_out_delay: delay,
        ..GlowConfig::default()
    };
    PropagationPool::new(&cfg).unwrap()
}

fn assert_clean(p: &PropagationPoint) {
    assert_eq!(p.stage(), PropagationStage::Inactive);
    assert_eq!(p.elapsed_time(), 0.0);
    assert_eq!(p.fade_out_intensity(), 0.0);
    assert_eq!(p.time_to_send(), 0.0);
}

#[test]
fn capacity_is_never_exceeded() {
    let mut pool = pool_with(0.0);
    for i in 0..MAX_PROPAGATION_POINTS {
        assert_eq!(pool.try_start(Vec3::splat(i as f32), 100.0), Some(i));
    }
    for _ in 0..5 {
        assert_eq!(pool.try_start(Vec3::ONE, 100.0), None);
    }
    assert_eq!(pool.active_count(), MAX_PROPAGATION_POINTS);
    assert!(pool.is_full());
    // Rejected requests left the occupied slots alone
    assert_eq!(pool.point(3).unwrap().hit_point(), Vec3::splat(3.0));
}

#[test]
fn four_second_propagation_leaves_active_within_one_tick() {
    let cfg = GlowConfig {
        propagation_distance: 600.0,
        propagation_speed: 150.0,
        ..GlowConfig::default()
    };
    let mut pool = PropagationPool::new(&cfg).unwrap();
    assert!((pool.timings().total_propagation_time - 4.0).abs() < 1e-6);
    pool.try_start(Vec3::ZERO, 600.0);
    pool.advance(3.96);
    let p = pool.point(0).unwrap();
    assert_ne!(p.stage(), PropagationStage::Active);
    assert!(p.time_to_send() >= 0.99 * 4.0);
    assert!(p.time_to_send() <= 4.0);
}

#[test]
fn stages_progress_without_skipping_or_reversing() {
    let mut pool = pool_with(0.0);
    let mut seen = vec![pool.point(0).unwrap().stage()];
    pool.try_start(Vec3::ZERO, 100.0);
    seen.push(pool.point(0).unwrap().stage());
    for _ in 0..1000 {
        pool.advance(1.0 / 60.0);
        let stage = pool.point(0).unwrap().stage();
        if *seen.last().unwrap() != stage {
            seen.push(stage);
        }
        if stage == PropagationStage::Inactive {
            break;
        }
    }
    assert_eq!(
        seen,
        vec![
            PropagationStage::Inactive,
            PropagationStage::Active,
            PropagationStage::FadeOut,
            PropagationStage::Inactive,
        ]
    );
}

#[test]
fn delayed_fade_passes_through_waiting_stage() {
    let mut pool = pool_with(0.75);
    pool.try_start(Vec3::ZERO, 100.0);
    let mut seen = vec![PropagationStage::Active];
    for _ in 0..1000 {
        pool.advance(1.0 / 60.0);
        let stage = pool.point(0).unwrap().stage();
        if *seen.last().unwrap() != stage {
            seen.push(stage);
        }
        if stage == PropagationStage::Inactive {
            break;
        }
    }
    assert_eq!(
        seen,
        vec![
            PropagationStage::Active,
            PropagationStage::WaitingForFadeOut,
            PropagationStage::FadeOut,
            PropagationStage::Inactive,
        ]
    );
}

#[test]
fn completes_within_bound_and_resets_cleanly() {
    let mut pool = pool_with(0.0);
    let t = pool.timings().total_propagation_time;
    let f = GlowConfig::default().fade_out_duration;
    pool.try_start(Vec3::new(4.0, 5.0, 6.0), 250.0);

    let dt = 1.0 / 30.0;
    let mut elapsed = 0.0;
    while elapsed <= 1.01 * (t + f) {
        pool.advance(dt);
        elapsed += dt;
    }
    assert_clean(pool.point(0).unwrap());
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn fade_intensity_rises_to_one() {
    let mut pool = pool_with(0.0);
    pool.try_start(Vec3::ZERO, 100.0);
    let mut prev = 0.0;
    let mut max_seen = 0.0f32;
    for _ in 0..600 {
        pool.advance(1.0 / 120.0);
        let p = pool.point(0).unwrap();
        if p.stage() == PropagationStage::Inactive {
            break;
        }
        let v = p.fade_out_intensity();
        assert!((0.0..=1.0).contains(&v));
        assert!(v >= prev, "fade intensity decreased");
        prev = v;
        max_seen = max_seen.max(v);
    }
    assert!(max_seen > 0.95, "fade peaked at {max_seen}");
}

#[test]
fn time_to_send_is_frozen_after_growth() {
    let mut pool = pool_with(0.0);
    pool.try_start(Vec3::ZERO, 100.0);
    while pool.point(0).unwrap().stage() == PropagationStage::Active {
        pool.advance(0.05);
    }
    let frozen = pool.point(0).unwrap().time_to_send();
    pool.advance(0.1);
    assert_eq!(pool.point(0).unwrap().stage(), PropagationStage::FadeOut);
    assert_eq!(pool.point(0).unwrap().time_to_send(), frozen);
}

#[test]
fn non_positive_dt_is_a_no_op() {
    let mut pool = pool_with(0.0);
    pool.try_start(Vec3::ZERO, 100.0);
    pool.advance(0.5);
    let before = pool.point(0).unwrap().clone();
    pool.advance(0.0);
    pool.advance(-1.0);
    pool.advance(f32::NAN);
    assert_eq!(pool.point(0).unwrap(), &before);
}

#[test]
fn freed_slot_is_reused_first() {
    let mut pool = pool_with(0.0);
    pool.try_start(Vec3::ZERO, 100.0);
    for _ in 0..400 {
        pool.advance(1.0 / 60.0);
    }
    assert_eq!(pool.active_count(), 0);
    assert_eq!(pool.try_start(Vec3::X, 1.0), Some(0));
    assert_eq!(pool.try_start(Vec3::Y, 1.0), Some(1));
}

#[test]
fn bad_configuration_is_refused() {
    let cfg = GlowConfig {
        propagation_speed: -150.0,
        ..GlowConfig::default()
    };
    assert!(PropagationPool::new(&cfg).is_err());
}
