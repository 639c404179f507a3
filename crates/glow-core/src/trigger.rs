use glam::Vec3;

/// A hit reported by the host's collision system.
///
/// - `location`: world-space contact point, where the glow starts
/// - `other_origin`: world position of the other body in the hit; its
///   distance from the world origin is the reference distance that, scaled by
///   `intensity_ratio`, becomes the glow's range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionEvent {
    pub location: Vec3,
    pub other_origin: Vec3,
}

impl CollisionEvent {
    pub fn new(location: Vec3, other_origin: Vec3) -> Self {
        Self {
            location,
            other_origin,
        }
    }

    /// Distance used to size the glow before `intensity_ratio` is applied.
    #[inline]
    pub fn reference_distance(&self) -> f32 {
        self.other_origin.length()
    }
}

/// Range of a glow started by a hit with the given reference distance.
/// Negative or non-finite inputs yield a zero range.
#[inline]
pub fn collision_range(intensity_ratio: f32, reference_distance: f32) -> f32 {
    let range = intensity_ratio * reference_distance;
    if range.is_finite() {
        range.max(0.0)
    } else {
        0.0
    }
}
