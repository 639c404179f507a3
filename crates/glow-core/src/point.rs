use glam::Vec3;

/// Lifecycle phase of a propagation slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropagationStage {
    /// Free slot, available to the next trigger.
    #[default]
    Inactive,
    /// Glow is growing outward from the hit point.
    Active,
    /// Growth finished; holding before the fade starts.
    WaitingForFadeOut,
    /// Glow is fading away.
    FadeOut,
}

impl PropagationStage {
    #[inline]
    pub fn is_live(self) -> bool {
        self != PropagationStage::Inactive
    }
}

/// One slot of the propagation pool.
///
/// Only the pool mutates these; everything else sees them through shared
/// references. Timing fields are zero whenever `stage` is `Inactive`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropagationPoint {
    pub(crate) stage: PropagationStage,
    pub(crate) hit_point: Vec3,
    pub(crate) elapsed_time: f32,
    pub(crate) time_to_send: f32,
    pub(crate) fade_out_timer: f32,
    pub(crate) fade_out_intensity: f32,
    pub(crate) max_range: f32,
}

impl PropagationPoint {
    pub fn stage(&self) -> PropagationStage {
        self.stage
    }
    /// World position the glow originates from. Stale while inactive.
    pub fn hit_point(&self) -> Vec3 {
        self.hit_point
    }
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }
    /// Eased propagation progress in seconds, \[0, total_propagation_time\].
    pub fn time_to_send(&self) -> f32 {
        self.time_to_send
    }
    pub fn fade_out_timer(&self) -> f32 {
        self.fade_out_timer
    }
    /// 0 when the fade starts, 1 when fully faded.
    pub fn fade_out_intensity(&self) -> f32 {
        self.fade_out_intensity
    }
    pub fn max_range(&self) -> f32 {
        self.max_range
    }
    #[inline]
    pub fn is_live(&self) -> bool {
        self.stage.is_live()
    }

    pub(crate) fn activate(&mut self, position: Vec3, max_range: f32) {
        self.stage = PropagationStage::Active;
        self.elapsed_time = 0.0;
        self.hit_point = position;
        self.max_range = max_range;
    }

    pub(crate) fn deactivate(&mut self) {
        self.elapsed_time = 0.0;
        self.fade_out_intensity = 0.0;
        self.time_to_send = 0.0;
        self.fade_out_timer = 0.0;
        self.stage = PropagationStage::Inactive;
    }
}
