use glam::{Vec2, Vec3};
use glow_core::MovementSample;
use winit::keyboard::KeyCode;

// Player tuning (world units)
const PLAYER_ACCEL: f32 = 1800.0;
const PLAYER_DAMPING_PER_SEC: f32 = 4.0;
const JUMP_AIRTIME_SEC: f32 = 0.6;

#[derive(Default, Clone, Copy)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Record a key transition; returns false for keys we don't track.
    pub fn set(&mut self, key: KeyCode, down: bool) -> bool {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => self.forward = down,
            KeyCode::KeyS | KeyCode::ArrowDown => self.back = down,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left = down,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right = down,
            _ => return false,
        }
        true
    }

    /// Ground-plane direction (x, z); zero when nothing or opposing keys are held.
    pub fn direction(&self) -> Vec2 {
        let x = (self.right as i32 - self.left as i32) as f32;
        let z = (self.back as i32 - self.forward as i32) as f32;
        Vec2::new(x, z).normalize_or_zero()
    }
}

/// Very small kinematic stand-in for a walking character.
#[derive(Default, Clone, Copy)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    airtime: f32,
}

impl Player {
    pub fn jump(&mut self) {
        if self.airtime <= 0.0 {
            self.airtime = JUMP_AIRTIME_SEC;
        }
    }

    pub fn grounded(&self) -> bool {
        self.airtime <= 0.0
    }

    pub fn step(&mut self, keys: &KeyState, dt: f32, half_extent: Vec2) {
        let dir = keys.direction();
        self.acceleration = Vec3::new(dir.x, 0.0, dir.y) * PLAYER_ACCEL;
        self.velocity += self.acceleration * dt;
        self.velocity *= (-PLAYER_DAMPING_PER_SEC * dt).exp();
        self.position += self.velocity * dt;
        self.position.x = self.position.x.clamp(-half_extent.x, half_extent.x);
        self.position.z = self.position.z.clamp(-half_extent.y, half_extent.y);
        self.airtime = (self.airtime - dt).max(0.0);
    }

    pub fn sample(&self) -> MovementSample {
        MovementSample {
            location: self.position,
            acceleration: self.acceleration,
            grounded: self.grounded(),
        }
    }
}

/// Map a cursor position in pixels to the top-down ground plane.
///
/// The view spans `extent` world units vertically, centered on the origin,
/// and widens horizontally with the window aspect.
#[inline]
pub fn cursor_to_ground(cursor_px: Vec2, width: u32, height: u32, extent: f32) -> Vec3 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    let u = (cursor_px.x / w).clamp(0.0, 1.0);
    let v = (cursor_px.y / h).clamp(0.0, 1.0);
    let aspect = w / h;
    Vec3::new((u - 0.5) * extent * aspect, 0.0, (v - 0.5) * extent)
}
