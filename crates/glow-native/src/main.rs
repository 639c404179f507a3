use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use glam::{Vec2, Vec3};
use glow_core::{CollisionEvent, CollisionOutcome, GlowConfig, GlowManager, TimerQueue};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod gpu;
mod input;
mod textures;

use gpu::GpuState;
use input::{KeyState, Player};
use textures::{StagedMaterial, StagingMaterial};

// Ground plane shown vertically across the window (world units)
const GROUND_EXTENT: f32 = 3000.0;
// Clicks drop a rock from this height; its distance from the origin sizes the glow
const DROP_HEIGHT: f32 = 600.0;
// Long stalls (window drags, breakpoints) are clamped to this frame time
const MAX_FRAME_DT_SEC: f32 = 0.1;

struct Host {
    manager: GlowManager,
    timers: TimerQueue,
    keys: KeyState,
    player: Player,
    cursor: Vec2,
    last_frame: Instant,
}

impl Host {
    fn click(&mut self, width: u32, height: u32) {
        let location = input::cursor_to_ground(self.cursor, width, height, GROUND_EXTENT);
        let rock = location + Vec3::Y * DROP_HEIGHT;
        let event = CollisionEvent::new(location, rock);
        match self.manager.on_collision(&event, &mut self.timers) {
            CollisionOutcome::Started(slot) => log::info!(
                "[click] glow {} at ({:.0}, {:.0})",
                slot,
                location.x,
                location.z
            ),
            CollisionOutcome::PoolFull => log::info!("[click] every glow slot is busy"),
            CollisionOutcome::CoolingDown => log::debug!("[click] ignored during cooldown"),
        }
    }

    fn frame(&mut self, width: u32, height: u32) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_frame = now;

        self.timers.advance(dt);
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let half = Vec2::new(GROUND_EXTENT * aspect, GROUND_EXTENT) * 0.5;
        self.player.step(&self.keys, dt, half);
        let sample = self.player.sample();
        self.manager.on_tick(dt, Some(&sample));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = GlowConfig::default();
    let texture_width = config.max_points as u32;
    let mut manager = GlowManager::new(config)?;

    let staged = Rc::new(RefCell::new(StagedMaterial::default()));
    manager.register_material(Box::new(StagingMaterial::new(Rc::clone(&staged))));

    let mut host = Host {
        manager,
        timers: TimerQueue::new(),
        keys: KeyState::default(),
        player: Player::default(),
        cursor: Vec2::ZERO,
        last_frame: Instant::now(),
    };

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Glow propagation (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(
        &window,
        Rc::clone(&staged),
        texture_width,
        GROUND_EXTENT,
    ))?;
    log::info!("click to drop rocks, WASD to walk, space to jump");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                host.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => host.click(state.width, state.height),
            WindowEvent::KeyboardInput { event: key, .. } => {
                if let PhysicalKey::Code(code) = key.physical_key {
                    let down = key.state == ElementState::Pressed;
                    match code {
                        KeyCode::Space if down => host.player.jump(),
                        KeyCode::Escape if down => elwt.exit(),
                        _ => {
                            host.keys.set(code, down);
                        }
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            host.frame(state.width, state.height);
            let player = host.player.sample();
            match state.render(player.location, !player.grounded) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
