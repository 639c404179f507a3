use glow_core::{MaterialSink, TextureRows, PROPAGATION_SPEED_PARAM};
use std::cell::RefCell;
use std::rc::Rc;

const TEXEL_BYTES: u32 = 16; // RGBA32F

pub fn create_data_texture(
    device: &wgpu::Device,
    label: &str,
    width: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height: 1,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba32Float,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

/// The two 1-row data textures the glow shader samples.
///
/// - `points_*`: hit locations, one column per pool slot
/// - `times_*`: eased time, fade intensity and range per slot
pub(crate) struct PropagationTextures {
    pub(crate) width: u32,
    pub(crate) points_tex: wgpu::Texture,
    pub(crate) points_view: wgpu::TextureView,
    pub(crate) times_tex: wgpu::Texture,
    pub(crate) times_view: wgpu::TextureView,
}

impl PropagationTextures {
    pub(crate) fn new(device: &wgpu::Device, width: u32) -> Self {
        let (points_tex, points_view) = create_data_texture(device, "points_array", width);
        let (times_tex, times_view) = create_data_texture(device, "times_array", width);
        Self {
            width,
            points_tex,
            points_view,
            times_tex,
            times_view,
        }
    }

    pub(crate) fn upload(&self, queue: &wgpu::Queue, rows: &TextureRows) {
        if rows.width() as u32 != self.width {
            log::error!(
                "row width {} does not match texture width {}",
                rows.width(),
                self.width
            );
            return;
        }
        write_row(queue, &self.points_tex, self.width, rows.points_bytes());
        write_row(queue, &self.times_tex, self.width, rows.times_bytes());
    }
}

fn write_row(queue: &wgpu::Queue, texture: &wgpu::Texture, width: u32, bytes: &[u8]) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        bytes,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * TEXEL_BYTES),
            rows_per_image: Some(1),
        },
        wgpu::Extent3d {
            width,
            height: 1,
            depth_or_array_layers: 1,
        },
    );
}

/// Values handed over by the glow manager and consumed by the renderer.
#[derive(Default)]
pub(crate) struct StagedMaterial {
    pub(crate) propagation_speed: f32,
    pub(crate) rows: Option<TextureRows>,
}

/// Material sink that stages the manager's output for the next GPU upload.
pub(crate) struct StagingMaterial {
    staged: Rc<RefCell<StagedMaterial>>,
}

impl StagingMaterial {
    pub(crate) fn new(staged: Rc<RefCell<StagedMaterial>>) -> Self {
        Self { staged }
    }
}

impl MaterialSink for StagingMaterial {
    fn set_scalar_parameter(&mut self, name: &str, value: f32) {
        if name == PROPAGATION_SPEED_PARAM {
            self.staged.borrow_mut().propagation_speed = value;
        } else {
            log::debug!("ignoring unknown material parameter {name}");
        }
    }

    fn set_texture_rows(&mut self, rows: &TextureRows) {
        let mut staged = self.staged.borrow_mut();
        match staged.rows.as_mut() {
            Some(existing) => existing.clone_from(rows),
            None => staged.rows = Some(rows.clone()),
        }
    }
}
