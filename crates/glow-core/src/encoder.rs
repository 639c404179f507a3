//! Pool-to-texture encoding.
//!
//! Two one-row RGBA32F images, one column per pool slot:
//!
//! - points row: `(x, y, z, 1)` hit location of a live slot
//! - times row: `(time_to_send, fade_out_intensity, max_range, 0)`
//!
//! Inactive slots encode as `SENTINEL_PIXEL` in both rows. The points row's
//! `w` and every times channel are non-negative for live slots, so the shader
//! skips a column by testing the sign of `w`.

use crate::constants::{POINT_VALID_W, SENTINEL_PIXEL, TIME_UNUSED_W};
use crate::point::PropagationPoint;
use crate::pool::PropagationPool;

/// One RGBA32F pixel, laid out as the GPU expects.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Texel {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Texel {
    pub const SENTINEL: Texel = Texel::from_array(SENTINEL_PIXEL);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

/// Points row pixel for one slot.
pub fn encode_point(p: &PropagationPoint) -> Texel {
    if !p.is_live() {
        return Texel::SENTINEL;
    }
    let hit = p.hit_point();
    Texel::new(hit.x, hit.y, hit.z, POINT_VALID_W)
}

/// Times row pixel for one slot.
pub fn encode_time(p: &PropagationPoint) -> Texel {
    if !p.is_live() {
        return Texel::SENTINEL;
    }
    Texel::new(
        p.time_to_send(),
        p.fade_out_intensity(),
        p.max_range(),
        TIME_UNUSED_W,
    )
}

/// The two encoded rows for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureRows {
    points: Box<[Texel]>,
    times: Box<[Texel]>,
}

impl TextureRows {
    fn new(width: usize) -> Self {
        Self {
            points: vec![Texel::SENTINEL; width].into_boxed_slice(),
            times: vec![Texel::SENTINEL; width].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.points.len()
    }
    pub fn points(&self) -> &[Texel] {
        &self.points
    }
    pub fn times(&self) -> &[Texel] {
        &self.times
    }
    /// Raw bytes of the points row, ready for a texture upload.
    pub fn points_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
    pub fn times_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.times)
    }
}

/// Re-encodes a pool into fixed-width rows every frame.
///
/// The width is taken from the pool at construction and never changes.
/// Rows are rewritten in full on each call whether or not anything moved,
/// because consumers re-sample the whole row.
pub struct TextureEncoder {
    rows: TextureRows,
}

impl TextureEncoder {
    pub fn new(width: usize) -> Self {
        Self {
            rows: TextureRows::new(width),
        }
    }

    pub fn for_pool(pool: &PropagationPool) -> Self {
        Self::new(pool.capacity())
    }

    pub fn width(&self) -> usize {
        self.rows.width()
    }

    pub fn rows(&self) -> &TextureRows {
        &self.rows
    }

    /// Encode `pool` into both rows. Columns beyond the pool's capacity, if
    /// the widths ever disagree, are written as sentinels.
    pub fn encode(&mut self, pool: &PropagationPool) -> &TextureRows {
        debug_assert_eq!(pool.capacity(), self.width(), "encoder width mismatch");
        write_row(&mut self.rows.points, pool.points(), encode_point);
        write_row(&mut self.rows.times, pool.points(), encode_time);
        &self.rows
    }
}

fn write_row(
    row: &mut [Texel],
    points: &[PropagationPoint],
    encode: impl Fn(&PropagationPoint) -> Texel,
) {
    for (i, texel) in row.iter_mut().enumerate() {
        *texel = points.get(i).map_or(Texel::SENTINEL, &encode);
    }
}
