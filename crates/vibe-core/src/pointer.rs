use glam::Vec2;

/// Raw and lag-smoothed pointer position in scene space.
///
/// Scene space is `[0, 1]^2` with the y axis pointing up, so raw
/// screen coordinates are y-flipped on the way in. `smoothed` chases
/// `raw` by one exponential step per frame and never overshoots for
/// factors in `(0, 1)`.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        // Center of the scene until the first real input arrives
        let center = Vec2::new(0.5, 0.5);
        Self {
            raw: center,
            smoothed: center,
        }
    }
}

impl PointerState {
    pub fn set_raw(&mut self, uv: Vec2) {
        self.raw = uv;
    }

    /// One exponential smoothing step toward `raw`.
    pub fn step(&mut self, factor: f32) {
        self.smoothed += (self.raw - self.smoothed) * factor;
    }
}

/// Normalize screen-space coordinates against a bounding rectangle,
/// inverting y so scene space points up.
#[inline]
pub fn normalize_to_scene(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    let w = rect_size.x.max(1.0);
    let h = rect_size.y.max(1.0);
    Vec2::new(
        (client.x - rect_origin.x) / w,
        1.0 - (client.y - rect_origin.y) / h,
    )
}
