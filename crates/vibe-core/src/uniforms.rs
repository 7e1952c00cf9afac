use crate::color::Color;
use crate::params::ParamSet;
use glam::Vec2;

/// Named uniform values pushed to the renderer once per frame.
///
/// The set is overwritten field-by-field, never reallocated: the
/// store and pointer tracker write into it and the renderer packs it
/// into a GPU buffer.
#[derive(Clone, Debug, Default)]
pub struct UniformSet {
    pub time: f32,
    pub resolution: Vec2,
    pub pointer: Vec2,
    pub speed: f32,
    pub complexity: f32,
    pub form: f32,
    pub turbulence: f32,
    pub particle_intensity: f32,
    pub colors: [Color; 5],
    pub accent: Color,
}

impl UniformSet {
    /// Re-derive everything that depends on the parameter store.
    /// Called after every parameter mutation and transition tick.
    pub fn sync_params(&mut self, params: &ParamSet, turbulence: f32) {
        self.speed = params.speed();
        self.complexity = params.complexity();
        self.form = params.form();
        self.particle_intensity = params.particles();
        self.turbulence = turbulence;
    }

    pub fn sync_colors(&mut self, colors: &[Color; 5], accent: Color) {
        self.colors = *colors;
        self.accent = accent;
    }

    /// Per-tick values: simulation time and the smoothed pointer.
    pub fn sync_frame(&mut self, time: f32, pointer: Vec2) {
        self.time = time;
        self.pointer = pointer;
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = Vec2::new(width, height);
    }

    /// Pack into the `std140`-compatible layout the shaders expect.
    pub fn packed(&self) -> GpuUniforms {
        GpuUniforms {
            resolution: self.resolution.to_array(),
            pointer: self.pointer.to_array(),
            time: self.time,
            speed: self.speed,
            complexity: self.complexity,
            form: self.form,
            turbulence: self.turbulence,
            particle_intensity: self.particle_intensity,
            _pad: [0.0; 2],
            color1: self.colors[0].to_vec4(),
            color2: self.colors[1].to_vec4(),
            color3: self.colors[2].to_vec4(),
            color4: self.colors[3].to_vec4(),
            color_bg: self.colors[4].to_vec4(),
            accent: self.accent.to_vec4(),
        }
    }
}

/// Byte-for-byte mirror of the `Uniforms` struct in the WGSL shaders.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuUniforms {
    pub resolution: [f32; 2],
    pub pointer: [f32; 2],
    pub time: f32,
    pub speed: f32,
    pub complexity: f32,
    pub form: f32,
    pub turbulence: f32,
    pub particle_intensity: f32,
    pub _pad: [f32; 2],
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    pub color4: [f32; 4],
    pub color_bg: [f32; 4],
    pub accent: [f32; 4],
}
