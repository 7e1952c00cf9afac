//! Platform-free core of the vibe generative art engine.
//!
//! Everything here is pure state and arithmetic: the parameter store,
//! the mood/palette preset tables, eased transitions, pointer
//! smoothing, the per-frame uniform set and the particle field. Time
//! is always passed in explicitly, so the same code drives the wasm
//! frontend, the native viewer and deterministic host-side tests.

pub mod color;
pub mod constants;
pub mod engine;
pub mod error;
pub mod params;
pub mod particles;
pub mod pointer;
pub mod presets;
pub mod transition;
pub mod uniforms;

pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");
pub static LIQUID_WGSL: &str = include_str!("../shaders/liquid.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use color::Color;
pub use constants::*;
pub use engine::{EngineConfig, VibeEngine};
pub use error::EngineError;
pub use params::{Param, ParamSet};
pub use particles::{ParticleField, ParticleInstance};
pub use pointer::PointerState;
pub use presets::{Mood, MoodPreset, Palette, PalettePreset};
pub use transition::{ease_out_cubic, ColorTransition, Transition};
pub use uniforms::{GpuUniforms, UniformSet};
