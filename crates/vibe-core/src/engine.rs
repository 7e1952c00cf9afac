use crate::color::Color;
use crate::constants::{
    COLOR_TRANSITION, FPS_WINDOW, PARAM_TRANSITION, PARTICLE_COUNT,
    POINTER_SMOOTHING_BACKDROP, POINTER_SMOOTHING_INTERACTIVE, TIME_STEP,
};
use crate::params::{Param, ParamSet};
use crate::particles::ParticleField;
use crate::pointer::PointerState;
use crate::presets::{Mood, Palette};
use crate::transition::{ColorTransition, Transition};
use crate::uniforms::UniformSet;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Per-instance tuning. Two stock configurations exist: the
/// interactive canvas with full parameter control, and the hero
/// backdrop which only follows the pointer.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub pointer_smoothing: f32,
    pub param_transition: Duration,
    pub color_transition: Duration,
    pub time_step: f32,
    pub particle_count: usize,
    pub seed: u64,
}

impl EngineConfig {
    pub fn interactive() -> Self {
        Self {
            pointer_smoothing: POINTER_SMOOTHING_INTERACTIVE,
            param_transition: PARAM_TRANSITION,
            color_transition: COLOR_TRANSITION,
            time_step: TIME_STEP,
            particle_count: PARTICLE_COUNT,
            seed: 42,
        }
    }

    pub fn backdrop() -> Self {
        Self {
            pointer_smoothing: POINTER_SMOOTHING_BACKDROP,
            particle_count: 0,
            ..Self::interactive()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// At most one in-flight transition per animated property. Starting a
/// new one overwrites the slot, which is the explicit form of the
/// original's last-writer-wins behavior.
#[derive(Default)]
struct ActiveTransitions {
    speed: Option<Transition>,
    complexity: Option<Transition>,
    form: Option<Transition>,
    colors: [Option<ColorTransition>; 5],
}

/// Rolling frame-rate counter: counts frames and reports
/// `frames / elapsed_seconds` every time the wall-clock window rolls.
struct FpsCounter {
    window_start: Duration,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            window_start: Duration::ZERO,
            frames: 0,
            fps: 0.0,
        }
    }

    fn frame(&mut self, now: Duration) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.checked_sub(self.window_start).unwrap_or_default();
        if elapsed >= FPS_WINDOW {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.window_start = now;
            Some(self.fps)
        } else {
            None
        }
    }
}

/// The parameter-to-uniform pipeline: parameter store, preset
/// application, eased transitions, pointer smoothing, particle drift
/// and the per-frame uniform sync, all driven by an explicit clock.
///
/// The engine never schedules itself; the host loop (rAF on web,
/// winit on native, a plain loop in tests) calls [`tick`] with the
/// elapsed time since construction and then hands
/// [`uniforms`](Self::uniforms) to the renderer.
///
/// [`tick`]: Self::tick
pub struct VibeEngine {
    config: EngineConfig,
    params: ParamSet,
    turbulence: f32,
    colors: [Color; 5],
    accent: Color,
    pointer: PointerState,
    uniforms: UniformSet,
    particles: ParticleField,
    active: ActiveTransitions,
    fps: FpsCounter,
    time: f32,
    rng: StdRng,
}

impl VibeEngine {
    pub fn new(config: EngineConfig) -> Self {
        let params = ParamSet::default();
        let palette = params.palette.preset();
        let turbulence = params.mood.preset().turbulence;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = ParticleField::new(config.particle_count, &mut rng);
        let mut uniforms = UniformSet::default();
        uniforms.sync_params(&params, turbulence);
        uniforms.sync_colors(&palette.colors, palette.accent);
        Self {
            config,
            params,
            turbulence,
            colors: palette.colors,
            accent: palette.accent,
            pointer: PointerState::default(),
            uniforms,
            particles,
            active: ActiveTransitions::default(),
            fps: FpsCounter::new(),
            time: 0.0,
            rng,
        }
    }

    // ---------------- Control surface ----------------

    /// Direct set from a slider. Supersedes any in-flight transition
    /// on the same parameter.
    pub fn set_param(&mut self, param: Param, value: f32) {
        self.params.set(param, value);
        match param {
            Param::Speed => self.active.speed = None,
            Param::Complexity => self.active.complexity = None,
            Param::Form => self.active.form = None,
            Param::Particles => {}
        }
        self.uniforms.sync_params(&self.params, self.turbulence);
    }

    /// Control-surface variant: sliders report 0..100.
    pub fn set_param_percent(&mut self, param: Param, percent: f32) {
        self.set_param(param, percent / 100.0);
    }

    /// Ease speed/complexity/form toward the mood's targets;
    /// turbulence and the mood label change synchronously.
    pub fn apply_mood(&mut self, mood: Mood, now: Duration) {
        let preset = mood.preset();
        let dur = self.config.param_transition;
        self.active.speed = Some(Transition::new(
            self.params.get(Param::Speed),
            preset.speed,
            now,
            dur,
        ));
        self.active.complexity = Some(Transition::new(
            self.params.get(Param::Complexity),
            preset.complexity,
            now,
            dur,
        ));
        self.active.form = Some(Transition::new(
            self.params.get(Param::Form),
            preset.form,
            now,
            dur,
        ));
        self.turbulence = preset.turbulence;
        self.params.mood = mood;
        self.uniforms.sync_params(&self.params, self.turbulence);
        log::debug!("mood -> {}", mood.name());
    }

    /// Ease all five backdrop colors toward the palette; the particle
    /// accent switches synchronously.
    pub fn apply_palette(&mut self, palette: Palette, now: Duration) {
        let preset = palette.preset();
        let dur = self.config.color_transition;
        for (slot, (current, target)) in self
            .active
            .colors
            .iter_mut()
            .zip(self.colors.iter().zip(preset.colors.iter()))
        {
            *slot = Some(ColorTransition::new(*current, *target, now, dur));
        }
        self.accent = preset.accent;
        self.params.palette = palette;
        self.uniforms.sync_colors(&self.colors, self.accent);
        log::debug!("palette -> {}", palette.name());
    }

    /// Uniform-random mood, palette and particle intensity, applied
    /// through the same preset path as explicit selections.
    pub fn randomize(&mut self, now: Duration) -> (Mood, Palette, f32) {
        let mood = Mood::ALL[self.rng.gen_range(0..Mood::ALL.len())];
        let palette = Palette::ALL[self.rng.gen_range(0..Palette::ALL.len())];
        let particles = self.rng.gen::<f32>();
        self.apply_mood(mood, now);
        self.apply_palette(palette, now);
        self.set_param(Param::Particles, particles);
        (mood, palette, particles)
    }

    /// Raw pointer input, already normalized to scene space.
    pub fn set_pointer_raw(&mut self, uv: Vec2) {
        self.pointer.set_raw(uv);
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.uniforms.set_resolution(width, height);
    }

    // ---------------- Frame loop ----------------

    /// One frame tick. Order matters: time advance, pointer
    /// smoothing, transition writes, particle drift, uniform sync,
    /// then the frame-rate counter; later steps read state written by
    /// earlier ones. `now` is wall-clock time since engine creation.
    ///
    /// Returns the new FPS reading when the 500 ms window rolls.
    pub fn tick(&mut self, now: Duration) -> Option<f32> {
        self.time += self.config.time_step;
        self.pointer.step(self.config.pointer_smoothing);

        if let Some(t) = self.active.speed {
            let (v, done) = t.sample(now);
            self.params.set(Param::Speed, v);
            if done {
                self.active.speed = None;
            }
        }
        if let Some(t) = self.active.complexity {
            let (v, done) = t.sample(now);
            self.params.set(Param::Complexity, v);
            if done {
                self.active.complexity = None;
            }
        }
        if let Some(t) = self.active.form {
            let (v, done) = t.sample(now);
            self.params.set(Param::Form, v);
            if done {
                self.active.form = None;
            }
        }
        for (i, slot) in self.active.colors.iter_mut().enumerate() {
            if let Some(t) = slot {
                let (c, done) = t.sample(now);
                self.colors[i] = c;
                if done {
                    *slot = None;
                }
            }
        }

        self.particles
            .step(self.params.speed(), self.params.particles());

        self.uniforms.sync_params(&self.params, self.turbulence);
        self.uniforms.sync_colors(&self.colors, self.accent);
        self.uniforms.sync_frame(self.time, self.pointer.smoothed);

        self.fps.frame(now)
    }

    // ---------------- Accessors ----------------

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn turbulence(&self) -> f32 {
        self.turbulence
    }

    pub fn colors(&self) -> &[Color; 5] {
        &self.colors
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps
    }

    /// The shareable settings block shown in the control panel.
    pub fn settings_snippet(&self) -> String {
        format!(
            "// vibe generative art\n// {} · {}\nspeed: {:.2}\ncomplexity: {:.2}\nform: {:.2}\nparticles: {:.2}",
            self.params.mood.name(),
            self.params.palette.name(),
            self.params.speed(),
            self.params.complexity(),
            self.params.form(),
            self.params.particles(),
        )
    }
}
