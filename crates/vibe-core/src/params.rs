use crate::error::EngineError;
use crate::presets::{Mood, Palette};

/// The four continuous controls exposed by the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Speed,
    Complexity,
    Form,
    Particles,
}

impl Param {
    pub const ALL: [Param; 4] = [
        Param::Speed,
        Param::Complexity,
        Param::Form,
        Param::Particles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::Speed => "speed",
            Param::Complexity => "complexity",
            Param::Form => "form",
            Param::Particles => "particles",
        }
    }

    pub fn parse(name: &str) -> Result<Self, EngineError> {
        match name {
            "speed" => Ok(Param::Speed),
            "complexity" => Ok(Param::Complexity),
            "form" => Ok(Param::Form),
            "particles" => Ok(Param::Particles),
            other => Err(EngineError::UnknownParam(other.to_string())),
        }
    }
}

/// Single source of truth for the continuous controls plus the
/// discrete mood/palette labels. Continuous values are clamped to
/// \[0, 1\] on every write.
#[derive(Clone, Debug)]
pub struct ParamSet {
    speed: f32,
    complexity: f32,
    form: f32,
    particles: f32,
    pub mood: Mood,
    pub palette: Palette,
}

impl Default for ParamSet {
    fn default() -> Self {
        Self {
            speed: 0.3,
            complexity: 0.5,
            form: 0.5,
            particles: 0.4,
            mood: Mood::Calm,
            palette: Palette::Aurora,
        }
    }
}

impl ParamSet {
    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::Speed => self.speed,
            Param::Complexity => self.complexity,
            Param::Form => self.form,
            Param::Particles => self.particles,
        }
    }

    pub fn set(&mut self, param: Param, value: f32) {
        let v = value.clamp(0.0, 1.0);
        match param {
            Param::Speed => self.speed = v,
            Param::Complexity => self.complexity = v,
            Param::Form => self.form = v,
            Param::Particles => self.particles = v,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
    pub fn complexity(&self) -> f32 {
        self.complexity
    }
    pub fn form(&self) -> f32 {
        self.form
    }
    pub fn particles(&self) -> f32 {
        self.particles
    }
}
