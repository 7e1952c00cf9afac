use crate::color::Color;
use crate::error::EngineError;

/// Named bundle of continuous parameter targets. Speed, complexity
/// and form are eased toward; turbulence is applied synchronously.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodPreset {
    pub speed: f32,
    pub complexity: f32,
    pub form: f32,
    pub turbulence: f32,
}

/// Five backdrop colors plus the particle accent. Colors 0..=3 feed
/// the shader's four-stop ramp, color 4 is the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PalettePreset {
    pub colors: [Color; 5],
    pub accent: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Calm,
    Dreamy,
    Chaotic,
    Cosmic,
    Aggressive,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Calm,
        Mood::Dreamy,
        Mood::Chaotic,
        Mood::Cosmic,
        Mood::Aggressive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Dreamy => "dreamy",
            Mood::Chaotic => "chaotic",
            Mood::Cosmic => "cosmic",
            Mood::Aggressive => "aggressive",
        }
    }

    pub fn parse(name: &str) -> Result<Self, EngineError> {
        match name {
            "calm" => Ok(Mood::Calm),
            "dreamy" => Ok(Mood::Dreamy),
            "chaotic" => Ok(Mood::Chaotic),
            "cosmic" => Ok(Mood::Cosmic),
            "aggressive" => Ok(Mood::Aggressive),
            other => Err(EngineError::UnknownMood(other.to_string())),
        }
    }

    pub fn preset(self) -> MoodPreset {
        match self {
            Mood::Calm => MoodPreset {
                speed: 0.2,
                complexity: 0.3,
                form: 0.3,
                turbulence: 0.2,
            },
            Mood::Dreamy => MoodPreset {
                speed: 0.15,
                complexity: 0.5,
                form: 0.2,
                turbulence: 0.4,
            },
            Mood::Chaotic => MoodPreset {
                speed: 0.8,
                complexity: 0.9,
                form: 0.7,
                turbulence: 0.9,
            },
            Mood::Cosmic => MoodPreset {
                speed: 0.4,
                complexity: 0.7,
                form: 0.5,
                turbulence: 0.6,
            },
            Mood::Aggressive => MoodPreset {
                speed: 1.0,
                complexity: 0.8,
                form: 0.9,
                turbulence: 0.85,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Aurora,
    Ember,
    Forest,
    Ocean,
    Monochrome,
    Neon,
}

impl Palette {
    pub const ALL: [Palette; 6] = [
        Palette::Aurora,
        Palette::Ember,
        Palette::Forest,
        Palette::Ocean,
        Palette::Monochrome,
        Palette::Neon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Palette::Aurora => "aurora",
            Palette::Ember => "ember",
            Palette::Forest => "forest",
            Palette::Ocean => "ocean",
            Palette::Monochrome => "monochrome",
            Palette::Neon => "neon",
        }
    }

    pub fn parse(name: &str) -> Result<Self, EngineError> {
        match name {
            "aurora" => Ok(Palette::Aurora),
            "ember" => Ok(Palette::Ember),
            "forest" => Ok(Palette::Forest),
            "ocean" => Ok(Palette::Ocean),
            "monochrome" => Ok(Palette::Monochrome),
            "neon" => Ok(Palette::Neon),
            other => Err(EngineError::UnknownPalette(other.to_string())),
        }
    }

    pub fn preset(self) -> PalettePreset {
        match self {
            Palette::Aurora => PalettePreset {
                colors: [
                    Color::from_hex(0x00a8ff),
                    Color::from_hex(0x7c3aed),
                    Color::from_hex(0xec4899),
                    Color::from_hex(0x06b6d4),
                    Color::from_hex(0x0a0a0a),
                ],
                accent: Color::from_hex(0x00a8ff),
            },
            Palette::Ember => PalettePreset {
                colors: [
                    Color::from_hex(0xff6b35),
                    Color::from_hex(0xf7931e),
                    Color::from_hex(0xffcc02),
                    Color::from_hex(0xff4757),
                    Color::from_hex(0x1a0a05),
                ],
                accent: Color::from_hex(0xff6b35),
            },
            Palette::Forest => PalettePreset {
                colors: [
                    Color::from_hex(0x2d5a27),
                    Color::from_hex(0x5a8f3e),
                    Color::from_hex(0x8bc34a),
                    Color::from_hex(0xc8e6c9),
                    Color::from_hex(0x0a1208),
                ],
                accent: Color::from_hex(0x5a8f3e),
            },
            Palette::Ocean => PalettePreset {
                colors: [
                    Color::from_hex(0x0077b6),
                    Color::from_hex(0x00b4d8),
                    Color::from_hex(0x90e0ef),
                    Color::from_hex(0x023e8a),
                    Color::from_hex(0x001219),
                ],
                accent: Color::from_hex(0x00b4d8),
            },
            Palette::Monochrome => PalettePreset {
                colors: [
                    Color::from_hex(0xffffff),
                    Color::from_hex(0x888888),
                    Color::from_hex(0x444444),
                    Color::from_hex(0x222222),
                    Color::from_hex(0x000000),
                ],
                accent: Color::from_hex(0xffffff),
            },
            Palette::Neon => PalettePreset {
                colors: [
                    Color::from_hex(0xff00ff),
                    Color::from_hex(0x00ffff),
                    Color::from_hex(0xffff00),
                    Color::from_hex(0xff0080),
                    Color::from_hex(0x0a0012),
                ],
                accent: Color::from_hex(0xff00ff),
            },
        }
    }
}
