use std::time::Duration;
use vibe_core::{Color, EngineConfig, Mood, Palette, Param, VibeEngine};

const EPS: f32 = 1e-5;

#[test]
fn every_mood_has_unit_range_targets() {
    for mood in Mood::ALL {
        let p = mood.preset();
        for v in [p.speed, p.complexity, p.form, p.turbulence] {
            assert!((0.0..=1.0).contains(&v), "{} out of range", mood.name());
        }
    }
}

#[test]
fn every_palette_resolves_to_six_colors() {
    for palette in Palette::ALL {
        let p = palette.preset();
        for c in p.colors.iter().chain(std::iter::once(&p.accent)) {
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&ch), "{} out of range", palette.name());
            }
        }
    }
}

#[test]
fn mood_and_palette_names_round_trip() {
    for mood in Mood::ALL {
        assert_eq!(Mood::parse(mood.name()).unwrap(), mood);
    }
    for palette in Palette::ALL {
        assert_eq!(Palette::parse(palette.name()).unwrap(), palette);
    }
}

#[test]
fn unknown_names_are_errors() {
    assert!(Mood::parse("serene").is_err());
    assert!(Palette::parse("sunset").is_err());
}

#[test]
fn aurora_matches_published_hex_values() {
    let p = Palette::Aurora.preset();
    assert_eq!(p.colors[0], Color::from_hex(0x00a8ff));
    assert_eq!(p.colors[1], Color::from_hex(0x7c3aed));
    assert_eq!(p.colors[4], Color::from_hex(0x0a0a0a));
    assert_eq!(p.accent, Color::from_hex(0x00a8ff));
}

#[test]
fn mood_eases_params_but_switches_turbulence_at_once() {
    let mut engine = VibeEngine::new(EngineConfig::interactive());
    let start_speed = engine.params().get(Param::Speed);

    engine.apply_mood(Mood::Chaotic, Duration::ZERO);

    // Turbulence and label jump immediately
    assert!((engine.turbulence() - 0.9).abs() < EPS);
    assert_eq!(engine.params().mood, Mood::Chaotic);
    // Speed has not moved yet
    assert_eq!(engine.params().get(Param::Speed), start_speed);

    // After the full transition window the eased targets have landed
    engine.tick(Duration::from_millis(800));
    assert!((engine.params().get(Param::Speed) - 0.8).abs() < EPS);
    assert!((engine.params().get(Param::Complexity) - 0.9).abs() < EPS);
    assert!((engine.params().get(Param::Form) - 0.7).abs() < EPS);
}

#[test]
fn mood_leaves_particle_density_alone() {
    let mut engine = VibeEngine::new(EngineConfig::interactive());
    engine.set_param(Param::Particles, 0.77);
    engine.apply_mood(Mood::Aggressive, Duration::ZERO);
    engine.tick(Duration::from_millis(1000));
    assert!((engine.params().get(Param::Particles) - 0.77).abs() < EPS);
}

#[test]
fn palette_eases_colors_but_switches_accent_at_once() {
    let mut engine = VibeEngine::new(EngineConfig::interactive());
    let start = engine.colors()[0];

    engine.apply_palette(Palette::Ember, Duration::ZERO);

    let ember = Palette::Ember.preset();
    assert_eq!(engine.accent(), ember.accent);
    assert_eq!(engine.params().palette, Palette::Ember);
    assert_eq!(engine.colors()[0], start);

    engine.tick(Duration::from_millis(600));
    for (got, want) in engine.colors().iter().zip(ember.colors.iter()) {
        assert!((got.r - want.r).abs() < EPS);
        assert!((got.g - want.g).abs() < EPS);
        assert!((got.b - want.b).abs() < EPS);
    }
}

#[test]
fn reapplying_a_palette_mid_flight_restarts_from_current_colors() {
    let mut engine = VibeEngine::new(EngineConfig::interactive());
    engine.apply_palette(Palette::Neon, Duration::ZERO);
    engine.tick(Duration::from_millis(300));
    let midway = engine.colors()[0];

    // Supersede with a different palette halfway through
    engine.apply_palette(Palette::Ocean, Duration::from_millis(300));
    assert_eq!(engine.colors()[0], midway);

    engine.tick(Duration::from_millis(900));
    let ocean = Palette::Ocean.preset();
    assert!((engine.colors()[0].r - ocean.colors[0].r).abs() < EPS);
}
