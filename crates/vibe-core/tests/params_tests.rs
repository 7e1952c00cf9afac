use vibe_core::{Param, ParamSet};

#[test]
fn defaults_match_initial_scene() {
    let params = ParamSet::default();
    assert_eq!(params.get(Param::Speed), 0.3);
    assert_eq!(params.get(Param::Complexity), 0.5);
    assert_eq!(params.get(Param::Form), 0.5);
    assert_eq!(params.get(Param::Particles), 0.4);
    assert_eq!(params.mood.name(), "calm");
    assert_eq!(params.palette.name(), "aurora");
}

#[test]
fn set_clamps_to_unit_range() {
    let mut params = ParamSet::default();
    params.set(Param::Speed, 1.7);
    assert_eq!(params.get(Param::Speed), 1.0);
    params.set(Param::Speed, -0.4);
    assert_eq!(params.get(Param::Speed), 0.0);
    params.set(Param::Form, 0.62);
    assert_eq!(params.get(Param::Form), 0.62);
}

#[test]
fn set_never_panics_on_non_finite_adjacent_values() {
    let mut params = ParamSet::default();
    params.set(Param::Complexity, f32::MAX);
    assert_eq!(params.get(Param::Complexity), 1.0);
    params.set(Param::Complexity, f32::MIN);
    assert_eq!(params.get(Param::Complexity), 0.0);
}

#[test]
fn param_names_round_trip() {
    for param in Param::ALL {
        assert_eq!(Param::parse(param.name()).unwrap(), param);
    }
}

#[test]
fn unknown_param_is_an_error() {
    let err = Param::parse("warp").unwrap_err();
    assert!(err.to_string().contains("warp"));
}
