use std::time::Duration;

// Engine tuning constants shared by the web and native frontends.

// Nominal per-tick time advance. The original effect was tuned for a
// 60 Hz cadence and advances a fixed step rather than measured delta
// time; keep the constant for visual parity.
pub const TIME_STEP: f32 = 0.016;

// Preset transition durations
pub const PARAM_TRANSITION: Duration = Duration::from_millis(800);
pub const COLOR_TRANSITION: Duration = Duration::from_millis(600);

// Pointer exponential smoothing factors (higher = snappier)
pub const POINTER_SMOOTHING_INTERACTIVE: f32 = 0.08;
pub const POINTER_SMOOTHING_BACKDROP: f32 = 0.05;

// Frame-rate counter rolls over this wall-clock window
pub const FPS_WINDOW: Duration = Duration::from_millis(500);

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_WRAP: f32 = 2.0; // field extent in scene units
pub const PARTICLE_MIN_INTENSITY: f32 = 0.1; // below this the field is frozen
