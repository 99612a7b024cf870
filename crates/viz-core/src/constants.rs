// Shared visual tuning constants for the ring field and the cinematic camera.
// Rings live in the XY plane with +Z up; the camera orbits around the origin.

// Ring nesting
pub const BASE_RADIUS: f32 = 1.2; // innermost ring radius
pub const RADIUS_STEP: f32 = 0.45; // per-rank spacing so rings nest without overlap

// Per-layer particle budgets, identical across all rings
pub const DENSE_PARTICLES: usize = 160;
pub const SPARSE_PARTICLES: usize = 40;

// Dense band gains (oscillation harmonics 5 spatial / 3 temporal)
pub const K_THICK: f32 = 0.35;
pub const K_SHAKE: f32 = 0.08;
pub const K_OSC: f32 = 0.25;

// Sparse "spark" layer gains (harmonics 7 / 4)
pub const K_THICK_SPARSE: f32 = 0.55;
pub const K_SHAKE_SPARSE: f32 = 0.12;
pub const K_OSC_SPARSE: f32 = 0.15;

// Whole-ring rotation
pub const K_ORBIT: f32 = 0.6; // z-spin rate at orbit_speed = 1
pub const K_WOBBLE: f32 = 0.3; // x-tilt amplitude at wobble_amplitude = 1

// Creation-time per-particle lightness jitter (applied once, never per frame)
pub const COLOR_JITTER: f32 = 0.12;

// Shot scheduling
pub const SHOT_DURATION: f32 = 9.0;
pub const SHOT_DURATION_SHORT: f32 = 5.5; // top-down and static-center cuts

// Picking: annulus half-width accepted around each ring's base radius
pub const PICK_BAND_HALF_WIDTH: f32 = 0.28;

// Camera projection
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Manual (non-cinematic) viewing pose
pub const MANUAL_EYE: [f32; 3] = [0.0, -4.8, 3.4];
pub const MANUAL_LOOK_AT: [f32; 3] = [0.0, 0.0, 0.0];
