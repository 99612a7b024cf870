// Front-end rendering and interaction tuning constants

// Billboard quad half-extent multipliers per layer
pub const PARTICLE_SCALE_DENSE: f32 = 0.045;
pub const PARTICLE_SCALE_SPARSE: f32 = 0.075;

// Hover highlight multiplier applied to a picked ring's particle colors
pub const HOVER_BRIGHTEN: f32 = 1.4;

// Background clear color
pub const CLEAR_COLOR: [f64; 4] = [0.015, 0.02, 0.05, 1.0];

// Initial GPU instance buffer capacity (grown at rebuild when exceeded)
pub const INSTANCE_CAPACITY_MIN: usize = 1024;
