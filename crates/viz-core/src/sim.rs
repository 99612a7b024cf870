//! Pure per-frame ring simulation.
//!
//! Given an entity's static layout and its control vector, rewrite the
//! particle position buffers for elapsed time `t`. Deterministic: identical
//! inputs produce identical buffers, and no randomness is drawn here.
//!
//! Note the raw particle index `i` inside the shake phase (`sin(t*10 + i)`):
//! each particle gets a different apparent temporal frequency purely from
//! index aliasing. That per-particle shimmer is the designed look; keep it.

use crate::constants::*;
use crate::rings::{ControlVector, RingEntity, RingLayer};

/// Recompute both layers of one ring at time `t` and integrate its rotation
/// over `dt`. `subject_index` phases the oscillation and wobble so nested
/// rings do not move in lockstep.
pub fn tick_entity(
    entity: &mut RingEntity,
    control: &ControlVector,
    t: f32,
    dt: f32,
    subject_index: usize,
) {
    recompute_layer(
        &mut entity.dense,
        entity.base_radius,
        control,
        t,
        subject_index,
        LayerGains {
            thick: K_THICK,
            shake: K_SHAKE,
            osc: K_OSC,
            spatial_harmonic: 5.0,
            temporal_harmonic: 3.0,
        },
    );
    recompute_layer(
        &mut entity.sparse,
        entity.base_radius,
        control,
        t,
        subject_index,
        LayerGains {
            thick: K_THICK_SPARSE,
            shake: K_SHAKE_SPARSE,
            osc: K_OSC_SPARSE,
            spatial_harmonic: 7.0,
            temporal_harmonic: 4.0,
        },
    );

    entity.rotation_z += dt * control.orbit_speed * K_ORBIT;
    entity.rotation_x = control.wobble_amplitude * K_WOBBLE * (t + subject_index as f32).sin();
}

/// Per-layer tuning: the sparse layer reads as sparks rather than the main
/// band by using its own gains and higher harmonics.
#[derive(Clone, Copy)]
struct LayerGains {
    thick: f32,
    shake: f32,
    osc: f32,
    spatial_harmonic: f32,
    temporal_harmonic: f32,
}

fn recompute_layer(
    layer: &mut RingLayer,
    base_radius: f32,
    control: &ControlVector,
    t: f32,
    subject_index: usize,
    gains: LayerGains,
) {
    let thick = control.thickness * gains.thick;
    for i in 0..layer.len() {
        let theta = layer.slots[i];
        let offset = layer.offset_seeds[i];
        let mut r = base_radius + offset * thick;
        let shake = control.shake_intensity * gains.shake * (t * 10.0 + i as f32).sin();
        r *= 1.0 + shake;
        let osc = control.oscillation_amplitude
            * gains.osc
            * (theta * gains.spatial_harmonic + t * gains.temporal_harmonic + subject_index as f32)
                .sin();
        layer.positions[i] = [r * theta.cos(), r * theta.sin(), osc];
    }
    layer.dirty = true;
}
