//! Cinematic shot descriptors: weighted-random generation and pure pose
//! resolution.
//!
//! A shot is immutable once sampled. The director holds it for exactly one
//! playback window and discards it on expiry; the resolver below can be
//! called any number of times with the same inputs and returns the same pose.

use crate::constants::{SHOT_DURATION, SHOT_DURATION_SHORT};
use crate::state::CameraPose;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// The eight camera behaviors. Closed set: the generator and the resolver
/// both match exhaustively over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotArchetype {
    CloseOrbit,
    MediumPan,
    WideOrbit,
    TopDown,
    ZoomIn,
    ZoomOut,
    StaticCenter,
    PerspectiveSweep,
}

/// A ring the camera may anchor to: its index in the current entity list and
/// its fixed base radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingTarget {
    pub index: usize,
    pub base_radius: f32,
}

/// Fully-specified camera shot. Angles in radians, times in seconds.
#[derive(Clone, Debug)]
pub struct ShotDescriptor {
    pub start_time: f32,
    pub duration: f32,
    pub archetype: ShotArchetype,
    pub base_angle: f32,
    pub orbit_speed: f32,
    pub pan_amplitude: f32,
    pub pan_speed: f32,
    pub radius: f32,
    pub radius_drift: f32,
    pub radius_drift_speed: f32,
    pub height: f32,
    pub height_drift: f32,
    pub height_drift_speed: f32,
    pub focus_z: f32,
    /// When set, the look-at anchors to a fixed point on that ring's
    /// circumference instead of the world origin.
    pub target_ring_index: Option<usize>,
    pub target_angle: f32,
    pub zoom_bias: f32,
}

/// Archetype selection as a step function of a uniform roll in `[0, 1)`.
pub fn archetype_for_roll(roll: f32) -> ShotArchetype {
    match roll {
        r if r <= 0.20 => ShotArchetype::CloseOrbit,
        r if r <= 0.35 => ShotArchetype::MediumPan,
        r if r <= 0.50 => ShotArchetype::WideOrbit,
        r if r <= 0.65 => ShotArchetype::TopDown,
        r if r <= 0.78 => ShotArchetype::ZoomIn,
        r if r <= 0.90 => ShotArchetype::ZoomOut,
        r if r <= 0.95 => ShotArchetype::StaticCenter,
        _ => ShotArchetype::PerspectiveSweep,
    }
}

fn pick_target(rng: &mut impl Rng, targets: &[RingTarget], probability: f32) -> Option<RingTarget> {
    if targets.is_empty() || rng.gen::<f32>() >= probability {
        return None;
    }
    Some(targets[rng.gen_range(0..targets.len())])
}

/// Sample a fully-specified shot anchored at `start_time`.
///
/// The numeric ranges are a tunable visual parameter set; the qualitative
/// relationships are load-bearing: zoom-in pulls strongly inward (negative
/// bias), zoom-out pushes outward, top-down hovers untargeted above the
/// origin, static-center barely orbits, wide-orbit and perspective-sweep use
/// the widest radius and height ranges.
pub fn sample_shot(rng: &mut impl Rng, targets: &[RingTarget], start_time: f32) -> ShotDescriptor {
    let archetype = archetype_for_roll(rng.gen::<f32>());
    let mut shot = ShotDescriptor {
        start_time,
        duration: SHOT_DURATION,
        archetype,
        base_angle: rng.gen::<f32>() * TAU,
        orbit_speed: 0.0,
        pan_amplitude: 0.0,
        pan_speed: 0.0,
        radius: 3.0,
        radius_drift: 0.0,
        radius_drift_speed: 0.0,
        height: 1.5,
        height_drift: 0.0,
        height_drift_speed: 0.0,
        focus_z: 0.0,
        target_ring_index: None,
        target_angle: rng.gen::<f32>() * TAU,
        zoom_bias: 0.0,
    };

    match archetype {
        ShotArchetype::CloseOrbit => {
            shot.orbit_speed = rng.gen_range(0.25..0.5);
            shot.pan_amplitude = rng.gen_range(0.0..0.15);
            shot.pan_speed = rng.gen_range(0.2..0.6);
            shot.radius_drift = rng.gen_range(0.0..0.3);
            shot.radius_drift_speed = rng.gen_range(0.2..0.5);
            shot.height_drift = rng.gen_range(0.0..0.3);
            shot.height_drift_speed = rng.gen_range(0.2..0.5);
            shot.zoom_bias = rng.gen_range(-0.1..0.1);
            let target = pick_target(rng, targets, 0.75);
            apply_target_framing(rng, &mut shot, target, 2.0..3.5);
        }
        ShotArchetype::MediumPan => {
            shot.orbit_speed = rng.gen_range(0.05..0.15);
            shot.pan_amplitude = rng.gen_range(0.3..0.7);
            shot.pan_speed = rng.gen_range(0.4..0.9);
            shot.radius = rng.gen_range(3.0..4.5);
            shot.radius_drift = rng.gen_range(0.1..0.4);
            shot.radius_drift_speed = rng.gen_range(0.1..0.4);
            shot.height = rng.gen_range(1.0..2.5);
            shot.height_drift = rng.gen_range(0.1..0.4);
            shot.height_drift_speed = rng.gen_range(0.1..0.4);
            shot.focus_z = rng.gen_range(-0.3..0.3);
            shot.zoom_bias = rng.gen_range(-0.1..0.1);
            shot.target_ring_index = pick_target(rng, targets, 0.5).map(|t| t.index);
        }
        ShotArchetype::WideOrbit => {
            shot.orbit_speed = rng.gen_range(0.15..0.35);
            shot.pan_amplitude = rng.gen_range(0.0..0.2);
            shot.pan_speed = rng.gen_range(0.1..0.5);
            shot.radius = rng.gen_range(4.5..7.0);
            shot.radius_drift = rng.gen_range(0.2..0.6);
            shot.radius_drift_speed = rng.gen_range(0.1..0.4);
            shot.height = rng.gen_range(1.5..3.5);
            shot.height_drift = rng.gen_range(0.2..0.6);
            shot.height_drift_speed = rng.gen_range(0.1..0.4);
            shot.focus_z = rng.gen_range(-0.5..0.5);
            shot.zoom_bias = rng.gen_range(-0.15..0.15);
        }
        ShotArchetype::TopDown => {
            shot.duration = SHOT_DURATION_SHORT;
            shot.orbit_speed = rng.gen_range(0.1..0.3);
            shot.pan_amplitude = rng.gen_range(0.0..0.1);
            shot.pan_speed = rng.gen_range(0.1..0.4);
            shot.radius = rng.gen_range(0.01..0.1);
            shot.height = rng.gen_range(5.0..7.0);
            shot.height_drift = rng.gen_range(0.0..0.3);
            shot.height_drift_speed = rng.gen_range(0.1..0.3);
            shot.focus_z = 0.0;
            shot.zoom_bias = rng.gen_range(-0.05..0.05);
        }
        ShotArchetype::ZoomIn => {
            shot.orbit_speed = rng.gen_range(0.1..0.25);
            shot.pan_amplitude = rng.gen_range(0.0..0.15);
            shot.pan_speed = rng.gen_range(0.2..0.5);
            shot.radius_drift = rng.gen_range(0.0..0.2);
            shot.radius_drift_speed = rng.gen_range(0.2..0.5);
            shot.height_drift = rng.gen_range(0.0..0.2);
            shot.height_drift_speed = rng.gen_range(0.2..0.5);
            shot.zoom_bias = rng.gen_range(-0.45..-0.25);
            let target = pick_target(rng, targets, 0.75);
            apply_target_framing(rng, &mut shot, target, 3.0..5.0);
        }
        ShotArchetype::ZoomOut => {
            shot.orbit_speed = rng.gen_range(0.1..0.25);
            shot.pan_amplitude = rng.gen_range(0.0..0.15);
            shot.pan_speed = rng.gen_range(0.2..0.5);
            shot.radius_drift = rng.gen_range(0.0..0.2);
            shot.radius_drift_speed = rng.gen_range(0.2..0.5);
            shot.height_drift = rng.gen_range(0.0..0.2);
            shot.height_drift_speed = rng.gen_range(0.2..0.5);
            shot.zoom_bias = rng.gen_range(0.25..0.45);
            let target = pick_target(rng, targets, 0.75);
            apply_target_framing(rng, &mut shot, target, 2.0..4.0);
        }
        ShotArchetype::StaticCenter => {
            shot.duration = SHOT_DURATION_SHORT;
            shot.orbit_speed = rng.gen_range(0.0..0.02);
            shot.pan_amplitude = rng.gen_range(0.0..0.1);
            shot.pan_speed = rng.gen_range(0.1..0.3);
            shot.radius = rng.gen_range(3.0..4.0);
            shot.height = rng.gen_range(1.0..2.0);
            shot.focus_z = rng.gen_range(-0.2..0.2);
            shot.zoom_bias = rng.gen_range(-0.05..0.05);
            shot.target_ring_index = pick_target(rng, targets, 0.5).map(|t| t.index);
        }
        ShotArchetype::PerspectiveSweep => {
            shot.orbit_speed = rng.gen_range(0.4..0.8);
            shot.pan_amplitude = rng.gen_range(0.2..0.5);
            shot.pan_speed = rng.gen_range(0.5..1.0);
            shot.radius = rng.gen_range(4.0..7.0);
            shot.radius_drift = rng.gen_range(0.4..1.0);
            shot.radius_drift_speed = rng.gen_range(0.2..0.6);
            shot.height = rng.gen_range(0.3..3.5);
            shot.height_drift = rng.gen_range(0.4..1.0);
            shot.height_drift_speed = rng.gen_range(0.2..0.6);
            shot.focus_z = rng.gen_range(-0.5..0.5);
            shot.zoom_bias = rng.gen_range(-0.2..0.2);
        }
    }
    shot
}

/// Targeted close framing for the close-orbit/zoom archetypes: hug the
/// target ring just outside its band, or fall back to untargeted wide
/// ranges when no target was bound.
fn apply_target_framing(
    rng: &mut impl Rng,
    shot: &mut ShotDescriptor,
    target: Option<RingTarget>,
    untargeted_radius: std::ops::Range<f32>,
) {
    match target {
        Some(t) => {
            shot.target_ring_index = Some(t.index);
            shot.radius = (t.base_radius + rng.gen_range(0.2..0.5)).max(1.0);
            shot.height = rng.gen_range(0.2..0.9);
            shot.focus_z = rng.gen_range(-0.2..0.2);
        }
        None => {
            shot.radius = rng.gen_range(untargeted_radius);
            shot.height = rng.gen_range(0.5..2.0);
            shot.focus_z = rng.gen_range(-0.5..0.5);
        }
    }
}

/// Resolve a shot to an eye/look-at pair at `elapsed` seconds into the shot.
///
/// Pure: no mutation, idempotent. A `target_ring_index` that no longer
/// resolves (the ring list shrank since the shot was sampled) falls back to
/// the world-origin focus point rather than failing.
pub fn resolve_pose(shot: &ShotDescriptor, elapsed: f32, targets: &[RingTarget]) -> CameraPose {
    let angle = shot.base_angle
        + shot.orbit_speed * elapsed
        + shot.pan_amplitude * (elapsed * shot.pan_speed).sin();
    let radius = shot.radius + shot.radius_drift * (elapsed * shot.radius_drift_speed).sin();
    let height = shot.height + shot.height_drift * (elapsed * shot.height_drift_speed).sin();
    let zoom = 1.0 + shot.zoom_bias * (elapsed * 0.2).sin();
    let eye = Vec3::new(angle.cos() * radius * zoom, angle.sin() * radius * zoom, height);

    let mut look_at = Vec3::new(0.0, 0.0, shot.focus_z);
    if let Some(index) = shot.target_ring_index {
        if let Some(target) = targets.iter().find(|t| t.index == index) {
            look_at = Vec3::new(
                shot.target_angle.cos() * target.base_radius,
                shot.target_angle.sin() * target.base_radius,
                shot.focus_z,
            );
        }
    }
    CameraPose { eye, look_at }
}
