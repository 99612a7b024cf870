//! Ring entity store and lifecycle.
//!
//! One `RingEntity` per displayed subject. All per-particle randomness
//! (radial offset seeds, lightness jitter) is drawn once at creation and
//! reused every frame; the per-frame simulator in [`crate::sim`] never
//! resamples it. That is what keeps the motion a smooth shimmer instead of
//! per-frame flicker.

use crate::constants::*;
use crate::shots::RingTarget;
use crate::sim;
use fnv::FnvHashMap;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// External description of one displayed subject (a driver in the shipped
/// data set): stable id, ordinal rank inside the display window, assigned
/// color and the five telemetry-derived scalars.
#[derive(Clone, Debug)]
pub struct SubjectInfo {
    pub id: String,
    pub rank: usize,
    pub color: [f32; 3],
    pub emotions: [f32; 5],
}

/// The five scalars driving one ring's motion.
///
/// Each parameter is designed for the `[0, 1]` range but is deliberately not
/// clamped: out-of-range values scale the corresponding motion linearly
/// beyond the designed visual envelope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlVector {
    pub orbit_speed: f32,
    pub thickness: f32,
    pub oscillation_amplitude: f32,
    pub shake_intensity: f32,
    pub wobble_amplitude: f32,
}

impl ControlVector {
    /// Neutral mid-range values used between creation and the first external
    /// update.
    pub fn neutral() -> Self {
        Self {
            orbit_speed: 0.5,
            thickness: 0.5,
            oscillation_amplitude: 0.5,
            shake_intensity: 0.5,
            wobble_amplitude: 0.5,
        }
    }

    /// Direct 1:1 index binding of the five external scalars.
    pub fn from_scalars(s: [f32; 5]) -> Self {
        Self {
            orbit_speed: s[0],
            thickness: s[1],
            oscillation_amplitude: s[2],
            shake_intensity: s[3],
            wobble_amplitude: s[4],
        }
    }
}

/// One particle layer of a ring: static layout plus the mutable position
/// buffer the simulator rewrites each frame.
pub struct RingLayer {
    /// Fixed angular slot per particle, `2π·i/count`.
    pub slots: Vec<f32>,
    /// Per-particle radial offset seed in `[-1, 1]`, drawn once at creation.
    pub offset_seeds: Vec<f32>,
    /// Per-particle RGBA, lightness-jittered once at creation.
    pub colors: Vec<[f32; 4]>,
    /// Particle positions in ring-local space, rewritten by the simulator.
    pub positions: Vec<[f32; 3]>,
    /// Set whenever `positions` changed and the GPU copy is stale.
    pub dirty: bool,
}

impl RingLayer {
    fn new(count: usize, color: [f32; 3], alpha: f32, rng: &mut impl Rng) -> Self {
        let mut slots = Vec::with_capacity(count);
        let mut offset_seeds = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for i in 0..count {
            slots.push(TAU * i as f32 / count as f32);
            offset_seeds.push(rng.gen_range(-1.0_f32..1.0));
            let jitter = 1.0 + rng.gen_range(-COLOR_JITTER..COLOR_JITTER);
            colors.push([
                (color[0] * jitter).clamp(0.0, 1.0),
                (color[1] * jitter).clamp(0.0, 1.0),
                (color[2] * jitter).clamp(0.0, 1.0),
                alpha,
            ]);
        }
        Self {
            slots,
            offset_seeds,
            colors,
            positions: vec![[0.0; 3]; count],
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// One ring per subject: dense band plus sparse "spark" layer, sharing a
/// whole-ring rotation.
pub struct RingEntity {
    pub subject_id: String,
    pub base_radius: f32,
    pub color: [f32; 3],
    pub dense: RingLayer,
    pub sparse: RingLayer,
    /// Accumulated z-spin, advanced each tick by the control's orbit speed.
    pub rotation_z: f32,
    /// Wobble tilt about X, recomputed each tick.
    pub rotation_x: f32,
}

/// Owns every active ring and its control vector, index-aligned with the
/// subject list that built them.
pub struct RingField {
    pub entities: Vec<RingEntity>,
    pub controls: Vec<ControlVector>,
    index_by_id: FnvHashMap<String, usize>,
}

impl Default for RingField {
    fn default() -> Self {
        Self::new()
    }
}

impl RingField {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            controls: Vec::new(),
            index_by_id: FnvHashMap::default(),
        }
    }

    /// Dispose every current ring and build fresh ones for `subjects`.
    ///
    /// Safe to call with zero existing entities; an empty `subjects` leaves
    /// the field empty, which is a valid (static) scene. The whole
    /// dispose-then-recreate sequence completes before returning, so a frame
    /// tick can never observe a half-rebuilt list.
    pub fn rebuild(&mut self, subjects: &[SubjectInfo], rng: &mut impl Rng) {
        self.entities.clear();
        self.controls.clear();
        self.index_by_id.clear();
        if subjects.is_empty() {
            log::info!("ring field rebuilt: empty");
            return;
        }
        for (k, subject) in subjects.iter().enumerate() {
            let base_radius = BASE_RADIUS + subject.rank as f32 * RADIUS_STEP;
            let entity = RingEntity {
                subject_id: subject.id.clone(),
                base_radius,
                color: subject.color,
                dense: RingLayer::new(DENSE_PARTICLES, subject.color, 0.85, rng),
                sparse: RingLayer::new(SPARSE_PARTICLES, subject.color, 1.0, rng),
                rotation_z: 0.0,
                rotation_x: 0.0,
            };
            self.index_by_id.insert(subject.id.clone(), k);
            self.entities.push(entity);
            self.controls.push(ControlVector::from_scalars(subject.emotions));
        }
        log::info!("ring field rebuilt: {} rings", self.entities.len());
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn index_of(&self, subject_id: &str) -> Option<usize> {
        self.index_by_id.get(subject_id).copied()
    }

    pub fn control_mut(&mut self, index: usize) -> Option<&mut ControlVector> {
        self.controls.get_mut(index)
    }

    /// Apply a subject's five external scalars onto its control vector.
    pub fn set_controls(&mut self, index: usize, scalars: [f32; 5]) {
        if let Some(c) = self.controls.get_mut(index) {
            *c = ControlVector::from_scalars(scalars);
        }
    }

    /// Snapshot of available cinematic targets (index + base radius).
    pub fn targets(&self) -> SmallVec<[RingTarget; 8]> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| RingTarget {
                index: i,
                base_radius: e.base_radius,
            })
            .collect()
    }

    /// Advance every ring one frame: recompute both particle layers at
    /// elapsed time `t` and integrate the whole-ring rotation over `dt`.
    pub fn tick(&mut self, t: f32, dt: f32) {
        for (k, (entity, control)) in self.entities.iter_mut().zip(&self.controls).enumerate() {
            sim::tick_entity(entity, control, t, dt, k);
        }
    }
}
