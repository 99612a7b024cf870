// Host-side tests for the ring store and per-frame simulator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_core::*;

fn make_subjects(n: usize) -> Vec<SubjectInfo> {
    (0..n)
        .map(|k| SubjectInfo {
            id: format!("D{k:02}"),
            rank: k,
            color: [0.8, 0.2, 0.3],
            emotions: [0.5; 5],
        })
        .collect()
}

fn make_field(n: usize) -> RingField {
    let mut field = RingField::new();
    let mut rng = StdRng::seed_from_u64(42);
    field.rebuild(&make_subjects(n), &mut rng);
    field
}

#[test]
fn tick_is_deterministic_for_fixed_time() {
    let mut field = make_field(3);
    field.tick(1.5, 0.016);
    let first: Vec<Vec<[f32; 3]>> = field
        .entities
        .iter()
        .map(|e| e.dense.positions.clone())
        .collect();
    field.tick(1.5, 0.016);
    for (e, expected) in field.entities.iter().zip(&first) {
        assert_eq!(
            &e.dense.positions, expected,
            "recomputing at the same elapsed time must be bit-identical"
        );
    }
}

#[test]
fn zero_motion_controls_collapse_to_base_radius() {
    let mut field = make_field(2);
    for i in 0..field.len() {
        field.set_controls(i, [0.7, 0.0, 0.0, 0.0, 0.0]);
    }
    for t in [0.0_f32, 0.5, 3.0, 100.0] {
        field.tick(t, 0.016);
        for entity in &field.entities {
            for layer in [&entity.dense, &entity.sparse] {
                for p in &layer.positions {
                    let radial = (p[0] * p[0] + p[1] * p[1]).sqrt();
                    assert!(
                        (radial - entity.base_radius).abs() < 1e-5,
                        "expected radius {} got {}",
                        entity.base_radius,
                        radial
                    );
                    assert_eq!(p[2], 0.0, "z must be exactly zero with no oscillation");
                }
            }
        }
    }
}

#[test]
fn rebuild_empty_leaves_zero_entities_and_ticks_safely() {
    let mut field = make_field(3);
    let mut rng = StdRng::seed_from_u64(7);
    field.rebuild(&[], &mut rng);
    assert!(field.is_empty());
    for i in 0..100 {
        field.tick(i as f32 * 0.016, 0.016);
    }
    assert!(field.is_empty());
    // rebuilding from empty is also fine
    field.rebuild(&make_subjects(2), &mut rng);
    assert_eq!(field.len(), 2);
}

#[test]
fn wild_control_values_never_produce_nan() {
    let mut field = make_field(2);
    field.set_controls(0, [5.0, 3.0, -2.0, 4.0, -1.5]);
    field.set_controls(1, [-0.5, 10.0, 0.0, 100.0, 2.0]);
    for i in 0..200 {
        field.tick(i as f32 * 0.033, 0.033);
    }
    for entity in &field.entities {
        for layer in [&entity.dense, &entity.sparse] {
            for p in &layer.positions {
                assert!(p.iter().all(|v| v.is_finite()));
            }
        }
        assert!(entity.rotation_z.is_finite());
        assert!(entity.rotation_x.is_finite());
    }
}

#[test]
fn creation_randomness_is_never_resampled() {
    let mut field = make_field(1);
    let seeds = field.entities[0].dense.offset_seeds.clone();
    let colors = field.entities[0].dense.colors.clone();
    for i in 0..50 {
        field.tick(i as f32 * 0.016, 0.016);
    }
    assert_eq!(field.entities[0].dense.offset_seeds, seeds);
    assert_eq!(field.entities[0].dense.colors, colors);
}

#[test]
fn offset_seeds_are_in_symmetric_range() {
    let field = make_field(3);
    for entity in &field.entities {
        for layer in [&entity.dense, &entity.sparse] {
            for s in &layer.offset_seeds {
                assert!(*s >= -1.0 && *s < 1.0, "seed {s} out of [-1, 1)");
            }
        }
    }
}

#[test]
fn thickness_scales_radial_deviation_linearly() {
    // No shake/oscillation; radial deviation from base is offset * thickness
    // * K_THICK, so doubling thickness doubles the deviation.
    let mut field = make_field(1);
    field.set_controls(0, [0.0, 0.5, 0.0, 0.0, 0.0]);
    field.tick(1.0, 0.016);
    let half: Vec<f32> = deviations(&field.entities[0]);
    field.set_controls(0, [0.0, 1.0, 0.0, 0.0, 0.0]);
    field.tick(1.0, 0.016);
    let full: Vec<f32> = deviations(&field.entities[0]);
    for (h, f) in half.iter().zip(&full) {
        if h.abs() > 1e-4 {
            assert!(
                (f / h - 2.0).abs() < 1e-3,
                "expected linear scaling, got {h} vs {f}"
            );
        }
    }
}

fn deviations(entity: &RingEntity) -> Vec<f32> {
    entity
        .dense
        .positions
        .iter()
        .map(|p| (p[0] * p[0] + p[1] * p[1]).sqrt() - entity.base_radius)
        .collect()
}

#[test]
fn orbit_speed_integrates_into_rotation() {
    let mut field = make_field(1);
    field.set_controls(0, [1.0, 0.0, 0.0, 0.0, 0.0]);
    field.tick(0.0, 0.5);
    let expected = 0.5 * K_ORBIT;
    assert!((field.entities[0].rotation_z - expected).abs() < 1e-6);
    field.tick(0.5, 0.5);
    assert!((field.entities[0].rotation_z - 2.0 * expected).abs() < 1e-6);
}

#[test]
fn wobble_tilts_by_subject_index_phase() {
    let mut field = make_field(2);
    field.set_controls(0, [0.0, 0.0, 0.0, 0.0, 1.0]);
    field.set_controls(1, [0.0, 0.0, 0.0, 0.0, 1.0]);
    field.tick(1.0, 0.016);
    let a = field.entities[0].rotation_x;
    let b = field.entities[1].rotation_x;
    assert!((a - K_WOBBLE * 1.0_f32.sin()).abs() < 1e-6);
    assert!((b - K_WOBBLE * 2.0_f32.sin()).abs() < 1e-6);
    assert!(a != b, "nested rings must not wobble in lockstep");
}

#[test]
fn ring_radii_nest_without_overlap() {
    let field = make_field(4);
    for (k, entity) in field.entities.iter().enumerate() {
        let expected = BASE_RADIUS + k as f32 * RADIUS_STEP;
        assert!((entity.base_radius - expected).abs() < 1e-6);
    }
    for pair in field.entities.windows(2) {
        assert!(pair[1].base_radius > pair[0].base_radius);
    }
}

#[test]
fn particle_budgets_identical_across_entities() {
    let field = make_field(3);
    for entity in &field.entities {
        assert_eq!(entity.dense.len(), DENSE_PARTICLES);
        assert_eq!(entity.sparse.len(), SPARSE_PARTICLES);
    }
}

#[test]
fn tick_marks_layers_dirty() {
    let mut field = make_field(1);
    field.entities[0].dense.dirty = false;
    field.entities[0].sparse.dirty = false;
    field.tick(0.5, 0.016);
    assert!(field.entities[0].dense.dirty);
    assert!(field.entities[0].sparse.dirty);
}

#[test]
fn subject_lookup_follows_rebuild() {
    let mut field = make_field(3);
    assert_eq!(field.index_of("D01"), Some(1));
    assert_eq!(field.index_of("ZZZ"), None);
    let mut rng = StdRng::seed_from_u64(9);
    field.rebuild(&make_subjects(2), &mut rng);
    assert_eq!(field.index_of("D02"), None);
    assert_eq!(field.index_of("D00"), Some(0));
}
