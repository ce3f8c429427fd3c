use glam::{Vec2, Vec3};
use ripple_core::{
    InteractiveSurface, MeshGeometry, PulsePolicy, RippleCenter, RippleParameters, RipplePhase,
    SurfaceHit, SurfaceId, SurfaceLocator, SurfaceRegistry,
};

fn triangle(id: u32, offset: f32) -> InteractiveSurface {
    let geometry = MeshGeometry {
        positions: vec![
            Vec3::new(offset, 0.0, 0.0),
            Vec3::new(offset + 1.0, 0.0, 0.0),
            Vec3::new(offset, 1.0, 0.0),
        ],
        normals: vec![Vec3::Z; 3],
        uvs: Some(vec![Vec2::ZERO, Vec2::X, Vec2::Y]),
        indices: vec![0, 1, 2],
    };
    InteractiveSurface::new(SurfaceId(id), format!("tri{id}"), geometry)
}

#[test]
fn new_surfaces_start_idle_with_defaults() {
    let defaults = RippleParameters {
        radius: 0.5,
        ..Default::default()
    };
    let mut reg = SurfaceRegistry::new(defaults);
    reg.replace_surfaces(vec![triangle(0, 0.0), triangle(1, 2.0)]);
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.generation(), 1);
    for e in reg.entries() {
        assert_eq!(e.params, defaults);
        assert_eq!(e.state.phase(), RipplePhase::Idle);
    }
}

#[test]
fn reload_resets_states_but_keeps_the_session_clock() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(0, 0.0)]);
    reg.advance(2.0);
    let hit = SurfaceHit {
        surface_id: SurfaceId(0),
        world_point: Vec3::new(0.2, 0.2, 0.0),
        surface_param: Some(Vec2::new(0.2, 0.2)),
        distance: 1.0,
    };
    SurfaceLocator::default().apply(&mut reg, Some(&hit));
    assert_eq!(reg.active_surface(), Some(SurfaceId(0)));

    reg.replace_surfaces(vec![triangle(10, 0.0), triangle(11, 5.0)]);
    assert_eq!(reg.generation(), 2);
    assert!(reg.get(SurfaceId(0)).is_none());
    assert_eq!(reg.active_surface(), None);
    for e in reg.entries() {
        assert!((e.state.elapsed_time() - 2.0).abs() < 1e-6);
        assert_eq!(e.state.phase(), RipplePhase::Idle);
    }
}

#[test]
fn duplicate_ids_keep_the_first_surface() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(3, 0.0), triangle(3, 9.0)]);
    assert_eq!(reg.len(), 1);
    let b = reg.get(SurfaceId(3)).and_then(|e| e.surface.bounds()).expect("bounds");
    assert_eq!(b.min.x, 0.0);
}

#[test]
fn parameters_are_replaced_wholesale() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(0, 0.0), triangle(1, 2.0)]);
    let p = RippleParameters {
        color: [1.0, 0.0, 0.0],
        ..Default::default()
    }
    .with_pulse(PulsePolicy::Repeating);
    assert!(reg.set_parameters(SurfaceId(1), p));
    assert!(!reg.set_parameters(SurfaceId(99), p));
    assert_eq!(reg.get(SurfaceId(1)).map(|e| e.params), Some(p));
    assert_eq!(
        reg.get(SurfaceId(0)).map(|e| e.params),
        Some(RippleParameters::default())
    );

    reg.set_all_parameters(p);
    assert!(reg.entries().iter().all(|e| e.params == p));
    assert_eq!(reg.defaults(), p);
}

#[test]
fn explicit_reset_returns_to_idle() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(0, 0.0)]);
    let hit = SurfaceHit {
        surface_id: SurfaceId(0),
        world_point: Vec3::ZERO,
        surface_param: Some(Vec2::ZERO),
        distance: 1.0,
    };
    SurfaceLocator::default().apply(&mut reg, Some(&hit));
    assert!(reg.reset(SurfaceId(0)));
    assert!(!reg.reset(SurfaceId(0)));
    SurfaceLocator::default().apply(&mut reg, Some(&hit));
    reg.reset_all();
    assert_eq!(reg.active_surface(), None);
}

#[test]
fn hit_on_unknown_surface_clears_everything() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(0, 0.0)]);
    let loc = SurfaceLocator::default();
    let hit = SurfaceHit {
        surface_id: SurfaceId(0),
        world_point: Vec3::ZERO,
        surface_param: Some(Vec2::ZERO),
        distance: 1.0,
    };
    loc.apply(&mut reg, Some(&hit));
    let stale = SurfaceHit {
        surface_id: SurfaceId(42),
        ..hit
    };
    loc.apply(&mut reg, Some(&stale));
    assert_eq!(reg.active_surface(), None);
}

#[test]
fn samplers_expose_every_surface() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(0, 0.0), triangle(1, 2.0)]);
    let hit = SurfaceHit {
        surface_id: SurfaceId(1),
        world_point: Vec3::new(2.1, 0.1, 0.0),
        surface_param: Some(Vec2::new(0.1, 0.1)),
        distance: 1.0,
    };
    SurfaceLocator::default().apply(&mut reg, Some(&hit));
    reg.advance(0.1);
    let samplers: Vec<_> = reg.samplers().collect();
    assert_eq!(samplers.len(), 2);
    let (_, active) = samplers
        .iter()
        .find(|(id, _)| *id == SurfaceId(1))
        .expect("surface 1");
    assert_eq!(active.center, Some(RippleCenter::Param(Vec2::new(0.1, 0.1))));
    assert!((active.ring_radius - 0.1).abs() < 1e-5);
    let (_, idle) = samplers
        .iter()
        .find(|(id, _)| *id == SurfaceId(0))
        .expect("surface 0");
    assert!(!idle.is_active());
}

#[test]
fn bounds_cover_all_surfaces() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(0, 0.0), triangle(1, 2.0)]);
    let b = reg.bounds().expect("bounds");
    assert_eq!(b.min, Vec3::ZERO);
    assert_eq!(b.max, Vec3::new(3.0, 1.0, 0.0));
}

#[test]
fn clear_leaves_a_usable_empty_registry() {
    let mut reg = SurfaceRegistry::default();
    reg.replace_surfaces(vec![triangle(0, 0.0)]);
    reg.clear();
    assert!(reg.is_empty());
    reg.advance(1.0);
    assert!((reg.clock() - 1.0).abs() < 1e-6);
}
