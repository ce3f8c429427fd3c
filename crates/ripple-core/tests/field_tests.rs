use glam::{Vec2, Vec3};
use ripple_core::field::{area_mask, intensity, ring, ring_center_radius};
use ripple_core::{
    FieldCoord, FieldSampler, PulsePolicy, RippleCenter, RippleParameters, RippleState,
};

fn scenario_params() -> RippleParameters {
    RippleParameters {
        radius: 0.3,
        ring_thickness: 0.05,
        speed: 1.0,
        intensity: 1.0,
        ..Default::default()
    }
}

fn active_sampler(params: RippleParameters, elapsed: f32) -> FieldSampler {
    let mut state = RippleState::new();
    state.activate(RippleCenter::Param(Vec2::new(0.5, 0.5)));
    state.advance(elapsed);
    FieldSampler::new(params, &state)
}

#[test]
fn ring_is_bounded_and_peaks_on_the_ring() {
    let ring_radius = 0.4;
    let mut peak = (0.0_f32, 0.0_f32);
    for i in 0..=200 {
        let d = i as f32 * 0.005;
        let r = ring(d, ring_radius, 0.05);
        assert!((0.0..=1.0).contains(&r), "ring({d}) = {r}");
        if r > peak.1 {
            peak = (d, r);
        }
    }
    assert!((peak.0 - ring_radius).abs() < 1e-4);
    assert!((ring(ring_radius, ring_radius, 0.05) - 1.0).abs() < 1e-6);
}

#[test]
fn area_mask_is_monotone_and_bounded() {
    for footprint in [0.0, 0.01, 0.1, 1.0] {
        assert!((area_mask(0.0, 0.3, footprint) - 1.0).abs() < 1e-6);
        let mut prev = f32::INFINITY;
        for i in 0..=100 {
            let d = i as f32 * 0.005;
            let m = area_mask(d, 0.3, footprint);
            assert!(m <= prev + 1e-6, "mask increased at d={d}");
            assert!((0.0..=1.0).contains(&m));
            prev = m;
        }
        assert!(area_mask(0.3, 0.3, footprint) < 1e-6);
        assert_eq!(area_mask(2.0, 0.3, footprint), 0.0);
    }
}

#[test]
fn area_mask_band_widens_with_footprint() {
    let sharp = area_mask(0.28, 0.3, 0.0);
    let soft = area_mask(0.28, 0.3, 0.05);
    assert!(sharp > 0.99);
    assert!(soft < sharp);
}

#[test]
fn scenario_a_center_at_activation() {
    let s = active_sampler(scenario_params(), 0.0);
    let i = s.intensity(FieldCoord::Param(Vec2::new(0.5, 0.5)), 0.0);
    assert!((i - 1.0).abs() < 1e-4, "intensity {i}");
}

#[test]
fn scenario_b_ring_at_the_edge_is_not_brighter() {
    let a = active_sampler(scenario_params(), 0.0)
        .intensity(FieldCoord::Param(Vec2::new(0.5, 0.5)), 0.0);
    let s = active_sampler(scenario_params(), 0.3);
    assert!((s.ring_radius - 0.3).abs() < 1e-5);
    let b = s.intensity(FieldCoord::Param(Vec2::new(0.8, 0.5)), 0.01);
    assert!(b <= a);
    assert!(b <= 0.5);
}

#[test]
fn idle_state_yields_zero_everywhere() {
    let s = FieldSampler::new(scenario_params(), &RippleState::new());
    assert!(!s.is_active());
    for uv in [Vec2::ZERO, Vec2::splat(0.5), Vec2::ONE] {
        assert_eq!(s.intensity(FieldCoord::Param(uv), 0.0), 0.0);
    }
}

#[test]
fn invalid_parameters_give_zero_field() {
    let base = scenario_params();
    for bad in [
        RippleParameters { radius: 0.0, ..base },
        RippleParameters { radius: -1.0, ..base },
        RippleParameters { speed: -1.0, ..base },
        RippleParameters { ring_thickness: -0.5, ..base },
        RippleParameters { intensity: -1.0, ..base },
    ] {
        assert_eq!(intensity(&bad, 0.0, 0.0, 0.0), 0.0);
        let s = active_sampler(bad, 0.0);
        assert_eq!(s.intensity(FieldCoord::Param(Vec2::new(0.5, 0.5)), 0.0), 0.0);
    }
}

#[test]
fn zero_thickness_does_not_produce_nan() {
    let p = RippleParameters {
        ring_thickness: 0.0,
        ..scenario_params()
    };
    let i = intensity(&p, 0.1, 0.1, 0.0);
    assert!(i.is_finite());
    assert!((i - area_mask(0.1, 0.3, 0.0)).abs() < 1e-5);
    assert_eq!(intensity(&p, 0.2, 0.1, 0.0), 0.0);
}

#[test]
fn single_pulse_grows_without_wrapping() {
    let p = scenario_params();
    assert!((ring_center_radius(&p, 5.0) - 5.0).abs() < 1e-6);
    let late = active_sampler(p, 5.0);
    assert_eq!(late.intensity(FieldCoord::Param(Vec2::new(0.5, 0.5)), 0.0), 0.0);
}

#[test]
fn repeating_pulse_wraps_inside_radius() {
    let p = scenario_params().with_pulse(PulsePolicy::Repeating);
    let r = ring_center_radius(&p, 0.45);
    assert!((r - 0.15).abs() < 1e-5);
    let s = active_sampler(p, 0.45);
    let on_ring = s.intensity(FieldCoord::Param(Vec2::new(0.65, 0.5)), 0.0);
    assert!(on_ring > 0.5);
}

#[test]
fn pulse_age_counts_from_activation_not_session_start() {
    let mut state = RippleState::new();
    state.advance(10.0);
    state.activate(RippleCenter::Param(Vec2::new(0.5, 0.5)));
    let s = FieldSampler::new(scenario_params(), &state);
    assert_eq!(s.ring_radius, 0.0);
    assert!(s.intensity(FieldCoord::Param(Vec2::new(0.5, 0.5)), 0.0) > 0.99);
}

#[test]
fn world_mode_uses_3d_distance_and_ignores_param_queries() {
    let mut state = RippleState::new();
    state.activate(RippleCenter::World(Vec3::new(1.0, 2.0, 3.0)));
    let s = FieldSampler::new(scenario_params(), &state);
    let at_center = s.intensity(FieldCoord::World(Vec3::new(1.0, 2.0, 3.0)), 0.0);
    assert!((at_center - 1.0).abs() < 1e-4);
    assert_eq!(s.intensity(FieldCoord::World(Vec3::new(1.0, 2.0, 4.0)), 0.0), 0.0);
    assert_eq!(s.intensity(FieldCoord::Param(Vec2::new(1.0, 2.0)), 0.0), 0.0);
}

#[test]
fn color_is_scaled_by_intensity() {
    let p = RippleParameters {
        color: [1.0, 0.5, 0.0],
        intensity: 2.0,
        ..scenario_params()
    };
    let s = active_sampler(p, 0.0);
    let c = s.color(FieldCoord::Param(Vec2::new(0.5, 0.5)), 0.0);
    assert!((c[0] - 2.0).abs() < 1e-3);
    assert!((c[1] - 1.0).abs() < 1e-3);
    assert_eq!(c[2], 0.0);
}
