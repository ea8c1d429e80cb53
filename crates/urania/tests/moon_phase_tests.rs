use urania::aspects::{AspectKind, MAJOR_ASPECTS};
use urania::chart::{AspectCandidate, ChartAssembler, MoonPhaseCalculator, MoonPhaseName};
use urania::ephemeris::CelestialLongitude;
use urania::western::{format_longitude, Body, TRACKED_BODIES};

fn candidate(body: Body, longitude: f64) -> AspectCandidate {
    AspectCandidate { body, longitude }
}

#[test]
fn test_new_moon() {
    let info = MoonPhaseCalculator::new().compute(0.0, 0.0, 30.0, &[], &MAJOR_ASPECTS);
    assert_eq!(info.name, MoonPhaseName::New);
    assert!(info.illumination.abs() < 1e-9);
    assert!(info.void_of_course);
    assert!(info.next_aspect.is_none());
}

#[test]
fn test_full_moon() {
    let info = MoonPhaseCalculator::new().compute(100.0, 280.0, 300.0, &[], &MAJOR_ASPECTS);
    assert_eq!(info.name, MoonPhaseName::Full);
    assert!((info.elongation - 180.0).abs() < 1e-9);
    assert!((info.illumination - 100.0).abs() < 1e-9);
}

#[test]
fn test_phase_bins() {
    let cases = [
        (10.0, MoonPhaseName::New),
        (45.0, MoonPhaseName::WaxingCrescent),
        (100.0, MoonPhaseName::FirstQuarter),
        (170.0, MoonPhaseName::WaxingGibbous),
        (200.0, MoonPhaseName::Full),
        (250.0, MoonPhaseName::WaningGibbous),
        (280.0, MoonPhaseName::LastQuarter),
        (359.9, MoonPhaseName::WaningCrescent),
    ];
    for (elongation, expected) in cases {
        assert_eq!(MoonPhaseName::from_elongation(elongation), expected, "{}", elongation);
    }
}

#[test]
fn test_elongation_wraps_below_zero() {
    assert!((MoonPhaseCalculator::elongation(350.0, 10.0) - 20.0).abs() < 1e-9);
    assert!((MoonPhaseCalculator::elongation(10.0, 350.0) - 340.0).abs() < 1e-9);
}

#[test]
fn test_illumination_monotonic_to_full() {
    let mut previous = -1.0;
    for step in 0..=180 {
        let value = MoonPhaseCalculator::illumination(step as f64);
        assert!(value >= previous);
        assert!((0.0..=100.0 + 1e-9).contains(&value));
        previous = value;
    }
    let mut previous = 101.0;
    for step in 180..360 {
        let value = MoonPhaseCalculator::illumination(step as f64);
        assert!(value <= previous);
        previous = value;
    }
}

#[test]
fn test_void_of_course_late_in_sign() {
    // Moon at 29.5 Aries; nothing perfects in the last half degree
    let candidates = [
        candidate(Body::Sun, 200.0),
        candidate(Body::Mars, 100.0),
        candidate(Body::Saturn, 335.0),
    ];
    let info = MoonPhaseCalculator::new().compute(200.0, 29.5, 30.0, &candidates, &MAJOR_ASPECTS);
    assert!(info.void_of_course);
    assert!(info.next_aspect.is_none());
}

#[test]
fn test_next_aspect_before_sign_change() {
    // Moon at 10 Cancer: Venus trine perfects at 18 Cancer, Mars square at 25 Cancer
    let candidates = [
        candidate(Body::Mars, 25.0),
        candidate(Body::Venus, 228.0),
    ];
    let next = MoonPhaseCalculator::new()
        .next_aspect(100.0, 120.0, &candidates, &MAJOR_ASPECTS)
        .unwrap();
    assert_eq!(next.body, Body::Venus);
    assert_eq!(next.aspect, AspectKind::Trine);
    assert!((next.exact_longitude - 108.0).abs() < 1e-9);
    assert!((next.degrees_ahead - 8.0).abs() < 1e-9);
    assert_eq!(next.formatted, "18°00'00\"");
}

#[test]
fn test_aspect_set_is_respected() {
    let candidates = [candidate(Body::Venus, 228.0)];
    let next = MoonPhaseCalculator::new().next_aspect(
        100.0,
        120.0,
        &candidates,
        &[AspectKind::Conjunction, AspectKind::Opposition],
    );
    assert!(next.is_none());
}

#[test]
fn test_chart_moon_phase_and_next_aspect() {
    let longitudes = [
        239.7065, 100.0, 225.0, 260.0, 300.0, 95.0, 290.0, 275.0, 281.0, 225.5, 105.0, 310.0, 130.0,
    ];
    let bodies: Vec<CelestialLongitude> = TRACKED_BODIES
        .iter()
        .zip(longitudes)
        .map(|(body, lon)| CelestialLongitude::new(*body, lon, false))
        .collect();
    let chart = ChartAssembler::default()
        .assemble(49.2333, 300.0, &bodies)
        .unwrap();

    let phase = &chart.moon_phase;
    assert_eq!(phase.name, MoonPhaseName::Full);
    assert!((phase.elongation - 220.2935).abs() < 1e-6);
    assert!(phase.illumination > 85.0 && phase.illumination < 92.0);
    assert!(!phase.void_of_course);

    // Neptune at 281 opposes 101, one degree ahead of the Moon
    let next = phase.next_aspect.as_ref().unwrap();
    assert_eq!(next.body, Body::Neptune);
    assert_eq!(next.aspect, AspectKind::Opposition);
    assert!((next.degrees_ahead - 1.0).abs() < 1e-9);
    assert_eq!(format_longitude(next.exact_longitude).unwrap().sign, chart.moon_sign);
}

fn chart_with(overrides: &[(Body, f64)]) -> urania::CompleteChart {
    let bodies: Vec<CelestialLongitude> = TRACKED_BODIES
        .iter()
        .map(|body| {
            let lon = overrides
                .iter()
                .find(|(b, _)| b == body)
                .map_or(0.0, |(_, lon)| *lon);
            CelestialLongitude::new(*body, lon, false)
        })
        .collect();
    ChartAssembler::default().assemble(10.0, 280.0, &bodies).unwrap()
}

#[test]
fn test_default_settings_count_chiron() {
    // Everything else at 0 Aries leaves nothing to perfect inside Cancer
    let chart = chart_with(&[
        (Body::Moon, 100.0),
        (Body::Chiron, 105.0),
        (Body::NorthNode, 180.0),
    ]);
    let phase = &chart.moon_phase;
    assert!(!phase.void_of_course);
    let next = phase.next_aspect.as_ref().unwrap();
    assert_eq!(next.body, Body::Chiron);
    assert_eq!(next.aspect, AspectKind::Conjunction);
    assert!((next.degrees_ahead - 5.0).abs() < 1e-9);
}

#[test]
fn test_default_settings_count_nodes() {
    // Both nodes square 110; the North Node comes first in body order
    let chart = chart_with(&[
        (Body::Moon, 100.0),
        (Body::NorthNode, 200.0),
        (Body::SouthNode, 20.0),
    ]);
    let next = chart.moon_phase.next_aspect.as_ref().unwrap();
    assert_eq!(next.body, Body::NorthNode);
    assert_eq!(next.aspect, AspectKind::Square);
    assert!((next.degrees_ahead - 10.0).abs() < 1e-9);
    assert!(!chart.moon_phase.void_of_course);
}

#[test]
fn test_default_settings_void_of_course() {
    let chart = chart_with(&[(Body::Moon, 100.0)]);
    assert!(chart.moon_phase.void_of_course);
    assert!(chart.moon_phase.next_aspect.is_none());
}
