use std::io::Write;
use tempfile::NamedTempFile;
use urania::ephemeris::{EphemerisError, EphemerisProvider, SnapshotEphemeris};
use urania::geocoding::NamedLocation;
use urania::western::{Body, ZodiacSign};
use urania::{generate_chart, BirthInfo, ChartSettings, Gazetteer, GenerationError};

const POSITIONS: &str = r#"{
  "datetime": "1990-06-15T18:30:00Z",
  "planets": {
    "sun": { "lon": 84.2, "speed_lon": 0.95 },
    "moon": { "lon": 312.75, "speed_lon": 13.1 },
    "mercury": { "lon": 70.1, "speed_lon": 1.2 },
    "venus": { "lon": 48.3, "speed_lon": 1.1 },
    "mars": { "lon": 14.9, "speed_lon": 0.7 },
    "jupiter": { "lon": 103.6, "speed_lon": 0.2 },
    "saturn": { "lon": 294.2, "speed_lon": -0.04 },
    "uranus": { "lon": 278.0, "speed_lon": -0.03 },
    "neptune": { "lon": 283.4, "speed_lon": -0.02 },
    "pluto": { "lon": 225.6, "speed_lon": -0.02 },
    "chiron": { "lon": 109.8, "speed_lon": 0.1 },
    "north_node": { "lon": 309.5, "speed_lon": -0.05 }
  },
  "houses": {
    "system": "W",
    "angles": { "asc": 213.4, "mc": 130.2 }
  }
}"#;

fn snapshot_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn birth_info() -> BirthInfo {
    BirthInfo {
        name: "Jane Doe".to_string(),
        date: "15/06/1990".to_string(),
        time: "14:30".to_string(),
        location: "New York, NY, USA".to_string(),
        latitude: None,
        longitude: None,
        utc_offset: None,
    }
}

fn gazetteer() -> Gazetteer {
    Gazetteer::new(vec![NamedLocation {
        name: "New York, NY, USA".to_string(),
        latitude: 40.7128,
        longitude: -74.006,
        utc_offset: -4.0,
    }])
}

#[test]
fn test_generate_chart_from_snapshot() {
    let file = snapshot_file(POSITIONS);
    let ephemeris = SnapshotEphemeris::new(file.path());
    let chart = generate_chart(
        &birth_info(),
        Some(&gazetteer()),
        &ephemeris,
        ChartSettings::default(),
    )
    .unwrap();

    assert_eq!(chart.rising_sign, ZodiacSign::Scorpio);
    assert_eq!(chart.sun_sign, ZodiacSign::Gemini);
    assert_eq!(chart.moon_sign, ZodiacSign::Aquarius);
    assert_eq!(chart.placements.len(), 13);

    let south = chart.placement(Body::SouthNode).unwrap();
    assert_eq!(south.sign, ZodiacSign::Leo);
    assert!(south.retrograde);
    assert!(chart.placement(Body::Saturn).unwrap().retrograde);

    // Scorpio rising is ruled by Mars under the traditional table
    assert_eq!(chart.chart_ruler.planet, Body::Mars);
    assert_eq!(chart.chart_ruler.sign, ZodiacSign::Aries);
    assert_eq!(chart.chart_ruler.house, 6);
}

#[test]
fn test_snapshot_for_other_moment_is_rejected() {
    let file = snapshot_file(POSITIONS);
    let ephemeris = SnapshotEphemeris::new(file.path());
    let mut info = birth_info();
    info.time = "16:30".to_string();
    let err = generate_chart(&info, Some(&gazetteer()), &ephemeris, ChartSettings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Ephemeris(EphemerisError::MomentMismatch { .. })
    ));
}

#[test]
fn test_ephemeris_failure_propagates() {
    let ephemeris = SnapshotEphemeris::new("/nonexistent/positions.json");
    let err = generate_chart(
        &birth_info(),
        Some(&gazetteer()),
        &ephemeris,
        ChartSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GenerationError::Ephemeris(EphemerisError::Io { .. })));
}

#[test]
fn test_incomplete_snapshot_is_a_chart_error() {
    let file = snapshot_file(&POSITIONS.replace(r#""chiron": { "lon": 109.8, "speed_lon": 0.1 },"#, ""));
    let ephemeris = SnapshotEphemeris::new(file.path());
    let err = generate_chart(
        &birth_info(),
        Some(&gazetteer()),
        &ephemeris,
        ChartSettings::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Chiron"));
}

#[test]
fn test_unknown_location_fails_before_ephemeris() {
    let ephemeris = SnapshotEphemeris::new("/nonexistent/positions.json");
    let mut info = birth_info();
    info.location = "Atlantis".to_string();
    let err = generate_chart(&info, Some(&gazetteer()), &ephemeris, ChartSettings::default())
        .unwrap_err();
    assert!(matches!(err, GenerationError::BirthInfo(_)));
}

#[test]
fn test_provider_reads_layer() {
    let file = snapshot_file(POSITIONS);
    let moment = birth_info().resolve(Some(&gazetteer())).unwrap();
    let snapshot = SnapshotEphemeris::new(file.path()).positions(&moment).unwrap();
    assert_eq!(snapshot.ascendant, 213.4);
    assert_eq!(snapshot.bodies.len(), 13);
}
