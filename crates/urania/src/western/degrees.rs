//! Longitude decomposition into sign and degree-within-sign, and
//! degrees-minutes-seconds formatting.

use crate::error::ChartError;
use crate::western::signs::ZodiacSign;
use serde::{Deserialize, Serialize};

/// A longitude expressed relative to its zodiac sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Degrees into the sign, 0 <= x < 30
    pub degree: f64,
    /// `D°MM'SS"`
    pub formatted: String,
}

/// Wrap any finite longitude into [0, 360).
pub fn normalize_longitude(longitude: f64) -> Result<f64, ChartError> {
    if !longitude.is_finite() {
        return Err(ChartError::InvalidLongitude { value: longitude });
    }
    let normalized = longitude.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if normalized >= 360.0 {
        Ok(0.0)
    } else {
        Ok(normalized)
    }
}

/// Decompose a longitude in [0, 360) into sign, degree and DMS string.
pub fn format_longitude(longitude: f64) -> Result<ZodiacPosition, ChartError> {
    if !(0.0..360.0).contains(&longitude) {
        return Err(ChartError::InvalidLongitude { value: longitude });
    }
    let sign = ZodiacSign::from_longitude(longitude);
    // floor(lon / 30) can land one sign high just below a boundary
    let degree = (longitude - sign.start_longitude()).max(0.0);

    Ok(ZodiacPosition {
        sign,
        degree,
        formatted: format_dms(degree),
    })
}

/// Format a degree-within-sign as `D°MM'SS"`.
///
/// Minutes are truncated and seconds rounded; a rounded 60" carries into the
/// minutes and 60' into the degrees.
pub fn format_dms(degree: f64) -> String {
    let mut whole = degree.trunc() as u32;
    let minutes_float = (degree - whole as f64) * 60.0;
    let mut minutes = minutes_float.floor() as u32;
    let mut seconds = ((minutes_float - minutes as f64) * 60.0).round() as u32;

    if seconds >= 60 {
        seconds = 0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes = 0;
        whole += 1;
    }

    format!("{}°{:02}'{:02}\"", whole, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dms_truncates_minutes_rounds_seconds() {
        assert_eq!(format_dms(29.7065), "29°42'23\"");
        assert_eq!(format_dms(0.0), "0°00'00\"");
        assert_eq!(format_dms(15.5), "15°30'00\"");
    }

    #[test]
    fn test_format_dms_carries_seconds_into_minutes() {
        // 19.2333 -> 19° 13.998' -> 59.88" rounds to 60"
        assert_eq!(format_dms(19.2333), "19°14'00\"");
    }

    #[test]
    fn test_format_dms_carries_minutes_into_degrees() {
        assert_eq!(format_dms(12.99999), "13°00'00\"");
    }

    #[test]
    fn test_format_longitude() {
        let pos = format_longitude(239.7065).unwrap();
        assert_eq!(pos.sign, ZodiacSign::Scorpio);
        assert!((pos.degree - 29.7065).abs() < 1e-9);
        assert_eq!(pos.formatted, "29°42'23\"");
    }

    #[test]
    fn test_format_longitude_rejects_out_of_range() {
        assert_eq!(
            format_longitude(360.0),
            Err(ChartError::InvalidLongitude { value: 360.0 })
        );
        assert!(format_longitude(-0.5).is_err());
        assert!(format_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(370.0).unwrap(), 10.0);
        assert_eq!(normalize_longitude(-30.0).unwrap(), 330.0);
        assert_eq!(normalize_longitude(360.0).unwrap(), 0.0);
        assert_eq!(normalize_longitude(-1e-15).unwrap(), 0.0);
        assert!(normalize_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sign_and_degree_reconstruct_longitude() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let pos = format_longitude(lon).unwrap();
            assert_eq!(pos.sign.index() as f64, (lon / 30.0).floor());
            assert!(pos.degree >= 0.0 && pos.degree < 30.0);
            let rebuilt = pos.sign.start_longitude() + pos.degree;
            assert!((rebuilt - lon).abs() < 1e-9, "lon {} rebuilt {}", lon, rebuilt);
            lon += 0.37;
        }
    }
}
