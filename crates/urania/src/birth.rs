//! Birth data validation and conversion to a UTC instant.

use crate::geocoding::{GeoLocation, GeocodeError, Geocoder};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted date layouts, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

lazy_static::lazy_static! {
    static ref TIME_PATTERN: Regex = Regex::new(r"^\d{2}:\d{2}$").expect("valid time pattern");
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BirthInfoError {
    #[error("Name must be 1 to 100 characters")]
    InvalidName,
    #[error("Location must be 1 to 200 characters")]
    InvalidLocation,
    #[error("Date '{0}' must be in YYYY-MM-DD, DD/MM/YYYY, or DD-MM-YYYY format and be a valid date")]
    InvalidDate(String),
    #[error("Time '{0}' must be in HH:MM format (24-hour) and be a valid time")]
    InvalidTime(String),
    #[error("Latitude and longitude must be given together")]
    PartialCoordinates,
    #[error("No coordinates given and no geocoder available for '{0}'")]
    MissingCoordinates(String),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

/// Birth data as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Hours east of UTC; overrides whatever the geocoder reports
    #[serde(default)]
    pub utc_offset: Option<f64>,
}

/// A validated birth instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub utc: DateTime<Utc>,
    pub location: GeoLocation,
}

impl BirthInfo {
    /// Validate the fields and resolve them to a UTC instant.
    ///
    /// Without explicit coordinates the location text goes through
    /// `geocoder`. With coordinates but no offset, the offset is estimated
    /// from longitude as `round(longitude / 15)`.
    pub fn resolve(&self, geocoder: Option<&dyn Geocoder>) -> Result<BirthMoment, BirthInfoError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 || name_len > 100 {
            return Err(BirthInfoError::InvalidName);
        }
        let location_len = self.location.trim().chars().count();
        if location_len == 0 || location_len > 200 {
            return Err(BirthInfoError::InvalidLocation);
        }

        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        let location = self.resolve_location(geocoder)?;

        let utc = local_to_utc(date.and_time(time), location.utc_offset)?;
        log::debug!(
            "birth moment for {}: local {} {} (UTC{:+}) = {}",
            self.name,
            date,
            time,
            location.utc_offset,
            utc
        );

        Ok(BirthMoment { utc, location })
    }

    fn resolve_location(&self, geocoder: Option<&dyn Geocoder>) -> Result<GeoLocation, BirthInfoError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                let offset = match self.utc_offset {
                    Some(offset) => offset,
                    None => {
                        let estimate = (longitude / 15.0).round();
                        log::warn!(
                            "No UTC offset given for {}; estimating {:+} from longitude",
                            self.location,
                            estimate
                        );
                        estimate
                    }
                };
                Ok(GeoLocation::new(latitude, longitude, offset)?)
            }
            (None, None) => {
                let geocoder = geocoder
                    .ok_or_else(|| BirthInfoError::MissingCoordinates(self.location.clone()))?;
                let found = geocoder.locate(&self.location)?;
                match self.utc_offset {
                    Some(offset) => Ok(GeoLocation::new(found.latitude, found.longitude, offset)?),
                    None => Ok(found),
                }
            }
            _ => Err(BirthInfoError::PartialCoordinates),
        }
    }
}

/// Parse a date in any of the accepted layouts.
pub fn parse_date(text: &str) -> Result<NaiveDate, BirthInfoError> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .ok_or_else(|| BirthInfoError::InvalidDate(text.to_string()))
}

/// Parse a 24-hour `HH:MM` time.
pub fn parse_time(text: &str) -> Result<NaiveTime, BirthInfoError> {
    let text = text.trim();
    if !TIME_PATTERN.is_match(text) {
        return Err(BirthInfoError::InvalidTime(text.to_string()));
    }
    NaiveTime::parse_from_str(text, "%H:%M").map_err(|_| BirthInfoError::InvalidTime(text.to_string()))
}

fn local_to_utc(local: NaiveDateTime, utc_offset: f64) -> Result<DateTime<Utc>, BirthInfoError> {
    let seconds = (utc_offset * 3600.0).round() as i32;
    let offset = FixedOffset::east_opt(seconds).ok_or(GeocodeError::InvalidUtcOffset(utc_offset))?;
    let local = offset
        .from_local_datetime(&local)
        .single()
        .ok_or(GeocodeError::InvalidUtcOffset(utc_offset))?;
    Ok(local.with_timezone(&Utc))
}
