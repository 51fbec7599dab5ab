//! Field extraction for single `ghcnd-stations.txt` lines.
//!
//! Every `parse_*` function reads its columns from the table in
//! [`crate::readers::fields`]. Only [`parse_record`] checks the line length;
//! the individual field parsers slice whatever text is present.

use crate::error::{ProcessingError, Result};
use crate::models::StationRecord;
use crate::readers::fields::{
    Coercion, FieldSpec, COUNTRY_CODE, ELEVATION, LATITUDE, LONGITUDE, NAME, NETWORK_CODE, STATE,
    STATION_ID,
};
use crate::utils::constants::{STATION_LINE_LENGTH, VALID_NETWORK_CODES};
use crate::utils::text::title_case;

/// Remove one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Number of characters in the line once its terminator is removed.
pub fn line_length(line: &str) -> usize {
    strip_line_terminator(line).chars().count()
}

pub fn validate_line_length(line: &str) -> bool {
    line_length(line) == STATION_LINE_LENGTH
}

fn coerce_text(field: &FieldSpec, line: &str) -> String {
    let raw = field.slice(line);
    match field.coercion {
        Coercion::Lowercase => raw.to_lowercase(),
        Coercion::Uppercase => raw.to_uppercase(),
        Coercion::TitleCase => title_case(raw.trim_end()),
        Coercion::Verbatim | Coercion::Decimal => raw.to_string(),
    }
}

fn coerce_decimal(field: &FieldSpec, line: &str) -> Result<f64> {
    let raw = field.slice(line);
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ProcessingError::NumericParse {
            field: field.name,
            value: raw.to_string(),
        })
}

/// FIPS country code, lower-cased.
pub fn parse_country_code(line: &str) -> String {
    coerce_text(&COUNTRY_CODE, line)
}

/// Network code, or `None` when the column holds anything outside the known set.
pub fn parse_network_code(line: &str) -> Option<&'static str> {
    let code = coerce_text(&NETWORK_CODE, line);
    VALID_NETWORK_CODES.iter().copied().find(|valid| *valid == code)
}

pub fn parse_station_id(line: &str) -> String {
    coerce_text(&STATION_ID, line)
}

pub fn parse_latitude(line: &str) -> Result<f64> {
    coerce_decimal(&LATITUDE, line)
}

pub fn parse_longitude(line: &str) -> Result<f64> {
    coerce_decimal(&LONGITUDE, line)
}

/// Elevation in metres, `None` for the -999.9 missing-data sentinel.
pub fn parse_elevation(line: &str) -> Result<Option<f64>> {
    let elevation = coerce_decimal(&ELEVATION, line)?;
    if ELEVATION.is_sentinel_number(elevation) {
        return Ok(None);
    }
    Ok(Some(elevation))
}

/// Upper-cased state or province code, `None` when the column is blank.
pub fn parse_state(line: &str) -> Option<String> {
    let state = coerce_text(&STATE, line);
    if STATE.is_sentinel_text(&state) {
        return None;
    }
    Some(state)
}

/// Station name, right-trimmed and title-cased.
pub fn parse_name(line: &str) -> String {
    coerce_text(&NAME, line)
}

/// Parse a full station line.
///
/// A line whose length (terminator excluded) is not exactly 85 characters
/// fails with [`ProcessingError::MalformedLine`] before any field is read.
/// Unparseable latitude, longitude or elevation text fails with
/// [`ProcessingError::NumericParse`].
pub fn parse_record(line: &str) -> Result<StationRecord> {
    let line = strip_line_terminator(line);
    let found = line.chars().count();
    if found != STATION_LINE_LENGTH {
        return Err(ProcessingError::MalformedLine {
            expected: STATION_LINE_LENGTH,
            found,
        });
    }

    Ok(StationRecord::new(
        parse_station_id(line),
        parse_name(line),
        parse_latitude(line)?,
        parse_longitude(line)?,
        parse_elevation(line)?,
        parse_state(line),
        parse_country_code(line),
    ))
}
