//! Column layout of `ghcnd-stations.txt`.
//!
//! Offsets follow section IV of the GHCN-Daily readme, expressed as zero-based,
//! end-exclusive character ranges. Both the parser and its tests read them from
//! [`STATION_FIELDS`] so the layout is declared exactly once.

use crate::utils::constants::{MISSING_ELEVATION, MISSING_STATE};

/// How the raw column text becomes a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Verbatim,
    Lowercase,
    Uppercase,
    Decimal,
    TitleCase,
}

/// A literal that means "no data" for a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sentinel {
    Number(f64),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub coercion: Coercion,
    pub sentinel: Option<Sentinel>,
}

impl FieldSpec {
    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// The column text for this field. Lines shorter than the field yield
    /// whatever portion exists, possibly an empty string.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let byte_at = |column: usize| {
            line.char_indices()
                .nth(column)
                .map_or(line.len(), |(offset, _)| offset)
        };
        let start = byte_at(self.start);
        let end = byte_at(self.end);
        &line[start..end]
    }

    pub fn is_sentinel_text(&self, raw: &str) -> bool {
        matches!(self.sentinel, Some(Sentinel::Text(text)) if text == raw)
    }

    pub fn is_sentinel_number(&self, value: f64) -> bool {
        matches!(self.sentinel, Some(Sentinel::Number(missing)) if missing == value)
    }
}

pub const COUNTRY_CODE: FieldSpec = FieldSpec {
    name: "country",
    start: 0,
    end: 2,
    coercion: Coercion::Lowercase,
    sentinel: None,
};

pub const NETWORK_CODE: FieldSpec = FieldSpec {
    name: "network",
    start: 2,
    end: 3,
    coercion: Coercion::Lowercase,
    sentinel: None,
};

pub const STATION_ID: FieldSpec = FieldSpec {
    name: "station_id",
    start: 3,
    end: 11,
    coercion: Coercion::Verbatim,
    sentinel: None,
};

pub const LATITUDE: FieldSpec = FieldSpec {
    name: "latitude",
    start: 12,
    end: 20,
    coercion: Coercion::Decimal,
    sentinel: None,
};

pub const LONGITUDE: FieldSpec = FieldSpec {
    name: "longitude",
    start: 21,
    end: 30,
    coercion: Coercion::Decimal,
    sentinel: None,
};

pub const ELEVATION: FieldSpec = FieldSpec {
    name: "elevation",
    start: 31,
    end: 37,
    coercion: Coercion::Decimal,
    sentinel: Some(Sentinel::Number(MISSING_ELEVATION)),
};

pub const STATE: FieldSpec = FieldSpec {
    name: "state",
    start: 38,
    end: 40,
    coercion: Coercion::Uppercase,
    sentinel: Some(Sentinel::Text(MISSING_STATE)),
};

pub const NAME: FieldSpec = FieldSpec {
    name: "name",
    start: 41,
    end: 71,
    coercion: Coercion::TitleCase,
    sentinel: None,
};

pub const STATION_FIELDS: [FieldSpec; 8] = [
    COUNTRY_CODE,
    NETWORK_CODE,
    STATION_ID,
    LATITUDE,
    LONGITUDE,
    ELEVATION,
    STATE,
    NAME,
];
