use serde::{Deserialize, Serialize};
use validator::Validate;

/// One station from the GHCN-Daily station list.
///
/// Coordinate ranges are declared for `validate()` but never enforced while
/// parsing; out-of-range values pass straight through to the feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StationRecord {
    #[validate(length(equal = 8))]
    pub station_id: String,

    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Metres above sea level, `None` when the file reports -999.9.
    pub elevation: Option<f64>,

    #[validate(length(equal = 2))]
    pub state: Option<String>,

    #[validate(length(equal = 2))]
    pub country: String,
}

impl StationRecord {
    pub fn new(
        station_id: String,
        name: String,
        latitude: f64,
        longitude: f64,
        elevation: Option<f64>,
        state: Option<String>,
        country: String,
    ) -> Self {
        Self {
            station_id,
            name,
            latitude,
            longitude,
            elevation,
            state,
            country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sharjah() -> StationRecord {
        StationRecord::new(
            "00041196".to_string(),
            "Sharjah Inter. Airp".to_string(),
            25.333,
            55.517,
            Some(34.0),
            None,
            "ae".to_string(),
        )
    }

    #[test]
    fn test_station_validation() {
        let station = sharjah();

        assert!(station.validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut station = sharjah();
        station.latitude = 91.0;
        assert!(station.validate().is_err());

        let mut station = sharjah();
        station.longitude = -180.5;
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_invalid_state_length() {
        let mut station = sharjah();
        station.state = Some("T".to_string());
        assert!(station.validate().is_err());

        station.state = Some("TX".to_string());
        assert!(station.validate().is_ok());
    }
}
