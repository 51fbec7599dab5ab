use crate::models::StationRecord;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

/// Maps station records onto GeoJSON point features.
///
/// By default `state` is added to the other properties. The legacy mode keeps
/// the older output where a station with a state carries only `{state}` and
/// loses its name, country and station ID.
pub struct FeatureConverter {
    legacy_state_properties: bool,
}

impl Default for FeatureConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureConverter {
    pub fn new() -> Self {
        Self {
            legacy_state_properties: false,
        }
    }

    pub fn with_legacy_state_properties(mut self, legacy: bool) -> Self {
        self.legacy_state_properties = legacy;
        self
    }

    /// Point geometry in `[longitude, latitude(, elevation)]` order.
    pub fn geometry(&self, station: &StationRecord) -> Geometry {
        let mut position = vec![station.longitude, station.latitude];
        if let Some(elevation) = station.elevation {
            position.push(elevation);
        }
        Geometry::new(Value::Point(position))
    }

    /// Properties in insertion order: name, country, station_id, then state.
    pub fn properties(&self, station: &StationRecord) -> JsonObject {
        let mut properties = JsonObject::new();

        if let Some(state) = &station.state {
            if self.legacy_state_properties {
                properties.insert("state".to_string(), JsonValue::from(state.as_str()));
                return properties;
            }
        }

        properties.insert("name".to_string(), JsonValue::from(station.name.as_str()));
        properties.insert("country".to_string(), JsonValue::from(station.country.as_str()));
        properties.insert(
            "station_id".to_string(),
            JsonValue::from(station.station_id.as_str()),
        );
        if let Some(state) = &station.state {
            properties.insert("state".to_string(), JsonValue::from(state.as_str()));
        }

        properties
    }

    pub fn to_feature(&self, station: &StationRecord) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(self.geometry(station)),
            id: None,
            properties: Some(self.properties(station)),
            foreign_members: None,
        }
    }

    /// Convert stations in order into a single collection.
    pub fn to_feature_collection(&self, stations: &[StationRecord]) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: stations.iter().map(|s| self.to_feature(s)).collect(),
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::parse_record;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SHARJAH: &str =
        "AE000041196  25.3330   55.5170   34.0    SHARJAH INTER. AIRP            GSN     41196";
    const TUAYBUGUZ: &str =
        "UZM00038592  40.9000   69.4000 -999.9    TUAYBUGUZ                              38592";
    const AUSTIN: &str =
        "USC00410420  30.2833  -97.7333 -999.9 TX AUSTIN                                      ";

    fn feature_for(line: &str) -> Feature {
        let station = parse_record(line).unwrap();
        FeatureConverter::new().to_feature(&station)
    }

    fn coordinates(feature: &Feature) -> Vec<f64> {
        match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(position)) => position.clone(),
            other => panic!("expected a point, got {:?}", other),
        }
    }

    #[test]
    fn test_feature_has_geometry_with_elevation() {
        let feature = feature_for(SHARJAH);
        assert_eq!(coordinates(&feature), vec![55.517, 25.333, 34.0]);
    }

    #[test]
    fn test_feature_has_geometry_without_elevation() {
        let feature = feature_for(TUAYBUGUZ);
        assert_eq!(coordinates(&feature), vec![69.4, 40.9]);
    }

    #[test]
    fn test_feature_properties() {
        let feature = feature_for(SHARJAH);
        assert_eq!(
            JsonValue::Object(feature.properties.unwrap()),
            json!({
                "name": "Sharjah Inter. Airp",
                "country": "ae",
                "station_id": "00041196"
            })
        );
    }

    #[test]
    fn test_state_is_merged_with_other_properties() {
        let properties = feature_for(AUSTIN).properties.unwrap();

        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "country", "station_id", "state"]);
        assert_eq!(properties["state"], "TX");
        assert_eq!(properties["name"], "Austin");
        assert_eq!(properties["country"], "us");
        assert_eq!(properties["station_id"], "00410420");
    }

    #[test]
    fn test_legacy_state_replaces_properties() {
        let station = parse_record(AUSTIN).unwrap();
        let converter = FeatureConverter::new().with_legacy_state_properties(true);

        assert_eq!(
            JsonValue::Object(converter.properties(&station)),
            json!({"state": "TX"})
        );
    }

    #[test]
    fn test_legacy_mode_without_state_keeps_properties() {
        let station = parse_record(SHARJAH).unwrap();
        let converter = FeatureConverter::new().with_legacy_state_properties(true);

        let properties = converter.properties(&station);
        assert_eq!(properties["name"], "Sharjah Inter. Airp");
        assert!(!properties.contains_key("state"));
    }

    #[test]
    fn test_feature_serializes_geojson_shape() {
        let feature = feature_for(TUAYBUGUZ);
        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [69.4, 40.9]},
                "properties": {
                    "name": "Tuaybuguz",
                    "country": "uz",
                    "station_id": "00038592"
                }
            })
        );
    }

    #[test]
    fn test_collection_preserves_input_order() {
        let stations: Vec<StationRecord> = [AUSTIN, SHARJAH, TUAYBUGUZ]
            .iter()
            .map(|line| parse_record(line).unwrap())
            .collect();

        let collection = FeatureConverter::new().to_feature_collection(&stations);

        let ids: Vec<&JsonValue> = collection
            .features
            .iter()
            .filter_map(|f| f.property("station_id"))
            .collect();
        assert_eq!(ids, vec!["00410420", "00041196", "00038592"]);
    }
}
