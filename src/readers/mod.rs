pub mod fields;
pub mod station_parser;
pub mod station_reader;

pub use fields::{Coercion, FieldSpec, Sentinel, STATION_FIELDS};
pub use station_parser::{
    parse_country_code, parse_elevation, parse_latitude, parse_longitude, parse_name,
    parse_network_code, parse_record, parse_state, parse_station_id, validate_line_length,
};
pub use station_reader::{SkippedLine, StationReader, StationReport};
