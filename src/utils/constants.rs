/// Station line layout
pub const STATION_LINE_LENGTH: usize = 85;

/// Network codes permitted in the third column of a station ID
pub const VALID_NETWORK_CODES: [&str; 9] = ["0", "1", "c", "e", "m", "n", "r", "s", "w"];

/// Missing-data sentinels
pub const MISSING_ELEVATION: f64 = -999.9;
pub const MISSING_STATE: &str = "  ";
