//! Convert the GHCN-Daily station list (`ghcnd-stations.txt`) into GeoJSON.
//!
//! Each 85-character line is sliced into fixed columns by
//! [`readers::station_parser`], and each resulting [`models::StationRecord`]
//! becomes a point feature via [`processors::FeatureConverter`].

pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
